// ============================================================================
// MAPBOX SURFACE - Superficie de mapa web usando Mapbox GL JS
// ============================================================================

use crate::config::CONFIG;
use crate::maps::traits::MapSurface;
use crate::maps::zones::ZonePaint;
use crate::utils::mapbox_ffi::*;

/// Superficie de mapa para web. Estado mínimo: el mapa real y sus
/// fuentes/capas/markers viven del lado JS, manejados por la FFI.
pub struct MapboxSurface {
    is_ready: bool,
}

impl MapboxSurface {
    pub fn new() -> Self {
        Self { is_ready: false }
    }

    /// Inicializar el mapa en el contenedor dado (detecta dark mode)
    pub fn init(&mut self, container_id: &str) {
        let is_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);

        log::info!("🗺️ Inicializando mapa de flota (dark mode: {})", is_dark);
        init_fleet_map(container_id, CONFIG.mapbox_token(), is_dark);
    }

    /// Marcar el mapa como cargado. El controlador lo invoca después de la
    /// espera de carga; hasta entonces toda operación visual devuelve error.
    pub fn mark_ready(&mut self) {
        self.is_ready = true;
        log::info!("✅ Mapa de flota listo");
    }
}

impl Default for MapboxSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSurface for MapboxSurface {
    fn is_ready(&self) -> bool {
        self.is_ready
    }

    fn create_zone(&mut self, paint: &ZonePaint) -> Result<(), String> {
        if !self.is_ready {
            return Err("Map is not ready".to_string());
        }
        let json = serde_json::to_string(paint).unwrap_or_default();
        add_zone_layer(&json);
        Ok(())
    }

    fn update_zone(&mut self, paint: &ZonePaint) -> Result<(), String> {
        if !self.is_ready {
            return Err("Map is not ready".to_string());
        }
        let json = serde_json::to_string(paint).unwrap_or_default();
        update_zone_layer(&json);
        Ok(())
    }

    fn add_marker(&mut self, rider_id: &str, lat: f64, lon: f64) -> Result<(), String> {
        if !self.is_ready {
            return Err("Map is not ready".to_string());
        }
        add_rider_marker(rider_id, lat, lon);
        Ok(())
    }

    fn move_marker(&mut self, rider_id: &str, lat: f64, lon: f64) -> Result<(), String> {
        if !self.is_ready {
            return Err("Map is not ready".to_string());
        }
        move_rider_marker(rider_id, lat, lon);
        Ok(())
    }

    fn remove_marker(&mut self, rider_id: &str) -> Result<(), String> {
        if !self.is_ready {
            return Err("Map is not ready".to_string());
        }
        remove_rider_marker(rider_id);
        Ok(())
    }

    fn release(&mut self) -> Result<(), String> {
        if self.is_ready {
            remove_fleet_map();
            self.is_ready = false;
            log::info!("🗑️ Mapa de flota liberado");
        }
        Ok(())
    }
}
