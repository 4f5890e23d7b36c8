// ============================================================================
// ZONE LAYER - Cache de zonas de demanda sobre la superficie del mapa
// ============================================================================
// Invariante: la primitiva visual (fuente + capa) de una zona se crea
// EXACTAMENTE una vez por id; los polls siguientes solo actualizan datos.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use serde::Serialize;

use crate::maps::traits::MapSurface;
use crate::models::ZoneStatus;

/// Opacidad constante de la capa circular
pub const ZONE_OPACITY: f64 = 0.35;
/// El radio en metros se convierte a unidades de pantalla dividiendo por 8
pub const ZONE_RADIUS_DIVISOR: f64 = 8.0;

/// Datos de pintura listos para la superficie (color resuelto, radio en px)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZonePaint {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub radius_px: f64,
    pub color: String,
    pub opacity: f64,
}

/// Paleta fija de 3 colores según el estado de demanda
pub fn zone_color_hex(color: &str) -> &'static str {
    match color {
        "green" => "#22c55e",
        "yellow" => "#eab308",
        _ => "#ef4444",
    }
}

pub fn paint_for(zone: &ZoneStatus) -> ZonePaint {
    ZonePaint {
        id: zone.id.clone(),
        lat: zone.lat,
        lon: zone.lon,
        radius_px: zone.radius / ZONE_RADIUS_DIVISOR,
        color: zone_color_hex(&zone.color).to_string(),
        opacity: ZONE_OPACITY,
    }
}

/// Cache de zonas: único escritor de las primitivas de zona de la superficie
pub struct ZoneLayer<S: MapSurface> {
    surface: Rc<RefCell<S>>,
    created: HashSet<String>,
}

impl<S: MapSurface> ZoneLayer<S> {
    pub fn new(surface: Rc<RefCell<S>>) -> Self {
        Self {
            surface,
            created: HashSet::new(),
        }
    }

    /// Upsert de un batch completo de un ciclo de poll. El orden del batch
    /// es irrelevante; cada zona se procesa de forma independiente.
    pub fn upsert_all(&mut self, zones: &[ZoneStatus]) {
        for zone in zones {
            let paint = paint_for(zone);
            let mut surface = self.surface.borrow_mut();

            if self.created.contains(&zone.id) {
                if let Err(e) = surface.update_zone(&paint) {
                    log::error!("❌ Error actualizando zona {}: {}", zone.id, e);
                }
            } else {
                match surface.create_zone(&paint) {
                    Ok(()) => {
                        self.created.insert(zone.id.clone());
                    }
                    Err(e) => log::error!("❌ Error creando zona {}: {}", zone.id, e),
                }
            }
        }
        log::info!("🔄 Zonas sincronizadas: {} en cache", self.created.len());
    }

    /// Olvidar las primitivas creadas (la superficie ya fue liberada)
    pub fn forget_all(&mut self) {
        self.created.clear();
    }

    pub fn len(&self) -> usize {
        self.created.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::testutil::FakeSurface;

    fn zone(id: &str, color: &str, radius: f64) -> ZoneStatus {
        ZoneStatus {
            id: id.to_string(),
            lat: 52.5,
            lon: 13.4,
            radius,
            color: color.to_string(),
            weight: None,
            pressure: None,
        }
    }

    #[test]
    fn test_paleta_de_colores() {
        assert_eq!(zone_color_hex("green"), "#22c55e");
        assert_eq!(zone_color_hex("yellow"), "#eab308");
        assert_eq!(zone_color_hex("red"), "#ef4444");
        // cualquier valor fuera de la paleta cae en rojo
        assert_eq!(zone_color_hex("purple"), "#ef4444");
    }

    #[test]
    fn test_paint_escala_radio_y_opacidad() {
        let paint = paint_for(&zone("z1", "green", 800.0));
        assert_eq!(paint.radius_px, 100.0);
        assert_eq!(paint.opacity, 0.35);
        assert_eq!(paint.color, "#22c55e");
    }

    #[test]
    fn test_doble_poll_no_duplica_primitivas() {
        let surface = Rc::new(RefCell::new(FakeSurface::default()));
        let mut layer = ZoneLayer::new(surface.clone());

        layer.upsert_all(&[zone("z1", "green", 800.0)]);
        layer.upsert_all(&[zone("z1", "red", 800.0)]);
        layer.upsert_all(&[zone("z1", "yellow", 640.0)]);

        let s = surface.borrow();
        assert_eq!(s.zone_creates, vec!["z1".to_string()]);
        assert_eq!(s.zone_updates.len(), 2);
        // la última actualización refleja el último poll
        assert_eq!(s.zone_updates[1].color, "#eab308");
        assert_eq!(s.zone_updates[1].radius_px, 80.0);
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn test_zonas_independientes() {
        let surface = Rc::new(RefCell::new(FakeSurface::default()));
        let mut layer = ZoneLayer::new(surface.clone());

        layer.upsert_all(&[zone("z1", "green", 800.0), zone("z2", "red", 400.0)]);
        assert_eq!(layer.len(), 2);
        assert_eq!(surface.borrow().zone_creates.len(), 2);
    }
}
