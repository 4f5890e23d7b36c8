// ============================================================================
// MARKER REGISTRY - Registro de marcadores de repartidores
// ============================================================================
// Dueño exclusivo de los markers visuales: crea al primer avistamiento de un
// rider_id, después solo reposiciona. Nunca elimina sin un clear() explícito.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::maps::traits::MapSurface;

pub struct MarkerRegistry<S: MapSurface> {
    surface: Rc<RefCell<S>>,
    seen: HashSet<String>,
}

impl<S: MapSurface> MarkerRegistry<S> {
    pub fn new(surface: Rc<RefCell<S>>) -> Self {
        Self {
            surface,
            seen: HashSet::new(),
        }
    }

    /// Crear o reposicionar el marker de un repartidor (last-write-wins)
    pub fn upsert(&mut self, rider_id: &str, lat: f64, lon: f64) {
        let mut surface = self.surface.borrow_mut();

        if self.seen.contains(rider_id) {
            if let Err(e) = surface.move_marker(rider_id, lat, lon) {
                log::error!("❌ Error moviendo marker de {}: {}", rider_id, e);
            }
        } else {
            match surface.add_marker(rider_id, lat, lon) {
                Ok(()) => {
                    self.seen.insert(rider_id.to_string());
                    log::info!("📍 Nuevo repartidor en el mapa: {}", rider_id);
                }
                Err(e) => log::error!("❌ Error creando marker de {}: {}", rider_id, e),
            }
        }
    }

    /// Soltar todos los markers. Pensado para el teardown de la vista de
    /// admin; seguro de llamar más de una vez.
    pub fn clear(&mut self) {
        if self.seen.is_empty() {
            return;
        }
        let mut surface = self.surface.borrow_mut();
        for rider_id in self.seen.drain() {
            if let Err(e) = surface.remove_marker(&rider_id) {
                log::error!("❌ Error removiendo marker de {}: {}", rider_id, e);
            }
        }
        log::info!("🧹 Markers de repartidores limpiados");
    }

    pub fn count(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::testutil::FakeSurface;

    #[test]
    fn test_upsert_crea_una_sola_vez() {
        let surface = Rc::new(RefCell::new(FakeSurface::default()));
        let mut registry = MarkerRegistry::new(surface.clone());

        registry.upsert("r1", 10.0, 20.0);
        registry.upsert("r1", 11.0, 21.0);

        let s = surface.borrow();
        assert_eq!(s.marker_adds, 1);
        assert_eq!(s.marker_moves, 1);
        assert_eq!(s.markers.get("r1"), Some(&(11.0, 21.0)));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_riders_distintos_markers_independientes() {
        let surface = Rc::new(RefCell::new(FakeSurface::default()));
        let mut registry = MarkerRegistry::new(surface.clone());

        registry.upsert("r1", 10.0, 20.0);
        registry.upsert("r2", 30.0, 40.0);

        assert_eq!(registry.count(), 2);
        assert_eq!(surface.borrow().marker_adds, 2);
    }

    #[test]
    fn test_clear_es_idempotente() {
        let surface = Rc::new(RefCell::new(FakeSurface::default()));
        let mut registry = MarkerRegistry::new(surface.clone());

        registry.upsert("r1", 10.0, 20.0);
        registry.upsert("r2", 30.0, 40.0);

        registry.clear();
        registry.clear();

        let s = surface.borrow();
        assert_eq!(registry.count(), 0);
        assert!(s.markers.is_empty());
        assert_eq!(s.marker_removes.len(), 2);
    }
}
