pub mod markers;
pub mod traits;
pub mod web;
pub mod zones;

pub use markers::MarkerRegistry;
pub use traits::MapSurface;
pub use web::MapboxSurface;
pub use zones::{ZoneLayer, ZonePaint};

#[cfg(test)]
pub(crate) mod testutil {
    use super::traits::MapSurface;
    use super::zones::ZonePaint;
    use std::collections::HashMap;

    /// Superficie falsa que registra cada operación; usada por los tests
    /// del registro de markers y de la capa de zonas.
    #[derive(Default)]
    pub struct FakeSurface {
        pub zone_creates: Vec<String>,
        pub zone_updates: Vec<ZonePaint>,
        pub markers: HashMap<String, (f64, f64)>,
        pub marker_adds: usize,
        pub marker_moves: usize,
        pub marker_removes: Vec<String>,
        pub released: bool,
    }

    impl MapSurface for FakeSurface {
        fn is_ready(&self) -> bool {
            true
        }

        fn create_zone(&mut self, paint: &ZonePaint) -> Result<(), String> {
            self.zone_creates.push(paint.id.clone());
            Ok(())
        }

        fn update_zone(&mut self, paint: &ZonePaint) -> Result<(), String> {
            self.zone_updates.push(paint.clone());
            Ok(())
        }

        fn add_marker(&mut self, rider_id: &str, lat: f64, lon: f64) -> Result<(), String> {
            self.marker_adds += 1;
            self.markers.insert(rider_id.to_string(), (lat, lon));
            Ok(())
        }

        fn move_marker(&mut self, rider_id: &str, lat: f64, lon: f64) -> Result<(), String> {
            self.marker_moves += 1;
            self.markers.insert(rider_id.to_string(), (lat, lon));
            Ok(())
        }

        fn remove_marker(&mut self, rider_id: &str) -> Result<(), String> {
            self.markers.remove(rider_id);
            self.marker_removes.push(rider_id.to_string());
            Ok(())
        }

        fn release(&mut self) -> Result<(), String> {
            self.released = true;
            Ok(())
        }
    }
}
