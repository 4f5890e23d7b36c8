use crate::maps::zones::ZonePaint;

/// Trait común para superficies de mapa. La implementación web delega en
/// Mapbox GL JS; los tests usan una superficie falsa en memoria.
///
/// El contrato de idempotencia (crear una zona exactamente una vez por id,
/// nunca duplicar un marker) NO vive aquí: lo garantizan `ZoneLayer` y
/// `MarkerRegistry`, que son los únicos escritores de la superficie.
pub trait MapSurface {
    /// Verificar si el mapa está listo
    fn is_ready(&self) -> bool;

    /// Crear la fuente de datos + capa circular de una zona
    fn create_zone(&mut self, paint: &ZonePaint) -> Result<(), String>;

    /// Actualizar geometría/pintura de una zona ya creada
    fn update_zone(&mut self, paint: &ZonePaint) -> Result<(), String>;

    /// Agregar un marcador de repartidor al mapa
    fn add_marker(&mut self, rider_id: &str, lat: f64, lon: f64) -> Result<(), String>;

    /// Reposicionar un marcador existente
    fn move_marker(&mut self, rider_id: &str, lat: f64, lon: f64) -> Result<(), String>;

    /// Remover un marcador del mapa
    fn remove_marker(&mut self, rider_id: &str) -> Result<(), String>;

    /// Liberar la superficie completa (fuentes, capas y mapa)
    fn release(&mut self) -> Result<(), String>;
}
