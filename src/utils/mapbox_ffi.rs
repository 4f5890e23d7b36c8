// ============================================================================
// MAPBOX FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initFleetMap)]
    pub fn init_fleet_map(container_id: &str, access_token: &str, is_dark: bool);

    #[wasm_bindgen(js_name = addZoneLayer)]
    pub fn add_zone_layer(zone_json: &str);

    #[wasm_bindgen(js_name = updateZoneLayer)]
    pub fn update_zone_layer(zone_json: &str);

    #[wasm_bindgen(js_name = addRiderMarker)]
    pub fn add_rider_marker(rider_id: &str, lat: f64, lon: f64);

    #[wasm_bindgen(js_name = moveRiderMarker)]
    pub fn move_rider_marker(rider_id: &str, lat: f64, lon: f64);

    #[wasm_bindgen(js_name = removeRiderMarker)]
    pub fn remove_rider_marker(rider_id: &str);

    #[wasm_bindgen(js_name = removeFleetMap)]
    pub fn remove_fleet_map();
}
