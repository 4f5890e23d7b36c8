/// Token bearer escrito por el flujo de login (fuera de este subsistema)
pub const STORAGE_KEY_AUTH_TOKEN: &str = "fleet_auth_token";

/// Último rider id usado en la consola, para rellenar el campo al volver
pub const STORAGE_KEY_LAST_RIDER: &str = "fleet_last_rider_id";

/// Espera tras `initFleetMap` antes de considerar el mapa cargado (ms)
pub const MAP_READY_DELAY_MS: u32 = 1_500;
