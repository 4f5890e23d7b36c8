use serde::{Deserialize, Serialize};

/// Configuración de la app, resuelta en tiempo de compilación.
/// build.rs carga `.env` y expone las variables via `option_env!`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub mapbox_access_token: String,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:8000".to_string(),
            backend_url_production: "https://api.fleet.nexuslabs.one".to_string(),
            environment: "development".to_string(),
            mapbox_access_token: String::new(),
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 52.52,
            default_center_lng: 13.405,
            default_zoom: 11.0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.fleet.nexuslabs.one").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            mapbox_access_token: option_env!("MAPBOX_ACCESS_TOKEN")
                .unwrap_or("").to_string(),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("52.52").parse().unwrap_or(52.52),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("13.405").parse().unwrap_or(13.405),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("11.0").parse().unwrap_or(11.0),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// URL base de los websockets (`WS_URL` o derivada de la URL del backend)
    pub fn websocket_url(&self) -> String {
        if let Some(ws) = option_env!("WS_URL") {
            return ws.to_string();
        }
        let http = self.backend_url();
        if let Some(rest) = http.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = http.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            http.to_string()
        }
    }

    pub fn mapbox_token(&self) -> &str {
        &self.mapbox_access_token
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_websocket_url_derivada_del_backend() {
        let mut cfg = AppConfig::default();
        cfg.backend_url_development = "http://localhost:8000".to_string();
        assert_eq!(cfg.websocket_url(), "ws://localhost:8000");

        cfg.environment = "production".to_string();
        cfg.backend_url_production = "https://api.fleet.example.com".to_string();
        assert_eq!(cfg.websocket_url(), "wss://api.fleet.example.com");
    }
}
