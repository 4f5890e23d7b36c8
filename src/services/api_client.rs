// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP (lectura)
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};

use crate::config::CONFIG;
use crate::models::{LeaderboardResponse, RiderStats, ZoneStatus};
use crate::utils::load_auth_token;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let builder = Request::get(&format!("{}{}", self.base_url, path));
        // Todos los endpoints (salvo login, externo) van con bearer token
        match load_auth_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Estado en vivo de las zonas de demanda
    pub async fn fetch_zone_status(&self) -> Result<Vec<ZoneStatus>, String> {
        let response = self
            .get("/admin/redzones/status")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let zones = response
            .json::<Vec<ZoneStatus>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("🔄 Estado de zonas recibido: {} zonas", zones.len());
        Ok(zones)
    }

    /// Leaderboard semanal, pre-ordenado descendente por el backend
    pub async fn fetch_leaderboard(&self) -> Result<LeaderboardResponse, String> {
        log::info!("🏆 Obteniendo leaderboard semanal...");

        let response = self
            .get("/riders/leaderboard")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let board = response
            .json::<LeaderboardResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ Leaderboard recibido: {} repartidores", board.leaderboard.len());
        Ok(board)
    }

    /// Estadísticas self-service de un repartidor
    pub async fn fetch_rider_stats(&self, login_id: &str) -> Result<RiderStats, String> {
        log::info!("📊 Obteniendo estadísticas de: {}", login_id);

        let response = self
            .get(&format!("/riders/stats/{}", login_id))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error {}: {}", status, error_text));
        }

        response
            .json::<RiderStats>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
