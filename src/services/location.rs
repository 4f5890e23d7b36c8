// ============================================================================
// LOCATION - Suscripción continua de geolocalización del dispositivo
// ============================================================================

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Geolocation, Position, PositionError, PositionOptions};

use crate::models::PositionSample;

/// Edad máxima aceptada de una muestra (ms)
pub const LOCATION_MAX_AGE_MS: u32 = 5_000;
/// Timeout de adquisición por muestra (ms)
pub const LOCATION_TIMEOUT_MS: u32 = 10_000;

fn geolocation() -> Result<Geolocation, String> {
    web_sys::window()
        .ok_or("Sin objeto window")?
        .navigator()
        .geolocation()
        .map_err(|_| "Geolocalización no disponible en este dispositivo".to_string())
}

fn watch_options() -> PositionOptions {
    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_maximum_age(LOCATION_MAX_AGE_MS);
    options.set_timeout(LOCATION_TIMEOUT_MS);
    options
}

/// Pedir el permiso de ubicación con una lectura única. Resuelve cuando el
/// usuario concede (o ya había concedido) y falla si lo niega.
pub async fn request_permission() -> Result<(), String> {
    let geo = geolocation()?;

    let promise = Promise::new(&mut |resolve, reject| {
        let on_ok = Closure::once_into_js(move |_pos: Position| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let on_err = Closure::once_into_js(move |err: PositionError| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from(err.code()));
        });

        if let Err(e) = geo.get_current_position_with_error_callback_and_options(
            on_ok.unchecked_ref(),
            Some(on_err.unchecked_ref()),
            &watch_options(),
        ) {
            log::error!("❌ No se pudo solicitar la ubicación: {:?}", e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(_) => Ok(()),
        Err(code) => {
            // código 1 = PERMISSION_DENIED
            if code.as_f64() == Some(1.0) {
                Err("Permiso de ubicación denegado".to_string())
            } else {
                Err("No se pudo obtener la ubicación del dispositivo".to_string())
            }
        }
    }
}

/// Suscripción de ubicación en curso. No reiniciable: una vez detenida hay
/// que crear una suscripción nueva para reanudar.
pub struct LocationWatch {
    watch_id: Option<i32>,
    _on_sample: Closure<dyn FnMut(Position)>,
    _on_error: Closure<dyn FnMut(PositionError)>,
}

impl LocationWatch {
    /// Iniciar la suscripción con precisión alta. Cada muestra aceptada se
    /// entrega al callback inmediatamente, sin buffering.
    pub fn start(on_sample: impl Fn(PositionSample) + 'static) -> Result<Self, String> {
        let geo = geolocation()?;

        let success = Closure::wrap(Box::new(move |position: Position| {
            let coords = position.coords();
            on_sample(PositionSample {
                lat: coords.latitude(),
                lon: coords.longitude(),
            });
        }) as Box<dyn FnMut(Position)>);

        let error = Closure::wrap(Box::new(move |err: PositionError| {
            // timeouts y pérdidas de señal: solo log, la plataforma reintenta
            log::warn!("⚠️ Geolocalización (código {}): {}", err.code(), err.message());
        }) as Box<dyn FnMut(PositionError)>);

        let watch_id = geo
            .watch_position_with_error_callback_and_options(
                success.as_ref().unchecked_ref(),
                Some(error.as_ref().unchecked_ref()),
                &watch_options(),
            )
            .map_err(|e| format!("No se pudo iniciar el watch de ubicación: {:?}", e))?;

        log::info!("📍 Suscripción de ubicación iniciada (watch {})", watch_id);

        Ok(Self {
            watch_id: Some(watch_id),
            _on_sample: success,
            _on_error: error,
        })
    }

    /// Detener la suscripción. Idempotente.
    pub fn stop(&mut self) {
        if let Some(id) = self.watch_id.take() {
            if let Ok(geo) = geolocation() {
                geo.clear_watch(id);
            }
            log::info!("📍 Suscripción de ubicación detenida");
        }
    }
}

impl Drop for LocationWatch {
    fn drop(&mut self) {
        self.stop();
    }
}
