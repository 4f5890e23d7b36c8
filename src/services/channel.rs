// ============================================================================
// DUPLEX CHANNEL - Canal bidireccional persistente (WebSocket)
// ============================================================================
// Wrapper con ownership explícito de los closures de eventos: el canal es
// dueño de sus handlers y los suelta en close(). close() es idempotente.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

pub struct DuplexChannel {
    socket: Option<WebSocket>,
    _on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
    _on_open: Option<Closure<dyn FnMut(Event)>>,
    _on_close: Option<Closure<dyn FnMut(CloseEvent)>>,
    _on_error: Option<Closure<dyn FnMut(Event)>>,
}

impl DuplexChannel {
    /// Abrir un canal hacia la URL dada. Los callbacks de ciclo de vida
    /// solo loguean: un cierre inesperado degrada, nunca crashea.
    pub fn connect(url: &str) -> Result<Self, String> {
        let socket = WebSocket::new(url)
            .map_err(|e| format!("No se pudo abrir el canal {}: {:?}", url, e))?;

        let on_open = Closure::wrap(Box::new(move |_e: Event| {
            log::info!("🔌 Canal abierto");
        }) as Box<dyn FnMut(Event)>);
        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let on_close = Closure::wrap(Box::new(move |e: CloseEvent| {
            if e.was_clean() {
                log::info!("🔌 Canal cerrado (código {})", e.code());
            } else {
                // Estado degradado conocido: los envíos siguientes se
                // descartan en silencio hasta reiniciar la sesión
                log::warn!("⚠️ Canal cerrado inesperadamente (código {})", e.code());
            }
        }) as Box<dyn FnMut(CloseEvent)>);
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        let on_error = Closure::wrap(Box::new(move |_e: Event| {
            log::error!("❌ Error en el canal");
        }) as Box<dyn FnMut(Event)>);
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Ok(Self {
            socket: Some(socket),
            _on_message: None,
            _on_open: Some(on_open),
            _on_close: Some(on_close),
            _on_error: Some(on_error),
        })
    }

    /// Suscribir el handler de mensajes entrantes (frames de texto).
    /// Reemplaza cualquier handler anterior.
    pub fn set_on_message(&mut self, handler: impl Fn(String) + 'static) {
        let callback = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Some(text) = event.data().as_string() {
                handler(text);
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        if let Some(socket) = &self.socket {
            socket.set_onmessage(Some(callback.as_ref().unchecked_ref()));
        }
        self._on_message = Some(callback);
    }

    /// Enviar un frame de texto. Si el canal no está abierto el envío se
    /// descarta sin reintento (la muestra de posición es efímera).
    pub fn send_text(&self, payload: &str) {
        match &self.socket {
            Some(socket) if socket.ready_state() == WebSocket::OPEN => {
                if let Err(e) = socket.send_with_str(payload) {
                    log::warn!("⚠️ Envío fallido por el canal: {:?}", e);
                }
            }
            _ => {
                log::debug!("Envío descartado: canal no abierto");
            }
        }
    }

    /// Cerrar el canal y soltar los handlers. Seguro de llamar más de una
    /// vez y sobre un canal ya cerrado por el otro extremo.
    pub fn close(&mut self) {
        if let Some(socket) = self.socket.take() {
            socket.set_onmessage(None);
            socket.set_onopen(None);
            socket.set_onclose(None);
            socket.set_onerror(None);
            let _ = socket.close();
            log::info!("🔌 Canal liberado");
        }
        self._on_message = None;
        self._on_open = None;
        self._on_close = None;
        self._on_error = None;
    }
}

impl Drop for DuplexChannel {
    fn drop(&mut self) {
        self.close();
    }
}
