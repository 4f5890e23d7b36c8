use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::utils::constants::STORAGE_KEY_AUTH_TOKEN;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Token bearer crudo (lo escribe la pantalla de login, externa a este core)
pub fn load_auth_token() -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(STORAGE_KEY_AUTH_TOKEN).ok()?
}
