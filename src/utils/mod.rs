pub mod constants;
pub mod mapbox_ffi;
pub mod storage;

pub use constants::*;
pub use storage::{load_auth_token, load_from_storage, save_to_storage};
