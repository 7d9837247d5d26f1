//! Platform storage constructor.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Native / tests**: process memory via [`store::MemoryStorage`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStorage = store::MemoryStorage;

/// Create the storage backing the session keys on this platform.
pub fn make_storage() -> AppStorage {
    AppStorage::new()
}
