pub mod auth;
pub mod config;
pub mod routes;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use auth::{AuthError, AuthStore};
pub use config::ShellConfig;
pub use routes::{Navigation, RouteEntry, RouteError, RouteTable};
pub use session::{Session, SessionError, SessionStore, StorageKeys};
pub use storage::{KeyValueStorage, StorageError};
