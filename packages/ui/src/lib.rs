//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, AppAuthStore, AuthProvider, LoginButton, LogoutButton};

mod storage;
pub use storage::{make_storage, AppStorage};

mod navbar;
pub use navbar::Navbar;

mod user_card;
pub use user_card::UserCard;
