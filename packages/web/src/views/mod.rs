mod guard;
pub use guard::AuthGuard;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod home;
pub use home::Home;

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;
