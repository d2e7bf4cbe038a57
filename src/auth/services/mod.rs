//! Application services for authentication.

mod login;

pub use login::{AuthError, AuthResult, AuthService, BootstrapAdmin};
