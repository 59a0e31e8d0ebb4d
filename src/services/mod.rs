pub use auth::*;
pub use credentials::*;

mod auth;
mod credentials;
