//! Sign-in form state and submission

pub use controller::*;
pub use state::*;

mod controller;
mod state;
