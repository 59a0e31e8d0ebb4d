//! Reusable form components

mod alert;
mod button;
mod checkbox;
mod input;

pub use alert::ErrorAlert;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::{EmailInput, PasswordInput, TextInput};
