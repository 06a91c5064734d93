pub mod commands;
pub mod form;
pub mod ui;

pub use form::{FormInput, collect_profile};
pub use ui::output::Output;
