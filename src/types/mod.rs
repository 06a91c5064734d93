pub mod error;
pub mod profile;

pub use error::{CareerError, ProviderError, Result};
pub use profile::{CareerPlan, CareerProfile};
