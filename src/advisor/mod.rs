//! Career Advisor
//!
//! Prompt construction, backend selection and submission handling.

pub mod dispatcher;
pub mod prompt;
pub mod space_feed;

pub use dispatcher::{Backend, DispatchOptions, Dispatcher, error_message};
pub use prompt::{PLAN_SECTIONS, build_career_prompt};
pub use space_feed::{AstronomyPicture, SpaceFeedAdvisor, is_space_related, render_plan};
