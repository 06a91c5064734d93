//! careerwise - AI-Driven Career Plan Generator
//!
//! Collects an engineering student's education, skills, experience,
//! interests and goals, turns them into a prompt, and asks one configured
//! provider for a career plan.
//!
//! ## Quick Start
//!
//! ```ignore
//! use careerwise::{Backend, CareerProfile, ConfigLoader, DispatchOptions, Dispatcher};
//!
//! let config = ConfigLoader::load(None)?;
//! let backend = Backend::from_config(&config.llm)?;
//! let dispatcher = Dispatcher::new(backend, DispatchOptions::default());
//! let plan = dispatcher
//!     .submit(&CareerProfile::new("CS", "Rust", "intern", "AI", "ML engineer"))
//!     .await;
//! println!("{}", plan.text());
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: provider adapters and prompt builder
//! - [`advisor`]: career prompt, dispatcher, astronomy feed backend
//! - [`config`]: layered configuration
//! - [`cli`]: terminal form and commands

pub mod advisor;
pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod types;

// Configuration
pub use config::{Config, ConfigLoader, FormConfig};

// Error Types
pub use types::error::{CareerError, ProviderError, Result};

// Domain
pub use types::{CareerPlan, CareerProfile};

pub use advisor::{Backend, DispatchOptions, Dispatcher, SpaceFeedAdvisor, build_career_prompt};

pub use ai::{
    ChatCompletionProvider, CompletionProvider, GeminiProvider, ProviderConfig, ProviderKind,
    RapidApiProvider, SharedProvider, create_provider,
};
