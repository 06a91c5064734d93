//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Model parameters shared by every LLM provider
pub mod generation {
    /// Maximum tokens to generate per plan
    pub const DEFAULT_MAX_TOKENS: usize = 1500;

    /// Sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    /// Nucleus sampling cutoff
    pub const DEFAULT_TOP_P: f32 = 1.0;

    /// System instruction sent alongside every prompt
    pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a highly knowledgeable career advisor.";
}

/// Provider endpoints and default models
pub mod providers {
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
    pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";
    pub const OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";

    pub const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com/v1";
    pub const DEEPSEEK_MODEL: &str = "deepseek-chat";
    pub const DEEPSEEK_KEY_ENV: &str = "DEEPSEEK_API_KEY";

    pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
    pub const GROQ_MODEL: &str = "llama-3.1-8b-instant";
    pub const GROQ_KEY_ENV: &str = "GROQ_API_KEY";

    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
    pub const GEMINI_MODEL: &str = "gemini-1.5-flash";
    pub const GEMINI_KEY_ENV: &str = "GEMINI_API_KEY";

    pub const RAPIDAPI_API_BASE: &str = "https://chatgpt-42.p.rapidapi.com";
    pub const RAPIDAPI_HOST: &str = "chatgpt-42.p.rapidapi.com";
    pub const RAPIDAPI_PATH: &str = "/gpt4";
    pub const RAPIDAPI_RESPONSE_FIELD: &str = "result";
    pub const RAPIDAPI_MODEL: &str = "gpt-4";
    pub const RAPIDAPI_KEY_ENV: &str = "RAPIDAPI_KEY";

    pub const APOD_API_BASE: &str = "https://api.nasa.gov/planetary/apod";
    pub const APOD_KEY_ENV: &str = "NASA_API_KEY";
    /// Public rate-limited key accepted by the APOD endpoint
    pub const APOD_DEMO_KEY: &str = "DEMO_KEY";
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// Timeout for the picture-of-the-day fetch (seconds)
    pub const FEED_TIMEOUT_SECS: u64 = 15;
}

/// Space feed keyword matching
pub mod space_feed {
    /// Interests/goals containing any of these select the space branch
    pub const SPACE_KEYWORDS: &[&str] = &[
        "space",
        "aerospace",
        "astronomy",
        "nasa",
        "astro",
        "planetary",
        "mars",
    ];

    pub const FALLBACK_TITLE: &str = "Astronomy Picture Unavailable";
    pub const FALLBACK_EXPLANATION: &str =
        "NASA's picture of the day could not be loaded right now.";
}
