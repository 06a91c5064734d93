//! Space Feed Advisor
//!
//! Backend that needs no LLM: fetches NASA's Astronomy Picture of the Day
//! and fills one of two plan templates, chosen by keyword match on the
//! interests and goals fields. The fetch never fails the submission; any
//! error falls back to a fixed picture.

use chrono::{Local, NaiveDate};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::ai::ProviderConfig;
use crate::ai::provider::build_http_client;
use crate::constants::network::FEED_TIMEOUT_SECS;
use crate::constants::providers::APOD_DEMO_KEY;
use crate::constants::space_feed::{FALLBACK_EXPLANATION, FALLBACK_TITLE, SPACE_KEYWORDS};
use crate::types::{CareerProfile, ProviderError, Result};

const PROVIDER_NAME: &str = "apod";

/// One astronomy picture entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AstronomyPicture {
    pub title: String,
    pub explanation: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl AstronomyPicture {
    /// Fixed entry used whenever the feed cannot be read
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            explanation: FALLBACK_EXPLANATION.to_string(),
            url: None,
            date: None,
        }
    }
}

pub struct SpaceFeedAdvisor {
    api_key: SecretString,
    api_base: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for SpaceFeedAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceFeedAdvisor")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl SpaceFeedAdvisor {
    /// Build from provider settings; the key is optional and defaults to
    /// the public demo key.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config
            .lookup_api_key()
            .unwrap_or_else(|| SecretString::from(APOD_DEMO_KEY.to_string()));

        let client = build_http_client(Duration::from_secs(
            config.timeout_secs.min(FEED_TIMEOUT_SECS),
        ))?;

        Ok(Self {
            api_key,
            api_base: config.api_base_or_default()?,
            client,
        })
    }

    /// Picture for the given date, or the fallback entry
    pub async fn fetch_picture(&self, date: NaiveDate) -> AstronomyPicture {
        match self.try_fetch(date).await {
            Ok(picture) => picture,
            Err(e) => {
                warn!("Astronomy picture unavailable, using fallback: {}", e);
                AstronomyPicture::fallback()
            }
        }
    }

    async fn try_fetch(&self, date: NaiveDate) -> Result<AstronomyPicture> {
        let date = date.format("%Y-%m-%d").to_string();
        debug!("Fetching astronomy picture for {}", date);

        let response = self
            .client
            .get(&self.api_base)
            .query(&[
                ("api_key", self.api_key.expose_secret()),
                ("date", date.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::request(PROVIDER_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::status(PROVIDER_NAME, status.as_u16(), &body).into());
        }

        let picture = response
            .json::<AstronomyPicture>()
            .await
            .map_err(|e| ProviderError::parse(PROVIDER_NAME, e))?;
        Ok(picture)
    }

    /// Fetch today's picture and render the plan
    pub async fn advise(&self, profile: &CareerProfile) -> String {
        info!("Generating templated plan with astronomy picture feed");
        let picture = self.fetch_picture(Local::now().date_naive()).await;
        render_plan(profile, &picture)
    }
}

/// Case-insensitive keyword match on interests and goals
pub fn is_space_related(interests: &str, goals: &str) -> bool {
    let haystack = format!("{} {}", interests, goals).to_lowercase();
    SPACE_KEYWORDS.iter().any(|kw| haystack.contains(kw))
}

/// Fill the space or generic template
pub fn render_plan(profile: &CareerProfile, picture: &AstronomyPicture) -> String {
    let mut plan = String::new();

    plan.push_str("# Your Career Plan\n\n");
    plan.push_str(&format!(
        "**Education:** {}  \n**Skills:** {}  \n**Experience:** {}\n\n",
        profile.education, profile.skills, profile.experience
    ));

    if is_space_related(&profile.interests, &profile.goals) {
        plan.push_str(&space_branch(profile));
    } else {
        plan.push_str(&generic_branch(profile));
    }

    plan.push_str(&format!(
        "\n## Today's Astronomy Picture: {}\n\n{}\n",
        picture.title, picture.explanation
    ));
    if let Some(url) = &picture.url {
        plan.push_str(&format!("\n![{}]({})\n", picture.title, url));
    }

    plan
}

fn space_branch(profile: &CareerProfile) -> String {
    format!(
        "Your interest in {} points toward the space industry.\n\n\
## Short-term steps (1-2 years)\n\
- Take orbital mechanics, propulsion or remote sensing electives\n\
- Apply to NASA, ESA or commercial launch provider internship programs\n\
- Join a student rocketry, CubeSat or rover team\n\n\
## Long-term steps (3-5 years)\n\
- Specialize in a subsystem such as avionics, GNC or thermal control\n\
- Consider a graduate degree in aerospace engineering or planetary science\n\n\
## Job roles to target\n\
- Aerospace systems engineer\n\
- Flight software engineer\n\
- Mission operations engineer\n\n\
## Skills to learn\n\
- MATLAB/Simulink, Python, C/C++ for embedded flight systems\n\
- Systems engineering and requirements management\n\n\
## Resources\n\
- NASA Open Courseware and the NASA Technical Reports Server\n\
- *Space Mission Engineering: The New SMAD*\n\
- Goal noted: {}\n",
        profile.interests,
        non_empty_or(&profile.goals, "not specified")
    )
}

fn generic_branch(profile: &CareerProfile) -> String {
    format!(
        "Your interest in {} can grow into a strong engineering career.\n\n\
## Short-term steps (1-2 years)\n\
- Build two or three portfolio projects in your area of interest\n\
- Seek an internship or research assistant position\n\n\
## Long-term steps (3-5 years)\n\
- Move from contributor to owner of a product area or system\n\
- Pursue a certification or graduate study that matches your goals\n\n\
## Job roles to target\n\
- Engineer in your field of study\n\
- Technical consultant\n\
- Product or project engineer\n\n\
## Skills to learn\n\
- A programming language used in your field\n\
- Communication and project management\n\n\
## Resources\n\
- Coursera, edX and MIT OpenCourseWare\n\
- Professional societies such as IEEE or ASME\n\
- Goal noted: {}\n",
        non_empty_or(&profile.interests, "engineering"),
        non_empty_or(&profile.goals, "not specified")
    )
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}
