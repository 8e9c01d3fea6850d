use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use eyre::WrapErr;

use menteclara_genai::client::GenAiConfig;

use crate::session::DEFAULT_IDLE_TIMEOUT;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: SocketAddr,
    pub genai: GenAiConfig,
    pub record_progress: bool,
    pub seed_demo: bool,
    pub log_json: bool,
    pub session_idle: Duration,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind: SocketAddr = get("MENTECLARA_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .wrap_err("MENTECLARA_BIND is not a socket address")?;

        let defaults = GenAiConfig::default();
        let timeout = get("GEMINI_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .wrap_err("GEMINI_TIMEOUT_SECS is not a whole number of seconds")?
            .map(Duration::from_secs);

        let session_idle = get("MENTECLARA_SESSION_IDLE_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .wrap_err("MENTECLARA_SESSION_IDLE_SECS is not a whole number of seconds")?
            .map_or(DEFAULT_IDLE_TIMEOUT, Duration::from_secs);

        let genai = GenAiConfig {
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            base_url: get("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            exercise_model: get("GEMINI_EXERCISE_MODEL").unwrap_or(defaults.exercise_model),
            speech_model: get("GEMINI_SPEECH_MODEL").unwrap_or(defaults.speech_model),
            voice: get("GEMINI_VOICE").unwrap_or(defaults.voice),
            timeout,
        };

        Ok(Self {
            bind,
            genai,
            record_progress: flag(get("MENTECLARA_RECORD_PROGRESS"), true)
                .wrap_err("MENTECLARA_RECORD_PROGRESS")?,
            seed_demo: flag(get("MENTECLARA_SEED_DEMO"), true).wrap_err("MENTECLARA_SEED_DEMO")?,
            log_json: flag(get("MENTECLARA_LOG_JSON"), false).wrap_err("MENTECLARA_LOG_JSON")?,
            session_idle,
        })
    }
}

fn flag(value: Option<String>, default: bool) -> eyre::Result<bool> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => Err(eyre::eyre!("expected a boolean, got {other:?}")),
    }
}
