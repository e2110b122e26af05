use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Identity and deployment URLs that templated answers are built from.
///
/// Every field can be overridden from the environment; answers fall back to
/// these values whenever the question itself does not carry a better one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub email: String,
    pub github_username: String,
    pub github_pages_url: String,
    pub vercel_api_url: String,
    pub github_action_url: String,
    pub docker_hub_url: String,
    pub fastapi_url: String,
    pub ngrok_url: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            email: "23f3004321@ds.study.iitm.ac.in".to_string(),
            github_username: "santoshsharma03".to_string(),
            github_pages_url: "https://santoshsharma03.github.io/".to_string(),
            vercel_api_url: "https://ga2-marks-api.vercel.app/api".to_string(),
            github_action_url: "https://github.com/santoshsharma03/github-action-demo"
                .to_string(),
            docker_hub_url:
                "https://hub.docker.com/repository/docker/santoshsharma03/tool-demo".to_string(),
            fastapi_url: "https://fastapi-csv-demo.vercel.app/api".to_string(),
            ngrok_url: "https://abcd1234.ngrok-free.app".to_string(),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub profile: StudentProfile,
    pub aiproxy_token: String,
    pub aiproxy_base_url: String,
    pub completion_model: String,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            profile: StudentProfile::default(),
            aiproxy_token: String::new(),
            aiproxy_base_url: "https://aiproxy.sanand.workers.dev/openai/v1".to_string(),
            completion_model: crate::kernel::GPT_4O_MINI.to_string(),
            upload_dir: env::temp_dir(),
            max_upload_bytes: 25 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Unset variables take their defaults; numeric variables that are set
    /// but malformed are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let text = |key: &str, default: String| lookup(key).unwrap_or(default);

        let profile = StudentProfile {
            email: text("STUDENT_EMAIL", defaults.profile.email),
            github_username: text("GITHUB_USERNAME", defaults.profile.github_username),
            github_pages_url: text("GITHUB_PAGES_URL", defaults.profile.github_pages_url),
            vercel_api_url: text("VERCEL_API_URL", defaults.profile.vercel_api_url),
            github_action_url: text("GITHUB_ACTION_URL", defaults.profile.github_action_url),
            docker_hub_url: text("DOCKER_HUB_URL", defaults.profile.docker_hub_url),
            fastapi_url: text("FASTAPI_URL", defaults.profile.fastapi_url),
            ngrok_url: text("NGROK_URL", defaults.profile.ngrok_url),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().context("PORT must be a valid number")?,
            None => defaults.port,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse()
                .context("MAX_UPLOAD_BYTES must be a valid number")?,
            None => defaults.max_upload_bytes,
        };

        Ok(Self {
            port,
            profile,
            aiproxy_token: text("AIPROXY_TOKEN", defaults.aiproxy_token),
            aiproxy_base_url: text("AIPROXY_BASE_URL", defaults.aiproxy_base_url),
            completion_model: text("COMPLETION_MODEL", defaults.completion_model),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            max_upload_bytes,
        })
    }
}
