//! Shared regular expressions for pulling identities and deployment URLs out
//! of free-form question text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email pattern - no word boundaries, so emails glued to punctuation still match
    pub static ref EMAIL_REGEX: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // https://<user>.github.io
    pub static ref GITHUB_PAGES_REGEX: Regex = Regex::new(
        r"(?i)https://([a-zA-Z0-9-]+)\.github\.io"
    ).unwrap();

    // https://github.com/<owner>/<repo>
    pub static ref GITHUB_REPO_REGEX: Regex = Regex::new(
        r"(?i)https://github\.com/([^/]+)/([^/\s]+)"
    ).unwrap();

    // https://hub.docker.com/repository/docker/<owner>/<repo>
    pub static ref DOCKER_HUB_REGEX: Regex = Regex::new(
        r"(?i)https://hub\.docker\.com/repository/docker/([^/]+)/([^/\s]+)"
    ).unwrap();

    // https://<app>.vercel.app/api
    pub static ref VERCEL_API_REGEX: Regex = Regex::new(
        r"(?i)https://[a-zA-Z0-9-]+\.vercel\.app/api"
    ).unwrap();

    // https://<app>.vercel.app/api/outline
    pub static ref VERCEL_OUTLINE_REGEX: Regex = Regex::new(
        r"(?i)https://[a-zA-Z0-9-]+\.vercel\.app/api/outline"
    ).unwrap();

    // https://<tunnel>.ngrok-free.app
    pub static ref NGROK_REGEX: Regex = Regex::new(
        r"(?i)https://[a-zA-Z0-9-]+\.ngrok-free\.app"
    ).unwrap();
}

/// First whole match of `regex` in `text`.
pub fn first_match(regex: &Regex, text: &str) -> Option<String> {
    regex.find(text).map(|m| m.as_str().to_string())
}

/// Owner and repository captured from a GitHub or Docker Hub repository URL.
pub fn owner_and_repo(regex: &Regex, text: &str) -> Option<(String, String)> {
    let caps = regex.captures(text)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}
