use std::time::Duration;

use clap::{Parser, ValueEnum};

/// API base URL baked in at build time, overridable at run time.
pub const DEFAULT_API_URL: &str = match option_env!("PAREDAO_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartPage {
    Voting,
    Admin,
    Reports,
    Success,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "paredao-client", version, about = "Desktop client for the paredão polling API")]
pub struct Config {
    /// Base URL of the polling REST API
    #[arg(long, env = "PAREDAO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Page shown at start-up
    #[arg(long, env = "PAREDAO_PAGE", value_enum, default_value_t = StartPage::Voting)]
    pub page: StartPage,

    /// Voting event whose results the success page shows
    #[arg(long)]
    pub voting_event_id: Option<i64>,

    /// Default log filter; RUST_LOG takes precedence
    #[arg(long, env = "PAREDAO_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, default_value_t = 15)]
    pub request_timeout_secs: u64,
}

impl Config {
    /// Reads `.env` (if present), then the command line and environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["paredao-client"]).unwrap();
        assert_eq!(config.page, StartPage::Voting);
        assert_eq!(config.voting_event_id, None);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn success_page_with_voting_event() {
        let config = Config::try_parse_from([
            "paredao-client",
            "--page",
            "success",
            "--voting-event-id",
            "12",
            "--api-url",
            "http://api.local:9000/",
        ])
        .unwrap();
        assert_eq!(config.page, StartPage::Success);
        assert_eq!(config.voting_event_id, Some(12));
        assert_eq!(config.api_url(), "http://api.local:9000");
    }

    #[test]
    fn unknown_page_is_rejected() {
        assert!(Config::try_parse_from(["paredao-client", "--page", "home"]).is_err());
    }
}
