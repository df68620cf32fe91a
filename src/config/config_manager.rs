// src/config/config_manager.rs

use clap::Parser;

use crate::error::LoadError;
use crate::model::adapters::{load_requests, CampaignAdapter};
use crate::model::campaign::Campaign;
use crate::model::request::AdRequest;
use crate::selection::eligibility::MatchMode;
use crate::selection::selector::Selector;

#[derive(Parser, Debug, Clone)]
#[command(author = "whiteCcinn", version = "1.0", about = "Pacing-based campaign selector")]
pub struct CliArgs {
    /// JSON array of campaigns
    #[arg(long)]
    pub campaigns: String,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    /// JSON array of requests; overrides --category/--country
    #[arg(long)]
    pub requests: Option<String>,
    #[arg(long, value_enum, default_value_t = MatchMode::Any)]
    pub match_mode: MatchMode,
    #[arg(long, default_value = "logs")]
    pub log_dir: String,
}

/// **运行期配置**
///
/// Campaigns are loaded once; requests come either from a file or from the CLI flags.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub campaigns: Vec<Campaign>,
    pub requests: Vec<AdRequest>,
    pub selector: Selector,
}

impl ConfigManager {
    pub fn new(campaigns: Vec<Campaign>, requests: Vec<AdRequest>, match_mode: MatchMode) -> Self {
        ConfigManager {
            campaigns,
            requests,
            selector: Selector::new(match_mode),
        }
    }

    pub fn from_args(args: &CliArgs, adapter: &dyn CampaignAdapter) -> Result<Self, LoadError> {
        let campaigns = adapter.get_campaigns()?;
        let requests = match &args.requests {
            Some(path) => load_requests(path)?,
            None => vec![AdRequest {
                category: args.category.clone(),
                country: args.country.clone(),
            }],
        };
        Ok(Self::new(campaigns, requests, args.match_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticAdapter(Vec<Campaign>);

    impl CampaignAdapter for StaticAdapter {
        fn get_campaigns(&self) -> Result<Vec<Campaign>, LoadError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn single_request_from_flags() {
        let args = CliArgs::parse_from([
            "ad-selector",
            "--campaigns",
            "unused.json",
            "--category",
            "news",
            "--country",
            "SE",
        ]);
        let config = ConfigManager::from_args(&args, &StaticAdapter(vec![Campaign::new(1, 1, 2, 1, 2)])).unwrap();

        assert_eq!(config.campaigns.len(), 1);
        assert_eq!(config.requests, vec![AdRequest::new(Some("news"), Some("SE"))]);
        assert_eq!(config.selector.match_mode(), MatchMode::Any);
        assert_eq!(args.log_dir, "logs");
    }

    #[test]
    fn match_mode_flag_parses() {
        let args = CliArgs::parse_from(["ad-selector", "--campaigns", "c.json", "--match-mode", "all"]);
        assert_eq!(args.match_mode, MatchMode::All);
    }

    #[test]
    fn missing_requests_file_is_reported() {
        let args = CliArgs::parse_from([
            "ad-selector",
            "--campaigns",
            "c.json",
            "--requests",
            "/nonexistent/requests.json",
        ]);
        let result = ConfigManager::from_args(&args, &StaticAdapter(Vec::new()));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
