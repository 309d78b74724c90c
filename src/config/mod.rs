use crate::cli::Cli;
use crate::errors::{FeedplusError, FeedplusResult};

/// Resolved, immutable run configuration. Hashtags are stored lower-cased.
#[derive(Debug, Clone)]
pub struct Config {
    pub user_id: String,
    pub hashtags: Vec<String>,
    pub limit: usize,
    pub title: String,
    pub url: String,
}

impl Config {
    pub fn resolve(cli: Cli) -> FeedplusResult<Self> {
        let user_id = cli
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                FeedplusError::Config(
                    "please specify a user ID (run with `--help` for usage)".to_string(),
                )
            })?;

        Ok(Self {
            user_id,
            hashtags: cli.hashtags.iter().map(|t| t.to_lowercase()).collect(),
            limit: cli.limit,
            title: cli.title,
            url: cli.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_resolve_minimal() {
        let cli = Cli::parse_from(["feedplus", "--id", "12345"]);
        let config = Config::resolve(cli).unwrap();

        assert_eq!(config.user_id, "12345");
        assert!(config.hashtags.is_empty());
        assert_eq!(config.limit, 20);
        assert_eq!(config.title, "Your feed title");
        assert_eq!(config.url, "http://your.domain.com/");
    }

    #[test]
    fn test_resolve_missing_id() {
        let cli = Cli::parse_from(["feedplus"]);
        assert!(matches!(
            Config::resolve(cli),
            Err(FeedplusError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_empty_id() {
        let cli = Cli::parse_from(["feedplus", "--id", ""]);
        assert!(matches!(
            Config::resolve(cli),
            Err(FeedplusError::Config(_))
        ));
    }

    #[test]
    fn test_hashtags_lowercased() {
        let cli = Cli::parse_from(["feedplus", "--id", "12345", "-f", "Linux,KDE"]);
        let config = Config::resolve(cli).unwrap();

        assert_eq!(config.hashtags, vec!["linux", "kde"]);
    }

    #[test]
    fn test_user_alias() {
        let cli = Cli::parse_from(["feedplus", "--user", "12345", "-l", "5"]);
        let config = Config::resolve(cli).unwrap();

        assert_eq!(config.user_id, "12345");
        assert_eq!(config.limit, 5);
    }
}
