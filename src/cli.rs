use clap::Parser;
use std::path::PathBuf;

/// Terminal client for browsing InovaWeek student groups
#[derive(Parser, Debug)]
#[command(
    name = "inovaview",
    version,
    about = "Terminal client for browsing InovaWeek student groups",
    long_about = None
)]
pub struct Cli {
    /// Path to the configuration file (defaults to the platform config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::parse_from(["inovaview"]);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_config_override() {
        let cli = Cli::parse_from(["inovaview", "--config", "/tmp/iv.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/iv.toml")));
    }
}
