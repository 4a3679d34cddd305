//! 命令行参数；给出的值只覆盖本次运行，不写回配置文件

use std::path::PathBuf;

use clap::Parser;
use rdgtt_portal_core::Language;

use crate::backend::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "rdgtt-portal")]
#[command(about = "Terminal front-end for the R-DGTT administration portal")]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/rdgtt-portal/config.json)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Interface language (fr, en)
    #[arg(long, short = 'l', value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Path to open at startup, e.g. /candidats/42
    #[arg(long, short = 'p')]
    pub path: Option<String>,

    /// Dashboard feed JSON file (default: built-in demo data)
    #[arg(long, short = 'f')]
    pub feed: Option<PathBuf>,
}

impl Cli {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(language) = self.lang {
            config.language = language;
        }
        if let Some(feed) = &self.feed {
            config.feed_file = Some(feed.clone());
        }
    }
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| format!("unsupported language '{code}' (expected fr or en)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["rdgtt-portal", "--lang", "en-US", "-f", "feed.json"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.language, Language::En);
        assert_eq!(config.feed_file, Some(PathBuf::from("feed.json")));
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["rdgtt-portal"]).unwrap();
        let mut config = AppConfig {
            language: Language::En,
            ..AppConfig::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.language, Language::En);
        assert!(cli.path.is_none());
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["rdgtt-portal", "--lang", "de"]).is_err());
    }
}
