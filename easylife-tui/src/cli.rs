//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use libeasylife::logging::{LogFormat, LoggingConfig};

#[derive(Parser, Debug)]
#[command(name = "easylife-tui")]
#[command(version, about = "EasyLife marketplace in the terminal")]
#[command(long_about = r#"EasyLife marketplace in the terminal.

Browse the catalog, register as a buyer or seller, and list products.
Nothing is saved: every run starts from the demo catalog.

EXAMPLES:
    # Start with defaults
    easylife-tui

    # Use a specific configuration file
    easylife-tui --config ./easylife.toml

    # Write JSON logs to a file while the UI runs
    easylife-tui --log-file /tmp/easylife.log --log-format json

CONFIGURATION:
    ~/.config/easylife/config.toml (or EASYLIFE_CONFIG):

    [marketplace]
    seller_passcode = "EasyLife"
    seed_catalog = true

    [navigation]
    transition_ms = 300

EXIT CODES:
    0 - Normal exit
    1 - Configuration, logging or terminal error
"#)]
pub struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "PATH", env = "EASYLIFE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Append logs to this file; without it nothing is logged
    #[arg(long, value_name = "PATH", env = "EASYLIFE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log format
    #[arg(long, value_name = "FORMAT", default_value = "text", env = "EASYLIFE_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info", env = "EASYLIFE_LOG_LEVEL")]
    pub log_level: String,
}

impl Args {
    /// Logging settings, if a log file was requested
    pub fn logging(&self) -> Option<LoggingConfig> {
        self.log_file.as_ref().map(|path| {
            LoggingConfig::new(self.log_format, self.log_level.clone()).with_file(path)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "EASYLIFE_CONFIG",
            "EASYLIFE_LOG_FILE",
            "EASYLIFE_LOG_FORMAT",
            "EASYLIFE_LOG_LEVEL",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let args = Args::try_parse_from(["easylife-tui"]).unwrap();

        assert!(args.config.is_none());
        assert_eq!(args.log_format, LogFormat::Text);
        assert_eq!(args.log_level, "info");
        assert!(args.logging().is_none());
    }

    #[test]
    #[serial]
    fn test_log_file_enables_logging() {
        clear_env();
        let args = Args::try_parse_from([
            "easylife-tui",
            "--log-file",
            "/tmp/easylife.log",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let logging = args.logging().unwrap();
        assert_eq!(logging.format, LogFormat::Json);
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.file, Some(PathBuf::from("/tmp/easylife.log")));
    }

    #[test]
    #[serial]
    fn test_logging_from_env() {
        clear_env();
        std::env::set_var("EASYLIFE_LOG_FILE", "/tmp/easylife-env.log");
        std::env::set_var("EASYLIFE_LOG_FORMAT", "pretty");
        std::env::set_var("EASYLIFE_LOG_LEVEL", "warn");
        let args = Args::try_parse_from(["easylife-tui"]);
        clear_env();

        let logging = args.unwrap().logging().unwrap();
        assert_eq!(logging.format, LogFormat::Pretty);
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.file, Some(PathBuf::from("/tmp/easylife-env.log")));
    }

    #[test]
    #[serial]
    fn test_invalid_log_format() {
        clear_env();
        assert!(Args::try_parse_from(["easylife-tui", "--log-format", "xml"]).is_err());
    }

    #[test]
    #[serial]
    fn test_config_path() {
        clear_env();
        let args = Args::try_parse_from(["easylife-tui", "-c", "/etc/easylife.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/etc/easylife.toml")));
    }
}
