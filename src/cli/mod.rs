//! Command-line front end for podgen.

pub mod prompt;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::config::PodgenConfig;
use crate::error::Result;
use crate::types::{FormState, Gender};

/// Generate a podcast script and audio from a topic.
#[derive(Parser, Debug)]
#[command(name = "podgen", version, about = "AI podcast generator client")]
pub struct Cli {
    /// Podcast topic (prompted for when omitted)
    #[arg(long)]
    pub topic: Option<String>,

    /// Host name (prompted for when omitted)
    #[arg(long)]
    pub host: Option<String>,

    /// Host voice gender
    #[arg(long, default_value_t = Gender::Female)]
    pub host_gender: Gender,

    /// Guests, comma separated (e.g. "Dr. Kim, Jordan Lee")
    #[arg(long)]
    pub guests: Option<String>,

    /// Guest voice gender, applied to all guests
    #[arg(long, default_value_t = Gender::Male)]
    pub guest_gender: Gender,

    /// Constraints, angle, or details for the discussion
    #[arg(long)]
    pub info: Option<String>,

    /// Service origin (overrides config file and PODGEN_API_BASE)
    #[arg(long)]
    pub api_base: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds, 0 for none
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the raw result as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail instead of prompting for missing required fields
    #[arg(long)]
    pub no_input: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Form values given on the command line.
    pub fn form_state(&self) -> FormState {
        FormState {
            topic: self.topic.clone().unwrap_or_default(),
            host: self.host.clone().unwrap_or_default(),
            guests_text: self.guests.clone().unwrap_or_default(),
            info: self.info.clone().unwrap_or_default(),
            host_gender: self.host_gender,
            guest_gender: self.guest_gender,
        }
    }

    /// No form field was supplied, so the whole form is filled interactively.
    pub fn form_is_blank(&self) -> bool {
        self.topic.is_none() && self.host.is_none() && self.guests.is_none() && self.info.is_none()
    }

    /// Config file (if any), then the environment, then flags.
    pub fn resolve_config(&self) -> Result<PodgenConfig> {
        let base = match &self.config {
            Some(path) => PodgenConfig::from_file(path)?,
            None => PodgenConfig::default(),
        };
        let mut config = base.with_env()?;
        if let Some(api_base) = &self.api_base {
            config.set_api_base(api_base.clone())?;
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
        }
        Ok(config)
    }

    /// Default tracing filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "podgen=debug,warn",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_with_defaults() {
        let cli = Cli::try_parse_from(["podgen"]).unwrap();
        assert!(cli.topic.is_none());
        assert!(cli.host.is_none());
        assert_eq!(cli.host_gender, Gender::Female);
        assert_eq!(cli.guest_gender, Gender::Male);
        assert!(!cli.json);
        assert!(cli.form_is_blank());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn parse_all_form_fields() {
        let cli = Cli::try_parse_from([
            "podgen",
            "--topic",
            "The future of AI in healthcare",
            "--host",
            "Alex Rivera",
            "--host-gender",
            "male",
            "--guests",
            "Dr. Kim, Jordan Lee",
            "--guest-gender",
            "female",
            "--info",
            "Keep it upbeat",
        ])
        .unwrap();

        let form = cli.form_state();
        assert_eq!(form.topic, "The future of AI in healthcare");
        assert_eq!(form.host, "Alex Rivera");
        assert_eq!(form.host_gender, Gender::Male);
        assert_eq!(form.guest_gender, Gender::Female);
        assert_eq!(
            form.guest_list(),
            vec!["Dr. Kim".to_string(), "Jordan Lee".to_string()]
        );
        assert_eq!(form.info, "Keep it upbeat");
        assert!(!cli.form_is_blank());
    }

    #[test]
    fn parse_rejects_unknown_gender() {
        assert!(Cli::try_parse_from(["podgen", "--host-gender", "robot"]).is_err());
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::try_parse_from(["podgen", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        assert_eq!(cli.log_filter(), "trace");
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("podgen.toml");
        std::fs::write(&path, "api_base = \"http://file.example\"\ntimeout_secs = 5\n").unwrap();

        let cli = Cli::try_parse_from([
            "podgen",
            "--config",
            path.to_str().unwrap(),
            "--api-base",
            "http://flag.example/",
            "--timeout-secs",
            "0",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.api_base(), "http://flag.example");
        assert_eq!(config.timeout(), None);
    }
}
