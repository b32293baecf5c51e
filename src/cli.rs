//! Command-line flags for the default binary.

use anyhow::{anyhow, Result};

use crate::types::SessionConfig;

pub const USAGE: &str = "usage: term-runner [--level N] [--seed N]

  space    jump
  ctrl+c   quit

environment: RUNNER_LEVEL, RUNNER_TICK_MS, RUNNER_SEED, RUST_LOG, RUNNER_LOG_PATH

Without --seed or RUNNER_SEED every run lays out a new track.
Logs go to stderr, which shares the game screen: set RUNNER_LOG_PATH
or redirect stderr (2>runner.log) when RUST_LOG is on.";

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Play(SessionConfig),
    Help,
}

/// Parse flags (without the program name) on top of `base`.
pub fn parse_args(args: &[String], base: SessionConfig) -> Result<CliCommand> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--level" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --level"))?;
                config.level = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --level value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "-h" | "--help" => return Ok(CliCommand::Help),
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(CliCommand::Play(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_keeps_base() {
        let base = SessionConfig::default();
        assert_eq!(
            parse_args(&[], base.clone()).unwrap(),
            CliCommand::Play(base)
        );
    }

    #[test]
    fn level_and_seed() {
        let parsed = parse_args(&args(&["--level", "3", "--seed", "42"]), SessionConfig::default())
            .unwrap();
        let CliCommand::Play(config) = parsed else {
            panic!("expected play");
        };
        assert_eq!(config.level, 3);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn help() {
        assert_eq!(
            parse_args(&args(&["--help"]), SessionConfig::default()).unwrap(),
            CliCommand::Help
        );
    }

    #[test]
    fn errors() {
        let base = SessionConfig::default();
        assert!(parse_args(&args(&["--level"]), base.clone()).is_err());
        assert!(parse_args(&args(&["--level", "x"]), base.clone()).is_err());
        let err = parse_args(&args(&["--fast"]), base).unwrap_err();
        assert!(err.to_string().contains("--fast"));
    }

    #[test]
    fn usage_names_the_log_file_setting() {
        assert!(USAGE.contains("RUNNER_LOG_PATH"));
        assert!(USAGE.contains("2>runner.log"));
    }
}
