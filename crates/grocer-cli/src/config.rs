// Runtime settings: file locations and color output
//
// Resolution order for each path:
//   1. command-line flag
//   2. environment variable (GROCER_INPUT / GROCER_BACKUP)
//   3. built-in default under ./data

use std::path::{Path, PathBuf};

use crate::args::Cli;

/// Default purchase log location.
pub const DEFAULT_INPUT: &str = "data/CS210_Project_Three_Input_File.txt";

/// Default backup location.
pub const DEFAULT_BACKUP: &str = "data/frequency.dat";

pub const INPUT_ENV: &str = "GROCER_INPUT";
pub const BACKUP_ENV: &str = "GROCER_BACKUP";

/// Any non-empty value disables color (https://no-color.org).
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absolute path of the purchase log.
    pub input: PathBuf,
    /// Absolute path of the backup file.
    pub backup: PathBuf,
    /// Whether ANSI colors are emitted.
    pub color: bool,
}

impl Settings {
    /// Resolve settings from the parsed arguments and the process environment.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an explicit environment lookup.
    pub fn resolve<F>(cli: &Cli, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

        let input = cli
            .input
            .clone()
            .or_else(|| lookup(INPUT_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
        let backup = cli
            .backup
            .clone()
            .or_else(|| lookup(BACKUP_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKUP));

        Self {
            input: absolutize(&input),
            backup: absolutize(&backup),
            color: !cli.no_color && lookup(NO_COLOR_ENV).is_none(),
        }
    }
}

/// Make `path` absolute against the current directory, leaving it as-is
/// if that fails.
fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("corner-grocer").chain(args.iter().copied())).unwrap()
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_absolute() {
        let s = Settings::resolve(&cli(&[]), env_of(&[]));
        assert!(s.input.is_absolute());
        assert!(s.input.ends_with(DEFAULT_INPUT));
        assert!(s.backup.ends_with(DEFAULT_BACKUP));
        assert!(s.color);
    }

    #[test]
    fn env_overrides_default() {
        let s = Settings::resolve(
            &cli(&[]),
            env_of(&[(INPUT_ENV, "/srv/week.txt"), (BACKUP_ENV, "/srv/freq.dat")]),
        );
        assert_eq!(s.input, PathBuf::from("/srv/week.txt"));
        assert_eq!(s.backup, PathBuf::from("/srv/freq.dat"));
    }

    #[test]
    fn flag_overrides_env() {
        let s = Settings::resolve(
            &cli(&["--input", "/tmp/today.txt"]),
            env_of(&[(INPUT_ENV, "/srv/week.txt")]),
        );
        assert_eq!(s.input, PathBuf::from("/tmp/today.txt"));
    }

    #[test]
    fn empty_env_is_ignored() {
        let s = Settings::resolve(&cli(&[]), env_of(&[(INPUT_ENV, ""), (NO_COLOR_ENV, "")]));
        assert!(s.input.ends_with(DEFAULT_INPUT));
        assert!(s.color);
    }

    #[test]
    fn color_disabled_by_flag_or_env() {
        assert!(!Settings::resolve(&cli(&["--no-color"]), env_of(&[])).color);
        assert!(!Settings::resolve(&cli(&[]), env_of(&[(NO_COLOR_ENV, "1")])).color);
    }
}
