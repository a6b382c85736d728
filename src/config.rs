//! Command-line configuration
//!
//! ```text
//! heapviz [--compare | --explain] [--speed <ms>] [values...]
//! ```
//!
//! Positional values replace the default starting heap. Each one goes through
//! the same range check as values typed into the UI.

use crate::errors::ConfigError;
use crate::session::constants::{INITIAL_HEAP_VALUES, MAX_HEAP_SIZE};
use crate::session::parse_operand;

/// Default delay between animated steps
pub const DEFAULT_SPEED_MS: u64 = 800;
pub const MIN_SPEED_MS: u64 = 200;
pub const MAX_SPEED_MS: u64 = 1500;
/// Step used by the `[`/`]` speed keys
pub const SPEED_STEP_MS: u64 = 100;

/// Which view the UI opens in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Heap,
    Compare,
    /// Function reference cards with a demo
    Explain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub view: View,
    pub speed_ms: u64,
    pub initial_values: Vec<i32>,
    /// `--help` was given; print usage and exit
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            view: View::Heap,
            speed_ms: DEFAULT_SPEED_MS,
            initial_values: INITIAL_HEAP_VALUES.to_vec(),
            show_help: false,
        }
    }
}

impl Config {
    /// Parse arguments, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut values = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "--compare" => config.view = View::Compare,
                "--explain" => config.view = View::Explain,
                "--help" | "-h" => config.show_help = true,
                "--speed" => {
                    let raw = args.next().ok_or_else(|| ConfigError::MissingValue {
                        flag: arg.to_string(),
                    })?;
                    config.speed_ms = parse_speed(arg, raw.as_ref())?;
                }
                // "-5" is a value, "--x" or "-x" is a flag
                _ if arg.starts_with('-') && arg[1..].parse::<i64>().is_err() => {
                    return Err(ConfigError::UnknownFlag {
                        flag: arg.to_string(),
                    });
                }
                _ => values.push(parse_operand(arg)?),
            }
        }

        if values.len() > MAX_HEAP_SIZE {
            return Err(ConfigError::TooManyValues {
                count: values.len(),
                limit: MAX_HEAP_SIZE,
            });
        }
        if !values.is_empty() {
            config.initial_values = values;
        }

        Ok(config)
    }
}

fn parse_speed(flag: &str, raw: &str) -> Result<u64, ConfigError> {
    let speed: u64 = raw.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        input: raw.to_string(),
    })?;
    if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&speed) {
        return Err(ConfigError::SpeedOutOfRange {
            speed,
            min: MIN_SPEED_MS,
            max: MAX_SPEED_MS,
        });
    }
    Ok(speed)
}

/// Usage text printed for `--help` and on argument errors
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {0} [--compare | --explain] [--speed <ms>] [values...]\n\
         \n\
         Options:\n\
         \x20 --compare      Start in the sorted array vs MinHeap view\n\
         \x20 --explain      Start in the function reference view\n\
         \x20 --speed <ms>   Delay between animation steps ({1}..={2}, default {3})\n\
         \x20 values         Starting heap values ({4}..={5}, at most {6})\n\
         \n\
         Examples:\n\
         \x20 {0}                     # Default heap\n\
         \x20 {0} --speed 300 5 3 9   # Custom heap, fast playback",
        program_name,
        MIN_SPEED_MS,
        MAX_SPEED_MS,
        DEFAULT_SPEED_MS,
        crate::session::constants::MIN_VALUE,
        crate::session::constants::MAX_VALUE,
        MAX_HEAP_SIZE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SessionError;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_values, INITIAL_HEAP_VALUES.to_vec());
    }

    #[test]
    fn test_flags_and_values() {
        let config = Config::from_args(["--compare", "--speed", "300", "5", "-3", "9"]).unwrap();
        assert_eq!(config.view, View::Compare);
        assert_eq!(config.speed_ms, 300);
        assert_eq!(config.initial_values, vec![5, -3, 9]);
        assert!(!config.show_help);
    }

    #[test]
    fn test_explain_flag_opens_function_view() {
        let config = Config::from_args(["--explain"]).unwrap();
        assert_eq!(config.view, View::Explain);
        assert!(usage("heapviz").contains("--explain"));

        // last view flag wins
        let config = Config::from_args(["--explain", "--compare"]).unwrap();
        assert_eq!(config.view, View::Compare);
    }

    #[test]
    fn test_speed_errors() {
        assert_eq!(
            Config::from_args(["--speed"]),
            Err(ConfigError::MissingValue {
                flag: "--speed".to_string()
            })
        );
        assert_eq!(
            Config::from_args(["--speed", "fast"]),
            Err(ConfigError::InvalidNumber {
                flag: "--speed".to_string(),
                input: "fast".to_string()
            })
        );
        assert_eq!(
            Config::from_args(["--speed", "50"]),
            Err(ConfigError::SpeedOutOfRange {
                speed: 50,
                min: MIN_SPEED_MS,
                max: MAX_SPEED_MS
            })
        );
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            Config::from_args(["--bogus"]),
            Err(ConfigError::UnknownFlag {
                flag: "--bogus".to_string()
            })
        );
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(
            Config::from_args(["2000"]),
            Err(ConfigError::InvalidValue(SessionError::ValueOutOfRange { .. }))
        ));
        let many: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        assert_eq!(
            Config::from_args(many),
            Err(ConfigError::TooManyValues {
                count: 30,
                limit: MAX_HEAP_SIZE
            })
        );
    }

    #[test]
    fn test_usage_mentions_program() {
        assert!(usage("heapviz").starts_with("Usage: heapviz"));
    }
}
