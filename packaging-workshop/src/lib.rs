//! Greets the user in the language named by the `LOCAL_LANGUAGE` environment variable.
//!
//! Any value that is not one of the known languages, including no value at all, falls back to
//! Romansh.
use std::env;
use std::error::Error;
use std::str::FromStr;

use log::{debug, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Environment variable holding the language code.
pub const LANGUAGE_VAR: &str = "LOCAL_LANGUAGE";

pub const DEFAULT_LANGUAGE: Language = Language::Romansh;

const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Language {
    Spanish,
    English,
    Romansh,
    Klingon,
}

impl Language {
    #[must_use]
    pub fn greeting(self) -> &'static str {
        match self {
            Language::Spanish => "¡Hola!",
            Language::English => "Hello!",
            Language::Romansh => "Allegra!",
            Language::Klingon => "nukneH!",
        }
    }

    /// Looks up a language code in any case. Unknown codes give [`DEFAULT_LANGUAGE`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Language::from_str(&code.to_uppercase()).unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// The greeting for an optional language code.
#[must_use]
pub fn greeting_for(code: Option<&str>) -> &'static str {
    code.map_or(DEFAULT_LANGUAGE, Language::from_code).greeting()
}

/// Reads [`LANGUAGE_VAR`]. A value that is not valid unicode counts as unknown.
#[must_use]
pub fn language_from_env() -> Language {
    let value = env::var_os(LANGUAGE_VAR);
    let language = value
        .as_deref()
        .map_or(DEFAULT_LANGUAGE, |value| {
            value.to_str().map_or(DEFAULT_LANGUAGE, Language::from_code)
        });
    debug!("{LANGUAGE_VAR}={value:?} selects {language}");
    language
}

/// Prints the greeting for the language in the environment.
pub fn greet() {
    println!("{}", language_from_env().greeting());
}

/// Sends log messages at `level` and above to stderr, leaving stdout to the greeting.
///
/// # Errors
/// Fails if the configuration is invalid or another logger is already installed.
pub fn init_logging(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_language_has_its_greeting() {
        let greetings: Vec<(String, &str)> = Language::iter()
            .map(|language| (language.to_string(), language.greeting()))
            .collect();
        assert_eq!(
            greetings,
            vec![
                ("SPANISH".to_string(), "¡Hola!"),
                ("ENGLISH".to_string(), "Hello!"),
                ("ROMANSH".to_string(), "Allegra!"),
                ("KLINGON".to_string(), "nukneH!"),
            ]
        );
    }

    #[test]
    fn codes_match_in_any_case() {
        for code in ["english", "English", "ENGLISH", "eNgLiSh"] {
            assert_eq!(Language::from_code(code), Language::English);
        }
        assert_eq!(Language::from_code("klingon"), Language::Klingon);
        assert_eq!(Language::from_code("Spanish"), Language::Spanish);
    }

    #[test]
    fn unknown_codes_fall_back_to_romansh() {
        for code in ["FRENCH", "", " english", "ENGLISH\n", "hola"] {
            assert_eq!(Language::from_code(code), Language::Romansh);
        }
    }

    #[test]
    fn missing_code_greets_in_romansh() {
        assert_eq!(greeting_for(None), "Allegra!");
        assert_eq!(greeting_for(Some("french")), "Allegra!");
        assert_eq!(greeting_for(Some("spanish")), "¡Hola!");
    }
}
