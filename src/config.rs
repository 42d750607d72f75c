use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;
use std::time::Duration;

use crate::enums::language::LanguageId;
use crate::error::ConfigError;
use crate::progress::LevelThresholds;

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 3000));
pub const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";
pub const DEFAULT_TTS_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakThresholds {
    pub warm: u32,
    pub fire: u32,
}

impl Default for StreakThresholds {
    fn default() -> Self {
        Self { warm: 3, fire: 5 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSettings {
    pub fallback_language: LanguageId,
    pub levels: LevelThresholds,
    pub streaks: StreakThresholds,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            fallback_language: LanguageId::FALLBACK,
            levels: LevelThresholds::default(),
            streaks: StreakThresholds::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub tts_endpoint: String,
    pub tts_timeout: Duration,
    pub quiz: QuizSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = QuizSettings::default();

        let bind_addr = parse_or(&lookup, "BIND_ADDR", || DEFAULT_BIND_ADDR)?;
        let tts_endpoint = lookup("TTS_ENDPOINT").unwrap_or_else(|| DEFAULT_TTS_ENDPOINT.to_string());
        let timeout_secs: u64 = parse_or(&lookup, "TTS_TIMEOUT_SECS", || DEFAULT_TTS_TIMEOUT.as_secs())?;
        if timeout_secs == 0 {
            return Err(invalid("TTS_TIMEOUT_SECS", "0", "must be at least one second"));
        }
        let fallback_language = parse_or(&lookup, "DEFAULT_LANGUAGE", || defaults.fallback_language)?;
        let warm = parse_or(&lookup, "STREAK_WARM", || defaults.streaks.warm)?;
        let fire = parse_or(&lookup, "STREAK_FIRE", || defaults.streaks.fire)?;
        if warm > fire {
            return Err(invalid("STREAK_WARM", &warm.to_string(), "must not exceed STREAK_FIRE"));
        }

        Ok(Self {
            bind_addr,
            tts_endpoint,
            tts_timeout: Duration::from_secs(timeout_secs),
            quiz: QuizSettings {
                fallback_language,
                levels: defaults.levels,
                streaks: StreakThresholds { warm, fire },
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            tts_endpoint: DEFAULT_TTS_ENDPOINT.to_string(),
            tts_timeout: DEFAULT_TTS_TIMEOUT,
            quiz: QuizSettings::default(),
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(key, &raw, &e.to_string())),
        None => Ok(default()),
    }
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
