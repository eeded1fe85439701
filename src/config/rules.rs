use std::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer,
};

/// One pattern-to-profile mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRule {
    /// Substring searched for in the stack name.
    pub match_pattern: String,
    /// Profile emitted when the pattern matches.
    pub profile_name: String,
}

impl ProfileRule {
    pub fn new(match_pattern: impl Into<String>, profile_name: impl Into<String>) -> Self {
        Self {
            match_pattern: match_pattern.into(),
            profile_name: profile_name.into(),
        }
    }

    /// Case-sensitive substring containment, no globbing.
    pub fn matches(&self, target_name: &str) -> bool {
        target_name.contains(&self.match_pattern)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawProfileRule {
    #[serde(default, rename = "match", deserialize_with = "literal_text")]
    pub pattern: String,
    #[serde(default, deserialize_with = "literal_text")]
    pub profile: String,
}

/// Accept only scalars whose text reaches us unchanged: strings, booleans and
/// null (read as empty). Numbers are refused: their text is gone by the time
/// they get here (`007` arrives as `7`).
fn literal_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LiteralTextVisitor)
}

struct LiteralTextVisitor;

impl<'de> Visitor<'de> for LiteralTextVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string (quote numeric values, e.g. \"007\")")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(value)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(String::new())
    }
}

impl From<RawProfileRule> for ProfileRule {
    fn from(raw: RawProfileRule) -> Self {
        Self::new(raw.pattern, raw.profile)
    }
}

/// How chatty the wrapper is on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Silent,
    Info,
    Debug,
}

impl Verbosity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Silent => "silent",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }

    pub fn is_silent(&self) -> bool {
        *self == Verbosity::Silent
    }

    /// Levels at or below zero are silent; two and above are debug.
    fn from_level(level: i64) -> Self {
        match level {
            i64::MIN..=0 => Verbosity::Silent,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if let Ok(level) = name.parse::<i64>() {
            return Some(Self::from_level(level));
        }
        match name.as_str() {
            "silent" => Some(Verbosity::Silent),
            "info" | "informational" => Some(Verbosity::Info),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Verbosity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(VerbosityVisitor)
    }
}

struct VerbosityVisitor;

impl<'de> Visitor<'de> for VerbosityVisitor {
    type Value = Verbosity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer level, `silent`, `info` or `debug`")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Verbosity::from_level(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Verbosity::from_level(i64::try_from(value).unwrap_or(i64::MAX)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Verbosity::from_name(value).ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(if value {
            Verbosity::Info
        } else {
            Verbosity::Silent
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Verbosity::Silent)
    }
}
