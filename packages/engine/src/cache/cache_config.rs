//! Cache specs
//!
//! A `CacheSpec` is written as comma separated `key=value` pairs, for example
//! `maximumSize=1000,expireAfterAccess=10m`. Durations take a `ms`, `s`, `m`,
//! `h` or `d` suffix.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::config::ConfigurationError;

/// Cache sizing and expiry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct CacheSpec {
    /// Maximum number of entries; `None` is unbounded, zero disables storage
    pub maximum_size: Option<usize>,
    /// Entries expire this long after insertion
    pub expire_after_write: Option<Duration>,
    /// Entries expire this long after their last read
    pub expire_after_access: Option<Duration>,
}

impl CacheSpec {
    #[must_use]
    pub fn bounded(maximum_size: usize) -> Self {
        Self {
            maximum_size: Some(maximum_size),
            ..Self::default()
        }
    }

    /// Spec that never stores anything
    #[must_use]
    pub fn disabled() -> Self {
        Self::bounded(0)
    }

    #[must_use]
    pub fn expire_after_write(mut self, ttl: Duration) -> Self {
        self.expire_after_write = Some(ttl);
        self
    }

    #[must_use]
    pub fn expire_after_access(mut self, ttl: Duration) -> Self {
        self.expire_after_access = Some(ttl);
        self
    }

    #[inline]
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.maximum_size == Some(0)
    }
}

fn parse_duration(value: &str, key: &str) -> Result<Duration, ConfigurationError> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split);
    let amount: u64 = amount
        .parse()
        .map_err(|_| ConfigurationError::InvalidCacheSpec(format!("{key} needs a number: '{value}'")))?;

    let duration = match unit {
        "ms" => Duration::from_millis(amount),
        "s" => Duration::from_secs(amount),
        "m" => Duration::from_secs(amount * 60),
        "h" => Duration::from_secs(amount * 3600),
        "d" => Duration::from_secs(amount * 86_400),
        other => {
            return Err(ConfigurationError::InvalidCacheSpec(format!(
                "{key} has unknown time unit '{other}'"
            )));
        }
    };
    Ok(duration)
}

impl FromStr for CacheSpec {
    type Err = ConfigurationError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut parsed = CacheSpec::default();

        for pair in spec.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                ConfigurationError::InvalidCacheSpec(format!("expected key=value, got '{pair}'"))
            })?;
            let key = key.trim();

            match key {
                "maximumSize" => {
                    let size = value.trim().parse().map_err(|_| {
                        ConfigurationError::InvalidCacheSpec(format!("maximumSize needs a number: '{value}'"))
                    })?;
                    parsed.maximum_size = Some(size);
                }
                "expireAfterWrite" => parsed.expire_after_write = Some(parse_duration(value, key)?),
                "expireAfterAccess" => parsed.expire_after_access = Some(parse_duration(value, key)?),
                // accepted for compatibility; storage is lock-free
                "initialCapacity" | "concurrencyLevel" => {}
                other => {
                    return Err(ConfigurationError::InvalidCacheSpec(format!("unknown key '{other}'")));
                }
            }
        }

        Ok(parsed)
    }
}

impl TryFrom<String> for CacheSpec {
    type Error = ConfigurationError;

    fn try_from(spec: String) -> Result<Self, Self::Error> {
        spec.parse()
    }
}

impl fmt::Display for CacheSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(size) = self.maximum_size {
            parts.push(format!("maximumSize={size}"));
        }
        if let Some(ttl) = self.expire_after_write {
            parts.push(format!("expireAfterWrite={}ms", ttl.as_millis()));
        }
        if let Some(ttl) = self.expire_after_access {
            parts.push(format!("expireAfterAccess={}ms", ttl.as_millis()));
        }
        f.write_str(&parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_guava_style_spec() {
        let spec: CacheSpec = "maximumSize=500, expireAfterWrite=10m,expireAfterAccess=250ms"
            .parse()
            .expect("valid spec");
        assert_eq!(spec.maximum_size, Some(500));
        assert_eq!(spec.expire_after_write, Some(Duration::from_secs(600)));
        assert_eq!(spec.expire_after_access, Some(Duration::from_millis(250)));
    }

    #[test]
    fn empty_spec_is_unbounded() {
        let spec: CacheSpec = "".parse().expect("valid spec");
        assert_eq!(spec, CacheSpec::default());
        assert!(!spec.is_disabled());
    }

    #[test]
    fn display_parses_back() {
        let spec = CacheSpec::bounded(3).expire_after_write(Duration::from_secs(2));
        let reparsed: CacheSpec = spec.to_string().parse().expect("valid spec");
        assert_eq!(reparsed, spec);
    }

    #[test]
    fn rejects_unknown_keys_and_units() {
        assert!("maximumWeight=5".parse::<CacheSpec>().is_err());
        assert!("expireAfterWrite=5w".parse::<CacheSpec>().is_err());
        assert!("maximumSize".parse::<CacheSpec>().is_err());
        assert!("maximumSize=-1".parse::<CacheSpec>().is_err());
    }
}
