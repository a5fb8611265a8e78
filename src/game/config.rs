//! Round settings

use crate::solver::MIN_WORD_LEN;
use std::time::Duration;

/// Default round length: three minutes
pub const DEFAULT_DURATION_SECS: u64 = 180;

/// Settings for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub duration: Duration,
    pub min_word_len: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn with_duration_secs(secs: u64) -> Self {
        Self {
            duration: Duration::from_secs(secs),
            min_word_len: MIN_WORD_LEN,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_duration_secs(DEFAULT_DURATION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_minutes() {
        let config = GameConfig::default();
        assert_eq!(config.duration, Duration::from_secs(180));
        assert_eq!(config.min_word_len, 3);
    }
}
