//! Session configuration
//!
//! Construction-time settings: the level and field dimensions come from the
//! host (CLI or launcher), not from gameplay.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for a single game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Difficulty level (>= 1); scales initial and recurring enemy counts
    pub level: u32,
    /// Field width in display units
    pub width: u32,
    /// Field height in display units
    pub height: u32,
    /// RNG seed; None picks one from the system clock
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: 1,
            width: 800,
            height: 500,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json).map_err(std::io::Error::other)?;
        config.validate().map_err(std::io::Error::other)?;
        Ok(config)
    }

    /// Check invariants: level >= 1, positive field dimensions
    pub fn validate(&self) -> Result<(), String> {
        if self.level < 1 {
            return Err("level must be at least 1".into());
        }
        if self.width == 0 || self.height == 0 {
            return Err("field dimensions must be positive".into());
        }
        Ok(())
    }

    /// Effective seed, falling back to the system clock
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_level_rejected() {
        let config = GameConfig {
            level: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_dimensions_rejected() {
        let config = GameConfig {
            width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn roundtrips_through_json() {
        let config = GameConfig {
            level: 3,
            width: 1024,
            height: 768,
            seed: Some(42),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.level, 3);
        assert_eq!(back.seed, Some(42));
    }
}
