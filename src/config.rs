//! Game tunables
//!
//! Read once at startup. Restart rebuilds the game from the same config.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Invalid configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("speed must be positive, got {0}")]
    Speed(f32),
    #[error("spawn_chance must be within [0, 1], got {0}")]
    SpawnChance(f32),
    #[error("tick_hz must be non-zero")]
    TickRate,
    #[error("{name} size must be positive, got {width}x{height}")]
    CarSize {
        name: &'static str,
        width: f32,
        height: f32,
    },
    #[error("music_volume must be within [0, 1], got {0}")]
    MusicVolume(f32),
}

/// Gameplay and audio settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Road/traffic scroll per tick and player step per key press
    pub speed: f32,
    /// Probability of spawning a traffic car on any tick
    pub spawn_chance: f32,
    /// Simulation ticks per second
    pub tick_hz: u32,
    pub player_size: Vec2,
    pub traffic_size: Vec2,
    pub music_volume: f32,
    pub music_src: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            spawn_chance: DEFAULT_SPAWN_CHANCE,
            tick_hz: TICK_HZ,
            player_size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            traffic_size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            music_volume: DEFAULT_MUSIC_VOLUME,
            music_src: "Music/background_music.mp3".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed > 0.0) {
            return Err(ConfigError::Speed(self.speed));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::SpawnChance(self.spawn_chance));
        }
        if self.tick_hz == 0 {
            return Err(ConfigError::TickRate);
        }
        for (name, size) in [("player", self.player_size), ("traffic", self.traffic_size)] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(ConfigError::CarSize {
                    name,
                    width: size.x,
                    height: size.y,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ConfigError::MusicVolume(self.music_volume));
        }
        Ok(())
    }

    /// Milliseconds per simulation tick
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / self.tick_hz as f64
    }

    /// Element holding an inline JSON config
    #[cfg(target_arch = "wasm32")]
    const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Load config from an inline `<script type="application/json">` (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded game config");
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring game config: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default game config");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.speed, 8.0);
        assert_eq!(config.music_volume, 0.2);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "speed": 12.0 }"#).unwrap();
        assert_eq!(config.speed, 12.0);
        assert_eq!(config.spawn_chance, DEFAULT_SPAWN_CHANCE);
        assert_eq!(config.tick_hz, 60);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "spawn_chance": 1.5 }"#),
            Err(ConfigError::SpawnChance(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "speed": 0.0 }"#),
            Err(ConfigError::Speed(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "tick_hz": 0 }"#),
            Err(ConfigError::TickRate)
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "traffic_size": [0.0, 120.0] }"#),
            Err(ConfigError::CarSize { name: "traffic", .. })
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_tick_interval() {
        let config = GameConfig::default();
        assert!((config.tick_interval_ms() - 1000.0 / 60.0).abs() < 1e-9);
    }
}
