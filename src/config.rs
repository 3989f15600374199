//! Movement tuning loaded from JSON.

use crate::constants::*;
use crate::easing::EasingKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse movement config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Movement animation and input settings.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovementConfig {
    /// Length of a one-tile move animation (clamped to 100..=10000ms)
    pub move_duration_ms: f32,
    pub easing: EasingKind,
    /// Minimum swipe length in pixels
    pub swipe_min_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_duration_ms: MOVE_ANIMATION_DURATION_MS,
            easing: EasingKind::default(),
            swipe_min_distance: SWIPE_MIN_DISTANCE,
        }
    }
}

impl MovementConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = MovementConfig::from_json_str("{}").unwrap();
        assert_eq!(config, MovementConfig::default());
        assert_eq!(config.easing, EasingKind::EaseOutQuart);
    }

    #[test]
    fn test_partial_override() {
        let config =
            MovementConfig::from_json_str(r#"{"moveDurationMs": 320, "easing": "easeOutBounce"}"#).unwrap();
        assert_eq!(config.move_duration_ms, 320.0);
        assert_eq!(config.easing, EasingKind::EaseOutBounce);
        assert_eq!(config.swipe_min_distance, SWIPE_MIN_DISTANCE);
    }

    #[test]
    fn test_oversized_duration_is_clamped_by_controller() {
        use crate::animation::AnimationController;

        let config = MovementConfig::from_json_str(r#"{"moveDurationMs": 50000}"#).unwrap();
        let controller = AnimationController::with_settings(config.move_duration_ms, config.easing);
        assert_eq!(controller.duration_ms(), MAX_ANIMATION_DURATION_MS);
    }

    #[test]
    fn test_unknown_easing_falls_back_to_linear() {
        let config = MovementConfig::from_json_str(r#"{"easing": "jelly"}"#).unwrap();
        assert_eq!(config.easing, EasingKind::Linear);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = MovementConfig::from_json_str("{ moveDurationMs: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = MovementConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
