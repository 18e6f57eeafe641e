use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

/// How far an episode advances on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStep {
    /// Fixed increment per tick, scaled by the episode speed. The tick's delta time is
    /// ignored, so episode length depends on the tick rate.
    PerTick(f32),
    /// Increment per second of delta time, scaled by the episode speed.
    PerSecond(f32),
}

impl ProgressStep {
    pub fn advance(self, delta_time: f32, speed: f32) -> f32 {
        match self {
            ProgressStep::PerTick(step) => step * speed,
            ProgressStep::PerSecond(rate) => rate * speed * delta_time,
        }
    }

    fn value(self) -> f32 {
        match self {
            ProgressStep::PerTick(v) | ProgressStep::PerSecond(v) => v,
        }
    }
}

impl Default for ProgressStep {
    fn default() -> Self {
        ProgressStep::PerTick(0.01)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterpolationSettings {
    pub step: ProgressStep,
    /// Speed the controlled object passes when it starts an episode.
    pub speed: f32,
    pub normalize_rotation: bool,
}

impl Default for InterpolationSettings {
    fn default() -> Self {
        Self {
            step: ProgressStep::default(),
            speed: 1.0,
            normalize_rotation: false,
        }
    }
}

/// Which captured keyframe an episode ends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Playback {
    /// From the second captured keyframe back to the first.
    #[default]
    Rewind,
    /// From the first captured keyframe to the second.
    Forward,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Degrees added or removed per tick while an angle control is held.
    pub angle_step: f32,
    /// Distance travelled per tick while a move control is held.
    pub move_step: f32,
    pub playback: Playback,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            angle_step: 5.0,
            move_step: 1.0,
            playback: Playback::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub interpolation: InterpolationSettings,
    pub controls: ControlSettings,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json_str(&text)?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("interpolation.step", self.interpolation.step.value()),
            ("interpolation.speed", self.interpolation.speed),
            ("controls.angle_step", self.controls.angle_step),
            ("controls.move_step", self.controls.move_step),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_document_uses_defaults() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.interpolation.step, ProgressStep::PerTick(0.01));
        assert_eq!(settings.controls.playback, Playback::Rewind);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let settings = Settings::from_json_str(
            r#"{
                "interpolation": { "step": { "per_second": 0.5 }, "normalize_rotation": true },
                "controls": { "playback": "forward" }
            }"#,
        )
        .unwrap();
        assert_eq!(settings.interpolation.step, ProgressStep::PerSecond(0.5));
        assert!(settings.interpolation.normalize_rotation);
        assert_abs_diff_eq!(settings.interpolation.speed, 1.0);
        assert_eq!(settings.controls.playback, Playback::Forward);
        assert_abs_diff_eq!(settings.controls.angle_step, 5.0);
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = Settings::from_json_str(r#"{ "interpolation": { "speed": 0.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "interpolation.speed",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json_str("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn step_advance() {
        assert_abs_diff_eq!(ProgressStep::PerTick(0.01).advance(123.0, 2.0), 0.02);
        assert_abs_diff_eq!(ProgressStep::PerSecond(0.5).advance(0.1, 2.0), 0.1);
    }
}
