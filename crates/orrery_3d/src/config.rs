//! Orrery configuration
//!
//! Everything tunable lives in `orrery.toml`, split into four sections.
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock behaviour.
//!
//! ```toml
//! [scene]
//! scale = "visual"
//!
//! [motion]
//! speed = 1.5
//! planets_moving = true
//!
//! [camera]
//! fly_duration = 0.8
//! ```

use crate::error::{Result, SceneError};
use crate::scale::ScalePreset;
use crate::texture::DEFAULT_MAX_TEXTURE_SIZE;
use orrery_core::{Easing, Vec3};
use serde::{Deserialize, Serialize};

/// File name looked up by hosts
pub const CONFIG_FILE: &str = "orrery.toml";

/// Root configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct OrreryConfig {
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub textures: TextureConfig,
}

impl OrreryConfig {
    /// Parse and validate a configuration document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: OrreryConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the scene or camera cannot work with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(SceneError::InvalidConfig(msg.to_string()));
        let camera = &self.camera;

        if !camera.initial_position.is_finite() {
            return invalid("camera.initial_position must be finite");
        }
        for (name, f) in [
            ("camera.fly_duration", camera.fly_duration),
            ("camera.radius_multiplier", camera.radius_multiplier),
            ("camera.min_fly_distance", camera.min_fly_distance),
            ("camera.max_fly_distance", camera.max_fly_distance),
            ("camera.min_orbit_distance", camera.min_orbit_distance),
            ("camera.max_orbit_distance", camera.max_orbit_distance),
        ] {
            if !(f.is_finite() && f > 0.0) {
                return invalid(&format!("{name} must be positive and finite"));
            }
        }
        if camera.min_fly_distance > camera.max_fly_distance {
            return invalid("camera.min_fly_distance exceeds camera.max_fly_distance");
        }
        if camera.min_orbit_distance > camera.max_orbit_distance {
            return invalid("camera.min_orbit_distance exceeds camera.max_orbit_distance");
        }
        for (name, f) in [
            ("camera.damping", camera.damping),
            ("camera.drift_follow", camera.drift_follow),
            ("camera.return_follow", camera.return_follow),
            ("motion.selection_ease", self.motion.selection_ease),
        ] {
            // `contains` is false for NaN
            if !(0.0..=1.0).contains(&f) {
                return invalid(&format!("{name} must be within [0, 1]"));
            }
        }
        for (name, f) in [
            ("motion.speed", self.motion.speed),
            ("motion.sun_speed", self.motion.sun_speed),
            ("motion.sway_amplitude", self.motion.sway_amplitude),
            ("motion.sway_frequency", self.motion.sway_frequency),
            ("motion.spin_rate", self.motion.spin_rate),
            ("motion.selection_scale", self.motion.selection_scale),
            ("scene.moon_orbit_radii", self.scene.moon_orbit_radii),
        ] {
            if !f.is_finite() {
                return invalid(&format!("{name} must be finite"));
            }
        }
        if self.motion.speed < 0.0 {
            return invalid("motion.speed must not be negative");
        }
        if self.textures.max_size == 0 {
            return invalid("textures.max_size must be positive");
        }
        Ok(())
    }
}

/// Scene layout
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SceneConfig {
    /// Render scale preset
    #[serde(default)]
    pub scale: ScalePreset,
    /// Place the Moon at its real (scaled) distance instead of a fixed
    /// multiple of Earth's radius
    #[serde(default = "default_true")]
    pub real_moon_distance: bool,
    /// Earth radii used for the Moon's orbit when not at real distance
    #[serde(default = "default_moon_orbit_radii")]
    pub moon_orbit_radii: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: ScalePreset::default(),
            real_moon_distance: true,
            moon_orbit_radii: default_moon_orbit_radii(),
        }
    }
}

/// Orbital motion and solar-frame drift
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MotionConfig {
    /// Simulation speed multiplier for orbits
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Whether the whole system drifts through space
    #[serde(default)]
    pub moving: bool,
    /// Whether planets advance along their orbits
    #[serde(default)]
    pub planets_moving: bool,
    /// Drift speed of the solar frame along -Z
    #[serde(default = "default_sun_speed")]
    pub sun_speed: f32,
    /// Side-to-side sway amplitude of the drifting frame
    #[serde(default = "default_sway_amplitude")]
    pub sway_amplitude: f32,
    /// Sway frequency in radians per second
    #[serde(default = "default_sway_frequency")]
    pub sway_frequency: f32,
    /// Axial spin rate in radians per second
    #[serde(default = "default_spin_rate")]
    pub spin_rate: f32,
    /// Display scale of the selected body
    #[serde(default = "default_selection_scale")]
    pub selection_scale: f32,
    /// Per-frame easing factor toward the selection scale
    #[serde(default = "default_selection_ease")]
    pub selection_ease: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            moving: false,
            planets_moving: false,
            sun_speed: default_sun_speed(),
            sway_amplitude: default_sway_amplitude(),
            sway_frequency: default_sway_frequency(),
            spin_rate: default_spin_rate(),
            selection_scale: default_selection_scale(),
            selection_ease: default_selection_ease(),
        }
    }
}

/// Camera session and orbit controller tuning
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CameraConfig {
    /// Camera position at startup
    #[serde(default = "default_initial_position")]
    pub initial_position: Vec3,
    /// Whether the session starts with auto-follow on
    #[serde(default = "default_true")]
    pub auto_follow: bool,
    /// Duration of a fly-to transition in seconds
    #[serde(default = "default_fly_duration")]
    pub fly_duration: f32,
    /// Easing curve of a fly-to transition
    #[serde(default)]
    pub fly_easing: Easing,
    /// Framing distance in multiples of the body radius
    #[serde(default = "default_radius_multiplier")]
    pub radius_multiplier: f32,
    #[serde(default = "default_min_fly_distance")]
    pub min_fly_distance: f32,
    #[serde(default = "default_max_fly_distance")]
    pub max_fly_distance: f32,
    /// Auto-follow factor while the solar frame drifts
    #[serde(default = "default_drift_follow")]
    pub drift_follow: f32,
    /// Auto-follow factor while the solar frame rests
    #[serde(default = "default_return_follow")]
    pub return_follow: f32,
    /// Orbit controller damping factor
    #[serde(default = "default_damping")]
    pub damping: f32,
    #[serde(default = "default_min_orbit_distance")]
    pub min_orbit_distance: f32,
    #[serde(default = "default_max_orbit_distance")]
    pub max_orbit_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_position: default_initial_position(),
            auto_follow: true,
            fly_duration: default_fly_duration(),
            fly_easing: Easing::default(),
            radius_multiplier: default_radius_multiplier(),
            min_fly_distance: default_min_fly_distance(),
            max_fly_distance: default_max_fly_distance(),
            drift_follow: default_drift_follow(),
            return_follow: default_return_follow(),
            damping: default_damping(),
            min_orbit_distance: default_min_orbit_distance(),
            max_orbit_distance: default_max_orbit_distance(),
        }
    }
}

/// Texture lookup
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TextureConfig {
    /// Directory candidates are resolved against
    #[serde(default = "default_asset_root")]
    pub asset_root: String,
    /// Largest texture dimension before downscaling
    #[serde(default = "default_max_size")]
    pub max_size: u32,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            asset_root: default_asset_root(),
            max_size: default_max_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_moon_orbit_radii() -> f32 {
    8.0
}

fn default_speed() -> f32 {
    3.0
}

fn default_sun_speed() -> f32 {
    5.0
}

fn default_sway_amplitude() -> f32 {
    2.0
}

fn default_sway_frequency() -> f32 {
    0.6
}

fn default_spin_rate() -> f32 {
    0.05
}

fn default_selection_scale() -> f32 {
    1.18
}

fn default_selection_ease() -> f32 {
    0.15
}

fn default_initial_position() -> Vec3 {
    Vec3::new(0.0, 12.0, 42.0)
}

fn default_fly_duration() -> f32 {
    1.1
}

fn default_radius_multiplier() -> f32 {
    4.0
}

fn default_min_fly_distance() -> f32 {
    2.5
}

fn default_max_fly_distance() -> f32 {
    80.0
}

fn default_drift_follow() -> f32 {
    0.08
}

fn default_return_follow() -> f32 {
    0.12
}

fn default_damping() -> f32 {
    0.08
}

fn default_min_orbit_distance() -> f32 {
    2.5
}

fn default_max_orbit_distance() -> f32 {
    3000.0
}

fn default_asset_root() -> String {
    "public".to_string()
}

fn default_max_size() -> u32 {
    DEFAULT_MAX_TEXTURE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = OrreryConfig::from_toml_str("").unwrap();
        assert_eq!(config, OrreryConfig::default());
        assert_eq!(config.camera.fly_duration, 1.1);
        assert_eq!(config.camera.drift_follow, 0.08);
        assert_eq!(config.camera.return_follow, 0.12);
        assert_eq!(config.motion.speed, 3.0);
        assert!(config.scene.real_moon_distance);
        assert!(!config.motion.moving);
    }

    #[test]
    fn test_partial_sections() {
        let config = OrreryConfig::from_toml_str(
            r#"
            [scene]
            scale = "real"

            [camera]
            fly_duration = 0.5
            fly_easing = "smoothstep"
            "#,
        )
        .unwrap();
        assert_eq!(config.scene.scale, ScalePreset::Real);
        assert_eq!(config.camera.fly_duration, 0.5);
        assert_eq!(config.camera.fly_easing, Easing::Smoothstep);
        assert_eq!(config.camera.max_orbit_distance, 3000.0);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = OrreryConfig::default();
        config.motion.planets_moving = true;
        let text = config.to_toml().unwrap();
        assert_eq!(OrreryConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            OrreryConfig::from_toml_str("[camera]\nfly_duration = 0.0"),
            Err(SceneError::InvalidConfig(_))
        ));
        assert!(matches!(
            OrreryConfig::from_toml_str("[camera]\ndrift_follow = 1.5"),
            Err(SceneError::InvalidConfig(_))
        ));
        assert!(matches!(
            OrreryConfig::from_toml_str("[scene]\nscale = \"huge\""),
            Err(SceneError::ConfigParse(_))
        ));
    }

    fn rejected(text: &str) -> bool {
        matches!(OrreryConfig::from_toml_str(text), Err(SceneError::InvalidConfig(_)))
    }

    #[test]
    fn test_rejects_non_finite_camera_values() {
        for field in [
            "fly_duration",
            "radius_multiplier",
            "min_fly_distance",
            "max_fly_distance",
            "min_orbit_distance",
            "max_orbit_distance",
            "damping",
            "drift_follow",
            "return_follow",
        ] {
            assert!(rejected(&format!("[camera]\n{field} = nan")), "{field} = nan");
            assert!(rejected(&format!("[camera]\n{field} = inf")), "{field} = inf");
        }
        assert!(rejected("[camera]\ninitial_position = { x = nan, y = 0.0, z = 0.0 }"));
        assert!(rejected("[camera]\ninitial_position = { x = 0.0, y = inf, z = 0.0 }"));
    }

    #[test]
    fn test_rejects_non_positive_framing() {
        assert!(rejected("[camera]\nradius_multiplier = 0.0"));
        assert!(rejected("[camera]\nradius_multiplier = -4.0"));
        assert!(rejected("[camera]\nmin_fly_distance = -1.0"));
        assert!(rejected("[camera]\nmin_fly_distance = 90.0"));
    }

    #[test]
    fn test_rejects_non_finite_motion_values() {
        assert!(rejected("[motion]\nspeed = nan"));
        assert!(rejected("[motion]\nsun_speed = inf"));
        assert!(rejected("[motion]\nselection_ease = nan"));
        assert!(rejected("[scene]\nmoon_orbit_radii = nan"));
    }
}
