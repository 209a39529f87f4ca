//! Render scales
//!
//! Real sizes and distances differ by several orders of magnitude, so the
//! scene uses one of a few presets that map kilometres and astronomical
//! units to scene units. Radii are measured against the Sun's radius,
//! distances against "sun radii per AU".

use crate::catalog::{AU_KM, SUN};
use serde::{Deserialize, Serialize};

/// Real radius of the Sun in kilometres, the reference for size scaling
const SUN_RADIUS_KM: f32 = 696_340.0;

/// Minimum scene distance for a planet's orbit
const MIN_ORBIT_DISTANCE: f32 = 5.0;
/// Minimum scene distance for a km-measured separation (the Moon's orbit)
const MIN_KM_DISTANCE: f32 = 0.6;

/// Named render scale preset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalePreset {
    /// Compact layout for teaching
    #[default]
    Didactic,
    /// True distance ratios (very spread out)
    Real,
    /// Compromise between the two
    Visual,
}

impl ScalePreset {
    /// Get all presets
    pub fn all() -> &'static [ScalePreset] {
        &[ScalePreset::Didactic, ScalePreset::Real, ScalePreset::Visual]
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            ScalePreset::Didactic => "Didactic (compact)",
            ScalePreset::Real => "Real (very uneven)",
            ScalePreset::Visual => "Visual (realistic)",
        }
    }

    /// Build the scale configuration for this preset
    pub fn build(&self) -> RenderScale {
        match self {
            ScalePreset::Didactic => RenderScale::new(*self, 3.0, 4.0, 1.2, 0.18),
            ScalePreset::Real => RenderScale::new(*self, 3.0, 30.0, 1.0, 0.2),
            ScalePreset::Visual => RenderScale::new(*self, 3.2, 20.0, 1.4, 0.16),
        }
    }
}

/// Conversion factors between real units and scene units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderScale {
    pub preset: ScalePreset,
    /// Scene radius of the Sun
    pub sun_radius: f32,
    /// How many sun radii one AU spans in the scene
    pub au_in_sun_radii: f32,
    /// Extra multiplier applied to planet sizes
    pub planet_exaggeration: f32,
    /// Smallest radius any body is drawn with
    pub min_size: f32,
    /// km -> scene units for sizes
    pub size_factor: f32,
    /// km -> scene units for distances
    pub dist_factor: f32,
}

impl RenderScale {
    fn new(
        preset: ScalePreset,
        sun_radius: f32,
        au_in_sun_radii: f32,
        planet_exaggeration: f32,
        min_size: f32,
    ) -> Self {
        Self {
            preset,
            sun_radius,
            au_in_sun_radii,
            planet_exaggeration,
            min_size,
            size_factor: sun_radius / SUN_RADIUS_KM,
            dist_factor: (sun_radius * au_in_sun_radii) / AU_KM,
        }
    }

    /// Scene radius for a body of the given real radius
    pub fn km_to_scene_radius(&self, km: f32) -> f32 {
        (km * self.size_factor * self.planet_exaggeration).max(self.min_size)
    }

    /// Scene orbit radius for a distance in AU
    pub fn au_to_scene_distance(&self, au: f32) -> f32 {
        (au * AU_KM * self.dist_factor).max(MIN_ORBIT_DISTANCE)
    }

    /// Scene separation for a real distance in kilometres
    pub fn km_to_scene_distance(&self, km: f32) -> f32 {
        (km * self.dist_factor).max(MIN_KM_DISTANCE)
    }

    /// Visual radius of a named body at this scale
    ///
    /// The Sun is drawn at the preset's sun radius rather than through
    /// the planet exaggeration; satellites keep their real size ratio to
    /// their parent.
    pub fn body_radius(&self, body: &crate::catalog::CelestialBody) -> f32 {
        use crate::catalog::CelestialBody;

        match body {
            CelestialBody::Star(_) => self.sun_radius,
            CelestialBody::Planet(p) => self.km_to_scene_radius(p.facts.radius_km),
            CelestialBody::Moon(m) => {
                let parent_km = crate::catalog::find(m.parent)
                    .map(|b| b.facts().radius_km)
                    .unwrap_or(m.facts.radius_km);
                self.km_to_scene_radius(parent_km) * (m.facts.radius_km / parent_km)
            }
        }
    }

    /// Visual radius by name; unknown names get a generic size of 2
    pub fn radius_of(&self, name: &str) -> f32 {
        if name == SUN {
            return self.sun_radius;
        }
        crate::catalog::find(name)
            .map(|b| self.body_radius(b))
            .unwrap_or(2.0)
    }
}

impl Default for RenderScale {
    fn default() -> Self {
        ScalePreset::default().build()
    }
}
