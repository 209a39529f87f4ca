//! Information panel content
//!
//! Formats the facts of a body for display, either in real units (km) or
//! in simplified units (Earth diameters and AU).

use crate::catalog::{self, CelestialBody, Highlight, AU_KM, EARTH_CIRCUMFERENCE_KM, EARTH_DIAMETER_KM};
use crate::scale::RenderScale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Units used by the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    /// Kilometres, 1:1
    #[default]
    Real,
    /// Earth diameters and astronomical units
    Simple,
}

impl DataMode {
    pub fn label(&self) -> &'static str {
        match self {
            DataMode::Real => "Real 1:1 (km/AU)",
            DataMode::Simple => "Simple (Earth diameters / AU)",
        }
    }
}

/// Group the digits of `n` in threes with commas
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Number of trips around Earth's equator that cover `km`, at least one
pub fn laps(km: f64) -> u64 {
    (km / EARTH_CIRCUMFERENCE_KM as f64).round().max(1.0) as u64
}

/// Diameter expressed in Earth diameters
pub fn diameter_in_earths(radius_km: f32) -> f32 {
    radius_km * 2.0 / EARTH_DIAMETER_KM
}

/// Size line for the panel
pub fn size_display(radius_km: f32, mode: DataMode) -> String {
    match mode {
        DataMode::Real => format!(
            "{} km (diameter)",
            format_thousands((radius_km * 2.0).round() as u64)
        ),
        DataMode::Simple => format!("{:.2} D⊕ (diameter)", diameter_in_earths(radius_km)),
    }
}

/// Distance-to-the-Sun line for the panel
pub fn distance_display(au: f32, mode: DataMode) -> String {
    match mode {
        DataMode::Real => format!("{} km", format_thousands(au_to_km(au).round() as u64)),
        DataMode::Simple => format!("{au:.2} AU"),
    }
}

fn au_to_km(au: f32) -> f64 {
    au as f64 * AU_KM as f64
}

/// Everything the information panel shows for one body
#[derive(Clone, Debug, Serialize)]
pub struct InfoPanel {
    pub name: &'static str,
    pub classification: &'static str,
    pub size: String,
    /// Mean distance to the Sun, for bodies orbiting it
    pub distance: Option<String>,
    /// Earth laps covering that distance
    pub laps: Option<u64>,
    pub day: String,
    pub temperature: &'static str,
    pub life: &'static str,
    pub formation: &'static str,
    pub fact: &'static str,
    pub highlights: &'static [Highlight],
}

impl InfoPanel {
    pub fn new(body: &CelestialBody, mode: DataMode) -> Self {
        let facts = body.facts();
        let orbit = body.orbit_au();

        Self {
            name: facts.name,
            classification: facts.classification,
            size: size_display(facts.radius_km, mode),
            distance: orbit.map(|au| distance_display(au, mode)),
            laps: orbit.map(|au| laps(au_to_km(au))),
            day: day_display(facts.day_hours),
            temperature: facts.temperature,
            life: facts.life,
            formation: facts.formation,
            fact: facts.fact,
            highlights: facts.highlights,
        }
    }
}

fn day_display(hours: f32) -> String {
    let retrograde = if hours < 0.0 { " (retrograde)" } else { "" };
    let hours = hours.abs();
    if hours >= 48.0 {
        format!("{:.1} Earth days{}", hours / 24.0, retrograde)
    } else {
        format!("{hours:.1} h{retrograde}")
    }
}

impl fmt::Display for InfoPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.classification)?;
        writeln!(f, "  Size:        {}", self.size)?;
        if let Some(distance) = &self.distance {
            writeln!(f, "  Distance:    {distance}")?;
        }
        if let Some(laps) = self.laps {
            writeln!(f, "               {} laps around the Earth", format_thousands(laps))?;
        }
        writeln!(f, "  Day:         {}", self.day)?;
        writeln!(f, "  Temperature: {}", self.temperature)?;
        writeln!(f, "  Life:        {}", self.life)?;
        writeln!(f, "  Formation:   {}", self.formation)?;
        writeln!(f, "  Fact:        {}", self.fact)?;
        if !self.highlights.is_empty() {
            writeln!(f, "  Important data:")?;
            for row in self.highlights {
                writeln!(f, "    {}: {}", row.label, row.value)?;
            }
        }
        Ok(())
    }
}

/// Gap between two neighbouring planets
#[derive(Clone, Debug, Serialize)]
pub struct OrbitGap {
    pub from: &'static str,
    pub to: &'static str,
    pub au: f32,
    pub km: f64,
    /// The same gap in scene units
    pub scene: f32,
}

/// Gaps between consecutive planet orbits at the given scale
pub fn orbit_gaps(scale: &RenderScale) -> Vec<OrbitGap> {
    let planets: Vec<_> = catalog::planets().collect();
    planets
        .windows(2)
        .map(|pair| {
            let au = (pair[1].orbit_au - pair[0].orbit_au).abs();
            let km = au_to_km(au);
            OrbitGap {
                from: pair[0].facts.name,
                to: pair[1].facts.name,
                au,
                km,
                scene: (km * scale.dist_factor as f64) as f32,
            }
        })
        .collect()
}

/// Kilometres per scene unit `(sizes, distances)` at the given scale
pub fn km_per_scene_unit(scale: &RenderScale) -> (f64, f64) {
    (
        1.0 / (scale.size_factor as f64 * scale.planet_exaggeration as f64),
        1.0 / scale.dist_factor as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find, EARTH, MOON, SUN};

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12742), "12,742");
        assert_eq!(format_thousands(149_597_870), "149,597,870");
    }

    #[test]
    fn test_laps_never_below_one() {
        assert_eq!(laps(10.0), 1);
        assert_eq!(laps(40_075.0 * 3.0), 3);
    }

    #[test]
    fn test_size_display_modes() {
        assert_eq!(size_display(6371.0, DataMode::Real), "12,742 km (diameter)");
        assert_eq!(size_display(6371.0, DataMode::Simple), "1.00 D⊕ (diameter)");
        assert_eq!(size_display(69_911.0, DataMode::Simple), "10.97 D⊕ (diameter)");
    }

    #[test]
    fn test_distance_display_modes() {
        assert_eq!(distance_display(5.2, DataMode::Simple), "5.20 AU");
        assert!(distance_display(1.0, DataMode::Real).starts_with("149,597,8"));
    }

    #[test]
    fn test_panel_for_planet_and_sun() {
        let earth = InfoPanel::new(find(EARTH).unwrap(), DataMode::Real);
        assert!(earth.distance.is_some());
        assert_eq!(earth.laps, Some(3733));
        assert!(earth.to_string().contains("Important data"));

        let sun = InfoPanel::new(find(SUN).unwrap(), DataMode::Simple);
        assert!(sun.distance.is_none());
        assert!(sun.laps.is_none());

        let moon = InfoPanel::new(find(MOON).unwrap(), DataMode::Real);
        assert!(!moon.to_string().contains("Important data"));
    }

    #[test]
    fn test_retrograde_day() {
        assert_eq!(day_display(-17.24), "17.2 h (retrograde)");
        assert_eq!(day_display(23.93), "23.9 h");
    }

    #[test]
    fn test_orbit_gaps() {
        let gaps = orbit_gaps(&RenderScale::default());
        assert_eq!(gaps.len(), 7);
        assert_eq!(gaps[0].from, "Mercury");
        assert_eq!(gaps[6].to, "Neptune");
        assert!(gaps.iter().all(|g| g.au > 0.0 && g.scene > 0.0));
    }
}
