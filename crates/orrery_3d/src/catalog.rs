//! Static catalog of the bodies in the scene
//!
//! Every body carries a shared [`BodyFacts`] block (what the information
//! panel shows for any body) plus fields that only make sense for its
//! kind: orbital elements for planets, a parent and orbit radius for the
//! Moon, nothing extra for the Sun.

use crate::error::{Result, SceneError};
use crate::texture::TextureKey;
use orrery_core::Color;
use serde::Serialize;

/// Kilometres per astronomical unit
pub const AU_KM: f32 = 149_597_870.0;
/// Earth's equatorial circumference in kilometres
pub const EARTH_CIRCUMFERENCE_KM: f32 = 40_075.0;
/// Earth's mean diameter in kilometres
pub const EARTH_DIAMETER_KM: f32 = 12_742.0;

/// Name of the star at the centre of the scene
pub const SUN: &str = "Sun";
/// Name of Earth's satellite
pub const MOON: &str = "Moon";
/// Name of the Moon's parent planet
pub const EARTH: &str = "Earth";

/// Discriminant of [`CelestialBody`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
}

/// One labelled row in a body's "important data" list
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
}

macro_rules! row {
    ($label:expr, $value:expr) => {
        Highlight {
            label: $label,
            value: $value,
        }
    };
}

/// Display facts common to every body
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BodyFacts {
    /// Unique key, also the scene node name
    pub name: &'static str,
    /// Short classification ("Rocky planet", "Yellow dwarf (G2V)", ...)
    pub classification: &'static str,
    /// Display color as `#rrggbb`
    pub color: &'static str,
    /// Mean radius in kilometres
    pub radius_km: f32,
    /// Sidereal day in hours; negative means retrograde rotation
    pub day_hours: f32,
    pub temperature: &'static str,
    pub life: &'static str,
    pub formation: &'static str,
    pub fact: &'static str,
    /// Surface texture to resolve for this body
    pub texture: TextureKey,
    pub highlights: &'static [Highlight],
}

impl BodyFacts {
    /// Parsed display color, neutral gray if the table entry is malformed
    pub fn display_color(&self) -> Color {
        Color::parse_hex(self.color).unwrap_or(Color::rgb(0.67, 0.67, 0.67))
    }

    /// Whether the body spins clockwise seen from above
    pub fn is_retrograde(&self) -> bool {
        self.day_hours < 0.0
    }
}

/// The central star
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Star {
    pub facts: BodyFacts,
}

/// A planet on a circular orbit around the star
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Planet {
    pub facts: BodyFacts,
    /// Orbit radius in astronomical units
    pub orbit_au: f32,
    /// Orbital period in Earth years
    pub period_years: f32,
    /// Whether the planet is drawn with a ring
    pub ring: bool,
}

/// A natural satellite on a circular orbit around a planet
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Moon {
    pub facts: BodyFacts,
    /// Name of the planet it orbits
    pub parent: &'static str,
    /// Real orbit radius in kilometres
    pub orbit_km: f32,
    /// Display angular speed in radians per second
    pub angular_speed: f32,
}

/// Any body that can be selected and inspected
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CelestialBody {
    Star(Star),
    Planet(Planet),
    Moon(Moon),
}

impl CelestialBody {
    pub fn facts(&self) -> &BodyFacts {
        match self {
            CelestialBody::Star(s) => &s.facts,
            CelestialBody::Planet(p) => &p.facts,
            CelestialBody::Moon(m) => &m.facts,
        }
    }

    pub fn name(&self) -> &'static str {
        self.facts().name
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            CelestialBody::Star(_) => BodyKind::Star,
            CelestialBody::Planet(_) => BodyKind::Planet,
            CelestialBody::Moon(_) => BodyKind::Moon,
        }
    }

    pub fn as_planet(&self) -> Option<&Planet> {
        match self {
            CelestialBody::Planet(p) => Some(p),
            _ => None,
        }
    }

    /// Mean distance from the star in AU, if the body orbits it directly
    pub fn orbit_au(&self) -> Option<f32> {
        self.as_planet().map(|p| p.orbit_au)
    }
}

/// All bodies: the Sun, the planets in orbital order, then the Moon
pub fn catalog() -> &'static [CelestialBody] {
    &CATALOG
}

/// The planets in orbital order
pub fn planets() -> impl Iterator<Item = &'static Planet> {
    CATALOG.iter().filter_map(CelestialBody::as_planet)
}

/// Look up a body by its exact name
pub fn find(name: &str) -> Option<&'static CelestialBody> {
    CATALOG.iter().find(|b| b.name() == name)
}

/// Look up a body by name ignoring ASCII case
pub fn find_ignore_case(name: &str) -> Option<&'static CelestialBody> {
    CATALOG.iter().find(|b| b.name().eq_ignore_ascii_case(name))
}

/// Like [`find_ignore_case`], failing with [`SceneError::UnknownBody`]
pub fn lookup(name: &str) -> Result<&'static CelestialBody> {
    find_ignore_case(name).ok_or_else(|| SceneError::UnknownBody(name.to_string()))
}

const ACCRETION: &str = "Accretion (~4.5 Ga)";
const UNKNOWN_LIFE: &str = "None known";

static CATALOG: [CelestialBody; 10] = [
    CelestialBody::Star(Star {
        facts: BodyFacts {
            name: SUN,
            classification: "Yellow dwarf (G2V)",
            color: "#ffaa00",
            radius_km: 696_340.0,
            day_hours: 25.0 * 24.0,
            temperature: "~5,500 °C (surface)",
            life: "No, but it makes life on Earth possible",
            formation: "Collapse of a molecular cloud (~4.6 Ga)",
            fact: "Holds more than 99.8% of the Solar System's mass.",
            texture: TextureKey::Sun,
            highlights: &[
                row!("Composition", "~74% H, ~24% He, ~2% (O, C, Fe...)"),
                row!("Core temperature", "~15 million K"),
                row!("Power output", "~3.8 × 10²⁶ W"),
                row!("Light travel time to Earth", "~8 min 20 s"),
            ],
        },
    }),
    CelestialBody::Planet(Planet {
        facts: BodyFacts {
            name: "Mercury",
            classification: "Rocky planet",
            color: "#b5a642",
            radius_km: 2_440.0,
            day_hours: 1_407.6,
            temperature: "~167 °C",
            life: UNKNOWN_LIFE,
            formation: ACCRETION,
            fact: "Its year lasts 88 days and it has almost no atmosphere.",
            texture: TextureKey::Mercury,
            highlights: &[
                row!("Distance to the Sun", "~58 million km (0.39 AU)"),
                row!("Closest approach to Earth", "~77 million km"),
                row!("Minerals", "Silicates, sulfides and metals; traces of graphite"),
            ],
        },
        orbit_au: 0.39,
        period_years: 0.241,
        ring: false,
    }),
    CelestialBody::Planet(Planet {
        facts: BodyFacts {
            name: "Venus",
            classification: "Rocky planet",
            color: "#caa46a",
            radius_km: 6_052.0,
            day_hours: -5_832.5,
            temperature: "~465 °C",
            life: UNKNOWN_LIFE,
            formation: ACCRETION,
            fact: "It spins backwards and its day is longer than its year.",
            texture: TextureKey::Venus,
            highlights: &[
                row!("Distance to the Sun", "~108 million km (0.72 AU)"),
                row!("Closest approach to Earth", "~40 million km"),
                row!("Minerals", "Volcanic basalts, feldspars, pyrite, iron oxides"),
            ],
        },
        orbit_au: 0.72,
        period_years: 0.615,
        ring: false,
    }),
    CelestialBody::Planet(Planet {
        facts: BodyFacts {
            name: EARTH,
            classification: "Rocky planet",
            color: "#2e86de",
            radius_km: 6_371.0,
            day_hours: 23.93,
            temperature: "~15 °C",
            life: "Yes, confirmed",
            formation: "Accretion (~4.54 Ga)",
            fact: "The Moon stabilises the axis and long-term climate.",
            texture: TextureKey::Earth,
            highlights: &[
                row!("Diameter", "12,742 km"),
                row!("Gravity", "9.8 m/s²"),
                row!("Atmosphere", "N₂ and O₂ (supports life)"),
                row!("Satellites", "1 (the Moon)"),
            ],
        },
        orbit_au: 1.0,
        period_years: 1.0,
        ring: false,
    }),
    CelestialBody::Planet(Planet {
        facts: BodyFacts {
            name: "Mars",
            classification: "Rocky planet",
            color: "#b4513c",
            radius_km: 3_389.0,
            day_hours: 24.62,
            temperature: "~−60 °C",
            life: "Not confirmed",
            formation: ACCRETION,
            fact: "Olympus Mons is the largest known volcano.",
            texture: TextureKey::Mars,
            highlights: &[
                row!("Diameter", "6,779 km"),
                row!("Gravity", "3.7 m/s²"),
                row!("Atmosphere", "Thin; ~95% CO₂"),
                row!("Satellites", "2 (Phobos and Deimos)"),
            ],
        },
        orbit_au: 1.52,
        period_years: 1.881,
        ring: false,
    }),
    CelestialBody::Planet(Planet {
        facts: BodyFacts {
            name: "Jupiter",
            classification: "Gas giant",
            color: "#d2b48c",
            radius_km: 69_911.0,
            day_hours: 9.93,
            temperature: "~−110 °C",
            life: UNKNOWN_LIFE,
            formation: "Instability / accretion",
            fact: "Magnetic field ~20,000 times Earth's.",
            texture: TextureKey::Jupiter,
            highlights: &[
                row!("Distance to the Sun", "5.2 AU (~778 million km)"),
                row!("Composition", "~90% H, ~10% He (no solid surface)"),
                row!("Moons", "95 confirmed; Europa may hide a subsurface ocean"),
            ],
        },
        orbit_au: 5.2,
        period_years: 11.86,
        ring: false,
    }),
    CelestialBody::Planet(Planet {
        facts: BodyFacts {
            name: "Saturn",
            classification: "Gas giant",
            color: "#f0e0b6",
            radius_km: 58_232.0,
            day_hours: 10.7,
            temperature: "~−140 °C",
            life: UNKNOWN_LIFE,
            formation: "Instability / accretion",
            fact: "Rings made of ice and rock.",
            texture: TextureKey::Saturn,
            highlights: &[
                row!("Distance to the Sun", "9.5 AU (~1,430 million km)"),
                row!("Rings", "Ice, rock and dust"),
                row!("Moons", "146; Titan has lakes of liquid methane and ethane"),
            ],
        },
        orbit_au: 9.58,
        period_years: 29.46,
        ring: true,
    }),
    CelestialBody::Planet(Planet {
        facts: BodyFacts {
            name: "Uranus",
            classification: "Ice giant",
            color: "#66e0d9",
            radius_km: 25_362.0,
            day_hours: -17.24,
            temperature: "~−195 °C",
            life: UNKNOWN_LIFE,
            formation: "Accretion (cold regions)",
            fact: "It rotates almost on its side (tilt ~98°).",
            texture: TextureKey::Uranus,
            highlights: &[
                row!("Orbital period", "84 years"),
                row!("Atmosphere", "Hydrogen, helium and methane"),
                row!("Winds", "Up to ~900 km/h"),
            ],
        },
        orbit_au: 19.2,
        period_years: 84.01,
        ring: false,
    }),
    CelestialBody::Planet(Planet {
        facts: BodyFacts {
            name: "Neptune",
            classification: "Ice giant",
            color: "#4169e1",
            radius_km: 24_622.0,
            day_hours: 16.11,
            temperature: "~−200 °C",
            life: UNKNOWN_LIFE,
            formation: "Accretion (cold regions)",
            fact: "Winds above 2,000 km/h.",
            texture: TextureKey::Neptune,
            highlights: &[
                row!("Orbital period", "165 years"),
                row!("Atmosphere", "Hydrogen, helium and methane"),
                row!("Magnetic field", "Very strong and misaligned"),
            ],
        },
        orbit_au: 30.05,
        period_years: 164.8,
        ring: false,
    }),
    CelestialBody::Moon(Moon {
        facts: BodyFacts {
            name: MOON,
            classification: "Earth's natural satellite",
            color: "#aaaaaa",
            radius_km: 1_737.0,
            day_hours: 655.7,
            temperature: "~−20 to 120 °C (surface)",
            life: "No",
            formation: "Debris from the Theia impact (~4.51 Ga)",
            fact: "Always shows us the same face (tidal locking).",
            texture: TextureKey::Moon,
            highlights: &[],
        },
        parent: EARTH,
        orbit_km: 384_400.0,
        angular_speed: 1.2,
    }),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sun_eight_planets_and_moon() {
        assert_eq!(catalog().len(), 10);
        assert_eq!(planets().count(), 8);
        assert_eq!(find(SUN).map(|b| b.kind()), Some(BodyKind::Star));
        assert_eq!(find(MOON).map(|b| b.kind()), Some(BodyKind::Moon));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = catalog().iter().map(|b| b.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn test_planets_are_in_orbital_order() {
        let orbits: Vec<f32> = planets().map(|p| p.orbit_au).collect();
        assert!(orbits.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_moon_parent_is_a_planet() {
        let Some(CelestialBody::Moon(moon)) = find(MOON) else {
            panic!("moon missing");
        };
        assert_eq!(find(moon.parent).map(|b| b.kind()), Some(BodyKind::Planet));
    }

    #[test]
    fn test_colors_parse() {
        for body in catalog() {
            assert!(
                Color::parse_hex(body.facts().color).is_ok(),
                "{} has a bad color",
                body.name()
            );
        }
    }

    #[test]
    fn test_retrograde_rotation() {
        assert!(find("Venus").unwrap().facts().is_retrograde());
        assert!(find("Uranus").unwrap().facts().is_retrograde());
        assert!(!find(EARTH).unwrap().facts().is_retrograde());
    }

    #[test]
    fn test_find_ignore_case() {
        assert_eq!(find_ignore_case("jupiter").map(|b| b.name()), Some("Jupiter"));
        assert!(find("jupiter").is_none());
        assert!(find_ignore_case("Pluto").is_none());
    }

    #[test]
    fn test_lookup_reports_unknown_body() {
        assert_eq!(lookup("moon").map(|b| b.name()).ok(), Some("Moon"));
        match lookup("Pluto") {
            Err(SceneError::UnknownBody(name)) => assert_eq!(name, "Pluto"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
