//! The solar system scene
//!
//! Builds a [`SceneGraph`] from the catalog: a solar frame node at the
//! root, the Sun and the planets as its children and the Moon as a child
//! of Earth. [`SolarScene::update`] steps orbital motion once per frame.

use super::motion;
use super::registry::{NodeKey, SceneGraph};
use crate::catalog::{self, CelestialBody, SUN};
use crate::config::{MotionConfig, OrreryConfig, SceneConfig};
use crate::error::{Result, SceneError};
use crate::oracle::{PositionOracle, ReferenceFrame};
use crate::scale::RenderScale;
use orrery_core::Vec3;
use tracing::debug;

/// Name of the root node every body hangs off
pub const SOLAR_FRAME: &str = "SolarSystem";

/// Moon spin per tick while planets move
const MOON_SPIN_PER_TICK: f32 = 0.01;

/// Per-body animation state
#[derive(Clone, Debug)]
struct BodyState {
    key: NodeKey,
    body: &'static CelestialBody,
    /// Orbital angle around the parent in radians
    angle: f32,
    /// Orbit radius around the parent in scene units
    orbit_radius: f32,
    /// Visual radius in scene units
    radius: f32,
}

/// Scene graph plus the motion state of every body
pub struct SolarScene {
    graph: SceneGraph,
    frame: NodeKey,
    bodies: Vec<BodyState>,
    scale: RenderScale,
    scene: SceneConfig,
    motion: MotionConfig,
    elapsed: f32,
    selected: Option<&'static str>,
}

impl SolarScene {
    /// Build the scene for a configuration
    pub fn new(config: &OrreryConfig) -> Result<Self> {
        let scale = config.scene.scale.build();
        let mut graph = SceneGraph::new();
        let frame = graph.insert(SOLAR_FRAME, None)?;
        let mut bodies = Vec::with_capacity(catalog::catalog().len());

        for (index, body) in catalog::catalog().iter().enumerate() {
            let (parent, orbit_radius) = match body {
                CelestialBody::Star(_) => (frame, 0.0),
                CelestialBody::Planet(p) => (frame, scale.au_to_scene_distance(p.orbit_au)),
                CelestialBody::Moon(m) => {
                    let parent = graph.key(m.parent).ok_or_else(|| SceneError::MissingParent {
                        parent: m.parent.to_string(),
                        child: body.name().to_string(),
                    })?;
                    let distance = if config.scene.real_moon_distance {
                        scale.km_to_scene_distance(m.orbit_km)
                    } else {
                        scale.radius_of(m.parent) * config.scene.moon_orbit_radii
                    };
                    (parent, distance)
                }
            };

            let key = graph.insert(body.name(), Some(parent))?;
            let angle = match body {
                CelestialBody::Star(_) => 0.0,
                _ => motion::initial_phase(index),
            };
            graph.set_local_position(key, motion::orbit_position(angle, orbit_radius));

            bodies.push(BodyState {
                key,
                body,
                angle,
                orbit_radius,
                radius: scale.body_radius(body),
            });
        }

        debug!(
            "Built solar scene with {} nodes at {:?} scale",
            graph.len(),
            scale.preset
        );

        Ok(Self {
            graph,
            frame,
            bodies,
            scale,
            scene: config.scene.clone(),
            motion: config.motion.clone(),
            elapsed: 0.0,
            selected: None,
        })
    }

    /// Step motion by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        let origin = motion::frame_origin(self.elapsed, &self.motion);
        self.graph.set_local_position(self.frame, origin);

        let moving = self.motion.planets_moving;
        for state in &mut self.bodies {
            let Some(node) = self.graph.get_mut(state.key) else {
                continue;
            };

            match state.body {
                CelestialBody::Star(_) => {
                    node.rotation_y += dt * self.motion.spin_rate;
                }
                CelestialBody::Planet(p) => {
                    if moving {
                        state.angle =
                            motion::advance_angle(state.angle, dt, self.motion.speed, p.period_years);
                        node.rotation_y += dt * motion::spin_rate(self.motion.spin_rate, p.facts.day_hours);
                    }
                    node.local_position = motion::orbit_position(state.angle, state.orbit_radius);
                    let selected = self.selected == Some(p.facts.name);
                    node.scale = motion::ease_scale(node.scale, selected, &self.motion);
                }
                CelestialBody::Moon(m) => {
                    if moving {
                        state.angle += dt * m.angular_speed;
                        node.rotation_y += MOON_SPIN_PER_TICK;
                    }
                    node.local_position = motion::orbit_position(state.angle, state.orbit_radius);
                }
            }
        }
    }

    /// Current solar frame for the camera to follow
    pub fn reference_frame(&self) -> ReferenceFrame {
        let origin = self.graph.world_position(self.frame).unwrap_or(Vec3::ZERO);
        if self.motion.moving {
            ReferenceFrame::drifting(origin)
        } else {
            ReferenceFrame {
                origin,
                drifting: false,
            }
        }
    }

    /// Mark a body as selected (or clear the selection)
    pub fn select(&mut self, name: Option<&str>) {
        self.selected = name.and_then(catalog::find).map(|b| b.name());
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Toggle drifting of the whole system
    pub fn set_moving(&mut self, moving: bool) {
        self.motion.moving = moving;
    }

    /// Toggle orbital motion of planets and the Moon
    pub fn set_planets_moving(&mut self, moving: bool) {
        self.motion.planets_moving = moving;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.motion.speed = speed.max(0.0);
    }

    /// Seconds of simulated time since the scene was built
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn scale(&self) -> &RenderScale {
        &self.scale
    }

    /// Whether the Moon sits at its real scaled distance
    pub fn real_moon_distance(&self) -> bool {
        self.scene.real_moon_distance
    }

    /// Orbit radius of a body around its parent, in scene units
    pub fn orbit_radius(&self, name: &str) -> Option<f32> {
        self.bodies
            .iter()
            .find(|s| s.body.name() == name)
            .map(|s| s.orbit_radius)
    }

    /// Current display scale of a body (1.0 unless selected)
    pub fn display_scale(&self, name: &str) -> Option<f32> {
        self.graph
            .key(name)
            .and_then(|k| self.graph.get(k))
            .map(|n| n.scale)
    }
}

impl PositionOracle for SolarScene {
    fn world_position(&self, name: &str) -> Option<Vec3> {
        self.graph.world_position_of(name)
    }

    fn approx_radius(&self, name: &str) -> f32 {
        if name == SUN {
            return self.scale.sun_radius;
        }
        self.bodies
            .iter()
            .find(|s| s.body.name() == name)
            .map(|s| s.radius)
            .unwrap_or_else(|| self.scale.radius_of(name))
    }
}
