//! Position queries over the current scene state

use orrery_core::Vec3;

/// Answers where a named body is and how big it is drawn
///
/// Implementations are pure queries over scene state that has already been
/// updated for the frame. Names that are unknown, or not yet registered,
/// yield `None`.
pub trait PositionOracle {
    /// Current world-space position of the body
    fn world_position(&self, name: &str) -> Option<Vec3>;

    /// Approximate visual radius in scene units
    fn approx_radius(&self, name: &str) -> f32;
}

impl<T: PositionOracle + ?Sized> PositionOracle for &T {
    fn world_position(&self, name: &str) -> Option<Vec3> {
        (**self).world_position(name)
    }

    fn approx_radius(&self, name: &str) -> f32 {
        (**self).approx_radius(name)
    }
}

/// The solar frame the auto-follow camera tracks
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReferenceFrame {
    /// World position of the frame origin
    pub origin: Vec3,
    /// Whether the frame is currently drifting through space
    pub drifting: bool,
}

impl ReferenceFrame {
    /// A frame resting at the world origin
    pub const RESTING: ReferenceFrame = ReferenceFrame {
        origin: Vec3::ZERO,
        drifting: false,
    };

    pub fn drifting(origin: Vec3) -> Self {
        Self {
            origin,
            drifting: true,
        }
    }
}
