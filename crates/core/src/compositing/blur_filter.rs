/// How blur sampling treats pixels beyond the frame boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeMode {
    /// Tile the frame. Chosen as the session default so sampling near a
    /// mask boundary never reads out-of-bounds transparent pixels.
    Repeat,
    /// Extend the edge pixel.
    Clamp,
    /// Out-of-bounds samples contribute nothing.
    Decal,
    /// Reflect at the edge.
    Mirror,
}

/// Reference blur radius in frame pixel space.
pub const DEFAULT_BLUR_RADIUS: f64 = 25.0;

/// Immutable blur effect description.
///
/// Constructed once per session and shared read-only by the compositor
/// across the entire frame stream; being `Copy` and never mutated, it
/// needs no locking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurEffect {
    pub radius_x: f64,
    pub radius_y: f64,
    pub edge_mode: EdgeMode,
}

impl BlurEffect {
    /// Symmetric Gaussian blur with repeating edge tiling.
    ///
    /// Pure and deterministic: the same radius always yields the same
    /// effect.
    pub fn gaussian(radius: f64) -> Self {
        Self {
            radius_x: radius,
            radius_y: radius,
            edge_mode: EdgeMode::Repeat,
        }
    }
}

impl Default for BlurEffect {
    fn default() -> Self {
        Self::gaussian(DEFAULT_BLUR_RADIUS)
    }
}
