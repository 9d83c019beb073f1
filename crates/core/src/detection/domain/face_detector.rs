use crate::shared::frame::Frame;

use super::face_record::FaceRecord;

/// Latency/accuracy trade-off for the detection capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceMode {
    /// Bounded latency; approximate results preferred over exhaustive
    /// accuracy. Required for the camera frame budget.
    Fast,
    Accurate,
}

/// Whether an optional detector feature is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureMode {
    None,
    All,
}

/// Detector configuration, chosen once at session start, never per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectorConfig {
    pub performance: PerformanceMode,
    /// Per-feature outline point sets. Disable when only coarse
    /// bounding-region masking is needed.
    pub contours: FeatureMode,
    pub landmarks: FeatureMode,
    /// Smile/eyes-open classification; unused by the masking pipeline.
    pub classification: FeatureMode,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            performance: PerformanceMode::Fast,
            contours: FeatureMode::All,
            landmarks: FeatureMode::All,
            classification: FeatureMode::None,
        }
    }
}

/// External face-detection capability.
///
/// Implementations may be stateful, hence `&mut self`. `detect` must be
/// synchronous and bounded within the frame's processing budget.
pub trait FaceDetector: Send {
    fn detect(
        &mut self,
        frame: &Frame,
        config: &DetectorConfig,
    ) -> Result<Vec<FaceRecord>, Box<dyn std::error::Error>>;
}
