use crate::detection::domain::face_record::{ContourKind, FaceRecord};
use crate::shared::geometry::Point;

use super::mask_region::MaskRegion;

/// Contour kinds traced into the mask, in priority order.
///
/// Three kinds cover the face silhouette; tracing every available kind is
/// a precision/performance policy choice, not a correctness requirement.
pub const DEFAULT_TRACED_KINDS: &[ContourKind] = &[
    ContourKind::Face,
    ContourKind::LeftCheek,
    ContourKind::RightCheek,
];

/// Policy for faces detected without contour data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Blur the ellipse inscribed in the bounding region. Partially
    /// visible or low-confidence faces still get a privacy mask, just a
    /// coarser one.
    #[default]
    InscribedEllipse,
    /// Render nothing for coarse detections. Stricter variant for
    /// deployments that only trust contour-backed masks.
    Drop,
}

/// Converts a `FaceRecord` into a closed mask region.
///
/// Contour-backed records get one closed polygon sub-path per traced kind
/// that is present with points; kinds missing from the set are skipped
/// silently. Records without contours fall back per `FallbackPolicy`.
pub struct MaskBuilder {
    traced_kinds: Vec<ContourKind>,
    fallback: FallbackPolicy,
}

impl MaskBuilder {
    pub fn new(traced_kinds: Vec<ContourKind>, fallback: FallbackPolicy) -> Self {
        Self {
            traced_kinds,
            fallback,
        }
    }

    pub fn build(&self, face: &FaceRecord) -> MaskRegion {
        match &face.contours {
            Some(contours) => {
                let mut region = MaskRegion::new();
                for &kind in &self.traced_kinds {
                    if let Some(points) = contours.get(kind) {
                        if !points.is_empty() {
                            region.push_polygon(points.to_vec());
                        }
                    }
                }
                region
            }
            None => self.fallback_region(face),
        }
    }

    fn fallback_region(&self, face: &FaceRecord) -> MaskRegion {
        let mut region = MaskRegion::new();
        if self.fallback == FallbackPolicy::InscribedEllipse && !face.bounds.is_empty() {
            let center = face.bounds.center();
            region.push_ellipse(
                Point::new(center.x, center.y),
                face.bounds.width / 2.0,
                face.bounds.height / 2.0,
            );
        }
        region
    }
}

impl Default for MaskBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_TRACED_KINDS.to_vec(), FallbackPolicy::default())
    }
}
