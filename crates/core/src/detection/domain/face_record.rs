use crate::shared::geometry::{Bounds, Point};

/// Facial landmark groups a detector may report as contour point sets.
///
/// Only a subset is usually present on any given detection; consumers must
/// tolerate missing kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContourKind {
    Face,
    LeftCheek,
    RightCheek,
    LeftEyebrowTop,
    LeftEyebrowBottom,
    RightEyebrowTop,
    RightEyebrowBottom,
    LeftEye,
    RightEye,
    UpperLipTop,
    UpperLipBottom,
    LowerLipTop,
    LowerLipBottom,
    NoseBridge,
    NoseBottom,
}

/// Ordered contour point sets for one face.
///
/// Point order within a set is traversal order: consecutive points connect
/// in sequence to form a simple closed curve. Insertion order of the kinds
/// is preserved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContourSet {
    entries: Vec<(ContourKind, Vec<Point>)>,
}

impl ContourSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the point sequence for `kind`.
    pub fn insert(&mut self, kind: ContourKind, points: Vec<Point>) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == kind) {
            entry.1 = points;
        } else {
            self.entries.push((kind, points));
        }
    }

    pub fn get(&self, kind: ContourKind) -> Option<&[Point]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, pts)| pts.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContourKind, &[Point])> {
        self.entries.iter().map(|(k, pts)| (*k, pts.as_slice()))
    }
}

impl FromIterator<(ContourKind, Vec<Point>)> for ContourSet {
    fn from_iter<I: IntoIterator<Item = (ContourKind, Vec<Point>)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (kind, points) in iter {
            set.insert(kind, points);
        }
        set
    }
}

/// One normalized face-detection result.
///
/// `bounds` is always present. `contours: None` marks a coarse detection
/// (partially visible face, low confidence, or landmark computation
/// disabled by session policy).
#[derive(Clone, Debug, PartialEq)]
pub struct FaceRecord {
    pub bounds: Bounds,
    pub contours: Option<ContourSet>,
}

impl FaceRecord {
    /// A detection carrying only a bounding region.
    pub fn coarse(bounds: Bounds) -> Self {
        Self {
            bounds,
            contours: None,
        }
    }

    pub fn with_contours(bounds: Bounds, contours: ContourSet) -> Self {
        Self {
            bounds,
            contours: Some(contours),
        }
    }
}
