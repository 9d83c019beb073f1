//! Detection records file format and the replay detector.
//!
//! The CLI has no camera and no live detector; it replays precomputed
//! detection results from a JSON file, one record per face:
//!
//! ```json
//! {
//!   "faces": [
//!     {
//!       "bounds": { "x": 100, "y": 100, "width": 50, "height": 80 },
//!       "contours": {
//!         "FACE": [{ "x": 110, "y": 95 }, ...],
//!         "LEFT_CHEEK": [...]
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! `contours` is optional; unknown contour names are skipped with a
//! warning so files from newer detectors still load.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use faceveil_core::detection::domain::face_detector::{DetectorConfig, FaceDetector};
use faceveil_core::detection::domain::face_record::{ContourKind, ContourSet, FaceRecord};
use faceveil_core::shared::frame::Frame;
use faceveil_core::shared::geometry::{Bounds, Point};

#[derive(Error, Debug)]
pub enum DetectionsError {
    #[error("failed to read detections file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse detections file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct DetectionsFile {
    faces: Vec<FaceDto>,
}

#[derive(Deserialize)]
struct FaceDto {
    bounds: BoundsDto,
    #[serde(default)]
    contours: Option<BTreeMap<String, Vec<PointDto>>>,
}

#[derive(Deserialize)]
struct BoundsDto {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct PointDto {
    x: f64,
    y: f64,
}

/// Detector that returns the same replayed records for every frame.
pub struct ReplayDetector {
    records: Vec<FaceRecord>,
}

impl ReplayDetector {
    pub fn from_file(path: &Path) -> Result<Self, DetectionsError> {
        let text = fs::read_to_string(path).map_err(|source| DetectionsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let file: DetectionsFile =
            serde_json::from_str(&text).map_err(|source| DetectionsError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self {
            records: file.faces.iter().map(to_record).collect(),
        })
    }

    #[cfg(test)]
    fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let file: DetectionsFile = serde_json::from_str(text)?;
        Ok(Self {
            records: file.faces.iter().map(to_record).collect(),
        })
    }
}

impl FaceDetector for ReplayDetector {
    fn detect(
        &mut self,
        _frame: &Frame,
        _config: &DetectorConfig,
    ) -> Result<Vec<FaceRecord>, Box<dyn std::error::Error>> {
        Ok(self.records.clone())
    }
}

fn to_record(dto: &FaceDto) -> FaceRecord {
    let bounds = Bounds::new(dto.bounds.x, dto.bounds.y, dto.bounds.width, dto.bounds.height);
    match &dto.contours {
        Some(map) => {
            let mut set = ContourSet::new();
            for (name, points) in map {
                match parse_contour_kind(name) {
                    Some(kind) => set.insert(
                        kind,
                        points.iter().map(|p| Point::new(p.x, p.y)).collect(),
                    ),
                    None => log::warn!("skipping unknown contour kind '{name}'"),
                }
            }
            FaceRecord::with_contours(bounds, set)
        }
        None => FaceRecord::coarse(bounds),
    }
}

fn parse_contour_kind(name: &str) -> Option<ContourKind> {
    Some(match name {
        "FACE" => ContourKind::Face,
        "LEFT_CHEEK" => ContourKind::LeftCheek,
        "RIGHT_CHEEK" => ContourKind::RightCheek,
        "LEFT_EYEBROW_TOP" => ContourKind::LeftEyebrowTop,
        "LEFT_EYEBROW_BOTTOM" => ContourKind::LeftEyebrowBottom,
        "RIGHT_EYEBROW_TOP" => ContourKind::RightEyebrowTop,
        "RIGHT_EYEBROW_BOTTOM" => ContourKind::RightEyebrowBottom,
        "LEFT_EYE" => ContourKind::LeftEye,
        "RIGHT_EYE" => ContourKind::RightEye,
        "UPPER_LIP_TOP" => ContourKind::UpperLipTop,
        "UPPER_LIP_BOTTOM" => ContourKind::UpperLipBottom,
        "LOWER_LIP_TOP" => ContourKind::LowerLipTop,
        "LOWER_LIP_BOTTOM" => ContourKind::LowerLipBottom,
        "NOSE_BRIDGE" => ContourKind::NoseBridge,
        "NOSE_BOTTOM" => ContourKind::NoseBottom,
        _ => return None,
    })
}
