//! Per-frame face masking and blur compositing.
//!
//! The pipeline consumes camera frames and face-detection results, builds a
//! per-face mask region (a precise contour silhouette when landmark contours
//! are available, an elliptical bounding-region fallback otherwise), and
//! composites a blurred copy of the frame restricted to each mask over the
//! sharp original. Face detection and the rendering backend are external
//! capabilities reached through the `FaceDetector` and `RenderCanvas` traits.

pub mod compositing;
pub mod detection;
pub mod masking;
pub mod pipeline;
pub mod shared;
