use crate::shared::geometry::{Bounds, Point};

/// One closed sub-path of a mask region.
#[derive(Clone, Debug, PartialEq)]
pub enum SubPath {
    /// Closed polygon: the last point connects back to the first.
    Polygon(Vec<Point>),
    Ellipse {
        center: Point,
        radius_x: f64,
        radius_y: f64,
    },
}

/// A closed 2D region built per face per frame and discarded after use.
///
/// The region is the union of its sub-paths under the non-zero winding
/// rule, so overlapping sub-paths still union correctly. An empty region
/// means "no masking for this face" and must be skipped by the compositor,
/// never drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaskRegion {
    subpaths: Vec<SubPath>,
}

impl MaskRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a closed polygon traced through `points` in order.
    pub fn push_polygon(&mut self, points: Vec<Point>) {
        if !points.is_empty() {
            self.subpaths.push(SubPath::Polygon(points));
        }
    }

    /// Add an ellipse sub-path. Non-positive radii are rejected as a
    /// degenerate shape.
    pub fn push_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64) {
        if radius_x > 0.0 && radius_y > 0.0 {
            self.subpaths.push(SubPath::Ellipse {
                center,
                radius_x,
                radius_y,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    /// Tight bounding rectangle over all sub-paths, `None` when empty.
    pub fn bounding_box(&self) -> Option<Bounds> {
        let mut acc: Option<Bounds> = None;
        for sub in &self.subpaths {
            let b = match sub {
                SubPath::Polygon(points) => Bounds::around(points)?,
                SubPath::Ellipse {
                    center,
                    radius_x,
                    radius_y,
                } => Bounds::new(
                    center.x - radius_x,
                    center.y - radius_y,
                    radius_x * 2.0,
                    radius_y * 2.0,
                ),
            };
            acc = Some(match acc {
                Some(prev) => prev.union(&b),
                None => b,
            });
        }
        acc
    }

    /// Point-in-region test under the non-zero winding rule.
    ///
    /// Each polygon contributes its signed crossing count; an ellipse
    /// contributes one winding when the point lies inside it.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let mut winding = 0i32;
        for sub in &self.subpaths {
            winding += match sub {
                SubPath::Polygon(points) => polygon_winding(points, x, y),
                SubPath::Ellipse {
                    center,
                    radius_x,
                    radius_y,
                } => {
                    let dx = (x - center.x) / radius_x;
                    let dy = (y - center.y) / radius_y;
                    i32::from(dx * dx + dy * dy <= 1.0)
                }
            };
        }
        winding != 0
    }
}

/// Signed winding number of a closed polygon around `(x, y)`.
///
/// Standard crossing count over the implicitly closed edge list; polygons
/// with fewer than three points enclose nothing.
fn polygon_winding(points: &[Point], x: f64, y: f64) -> i32 {
    if points.len() < 3 {
        return 0;
    }
    let mut winding = 0i32;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        if a.y <= y {
            if b.y > y && cross(a, b, x, y) > 0.0 {
                winding += 1;
            }
        } else if b.y <= y && cross(a, b, x, y) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Cross product of (b - a) and (p - a): positive when p is left of a→b.
fn cross(a: Point, b: Point, px: f64, py: f64) -> f64 {
    (b.x - a.x) * (py - a.y) - (px - a.x) * (b.y - a.y)
}
