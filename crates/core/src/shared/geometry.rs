/// A single 2D coordinate in frame pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in frame pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// A rectangle with non-positive width or height covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = (self.x + self.width).max(other.x + other.width);
        let y2 = (self.y + self.height).max(other.y + other.height);
        Bounds::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Tight bounding rectangle of a point sequence, `None` when empty.
    pub fn around(points: &[Point]) -> Option<Bounds> {
        let first = points.first()?;
        let (mut x1, mut y1, mut x2, mut y2) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            x1 = x1.min(p.x);
            y1 = y1.min(p.y);
            x2 = x2.max(p.x);
            y2 = y2.max(p.y);
        }
        Some(Bounds::new(x1, y1, x2 - x1, y2 - y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_center() {
        let b = Bounds::new(100.0, 100.0, 50.0, 80.0);
        let c = b.center();
        assert_relative_eq!(c.x, 125.0);
        assert_relative_eq!(c.y, 140.0);
    }

    #[rstest]
    #[case::zero_width(Bounds::new(0.0, 0.0, 0.0, 10.0), true)]
    #[case::zero_height(Bounds::new(0.0, 0.0, 10.0, 0.0), true)]
    #[case::negative_width(Bounds::new(0.0, 0.0, -5.0, 10.0), true)]
    #[case::positive(Bounds::new(0.0, 0.0, 1.0, 1.0), false)]
    fn test_is_empty(#[case] bounds: Bounds, #[case] expected: bool) {
        assert_eq!(bounds.is_empty(), expected);
    }

    #[test]
    fn test_contains_edges() {
        let b = Bounds::new(10.0, 10.0, 20.0, 20.0);
        assert!(b.contains(10.0, 10.0));
        assert!(b.contains(29.9, 29.9));
        assert!(!b.contains(30.0, 30.0));
        assert!(!b.contains(9.9, 15.0));
    }

    #[test]
    fn test_union_disjoint() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(20.0, 30.0, 10.0, 10.0);
        let u = a.union(&b);
        assert_relative_eq!(u.x, 0.0);
        assert_relative_eq!(u.y, 0.0);
        assert_relative_eq!(u.width, 30.0);
        assert_relative_eq!(u.height, 40.0);
    }

    #[test]
    fn test_around_empty_slice() {
        assert!(Bounds::around(&[]).is_none());
    }

    #[test]
    fn test_around_points() {
        let pts = [
            Point::new(5.0, 8.0),
            Point::new(-2.0, 3.0),
            Point::new(7.0, 1.0),
        ];
        let b = Bounds::around(&pts).unwrap();
        assert_relative_eq!(b.x, -2.0);
        assert_relative_eq!(b.y, 1.0);
        assert_relative_eq!(b.width, 9.0);
        assert_relative_eq!(b.height, 7.0);
    }

    #[test]
    fn test_around_single_point_is_empty_rect() {
        let b = Bounds::around(&[Point::new(3.0, 4.0)]).unwrap();
        assert_relative_eq!(b.width, 0.0);
        assert_relative_eq!(b.height, 0.0);
        assert!(b.is_empty());
    }
}
