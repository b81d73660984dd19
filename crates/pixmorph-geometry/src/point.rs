use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A point or vector in the image plane.
///
/// `x` grows to the right (columns) and `y` grows downwards (rows). Points
/// are never checked against any canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2D {
    /// The origin.
    pub const ZERO: Point2D = Point2D::new(0.0, 0.0);

    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product.
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Squared euclidean norm.
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The vector rotated by 90 degrees, `(-y, x)`. Same magnitude.
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Linear interpolation, `self` at `t = 0` and `other` at `t = 1`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// True if both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Self::Output {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Point2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Self::Output {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point2D {
    fn sub_assign(&mut self, rhs: Point2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Self::Output {
        Point2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f64) -> Self::Output {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point2D> for f64 {
    type Output = Point2D;

    fn mul(self, rhs: Point2D) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;

    fn div(self, rhs: f64) -> Self::Output {
        Point2D::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::Point2D;
    use approx::assert_relative_eq;

    #[test]
    fn point_arithmetic() {
        let p = Point2D::new(1.0, 2.0);
        let q = Point2D::new(3.0, -4.0);

        assert_eq!(p + q, Point2D::new(4.0, -2.0));
        assert_eq!(q - p, Point2D::new(2.0, -6.0));
        assert_eq!(p * 2.0, Point2D::new(2.0, 4.0));
        assert_eq!(2.0 * p, p * 2.0);
        assert_eq!(q / 2.0, Point2D::new(1.5, -2.0));
        assert_eq!(-p, Point2D::new(-1.0, -2.0));

        let mut acc = Point2D::ZERO;
        acc += p;
        acc += q;
        acc -= p;
        assert_eq!(acc, q);
    }

    #[test]
    fn point_dot_length() {
        let p = Point2D::new(3.0, 4.0);
        assert_relative_eq!(p.length(), 5.0);
        assert_relative_eq!(p.length_squared(), 25.0);
        assert_relative_eq!(p.dot(Point2D::new(-4.0, 3.0)), 0.0);
        assert_eq!(p.perp(), Point2D::new(-4.0, 3.0));
        assert_relative_eq!(p.perp().length(), p.length());
    }

    #[test]
    fn point_lerp() {
        let p = Point2D::new(0.0, 10.0);
        let q = Point2D::new(10.0, 0.0);
        assert_eq!(p.lerp(q, 0.0), p);
        assert_eq!(p.lerp(q, 1.0), q);
        assert_eq!(p.lerp(q, 0.5), Point2D::new(5.0, 5.0));
        assert!(p.is_finite());
        assert!(!Point2D::new(f64::NAN, 0.0).is_finite());
    }
}
