use crate::error::GeometryError;
use crate::point::Point2D;

/// Per-segment tuning of the field-warp weight.
///
/// A segment of length `len` at distance `dist` from a point contributes
/// `(len^p / (a + dist))^b`.
///
/// * `p` - how much longer segments dominate, usually in `[0, 1]`.
/// * `a` - keeps the weight finite on the segment itself, must be positive.
/// * `b` - falloff sharpness, usually in `[0.5, 2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentWeight {
    /// Exponent applied to the segment length.
    pub p: f64,
    /// Offset added to the distance.
    pub a: f64,
    /// Exponent applied to the whole ratio.
    pub b: f64,
}

impl Default for SegmentWeight {
    fn default() -> Self {
        Self {
            p: 0.5,
            a: 1.0,
            b: 1.0,
        }
    }
}

/// A line segment with a direction, from `start` (P) to `end` (Q).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientedLineSegment {
    /// First endpoint, P.
    pub start: Point2D,
    /// Second endpoint, Q.
    pub end: Point2D,
    /// Warp weight tuning attached to this segment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: SegmentWeight,
}

impl OrientedLineSegment {
    /// Create a segment from P to Q with the default weight tuning.
    pub fn new(start: impl Into<Point2D>, end: impl Into<Point2D>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            weight: SegmentWeight::default(),
        }
    }

    /// Replace the weight tuning.
    pub fn with_weight(mut self, weight: SegmentWeight) -> Self {
        self.weight = weight;
        self
    }

    /// The direction vector `Q - P`.
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// True when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.direction().length_squared() == 0.0
    }

    /// The direction rotated by 90 degrees, `(-dy, dx)`.
    ///
    /// Not normalized: its magnitude is the segment length.
    pub fn perpendicular(&self) -> Point2D {
        self.direction().perp()
    }

    /// Coordinates of `p` in the frame of this segment.
    ///
    /// `u` is the projection onto the direction, `0` at P and `1` at Q. `v`
    /// is the signed offset along [`perpendicular`](Self::perpendicular) in
    /// pixels.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateSegment`] when the segment has zero length.
    pub fn local_coordinates(&self, p: Point2D) -> Result<(f64, f64), GeometryError> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateSegment);
        }
        let dir = self.direction();
        let perp = self.perpendicular();
        let rel = p - self.start;

        let u = rel.dot(dir) / dir.length_squared();
        let v = rel.dot(perp) / perp.length();
        Ok((u, v))
    }

    /// Inverse of [`local_coordinates`](Self::local_coordinates):
    /// `P + u * (Q - P) + v * perp / |Q - P|`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateSegment`] when the segment has zero length.
    pub fn point_at(&self, u: f64, v: f64) -> Result<Point2D, GeometryError> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateSegment);
        }
        let dir = self.direction();
        Ok(self.start + dir * u + self.perpendicular() * (v / dir.length()))
    }

    /// Distance from `p` to the segment.
    ///
    /// A projection before P measures to P and any projection past P
    /// (`u > 0`) measures to Q; only `u == 0` uses the perpendicular offset.
    /// The `u > 0` branch is kept as is rather than the usual `u > 1`, so a
    /// point beside the middle of the segment reports its distance to Q.
    ///
    /// A zero-length segment reports the distance to its single point.
    pub fn distance(&self, p: Point2D) -> f64 {
        let Ok((u, v)) = self.local_coordinates(p) else {
            return (p - self.start).length();
        };

        if u < 0.0 {
            (p - self.start).length()
        } else if u > 0.0 {
            (p - self.end).length()
        } else {
            v.abs()
        }
    }

    /// Field-warp weight of this segment for a point at distance `dist`.
    pub fn influence(&self, dist: f64) -> f64 {
        let SegmentWeight { p, a, b } = self.weight;
        (self.length().powf(p) / (a + dist)).powf(b)
    }

    /// Interpolate the endpoints towards `other`; the weight tuning of `self` is kept.
    pub fn lerp(&self, other: &OrientedLineSegment, t: f64) -> Self {
        Self {
            start: self.start.lerp(other.start, t),
            end: self.end.lerp(other.end, t),
            weight: self.weight,
        }
    }
}

/// One correspondence of a field warp.
///
/// Destination pixels are located relative to `destination` and mapped to
/// the same relative place around `source`. The weight tuning of the
/// destination segment is the one applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentPair {
    /// Segment in the source image.
    pub source: OrientedLineSegment,
    /// Matching segment in the destination image.
    pub destination: OrientedLineSegment,
}

impl SegmentPair {
    /// Create a correspondence.
    pub fn new(source: OrientedLineSegment, destination: OrientedLineSegment) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// True when either side has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.source.is_degenerate() || self.destination.is_degenerate()
    }
}

/// Resolve the source position of `target` for a single correspondence.
///
/// The policy of this mapping has not been settled, so the call always fails.
///
/// # Errors
///
/// Always returns [`GeometryError::Unimplemented`].
pub fn source_position(
    _source: &OrientedLineSegment,
    _destination: &OrientedLineSegment,
    _target: Point2D,
) -> Result<Point2D, GeometryError> {
    Err(GeometryError::Unimplemented("source_position"))
}
