//! 2D point/vector value type
//!
//! `Point` is the coordinate currency of the crate: widget padding, particle
//! positions and velocities, mouse positions, and window sizes all use it.
//! Arithmetic works componentwise against another `Point` and uniformly
//! against an `f32`, in either operand order for the scalar forms.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D point (or vector) with `f32` components and value semantics.
///
/// # Example
///
/// ```
/// use sdl2_tools::Point;
///
/// let pos = Point::new(3.0, 4.0);
/// let center = (pos + Point::new(1.0, -4.0)) * 0.5;
/// assert_eq!(pos.distance(Point::ZERO), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    /// Rounds both components down.
    pub fn floor(self) -> Point {
        Point::new(self.x.floor(), self.y.floor())
    }

    /// Rounds both components up.
    pub fn ceil(self) -> Point {
        Point::new(self.x.ceil(), self.y.ceil())
    }

    /// Absolute value on both components.
    pub fn abs(self) -> Point {
        Point::new(self.x.abs(), self.y.abs())
    }

    /// Rotates clockwise around the origin.
    ///
    /// Screen coordinates have y pointing down, so the standard rotation
    /// matrix appears clockwise on screen.
    pub fn rotate(self, angle: f32) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.y * cos + self.x * sin)
    }

    /// Rotates clockwise around `center`.
    pub fn rotate_around(self, angle: f32, center: Point) -> Point {
        center + (self - center).rotate(angle)
    }

    /// Rotates counter-clockwise around the origin.
    pub fn rotate_ccw(self, angle: f32) -> Point {
        self.rotate(-angle)
    }

    /// Rotates counter-clockwise around `center`.
    pub fn rotate_ccw_around(self, angle: f32, center: Point) -> Point {
        self.rotate_around(-angle, center)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    /// Perpendicular distance to the infinite line through `start` and `end`.
    ///
    /// A zero-length line (both endpoints equal) falls back to the plain
    /// point distance.
    pub fn distance_from_line(self, start: Point, end: Point) -> f32 {
        let line = end - start;
        let length = (line.x * line.x + line.y * line.y).sqrt();
        if length == 0.0 {
            return self.distance(start);
        }
        ((end.x - start.x) * (start.y - self.y) - (start.x - self.x) * (end.y - start.y)).abs()
            / length
    }
}

/// Samples a quadratic Bézier curve defined by `p0`, `p1` (the control
/// point), and `p2`.
///
/// Returns `density + 1` points at `t = i / density` for `i` in
/// `0..=density`; the first point is `p0` and the last is `p2`. A density
/// below 1 is clamped to 1.
pub fn bezier_points(p0: Point, p1: Point, p2: Point, density: usize) -> Vec<Point> {
    let density = density.max(1);
    (0..=density)
        .map(|i| {
            let t = i as f32 / density as f32;
            let u = 1.0 - t;
            Point::new(
                u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x,
                u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y,
            )
        })
        .collect()
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<f32> for Point {
    type Output = Point;

    fn add(self, scalar: f32) -> Point {
        Point::new(self.x + scalar, self.y + scalar)
    }
}

impl Add<Point> for f32 {
    type Output = Point;

    fn add(self, point: Point) -> Point {
        point + self
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Sub<f32> for Point {
    type Output = Point;

    fn sub(self, scalar: f32) -> Point {
        Point::new(self.x - scalar, self.y - scalar)
    }
}

impl Sub<Point> for f32 {
    type Output = Point;

    fn sub(self, point: Point) -> Point {
        -point + self
    }
}

impl Mul for Point {
    type Output = Point;

    fn mul(self, other: Point) -> Point {
        Point::new(self.x * other.x, self.y * other.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, scalar: f32) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point * self
    }
}

impl Div for Point {
    type Output = Point;

    fn div(self, other: Point) -> Point {
        Point::new(self.x / other.x, self.y / other.y)
    }
}

impl Div<f32> for Point {
    type Output = Point;

    fn div(self, scalar: f32) -> Point {
        Point::new(self.x / scalar, self.y / scalar)
    }
}

/// Reciprocal form: `(s / p.x, s / p.y)`. Division by a zero component
/// follows IEEE-754 and yields an infinity rather than panicking.
impl Div<Point> for f32 {
    type Output = Point;

    fn div(self, point: Point) -> Point {
        Point::new(self / point.x, self / point.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Point) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Point {
        Point::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Point {
        Point::new(x as f32, y as f32)
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Point {
        Point::new(x as f32, y as f32)
    }
}

impl From<Point> for (f32, f32) {
    fn from(point: Point) -> (f32, f32) {
        (point.x, point.y)
    }
}

/// Conversion for SDL2 drawing calls; components are rounded to the nearest
/// pixel.
impl From<Point> for sdl2::rect::Point {
    fn from(point: Point) -> sdl2::rect::Point {
        sdl2::rect::Point::new(point.x.round() as i32, point.y.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-4;

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_scalar_and_componentwise_forms_agree() {
        let p = Point::new(3.0, -2.0);
        assert_eq!(p + 2.0, p + Point::new(2.0, 2.0));
        assert_eq!(p - 2.0, p - Point::new(2.0, 2.0));
        assert_eq!(p * 2.0, p * Point::new(2.0, 2.0));
        assert_eq!(p / 2.0, p / Point::new(2.0, 2.0));
    }

    #[test]
    fn test_scalar_forms_commute_where_expected() {
        let p = Point::new(1.5, -4.0);
        assert_eq!(2.0 + p, p + 2.0);
        assert_eq!(2.0 * p, p * 2.0);
    }

    #[test]
    fn test_reversed_scalar_subtraction_and_division() {
        let p = Point::new(2.0, 4.0);
        assert_eq!(10.0 - p, Point::new(8.0, 6.0));
        assert_eq!(8.0 / p, Point::new(4.0, 2.0));
    }

    #[test]
    fn test_reciprocal_division_by_zero_component() {
        let p = Point::new(0.0, 2.0);
        let result = 1.0 / p;
        assert!(result.x.is_infinite());
        assert_eq!(result.y, 0.5);
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Point = (3, -7).into();
        assert_eq!(p, Point::new(3.0, -7.0));
        let back: (f32, f32) = p.into();
        assert_eq!(back, (3.0, -7.0));
    }

    #[test]
    fn test_negation_and_abs() {
        let p = Point::new(2.0, -3.0);
        assert_eq!(-p, Point::new(-2.0, 3.0));
        assert_eq!(p.abs(), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_floor_ceil_componentwise() {
        let p = Point::new(1.7, -2.3);
        assert_eq!(p.floor(), Point::new(1.0, -3.0));
        assert_eq!(p.ceil(), Point::new(2.0, -2.0));
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn test_distance_from_line() {
        // Horizontal line through y = 0; point 3 above it.
        let start = Point::new(-5.0, 0.0);
        let end = Point::new(5.0, 0.0);
        let point = Point::new(2.0, 3.0);
        assert!((point.distance_from_line(start, end) - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_distance_from_line_symmetric_in_endpoints() {
        let start = Point::new(1.0, 1.0);
        let end = Point::new(4.0, 5.0);
        let point = Point::new(-2.0, 3.0);
        let d1 = point.distance_from_line(start, end);
        let d2 = point.distance_from_line(end, start);
        assert!((d1 - d2).abs() < EPSILON);
    }

    #[test]
    fn test_distance_from_degenerate_line() {
        // Zero-length line falls back to point distance.
        let p = Point::new(3.0, 4.0);
        let degenerate = Point::ZERO;
        assert_eq!(p.distance_from_line(degenerate, degenerate), 5.0);
    }

    #[test]
    fn test_rotation_matches_rotation_matrix() {
        let p = Point::new(1.0, 0.0);
        // Clockwise quarter turn in y-down coordinates lands on (0, 1).
        assert_point_eq(p.rotate(FRAC_PI_2), Point::new(0.0, 1.0));
        assert_point_eq(p.rotate(PI), Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_rotation_around_center() {
        let center = Point::new(2.0, 2.0);
        let p = Point::new(3.0, 2.0);
        assert_point_eq(p.rotate_around(PI, center), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_ccw_rotation_inverts_cw() {
        let p = Point::new(0.7, -1.3);
        let angle = 1.1;
        assert_point_eq(p.rotate(angle).rotate_ccw(angle), p);
    }

    #[test]
    fn test_bezier_endpoints_and_length() {
        let p0 = Point::ZERO;
        let p1 = Point::new(5.0, 10.0);
        let p2 = Point::new(10.0, 0.0);
        let curve = bezier_points(p0, p1, p2, 10);
        assert_eq!(curve.len(), 11);
        assert_point_eq(curve[0], p0);
        assert_point_eq(curve[10], p2);
    }

    #[test]
    fn test_bezier_midpoint() {
        // At t = 0.5 the quadratic curve sits at (p0 + 2*p1 + p2) / 4.
        let p0 = Point::ZERO;
        let p1 = Point::new(4.0, 8.0);
        let p2 = Point::new(8.0, 0.0);
        let curve = bezier_points(p0, p1, p2, 2);
        assert_point_eq(curve[1], Point::new(4.0, 4.0));
    }

    #[test]
    fn test_bezier_density_clamped() {
        let curve = bezier_points(Point::ZERO, Point::new(1.0, 1.0), Point::new(2.0, 0.0), 0);
        assert_eq!(curve.len(), 2);
    }

    #[test]
    fn test_sdl_point_conversion_rounds() {
        let p: sdl2::rect::Point = Point::new(1.6, -2.4).into();
        assert_eq!((p.x(), p.y()), (2, -2));
    }
}
