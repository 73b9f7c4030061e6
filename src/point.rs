//! Wrapper module around the `Point` type

use crate::Float;
use std::ops::*;

/// A point in the 2D user coordinate system of the output document
///
/// We follow the SVG convention: positive X is to the right and positive Y is *down*. A branch
/// pointing straight up therefore ends at a smaller Y value than where it starts.
///
/// Values may be negative; the final viewBox is shifted to cover whatever region the tree ends
/// up occupying.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Add<Point> for Point {
    type Output = Self;

    fn add(self, other: Point) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub<Point> for Point {
    type Output = Self;

    fn sub(self, other: Point) -> Self {
        self + -1.0 * other
    }
}

impl Mul<Point> for Float {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point * self
    }
}

impl Mul<Float> for Point {
    type Output = Self;

    fn mul(self, scale: Float) -> Self {
        Point {
            x: scale * self.x,
            y: scale * self.y,
        }
    }
}
