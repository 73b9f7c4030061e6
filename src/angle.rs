//! Wrapper module around the [`Angle`] type

use crate::Float;
use std::ops::*;

/// A rotational value in degrees, always stored normalized to `[0, 360)`
///
/// An angle of zero points straight up, with positive values rotating clockwise (towards positive
/// X when projected onto the canvas). All arithmetic wraps modulo 360, so `-10°` and `350°` are
/// the same angle, and every operation returns a freshly normalized value.
///
/// Comparisons (`PartialEq`/`PartialOrd`) are over the normalized value only.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle(Float);

impl Angle {
    /// Creates a new `Angle`, normalizing the given degrees into `[0, 360)`
    pub fn new(degrees: Float) -> Self {
        Angle(normalize(degrees))
    }

    /// Returns the normalized value in degrees
    pub fn degrees(&self) -> Float {
        self.0
    }

    /// Returns the angle in radians, for trigonometric projection
    pub fn to_radians(&self) -> Float {
        self.0.to_radians()
    }
}

/// Maps any degree value into `[0, 360)`
///
/// `rem_euclid` can round back up to exactly 360 for tiny negative inputs, so the result is
/// folded once more to keep the half-open interval honest.
fn normalize(degrees: Float) -> Float {
    let r = degrees.rem_euclid(360.0);
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

impl Add<Angle> for Angle {
    type Output = Self;

    fn add(self, other: Angle) -> Self {
        Angle::new(self.0 + other.0)
    }
}

impl Sub<Angle> for Angle {
    type Output = Self;

    fn sub(self, other: Angle) -> Self {
        Angle::new(self.0 - other.0)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Angle::new(-self.0)
    }
}

impl Mul<Float> for Angle {
    type Output = Self;

    fn mul(self, factor: Float) -> Self {
        Angle::new(self.0 * factor)
    }
}

impl Mul<Angle> for Float {
    type Output = Angle;

    fn mul(self, angle: Angle) -> Angle {
        angle * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_inputs_wrap_around() {
        assert_eq!(Angle::new(-10.0), Angle::new(350.0));
        assert_eq!(Angle::new(-10.0).degrees(), 350.0);
        assert_eq!(Angle::new(-360.0).degrees(), 0.0);
    }

    #[test]
    fn normalization_is_periodic() {
        for v in [-725.0, -10.0, 0.0, 13.5, 180.0, 359.0, 360.0, 1234.0] {
            assert_eq!(Angle::new(v), Angle::new(v + 360.0));
            assert_eq!(Angle::new(v), Angle::new(v - 360.0));

            let n = Angle::new(v).degrees();
            assert!((0.0..360.0).contains(&n), "{} normalized to {}", v, n);
        }
    }

    #[test]
    fn arithmetic_stays_normalized() {
        assert_eq!(Angle::new(350.0) + Angle::new(20.0), Angle::new(10.0));
        assert_eq!(Angle::new(10.0) - Angle::new(20.0), Angle::new(350.0));
        assert_eq!(Angle::new(120.0) * 2.0, Angle::new(240.0));
        assert_eq!(Angle::new(200.0) * 2.0, Angle::new(40.0));
        assert_eq!(-Angle::new(90.0), Angle::new(270.0));
    }

    #[test]
    fn tiny_negative_values_stay_below_360() {
        let n = Angle::new(-1e-9).degrees();
        assert!((0.0..360.0).contains(&n));
    }
}
