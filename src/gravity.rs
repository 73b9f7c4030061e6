//! Angular gravity bias applied to candidate branch angles
//!
//! The bias bends a candidate angle towards (positive factor) or away from (negative factor) the
//! vertical axis, proportionally to how far the candidate already leans. It is added after the
//! candidate angle has been computed; it never rejects or retries a growth outcome.

use crate::angle::Angle;
use crate::Float;

/// Returns the correction to ADD to `candidate`
///
/// The candidate is reflected around the 180° axis to get the two complementary distances to the
/// nearest pole (0°/360° or 180°); the smaller one sets the correction direction, scaled by
/// `gravity_factor` (negated for candidates in the left half-plane, i.e. ≤ 180°). Whichever pole
/// is nearer, the chosen distance is at most 90°, so the correction magnitude never exceeds
/// `90° × |gravity_factor|`.
///
/// Ties between the two distances resolve to the second one; candidates of exactly 0° or 180°
/// produce a zero correction.
pub fn correction(candidate: Angle, gravity_factor: Float) -> Angle {
    if candidate.degrees() > 180.0 {
        let a1 = -candidate;
        let a2 = candidate - Angle::new(180.0);
        let ang = if a1 < a2 { a1 } else { a2 };

        ang * gravity_factor
    } else {
        let a1 = candidate;
        let a2 = Angle::new(180.0) - candidate;
        let ang = if a1 < a2 { a1 } else { a2 };

        ang * -gravity_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bends_towards_vertical_on_both_sides() {
        // 330° is 30° shy of the upward pole; positive factor pulls it the rest of the way.
        assert_eq!(correction(Angle::new(330.0), 0.5), Angle::new(15.0));
        // 30° leans right of vertical, so the pull is negative (counter-clockwise).
        assert_eq!(correction(Angle::new(30.0), 0.5), Angle::new(-15.0));
    }

    #[test]
    fn bends_towards_the_downward_pole_when_nearer() {
        assert_eq!(correction(Angle::new(210.0), 0.5), Angle::new(15.0));
        assert_eq!(correction(Angle::new(150.0), 0.5), Angle::new(-15.0));
    }

    #[test]
    fn poles_resolve_to_zero_correction() {
        assert_eq!(correction(Angle::new(0.0), 0.8), Angle::new(0.0));
        assert_eq!(correction(Angle::new(180.0), 0.8), Angle::new(0.0));
    }

    #[test]
    fn equal_distances_take_the_second_branch() {
        // At 90° both distances are 90°, so the reflected one (a2) wins and the correction is a
        // full quarter-turn scaled by the negated factor.
        assert_eq!(correction(Angle::new(90.0), 1.0), Angle::new(-90.0));
        assert_eq!(correction(Angle::new(270.0), 1.0), Angle::new(90.0));
    }

    #[test]
    fn magnitude_is_bounded_by_a_quarter_turn_times_factor() {
        let factor: Float = 0.7;
        let bound = 90.0 * factor + 1e-3;

        for i in 0..360 {
            let candidate = Angle::new(i as Float);
            let deg = correction(candidate, factor).degrees();
            let magnitude = deg.min(360.0 - deg);

            assert!(
                magnitude <= bound,
                "correction for {}° had magnitude {}",
                i,
                magnitude
            );
        }
    }

    #[test]
    fn negative_factor_flips_the_direction() {
        assert_eq!(correction(Angle::new(330.0), -0.5), Angle::new(-15.0));
        assert_eq!(correction(Angle::new(30.0), -0.5), Angle::new(15.0));
    }
}
