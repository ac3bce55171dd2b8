use std::f32::consts::{PI, TAU};

/// Wrap an angle in radians to `[-PI, PI)`.
///
/// Yaw accumulates a small delta every frame; without wrapping a long
/// session walks the float far from zero and rotation increments start
/// losing precision.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_angles_pass_through() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(1.5) - 1.5).abs() < 1e-6);
        assert!((wrap_angle(-1.5) + 1.5).abs() < 1e-6);
    }

    #[test]
    fn full_turns_collapse() {
        assert!(wrap_angle(TAU).abs() < 1e-5);
        assert!((wrap_angle(1.0 + 3.0 * TAU) - 1.0).abs() < 1e-4);
        assert!((wrap_angle(1.0 - 3.0 * TAU) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn result_stays_in_half_open_interval() {
        for i in -100..100 {
            let wrapped = wrap_angle(i as f32 * 0.7);
            assert!((-PI..PI).contains(&wrapped));
        }
    }
}
