//! Axis calibration and stick normalization.
//!
//! Raw axes are 8-bit with a nominal center of 128. Two conversions exist:
//!
//! - [`axis_to_button_unit`] divides by the full half-range (128) and is used by
//!   axis-as-button bindings.
//! - [`axis_to_stick_unit`] divides by [`STICK_RANGE`] (95), a calibration value
//!   smaller than the half-range. Real sticks rest a few counts off center and
//!   rarely reach the rails, so full deflection should already read as 1.0.
//!
//! Stick output then goes through a unit-circle clamp and a radial deadzone
//! (see [`apply_radial_deadzone`]).

use crate::pad::AXIS_CENTER;

/// Raw counts from center treated as full stick deflection.
pub const STICK_RANGE: f32 = 95.0;

/// Deflection past which an axis-as-button binding reads as pressed.
pub const AXIS_BUTTON_DEADBAND: f32 = 0.10;

/// Deflection past which [`AnalogDirection`](crate::device::AnalogDirection) queries report true.
pub const DIRECTIONAL_DEADZONE: f32 = 0.4;

/// Largest accepted stick deadzone. Keeps `1 - deadzone` away from zero.
pub const MAX_DEADZONE: f32 = 0.99;

/// Map a raw axis onto `[-1, 1)` using the full half-range.
#[inline]
pub fn axis_to_button_unit(raw: u8) -> f32 {
    (f32::from(raw) - f32::from(AXIS_CENTER)) / 128.0
}

/// Map a raw stick axis into calibrated units. Full travel may exceed 1.0.
#[inline]
pub fn axis_to_stick_unit(raw: u8) -> f32 {
    (f32::from(raw) - f32::from(AXIS_CENTER)) / STICK_RANGE
}

/// Pull points outside the unit circle back onto it, keeping their direction.
pub fn clamp_to_unit_circle(x: f32, y: f32) -> (f32, f32) {
    let r2 = x * x + y * y;
    if r2 > 1.0 {
        let r = r2.sqrt();
        (x / r, y / r)
    } else {
        (x, y)
    }
}

/// Radial deadzone with rescale.
///
/// Magnitudes in `[deadzone, 1]` map linearly onto `[0, 1]` along the same
/// direction; anything at or inside the deadzone (including the exact center)
/// returns `(0, 0)`.
pub fn apply_radial_deadzone(x: f32, y: f32, deadzone: f32) -> (f32, f32) {
    let r = (x * x + y * y).sqrt();
    if r == 0.0 || r <= deadzone {
        return (0.0, 0.0);
    }
    let scale = (r - deadzone) / (1.0 - deadzone) / r;
    (x * scale, y * scale)
}

/// Clamp a configured deadzone into `[0, MAX_DEADZONE]`. NaN becomes 0.
pub fn sanitize_deadzone(deadzone: f32) -> f32 {
    if deadzone.is_nan() {
        return 0.0;
    }
    deadzone.clamp(0.0, MAX_DEADZONE)
}

/// Full stick pipeline: calibrate, clamp to the unit circle, apply the deadzone.
pub fn normalize_stick(raw_x: u8, raw_y: u8, deadzone: f32) -> (f32, f32) {
    let (x, y) = clamp_to_unit_circle(axis_to_stick_unit(raw_x), axis_to_stick_unit(raw_y));
    apply_radial_deadzone(x, y, deadzone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    fn magnitude(x: f32, y: f32) -> f32 {
        (x * x + y * y).sqrt()
    }

    #[test]
    fn center_is_exactly_zero_without_deadzone() {
        assert_eq!(normalize_stick(128, 128, 0.0), (0.0, 0.0));
    }

    #[test]
    fn full_right_rescales_to_one() {
        let (x, y) = normalize_stick(223, 128, 0.2);
        assert!((x - 1.0).abs() < EPS, "x = {x}");
        assert_eq!(y, 0.0);
    }

    #[test]
    fn diagonal_is_clamped_onto_the_circle() {
        let (x, y) = clamp_to_unit_circle(axis_to_stick_unit(223), axis_to_stick_unit(223));
        assert!((magnitude(x, y) - 1.0).abs() < EPS);
        assert!((x - y).abs() < EPS);
    }

    #[test]
    fn inside_deadzone_is_suppressed() {
        // 128 + 0.15 * 95 ~= 142
        assert_eq!(normalize_stick(142, 128, 0.2), (0.0, 0.0));
    }

    #[test]
    fn deadzone_is_sanitized() {
        assert_eq!(sanitize_deadzone(-0.5), 0.0);
        assert_eq!(sanitize_deadzone(2.0), MAX_DEADZONE);
        assert_eq!(sanitize_deadzone(f32::NAN), 0.0);
        assert_eq!(sanitize_deadzone(0.25), 0.25);
    }

    #[test]
    fn button_unit_matches_deadband_edges() {
        assert!(axis_to_button_unit(141) > AXIS_BUTTON_DEADBAND);
        assert!(axis_to_button_unit(140) < AXIS_BUTTON_DEADBAND);
    }

    proptest! {
        #[test]
        fn output_never_leaves_unit_circle(x in 0u8..=255, y in 0u8..=255, dz in 0.0f32..0.99) {
            let (ox, oy) = normalize_stick(x, y, dz);
            prop_assert!(magnitude(ox, oy) <= 1.0 + EPS);
        }

        #[test]
        fn deadzone_preserves_direction(x in 0u8..=255, y in 0u8..=255, dz in 0.0f32..0.99) {
            let (cx, cy) = clamp_to_unit_circle(axis_to_stick_unit(x), axis_to_stick_unit(y));
            let (ox, oy) = apply_radial_deadzone(cx, cy, dz);
            if (ox, oy) != (0.0, 0.0) {
                prop_assert!(ox.signum() == cx.signum() || cx == 0.0);
                prop_assert!(oy.signum() == cy.signum() || cy == 0.0);
            }
        }
    }
}
