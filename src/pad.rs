//! GameCube pad layout: button bits, axis ids, and port geometry.
//!
//! Button ids used in binding descriptions are the raw bit values below, and
//! axis ids are the [`PadAxis`] indices. Both are persisted by applications,
//! so the numbers are stable.

/// Number of controller ports on the adapter.
pub const PORT_COUNT: usize = 4;

/// Number of analog axes reported per pad.
pub const AXIS_COUNT: usize = 6;

/// Raw value of a centered axis.
pub const AXIS_CENTER: u8 = 128;

/// Digital buttons, valued by their bit in the adapter's button mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum PadButton {
    Left = 0x0001,
    Right = 0x0002,
    Down = 0x0004,
    Up = 0x0008,
    TriggerZ = 0x0010,
    TriggerR = 0x0020,
    TriggerL = 0x0040,
    A = 0x0100,
    B = 0x0200,
    X = 0x0400,
    Y = 0x0800,
    Start = 0x1000,
    /// Not a physical button. Marks a binding that reads an axis as a button.
    Stick = 0x2000,
}

/// Tie-break table for button capture: when one sample carries several
/// pressed buttons, the earliest entry here wins.
pub const CAPTURE_PRIORITY: [PadButton; 12] = [
    PadButton::A,
    PadButton::B,
    PadButton::X,
    PadButton::Y,
    PadButton::Down,
    PadButton::Left,
    PadButton::Right,
    PadButton::Up,
    PadButton::TriggerL,
    PadButton::TriggerR,
    PadButton::TriggerZ,
    PadButton::Start,
];

impl PadButton {
    #[inline]
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Looks up a physical button by its exact bit value.
    ///
    /// The [`PadButton::Stick`] sentinel and multi-bit values return `None`.
    pub fn from_bits(bits: u16) -> Option<Self> {
        CAPTURE_PRIORITY.iter().copied().find(|b| b.bits() == bits)
    }

    /// First button of `mask` in [`CAPTURE_PRIORITY`] order.
    pub fn first_pressed(mask: u16) -> Option<Self> {
        CAPTURE_PRIORITY
            .iter()
            .copied()
            .find(|b| mask & b.bits() != 0)
    }
}

/// Analog axes in adapter report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PadAxis {
    StickX = 0,
    StickY = 1,
    SubstickX = 2,
    SubstickY = 3,
    TriggerLeft = 4,
    TriggerRight = 5,
}

impl PadAxis {
    pub const ALL: [PadAxis; AXIS_COUNT] = [
        PadAxis::StickX,
        PadAxis::StickY,
        PadAxis::SubstickX,
        PadAxis::SubstickY,
        PadAxis::TriggerLeft,
        PadAxis::TriggerRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_prefers_face_buttons() {
        let mask = PadButton::B.bits() | PadButton::A.bits() | PadButton::Start.bits();
        assert_eq!(PadButton::first_pressed(mask), Some(PadButton::A));

        let mask = PadButton::TriggerZ.bits() | PadButton::TriggerL.bits();
        assert_eq!(PadButton::first_pressed(mask), Some(PadButton::TriggerL));
    }

    #[test]
    fn stick_sentinel_is_not_a_physical_button() {
        assert_eq!(PadButton::first_pressed(PadButton::Stick.bits()), None);
        assert_eq!(PadButton::from_bits(PadButton::Stick.bits()), None);
        assert_eq!(PadButton::from_bits(0x0300), None);
        assert_eq!(PadButton::from_bits(0x0800), Some(PadButton::Y));
    }

    #[test]
    fn axis_lookup_rejects_out_of_range() {
        assert_eq!(PadAxis::from_index(3), Some(PadAxis::SubstickY));
        assert_eq!(PadAxis::from_index(6), None);
        assert_eq!(PadAxis::from_index(-1), None);
    }
}
