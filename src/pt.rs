use std::fmt::Display;

/// A length in the caller's size unit (points, pixels, ...).
///
/// Font sizes, measured widths and maximum line widths all share this unit:
/// a width measured at font size `12` is expressed in the same unit as the `12`.
/// `f32::INFINITY` is a valid maximum width and means "never break".
#[derive(Debug, Clone, Copy, Default)]
pub struct Pt(pub(crate) f32);

impl Display for Pt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for Pt {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    pub fn as_f32(self) -> f32 {
        self.0
    }

    /// True when the value is zero, regardless of sign.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns `self` with negative values raised to zero.
    pub(crate) fn clamp_non_negative(self) -> Self {
        if self.0 < 0.0 { Pt::ZERO } else { self }
    }

    /// Relative comparison for measured widths.
    pub fn approx_eq(self, other: Pt, rel_tolerance: f32) -> bool {
        let diff = (self.0 - other.0).abs();
        diff <= rel_tolerance * self.0.abs().max(other.0.abs())
    }
}

impl From<i32> for Pt {
    fn from(value: i32) -> Self {
        Pt(value as f32)
    }
}

// NaN carries no length; infinities pass through.
impl From<f32> for Pt {
    fn from(value: f32) -> Self {
        if value.is_nan() { Pt::ZERO } else { Pt(value) }
    }
}

impl From<f64> for Pt {
    fn from(value: f64) -> Self {
        Pt::from(value as f32)
    }
}

impl std::ops::Add for Pt {
    type Output = Pt;
    fn add(self, rhs: Pt) -> Pt {
        Pt(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Pt {
    fn add_assign(&mut self, rhs: Pt) {
        self.0 += rhs.0;
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}
