use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign};
use std::ops::{Div, Mul};

/// A length in PDF points (1/72 of an inch). All page coordinates, font sizes, and
/// widths in this crate are expressed in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Display,
    From,
    Into,
)]
#[display("{_0}")]
pub struct Pt(pub f32);

/// A length in inches, convertible into [Pt]
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Self::Output {
        Pt(self.0 * rhs)
    }
}

impl Mul<Pt> for Pt {
    type Output = Pt;

    fn mul(self, rhs: Pt) -> Self::Output {
        Pt(self.0 * rhs.0)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Self::Output {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = Pt;

    fn div(self, rhs: Pt) -> Self::Output {
        Pt(self.0 / rhs.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        let pt: Pt = In(8.5).into();
        assert_eq!(pt, Pt(612.0));
    }

    #[test]
    fn points_scale_and_compare() {
        let half = Pt(612.0) / 2.0;
        assert_eq!(half, Pt(306.0));
        assert!(Pt(10.0) * 1.5 > Pt(14.9));
        assert_eq!(Pt(10.0) / Pt(4.0) * 2.0, Pt(5.0));
    }
}
