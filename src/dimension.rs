//! The seven UCUM base-dimension axes and the vector space over them.
//!
//! UCUM's base axes are Length, Mass, Time, plane-Angle, Temperature, electric
//! Charge and Luminous intensity -- notably *not* the SI base set: `mol` is a
//! ratio-derived unit (scaled by Avogadro's number) rather than its own axis,
//! and there is no "amount of substance" axis at all.

use core::fmt;
use core::ops::{Add, Neg, Sub};

/// Index order of the seven base axes within [`Dimension`]'s internal array.
pub const AXES: [Axis; 7] = [
    Axis::Length,
    Axis::Mass,
    Axis::Time,
    Axis::Angle,
    Axis::Temperature,
    Axis::Charge,
    Axis::LuminousIntensity,
];

/// One of the seven UCUM base dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Length,
    Mass,
    Time,
    Angle,
    Temperature,
    Charge,
    LuminousIntensity,
}

impl Axis {
    const fn index(self) -> usize {
        match self {
            Axis::Length => 0,
            Axis::Mass => 1,
            Axis::Time => 2,
            Axis::Angle => 3,
            Axis::Temperature => 4,
            Axis::Charge => 5,
            Axis::LuminousIntensity => 6,
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Axis::Length => "L",
            Axis::Mass => "M",
            Axis::Time => "T",
            Axis::Angle => "A",
            Axis::Temperature => "\u{398}",
            Axis::Charge => "Q",
            Axis::LuminousIntensity => "F",
        }
    }
}

/// A dimension vector: exponent of each of the seven base axes.
///
/// Stored densely as `[i8; 7]` -- the axis set is fixed and small, so a dense
/// array is simpler and faster than a sparse map while still upholding "no
/// zero entries" at the observable level (equality and [`Dimension::is_dimensionless`]
/// treat a zero entry as absent).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension(pub [i8; 7]);

impl Dimension {
    /// The dimensionless vector (all axes zero).
    pub const ZERO: Dimension = Dimension([0; 7]);

    /// Construct a dimension with exactly one axis set to 1 (a base atom).
    pub const fn base(axis: Axis) -> Dimension {
        let mut v = [0i8; 7];
        v[axis.index()] = 1;
        Dimension(v)
    }

    /// Construct a dimension directly from a `[L, M, T, A, \u{398}, Q, F]` array.
    pub const fn from_array(v: [i8; 7]) -> Dimension {
        Dimension(v)
    }

    pub const fn is_dimensionless(&self) -> bool {
        let v = self.0;
        v[0] == 0 && v[1] == 0 && v[2] == 0 && v[3] == 0 && v[4] == 0 && v[5] == 0 && v[6] == 0
    }

    /// Element-wise sum (used when multiplying units).
    pub fn add(self, other: Dimension) -> Dimension {
        let mut out = [0i8; 7];
        for i in 0..7 {
            out[i] = self.0[i] + other.0[i];
        }
        Dimension(out)
    }

    /// Element-wise difference (used when dividing units).
    pub fn sub(self, other: Dimension) -> Dimension {
        let mut out = [0i8; 7];
        for i in 0..7 {
            out[i] = self.0[i] - other.0[i];
        }
        Dimension(out)
    }

    /// Scale every axis by an integer exponent (used for unit exponentiation).
    pub fn scale(self, k: i32) -> Dimension {
        let mut out = [0i8; 7];
        for i in 0..7 {
            out[i] = (self.0[i] as i32 * k) as i8;
        }
        Dimension(out)
    }

    pub fn negate(self) -> Dimension {
        self.scale(-1)
    }
}

impl Add for Dimension {
    type Output = Dimension;
    fn add(self, rhs: Dimension) -> Dimension {
        Dimension::add(self, rhs)
    }
}

impl Sub for Dimension {
    type Output = Dimension;
    fn sub(self, rhs: Dimension) -> Dimension {
        Dimension::sub(self, rhs)
    }
}

impl Neg for Dimension {
    type Output = Dimension;
    fn neg(self) -> Dimension {
        self.negate()
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::ZERO
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let mut first = true;
        for axis in AXES {
            let e = self.0[axis.index()];
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "\u{b7}")?;
            }
            first = false;
            if e == 1 {
                write!(f, "{}", axis.symbol())?;
            } else {
                write!(f, "{}{}", axis.symbol(), e)?;
            }
        }
        Ok(())
    }
}
