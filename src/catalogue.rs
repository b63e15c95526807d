//! Static prefix and atom tables.
//!
//! Hand-authored rather than generated from `ucum-essence.xml` at build time:
//! XML-to-catalogue extraction is out of scope for this engine, and the XML
//! source is not one of its inputs. Lookup is O(1) via a `phf` map, built
//! once at compile time.
//!
//! The table below is not the full ~300-atom UCUM essence; it is a curated
//! subset spanning every atom class, every special function, and every
//! concrete scenario this crate is expected to resolve. Extending it is a
//! one-line data addition, never a code change.

use crate::dimension::{Axis, Dimension};
use crate::special::SpecialFunction;

/// A metric prefix, e.g. `k` (kilo) or `m` (milli).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prefix {
    pub code: &'static str,
    pub name: &'static str,
    pub factor: f64,
}

/// How an atom's value is defined.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtomDef {
    /// Declares one of the seven base dimension axes.
    Base(Axis),
    /// `value = factor * ref_unit`, where `ref_unit` is re-parsed on demand.
    Ratio { factor: f64, ref_unit: &'static str },
    /// `value = function(factor * ref_unit)`.
    Special {
        function: SpecialFunction,
        factor: f64,
        ref_unit: &'static str,
    },
    /// Dimensionless, not interconvertible with any other atom (including
    /// other arbitrary atoms); identity is carried by atom code.
    Arbitrary,
}

/// A UCUM unit atom.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atom {
    pub code: &'static str,
    pub print_symbol: &'static str,
    pub class: &'static str,
    pub is_metric: bool,
    pub property: &'static str,
    pub definition: AtomDef,
}

impl Atom {
    pub const fn is_special(&self) -> bool {
        matches!(self.definition, AtomDef::Special { .. })
    }

    pub const fn is_arbitrary(&self) -> bool {
        matches!(self.definition, AtomDef::Arbitrary)
    }

    pub const fn is_base(&self) -> bool {
        matches!(self.definition, AtomDef::Base(_))
    }
}

macro_rules! atom {
    ($code:expr, $symbol:expr, $class:expr, $metric:expr, $property:expr, base($axis:expr)) => {
        Atom {
            code: $code,
            print_symbol: $symbol,
            class: $class,
            is_metric: $metric,
            property: $property,
            definition: AtomDef::Base($axis),
        }
    };
    ($code:expr, $symbol:expr, $class:expr, $metric:expr, $property:expr, ratio($factor:expr, $reference:expr)) => {
        Atom {
            code: $code,
            print_symbol: $symbol,
            class: $class,
            is_metric: $metric,
            property: $property,
            definition: AtomDef::Ratio {
                factor: $factor,
                ref_unit: $reference,
            },
        }
    };
    ($code:expr, $symbol:expr, $class:expr, $metric:expr, $property:expr, special($func:expr, $factor:expr, $reference:expr)) => {
        Atom {
            code: $code,
            print_symbol: $symbol,
            class: $class,
            is_metric: $metric,
            property: $property,
            definition: AtomDef::Special {
                function: $func,
                factor: $factor,
                ref_unit: $reference,
            },
        }
    };
    ($code:expr, $symbol:expr, $class:expr, $metric:expr, $property:expr, arbitrary) => {
        Atom {
            code: $code,
            print_symbol: $symbol,
            class: $class,
            is_metric: $metric,
            property: $property,
            definition: AtomDef::Arbitrary,
        }
    };
}

pub static PREFIXES: phf::Map<&'static str, Prefix> = phf::phf_map! {
    "Y" => Prefix { code: "Y", name: "yotta", factor: 1e24 },
    "Z" => Prefix { code: "Z", name: "zetta", factor: 1e21 },
    "E" => Prefix { code: "E", name: "exa", factor: 1e18 },
    "P" => Prefix { code: "P", name: "peta", factor: 1e15 },
    "T" => Prefix { code: "T", name: "tera", factor: 1e12 },
    "G" => Prefix { code: "G", name: "giga", factor: 1e9 },
    "M" => Prefix { code: "M", name: "mega", factor: 1e6 },
    "k" => Prefix { code: "k", name: "kilo", factor: 1e3 },
    "h" => Prefix { code: "h", name: "hecto", factor: 1e2 },
    "da" => Prefix { code: "da", name: "deka", factor: 1e1 },
    "d" => Prefix { code: "d", name: "deci", factor: 1e-1 },
    "c" => Prefix { code: "c", name: "centi", factor: 1e-2 },
    "m" => Prefix { code: "m", name: "milli", factor: 1e-3 },
    "u" => Prefix { code: "u", name: "micro", factor: 1e-6 },
    "n" => Prefix { code: "n", name: "nano", factor: 1e-9 },
    "p" => Prefix { code: "p", name: "pico", factor: 1e-12 },
    "f" => Prefix { code: "f", name: "femto", factor: 1e-15 },
    "a" => Prefix { code: "a", name: "atto", factor: 1e-18 },
    "z" => Prefix { code: "z", name: "zepto", factor: 1e-21 },
    "y" => Prefix { code: "y", name: "yocto", factor: 1e-24 },
    "Ki" => Prefix { code: "Ki", name: "kibi", factor: 1024.0 },
    "Mi" => Prefix { code: "Mi", name: "mebi", factor: 1_048_576.0 },
    "Gi" => Prefix { code: "Gi", name: "gibi", factor: 1_073_741_824.0 },
    "Ti" => Prefix { code: "Ti", name: "tebi", factor: 1_099_511_627_776.0 },
};

/// Ordered base-axis codes, matching `Axis`'s declaration order.
pub const BASE_AXIS_CODES: [&str; 7] = ["m", "g", "s", "rad", "K", "C", "cd"];

pub static ATOMS: phf::Map<&'static str, Atom> = phf::phf_map! {
    // --- base atoms, one per axis -----------------------------------------
    "m" => atom!("m", "m", "si", true, "length", base(Axis::Length)),
    "g" => atom!("g", "g", "si", true, "mass", base(Axis::Mass)),
    "s" => atom!("s", "s", "si", true, "time", base(Axis::Time)),
    "rad" => atom!("rad", "rad", "si", true, "plane angle", base(Axis::Angle)),
    "K" => atom!("K", "K", "si", true, "temperature", base(Axis::Temperature)),
    "C" => atom!("C", "C", "si", true, "electric charge", base(Axis::Charge)),
    "cd" => atom!("cd", "cd", "si", true, "luminous intensity", base(Axis::LuminousIntensity)),

    // --- dimensionless ratio -------------------------------------------------
    "sr" => atom!("sr", "sr", "si", true, "solid angle", ratio(1.0, "rad2")),
    "mol" => atom!("mol", "mol", "si", true, "amount of substance", ratio(6.0221367e23, "1")),
    // "the number ten for arbitrary powers": base magnitude 10, combined with
    // the ordinary unit-exponent machinery to express `10*23`, `10^-6`, etc.
    "10*" => atom!("10*", "10*", "misc", false, "number", ratio(10.0, "1")),
    "10^" => atom!("10^", "10^", "misc", false, "number", ratio(10.0, "1")),

    // --- SI derived ------------------------------------------------------
    "Hz" => atom!("Hz", "Hz", "si", true, "frequency", ratio(1.0, "s-1")),
    "N" => atom!("N", "N", "si", true, "force", ratio(1.0, "kg.m/s2")),
    "Pa" => atom!("Pa", "Pa", "si", true, "pressure", ratio(1.0, "N/m2")),
    "J" => atom!("J", "J", "si", true, "energy", ratio(1.0, "N.m")),
    "W" => atom!("W", "W", "si", true, "power", ratio(1.0, "J/s")),
    "A" => atom!("A", "A", "si", true, "electric current", ratio(1.0, "C/s")),
    "V" => atom!("V", "V", "si", true, "electric potential", ratio(1.0, "J/C")),
    "Ohm" => atom!("Ohm", "\u{3a9}", "si", true, "electric resistance", ratio(1.0, "V/A")),
    "F" => atom!("F", "F", "si", true, "electric capacitance", ratio(1.0, "C/V")),
    "S" => atom!("S", "S", "si", true, "electric conductance", ratio(1.0, "A/V")),
    "Wb" => atom!("Wb", "Wb", "si", true, "magnetic flux", ratio(1.0, "V.s")),
    "T" => atom!("T", "T", "si", true, "magnetic flux density", ratio(1.0, "Wb/m2")),
    "H" => atom!("H", "H", "si", true, "inductance", ratio(1.0, "Wb/A")),
    "lm" => atom!("lm", "lm", "si", true, "luminous flux", ratio(1.0, "cd.sr")),
    "lx" => atom!("lx", "lx", "si", true, "illuminance", ratio(1.0, "lm/m2")),
    "Bq" => atom!("Bq", "Bq", "si", true, "radioactive activity", ratio(1.0, "s-1")),
    "Gy" => atom!("Gy", "Gy", "si", true, "absorbed dose", ratio(1.0, "J/kg")),
    "Sv" => atom!("Sv", "Sv", "si", true, "dose equivalent", ratio(1.0, "J/kg")),
    "kat" => atom!("kat", "kat", "si", true, "catalytic activity", ratio(1.0, "mol/s")),
    "L" => atom!("L", "l", "si", true, "volume", ratio(1.0, "dm3")),

    // --- non-SI ratio atoms ------------------------------------------------
    "min" => atom!("min", "min", "iso1000", false, "time", ratio(60.0, "s")),
    "h" => atom!("h", "h", "iso1000", false, "time", ratio(3600.0, "s")),
    "d" => atom!("d", "d", "iso1000", false, "time", ratio(86400.0, "s")),
    "a" => atom!("a", "a", "iso1000", false, "time", ratio(365.25 * 86400.0, "s")),
    "wk" => atom!("wk", "wk", "iso1000", false, "time", ratio(7.0, "d")),
    "deg" => atom!("deg", "\u{b0}", "iso1000", false, "plane angle", ratio(core::f64::consts::PI / 180.0, "rad")),
    "gon" => atom!("gon", "gon", "iso1000", false, "plane angle", ratio(core::f64::consts::PI / 200.0, "rad")),
    "eV" => atom!("eV", "eV", "iso1000", true, "energy", ratio(1.602176634e-19, "J")),
    "u" => atom!("u", "u", "iso1000", true, "mass", ratio(1.6605402e-24, "g")),
    "%" => atom!("%", "%", "misc", false, "fraction", ratio(1.0e-2, "1")),

    // --- CGS -----------------------------------------------------------
    "dyn" => atom!("dyn", "dyn", "cgs", true, "force", ratio(1.0e-5, "N")),
    "erg" => atom!("erg", "erg", "cgs", true, "energy", ratio(1.0e-7, "J")),
    "P" => atom!("P", "P", "cgs", true, "dynamic viscosity", ratio(1.0, "dyn.s/cm2")),
    "St" => atom!("St", "St", "cgs", true, "kinematic viscosity", ratio(1.0, "cm2/s")),
    "Gal" => atom!("Gal", "Gal", "cgs", true, "acceleration", ratio(1.0, "cm/s2")),
    "Mx" => atom!("Mx", "Mx", "cgs", true, "magnetic flux", ratio(1.0e-8, "Wb")),
    "G" => atom!("G", "G", "cgs", true, "magnetic flux density", ratio(1.0e-4, "T")),
    "Oe" => atom!("Oe", "Oe", "cgs", true, "magnetic field strength", ratio(79.5774715459, "A/m")),

    // --- customary / clinical -------------------------------------------
    "[in_i]" => atom!("[in_i]", "in", "customary", false, "length", ratio(2.54, "cm")),
    "[ft_i]" => atom!("[ft_i]", "ft", "customary", false, "length", ratio(12.0, "[in_i]")),
    "[yd_i]" => atom!("[yd_i]", "yd", "customary", false, "length", ratio(3.0, "[ft_i]")),
    "[mi_i]" => atom!("[mi_i]", "mi", "customary", false, "length", ratio(5280.0, "[ft_i]")),
    "[lb_av]" => atom!("[lb_av]", "lb", "customary", false, "mass", ratio(453.59237, "g")),
    "[oz_av]" => atom!("[oz_av]", "oz", "customary", false, "mass", ratio(0.0625, "[lb_av]")),
    "[gal_us]" => atom!("[gal_us]", "gal", "customary", false, "volume", ratio(3.785411784, "L")),
    "eq" => atom!("eq", "eq", "chemical", true, "amount of substance", ratio(1.0, "mol")),
    "osm" => atom!("osm", "osm", "chemical", true, "amount of substance", ratio(1.0, "mol")),

    // --- special (non-ratio) atoms --------------------------------------
    "Cel" => atom!("Cel", "\u{b0}C", "si", false, "temperature", special(SpecialFunction::Cel, 1.0, "K")),
    "[degF]" => atom!("[degF]", "\u{b0}F", "customary", false, "temperature", special(SpecialFunction::DegF, 1.0, "K")),
    "[degRe]" => atom!("[degRe]", "\u{b0}Re", "customary", false, "temperature", special(SpecialFunction::DegRe, 1.0, "K")),
    "[pH]" => atom!("[pH]", "pH", "chemical", false, "acidity", special(SpecialFunction::Ph, 1.0, "mol/L")),
    "Np" => atom!("Np", "Np", "misc", false, "level", special(SpecialFunction::Ln, 1.0, "1")),
    "B" => atom!("B", "B", "misc", false, "level", special(SpecialFunction::Lg, 1.0, "1")),
    "dB" => atom!("dB", "dB", "misc", false, "level", special(SpecialFunction::Lg, 0.1, "1")),
    "B[SPL]" => atom!("B[SPL]", "B[SPL]", "misc", false, "sound pressure level", special(SpecialFunction::Lg, 2.0e-5, "Pa")),
    "B[V]" => atom!("B[V]", "B[V]", "misc", false, "voltage level", special(SpecialFunction::LgTimes2, 1.0, "V")),
    "B[W]" => atom!("B[W]", "B[W]", "misc", false, "power level", special(SpecialFunction::Lg, 1.0, "W")),
    "[p'diop]" => atom!("[p'diop]", "PD", "clinical", false, "refraction", special(SpecialFunction::TanTimes100, 1.0, "rad")),
    "[hp'_X]" => atom!("[hp'_X]", "hp_X", "homeopathic", false, "dilution", special(SpecialFunction::HpX, 1.0, "1")),
    "[hp'_C]" => atom!("[hp'_C]", "hp_C", "homeopathic", false, "dilution", special(SpecialFunction::HpC, 1.0, "1")),
    "[hp'_M]" => atom!("[hp'_M]", "hp_M", "homeopathic", false, "dilution", special(SpecialFunction::HpM, 1.0, "1")),
    "[hp'_Q]" => atom!("[hp'_Q]", "hp_Q", "homeopathic", false, "dilution", special(SpecialFunction::HpQ, 1.0, "1")),

    // --- arbitrary units --------------------------------------------------
    "[iU]" => atom!("[iU]", "IU", "arbitrary", false, "arbitrary", arbitrary),
    "[IU]" => atom!("[IU]", "IU", "arbitrary", false, "arbitrary", arbitrary),
    "[arb'U]" => atom!("[arb'U]", "arb.U.", "arbitrary", false, "arbitrary", arbitrary),
};

/// Case-sensitive prefix lookup.
pub fn prefix(code: &str) -> Option<&'static Prefix> {
    PREFIXES.get(code)
}

/// Case-sensitive atom lookup.
pub fn atom(code: &str) -> Option<&'static Atom> {
    ATOMS.get(code)
}

/// The dimension that a base atom's axis corresponds to. Used by the
/// canonicalizer; only meaningful for atoms with `AtomDef::Base`.
pub fn base_dimension(axis: Axis) -> Dimension {
    Dimension::base(axis)
}
