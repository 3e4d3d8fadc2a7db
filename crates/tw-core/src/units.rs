// tw-core/src/units.rs

use uom::si::f64::{
    AngularVelocity as UomAngularVelocity, ElectricalResistance as UomElectricalResistance,
    Length as UomLength, Ratio as UomRatio, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type AngularVelocity = UomAngularVelocity;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Resistance = UomElectricalResistance;
pub type Time = UomTime;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn rad_per_s(v: f64) -> AngularVelocity {
    use uom::si::angular_velocity::radian_per_second;
    AngularVelocity::new::<radian_per_second>(v)
}

#[inline]
pub fn ohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Angular frequency [rad/s] of an oscillation at `f_hz`.
#[inline]
pub fn angular_from_hz(f_hz: f64) -> f64 {
    2.0 * core::f64::consts::PI * f_hz
}

pub mod constants {
    use super::*;

    /// Speed of light in vacuum [m/s].
    pub const C_MPS: f64 = 299_792_458.0;

    /// Impedance seen when measuring generator current [Ohm].
    pub const Z0_OHM: f64 = 50.0;

    #[inline]
    pub fn z0() -> Resistance {
        ohm(Z0_OHM)
    }
}
