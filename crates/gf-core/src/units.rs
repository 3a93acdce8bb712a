// gf-core/src/units.rs

use uom::si::f64::{
    DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength, Ratio as UomRatio,
};

// Public canonical unit types (SI, f64)
pub type Diffusivity = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Ratio = UomRatio;

/// Square centimetres per second expressed in square metres per second.
pub const CM2_PER_S_IN_M2_PER_S: f64 = 1.0e-4;

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn m2ps(v: f64) -> Diffusivity {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    Diffusivity::new::<square_meter_per_second>(v)
}

#[inline]
pub fn cm2ps(v: f64) -> Diffusivity {
    m2ps(v * CM2_PER_S_IN_M2_PER_S)
}

/// Value of a diffusivity in cm^2/s, the unit hydrogel literature reports.
#[inline]
pub fn to_cm2ps(d: Diffusivity) -> f64 {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    d.get::<square_meter_per_second>() / CM2_PER_S_IN_M2_PER_S
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[inline]
pub fn to_unitless(r: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    r.get::<ratio>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = cm(9.5e-6);
        let _d = cm2ps(2.6e-5);
        let _r = unitless(0.2);
    }

    #[test]
    fn diffusivity_round_trips_through_si() {
        let d = cm2ps(1.92e-5);
        assert!((to_cm2ps(d) - 1.92e-5).abs() < 1e-18);
    }

    #[test]
    fn length_ratio_is_dimensionless() {
        use uom::si::ratio::ratio;
        let r: Ratio = cm(4.5e-7) / cm(9.5e-6);
        assert!((r.get::<ratio>() - 4.5e-7 / 9.5e-6).abs() < 1e-12);
        assert_eq!(to_unitless(r), r.get::<ratio>());
    }
}
