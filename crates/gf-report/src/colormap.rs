//! Scalar to colour mapping for contour images.

use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMap {
    #[default]
    Jet,
    CoolWarm,
    Grayscale,
}

impl ColourMap {
    /// Colour for `t` in `0..=1`; values outside are clamped.
    pub fn colour(self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            ColourMap::Jet => {
                let channel = |offset: f64| unit_to_byte(1.5 - (4.0 * t - offset).abs());
                RGBColor(channel(3.0), channel(2.0), channel(1.0))
            }
            ColourMap::CoolWarm => {
                const COOL: [f64; 3] = [59.0, 76.0, 192.0];
                const MID: [f64; 3] = [221.0, 221.0, 221.0];
                const WARM: [f64; 3] = [180.0, 4.0, 38.0];
                let (from, to, s) = if t < 0.5 {
                    (COOL, MID, t * 2.0)
                } else {
                    (MID, WARM, (t - 0.5) * 2.0)
                };
                let mix = |k: usize| (from[k] + (to[k] - from[k]) * s).round() as u8;
                RGBColor(mix(0), mix(1), mix(2))
            }
            ColourMap::Grayscale => {
                let v = unit_to_byte(t);
                RGBColor(v, v, v)
            }
        }
    }

    /// Colour of the filled-contour band containing `t`, with `levels` bands.
    pub fn banded(self, t: f64, levels: usize) -> RGBColor {
        let levels = levels.max(1);
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let band = ((t * levels as f64).floor() as usize).min(levels - 1);
        self.colour((band as f64 + 0.5) / levels as f64)
    }
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Position of `value` within `lo..=hi`; a flat range maps to the middle.
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span.abs() <= f64::EPSILON * hi.abs().max(lo.abs()).max(1.0) {
        0.5
    } else {
        (value - lo) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jet_ends() {
        assert_eq!(ColourMap::Jet.colour(0.0), RGBColor(0, 0, 128));
        assert_eq!(ColourMap::Jet.colour(1.0), RGBColor(128, 0, 0));
        assert_eq!(ColourMap::Jet.colour(0.5), RGBColor(128, 255, 128));
    }

    #[test]
    fn grayscale_is_linear() {
        assert_eq!(ColourMap::Grayscale.colour(0.0), RGBColor(0, 0, 0));
        assert_eq!(ColourMap::Grayscale.colour(1.0), RGBColor(255, 255, 255));
        assert_eq!(ColourMap::Grayscale.colour(2.0), RGBColor(255, 255, 255));
    }

    #[test]
    fn coolwarm_midpoint() {
        assert_eq!(ColourMap::CoolWarm.colour(0.5), RGBColor(221, 221, 221));
    }

    #[test]
    fn bands_collapse_nearby_values() {
        let m = ColourMap::Jet;
        assert_eq!(m.banded(0.101, 10), m.banded(0.199, 10));
        assert_ne!(m.banded(0.05, 10), m.banded(0.95, 10));
        assert_eq!(m.banded(1.0, 10), m.banded(0.95, 10));
    }

    #[test]
    fn flat_range_normalizes_to_middle() {
        assert_eq!(normalize(3.0, 3.0, 3.0), 0.5);
        assert_eq!(normalize(25.0, 0.0, 100.0), 0.25);
    }
}
