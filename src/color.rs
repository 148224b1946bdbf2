//! Dataset colors: random translucent RGBA for series, fixed palette for bars.

use rand::Rng;
use std::fmt;

/// Bar palette of the weekday and comparison charts.
pub const BAR_PALETTE: [&str; 5] = ["#3e95cd", "#8e5ea2", "#3cba9f", "#e8c3b9", "#c45850"];

/// RGBA color with the alpha channel stored in tenths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in tenths, 0..=10.
    pub alpha_tenths: u8,
}

impl Rgba {
    /// Create a new RGBA color; `alpha_tenths` is clamped to 10.
    pub fn new(r: u8, g: u8, b: u8, alpha_tenths: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha_tenths: alpha_tenths.min(10),
        }
    }

    pub fn alpha(&self) -> f64 {
        f64::from(self.alpha_tenths) / 10.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.1})", self.r, self.g, self.b, self.alpha())
    }
}

/// Generate a random translucent color.
///
/// Each channel is `round(u * 255)` and alpha is `u` rounded to one decimal,
/// with `u` uniform in `[0, 1)`.
pub fn random_color<R: Rng>(rng: &mut R) -> Rgba {
    let mut channel = || (rng.random::<f64>() * 255.0).round() as u8;
    let (r, g, b) = (channel(), channel(), channel());
    let alpha_tenths = (rng.random::<f64>() * 10.0).round() as u8;
    Rgba::new(r, g, b, alpha_tenths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn display_has_one_decimal_alpha() {
        assert_eq!(Rgba::new(1, 2, 3, 10).to_string(), "rgba(1, 2, 3, 1.0)");
        assert_eq!(Rgba::new(255, 0, 128, 3).to_string(), "rgba(255, 0, 128, 0.3)");
        assert_eq!(Rgba::new(0, 0, 0, 42).alpha_tenths, 10);
    }

    #[test]
    fn random_colors_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let c = random_color(&mut rng);
            assert!(c.alpha_tenths <= 10);
            let a = c.alpha();
            assert!((0.0..=1.0).contains(&a));
            assert!(((a * 10.0).round() - a * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn same_seed_same_colors() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(random_color(&mut a), random_color(&mut b));
        }
    }
}
