//! This file defines [`ColorModel`], the hue/saturation/luminosity color that everything else in
//! this crate is built on, along with [`RGBColor`], the plain RGB triple it converts to, and the
//! parsing of hex strings like `"#FF00FF"`.
//!
//! The HSL used here is the usual transformation of RGB into a cylinder: hue is an angle in
//! degrees, saturation and luminosity are fractions between 0 and 1. Luminosity runs from black
//! through the fully saturated color at 0.5 to white at 1, which is why the same saturation can
//! mean very different amounts of actual colorfulness depending on luminosity: that is what
//! [`chroma`](ColorModel::chroma) measures.
//!
//! A `ColorModel` is a loose container. The hue is not wrapped, and saturation and luminosity are
//! not clamped, until the color is converted to RGB. This lets colors be added, subtracted, and
//! shifted freely: an accent that runs a hue past 360 degrees, or a brightness boost that runs
//! luminosity past 1, is only folded back into range when it is actually displayed.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use float_cmp::ApproxEq;
use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::Coord;

lazy_static! {
    static ref HEX_DIGITS: Regex = Regex::new("^[0-9A-Fa-f]{6}$").unwrap();
}

/// An error in parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ColorParseError {
    /// The string, once a leading `#` is removed, is not exactly six characters long.
    #[error("hex color must have exactly 6 digits after an optional '#', found {found}")]
    InvalidLength {
        /// The number of characters actually found.
        found: usize,
    },
    /// The string has the right length but is not made of hexadecimal digits.
    #[error("invalid hex digits in color {0:?}")]
    InvalidDigits(String),
}

/// A color in RGB, with each channel a fraction between 0 and 1. This is what a [`ColorModel`]
/// turns into for display: see [`ColorModel::rgb`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl RGBColor {
    /// Converts each channel to a byte by scaling to 0-255 and truncating. Anything that escapes
    /// that range wraps around modulo 256 rather than saturating.
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        fn byte(x: f64) -> u8 {
            ((x * 255.0) as i64).rem_euclid(256) as u8
        }
        (byte(self.r), byte(self.g), byte(self.b))
    }

    /// The uppercase hex string for this color, like `"#FF00FF"`.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.to_bytes();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Whether every channel is within `epsilon` of the other color's.
    pub fn approx_equal(&self, other: &RGBColor, epsilon: f64) -> bool {
        self.r.approx_eq(&other.r, epsilon, 2)
            && self.g.approx_eq(&other.g, epsilon, 2)
            && self.b.approx_eq(&other.b, epsilon, 2)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// A color as hue, saturation, and luminosity.
///
/// # Example
/// ```
/// # use colorwheel::color::ColorModel;
/// let magenta: ColorModel = "#FF00FF".parse().unwrap();
/// assert!((magenta.normalized().hue - 300.0).abs() <= 1e-10);
/// assert_eq!(magenta.saturation, 1.0);
/// assert_eq!(magenta.luminosity, 0.5);
/// // push the hue a third of the way around the wheel
/// let shifted = magenta.shifted_hue(120.0);
/// assert_eq!(shifted.hex(), "#FFFF00");
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorModel {
    /// The hue, in degrees. May hold any value: it is wrapped into `[0, 360)` on conversion.
    pub hue: f64,
    /// The saturation, nominally between 0 and 1. Clamped on conversion, never on construction.
    pub saturation: f64,
    /// The luminosity, nominally between 0 and 1. Clamped on conversion, never on construction.
    pub luminosity: f64,
}

impl ColorModel {
    /// Makes a new color from its three components, exactly as given.
    pub fn new(hue: f64, saturation: f64, luminosity: f64) -> ColorModel {
        ColorModel {
            hue,
            saturation,
            luminosity,
        }
    }

    /// Builds a color from three RGB channels. Each channel may either be a fraction between 0 and
    /// 1 or, if it is larger than 1, a value on the 0-255 scale: those are divided by 255. Every
    /// channel is then clamped to `[0, 1]`. Gray, including black and white, gets a hue and
    /// saturation of 0.
    /// # Example
    /// ```
    /// # use colorwheel::color::ColorModel;
    /// let teal = ColorModel::from_rgb(0.0, 128.0, 128.0);
    /// assert!((teal.hue - 180.0).abs() <= 1e-10);
    /// let white = ColorModel::from_rgb(1.0, 1.0, 1.0);
    /// assert_eq!(white.saturation, 0.0);
    /// assert_eq!(white.luminosity, 1.0);
    /// ```
    pub fn from_rgb(r: f64, g: f64, b: f64) -> ColorModel {
        fn unit(x: f64) -> f64 {
            let x = if x > 1.0 { x.min(255.0) / 255.0 } else { x };
            x.max(0.0).min(1.0)
        }
        let (r, g, b) = (unit(r), unit(g), unit(b));

        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let chroma = max_c - min_c;

        // the hue is measured around the hexagon formed by projecting the RGB cube down its
        // black-white diagonal: which sector depends on the largest channel, and the position in
        // the sector on the other two. This is the exact inverse of the sector table in `rgb`.
        let hue = if chroma == 0.0 {
            0.0
        } else if max_c == r {
            (g - b) / chroma * 60.0
        } else if max_c == g {
            (b - r) / chroma * 60.0 + 120.0
        } else {
            (r - g) / chroma * 60.0 + 240.0
        };

        let luminosity = ((min_c + max_c) / 2.0).min(1.0);
        let denominator = 1.0 - (2.0 * luminosity - 1.0).abs();
        // fully black or fully white: saturation is meaningless, so call it 0
        let saturation = if denominator == 0.0 {
            0.0
        } else {
            chroma / denominator
        };

        ColorModel {
            hue,
            saturation,
            luminosity,
        }
    }

    /// Builds a color from three RGB bytes.
    pub fn from_rgb_bytes(r: u8, g: u8, b: u8) -> ColorModel {
        ColorModel::from_rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Parses a six-digit hex string, with or without a leading `#`, such as `"#FF00FF"` or
    /// `"ff00ff"`.
    /// # Errors
    /// Returns [`ColorParseError::InvalidLength`] if the string isn't six characters long once the
    /// `#` is removed, and [`ColorParseError::InvalidDigits`] if those characters aren't hex.
    pub fn from_rgb_string(rgb: &str) -> Result<ColorModel, ColorParseError> {
        let digits = rgb.strip_prefix('#').unwrap_or(rgb);
        let found = digits.chars().count();
        if found != 6 {
            return Err(ColorParseError::InvalidLength { found });
        }
        if !HEX_DIGITS.is_match(digits) {
            return Err(ColorParseError::InvalidDigits(rgb.to_string()));
        }
        // all ASCII now, so byte slicing is safe
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigits(rgb.to_string()))
        };
        Ok(ColorModel::from_rgb_bytes(byte(0)?, byte(1)?, byte(2)?))
    }

    /// The chroma: saturation scaled by how far luminosity is from black or white.
    pub fn chroma(&self) -> f64 {
        (1.0 - (2.0 * self.luminosity - 1.0).abs()) * self.saturation
    }

    /// The 60-degree sector of the color wheel this hue is closest to, numbered 0 (red) through 5
    /// (magenta). Hues 360 degrees apart are always in the same region.
    pub fn region(&self) -> u8 {
        ((self.hue.rem_euclid(360.0) / 60.0).round() as i64).rem_euclid(6) as u8
    }

    /// Whether the luminosity is at least one half.
    pub fn bright(&self) -> bool {
        self.luminosity >= 0.5
    }

    /// Whether the saturation is at least one half.
    pub fn colorful(&self) -> bool {
        self.saturation >= 0.5
    }

    /// Wraps the hue into `[0, 360)` and clamps saturation and luminosity into `[0, 1]`, in place.
    pub fn normalize(&mut self) {
        self.hue = self.hue.rem_euclid(360.0);
        self.saturation = self.saturation.max(0.0).min(1.0);
        self.luminosity = self.luminosity.max(0.0).min(1.0);
    }

    /// A copy of this color with [`normalize`](ColorModel::normalize) applied.
    pub fn normalized(&self) -> ColorModel {
        let mut color = *self;
        color.normalize();
        color
    }

    /// Overwrites every component with those of `other`.
    pub fn copy_from(&mut self, other: &ColorModel) {
        self.hue = other.hue;
        self.saturation = other.saturation;
        self.luminosity = other.luminosity;
    }

    /// Converts to RGB. The color is normalized first, so any stored values work.
    /// # Example
    /// ```
    /// # use colorwheel::color::ColorModel;
    /// let azure = ColorModel::new(210.0, 1.0, 0.5).rgb();
    /// assert_eq!((azure.r, azure.g, azure.b), (0.0, 0.5, 1.0));
    /// ```
    pub fn rgb(&self) -> RGBColor {
        let color = self.normalized();
        let chroma = color.chroma();

        // position on the hexagon: the integer part picks the sector, the fractional part how far
        // the secondary channel has risen or fallen inside it
        let position = color.hue / 60.0;
        // a hue that rounds up to exactly 360 is sector 0
        let sector = (position.floor() as usize) % 6;
        let sub = chroma * (1.0 - (position % 2.0 - 1.0).abs());
        let dom = chroma;

        let [r, g, b] = [
            [dom, sub, 0.0],
            [sub, dom, 0.0],
            [0.0, dom, sub],
            [0.0, sub, dom],
            [sub, 0.0, dom],
            [dom, 0.0, sub],
        ][sector];

        // lift every channel so the average of the largest and smallest is the luminosity
        let offset = color.luminosity - chroma * 0.5;
        RGBColor {
            r: r + offset,
            g: g + offset,
            b: b + offset,
        }
    }

    /// The uppercase hex string for this color, like `"#FF00FF"`.
    pub fn hex(&self) -> String {
        self.rgb().hex()
    }

    /// Component-wise sum.
    pub fn add(&self, other: &ColorModel) -> ColorModel {
        *self + *other
    }

    /// Component-wise difference.
    pub fn subtract(&self, other: &ColorModel) -> ColorModel {
        *self - *other
    }

    /// Component-wise product.
    pub fn multiply(&self, other: &ColorModel) -> ColorModel {
        *self * *other
    }

    /// Component-wise quotient. A zero component in `other` gives a zero in the result.
    pub fn divide(&self, other: &ColorModel) -> ColorModel {
        *self / *other
    }

    /// Moves each component `amount` of the way toward `other`. 0 gives this color, 1 gives
    /// `other`, and values outside of that extrapolate.
    /// # Example
    /// ```
    /// # use colorwheel::color::ColorModel;
    /// let red = ColorModel::new(0.0, 1.0, 0.5);
    /// let green = ColorModel::new(120.0, 1.0, 0.5);
    /// let yellow = red.blend(&green, 0.5);
    /// assert_eq!(yellow, ColorModel::new(60.0, 1.0, 0.5));
    /// ```
    pub fn blend(&self, other: &ColorModel, amount: f64) -> ColorModel {
        let c1: Coord = (*self).into();
        c1.lerp(&(*other).into(), amount).into()
    }

    /// A copy with the hue moved by `delta` degrees.
    pub fn shifted_hue(&self, delta: f64) -> ColorModel {
        ColorModel::new(self.hue + delta, self.saturation, self.luminosity)
    }

    /// A copy with the saturation moved by `delta`.
    pub fn shifted_saturation(&self, delta: f64) -> ColorModel {
        ColorModel::new(self.hue, self.saturation + delta, self.luminosity)
    }

    /// A copy with the luminosity moved by `delta`.
    pub fn shifted_luminosity(&self, delta: f64) -> ColorModel {
        ColorModel::new(self.hue, self.saturation, self.luminosity + delta)
    }

    /// Whether every component is within `epsilon` of the other color's. The components are compared
    /// as stored, so hues 360 degrees apart are *not* considered equal.
    pub fn approx_equal(&self, other: &ColorModel, epsilon: f64) -> bool {
        let c1: Coord = (*self).into();
        c1.approx_equal(&(*other).into(), epsilon)
    }
}

impl From<Coord> for ColorModel {
    fn from(c: Coord) -> ColorModel {
        ColorModel {
            hue: c.x,
            saturation: c.y,
            luminosity: c.z,
        }
    }
}

impl From<ColorModel> for Coord {
    fn from(color: ColorModel) -> Coord {
        Coord {
            x: color.hue,
            y: color.saturation,
            z: color.luminosity,
        }
    }
}

impl From<RGBColor> for ColorModel {
    fn from(rgb: RGBColor) -> ColorModel {
        ColorModel::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl Add for ColorModel {
    type Output = ColorModel;
    fn add(self, rhs: ColorModel) -> ColorModel {
        (Coord::from(self) + Coord::from(rhs)).into()
    }
}

impl Sub for ColorModel {
    type Output = ColorModel;
    fn sub(self, rhs: ColorModel) -> ColorModel {
        (Coord::from(self) - Coord::from(rhs)).into()
    }
}

impl Mul for ColorModel {
    type Output = ColorModel;
    fn mul(self, rhs: ColorModel) -> ColorModel {
        Coord::from(self).component_mul(&rhs.into()).into()
    }
}

impl Div for ColorModel {
    type Output = ColorModel;
    fn div(self, rhs: ColorModel) -> ColorModel {
        Coord::from(self).guarded_div(&rhs.into()).into()
    }
}

impl FromStr for ColorModel {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<ColorModel, ColorParseError> {
        ColorModel::from_rgb_string(s)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_chroma() {
        assert_eq!(ColorModel::new(0.0, 1.0, 0.5).chroma(), 1.0);
        assert_eq!(ColorModel::new(0.0, 1.0, 1.0).chroma(), 0.0);
        assert_eq!(ColorModel::new(0.0, 0.5, 0.25).chroma(), 0.25);
    }

    #[test]
    fn test_region() {
        assert_eq!(ColorModel::new(0.0, 1.0, 0.5).region(), 0);
        assert_eq!(ColorModel::new(29.0, 1.0, 0.5).region(), 0);
        assert_eq!(ColorModel::new(31.0, 1.0, 0.5).region(), 1);
        assert_eq!(ColorModel::new(300.0, 1.0, 0.5).region(), 5);
        assert_eq!(ColorModel::new(-60.0, 1.0, 0.5).region(), 5);
        assert_eq!(ColorModel::new(340.0, 1.0, 0.5).region(), 0);
    }

    #[test]
    fn test_region_periodic() {
        for i in -40..40 {
            let hue = f64::from(i) * 17.5;
            let color = ColorModel::new(hue, 0.5, 0.5);
            let turned = color.shifted_hue(360.0);
            assert_eq!(color.region(), turned.region(), "hue {}", hue);
            assert!(color.region() < 6);
        }
    }

    #[test]
    fn test_normalize() {
        let mut color = ColorModel::new(-24.0, -0.2, 1.1);
        color.normalize();
        assert_eq!(color, ColorModel::new(336.0, 0.0, 1.0));
        let color = ColorModel::new(725.0, 1.5, -3.0).normalized();
        assert_eq!(color, ColorModel::new(5.0, 1.0, 0.0));
    }

    #[test]
    fn test_rgb_in_bounds() {
        for h in 0..52 {
            for s in 0..=10 {
                for l in 0..=10 {
                    let color =
                        ColorModel::new(f64::from(h) * 7.0, f64::from(s) / 10.0, f64::from(l) / 10.0);
                    let rgb = color.rgb();
                    for x in &[rgb.r, rgb.g, rgb.b] {
                        assert!(*x >= -1e-10 && *x <= 1.0 + 1e-10, "{:?} -> {:?}", color, rgb);
                    }
                }
            }
        }
    }

    #[test]
    fn test_rgb_sectors() {
        let expected = [
            (0.0, (1.0, 0.0, 0.0)),
            (60.0, (1.0, 1.0, 0.0)),
            (120.0, (0.0, 1.0, 0.0)),
            (180.0, (0.0, 1.0, 1.0)),
            (240.0, (0.0, 0.0, 1.0)),
            (300.0, (1.0, 0.0, 1.0)),
            (360.0, (1.0, 0.0, 0.0)),
            (-120.0, (0.0, 0.0, 1.0)),
            (30.0, (1.0, 0.5, 0.0)),
            (330.0, (1.0, 0.0, 0.5)),
        ];
        for &(hue, (r, g, b)) in expected.iter() {
            let rgb = ColorModel::new(hue, 1.0, 0.5).rgb();
            assert!(rgb.approx_equal(&RGBColor { r, g, b }, 1e-12), "hue {}: {:?}", hue, rgb);
        }
    }

    #[test]
    fn test_rgb_round_trip() {
        for r in 0..=10 {
            for g in 0..=10 {
                for b in 0..=10 {
                    let orig = RGBColor {
                        r: f64::from(r) / 10.0,
                        g: f64::from(g) / 10.0,
                        b: f64::from(b) / 10.0,
                    };
                    let back = ColorModel::from(orig).rgb();
                    assert!(back.approx_equal(&orig, 1e-9), "{:?} -> {:?}", orig, back);
                }
            }
        }
    }

    #[test]
    fn test_black_and_white() {
        let black = ColorModel::from_rgb(0.0, 0.0, 0.0);
        assert_eq!(black.saturation, 0.0);
        assert_eq!(black.rgb(), RGBColor { r: 0.0, g: 0.0, b: 0.0 });
        let white = ColorModel::from_rgb(1.0, 1.0, 1.0);
        assert_eq!(white.saturation, 0.0);
        assert_eq!(white.rgb(), RGBColor { r: 1.0, g: 1.0, b: 1.0 });
        assert_eq!(white.hex(), "#FFFFFF");
        assert_eq!(black.hex(), "#000000");
    }

    #[test]
    fn test_from_rgb_byte_scale() {
        // anything over 1 is on the 0-255 scale, and gets clamped there too
        let magenta = ColorModel::from_rgb(255.0, 0.0, 255.0);
        assert_eq!(magenta.saturation, 1.0);
        assert_eq!(magenta.luminosity, 0.5);
        let clamped = ColorModel::from_rgb(1000.0, -4.0, 1000.0);
        assert_eq!(clamped, magenta);
    }

    #[test]
    fn test_magenta_from_hex() {
        let magenta = ColorModel::from_rgb_string("#FF00FF").unwrap();
        assert!((magenta.normalized().hue - 300.0).abs() <= 1e-10);
        assert_eq!(magenta.saturation, 1.0);
        assert_eq!(magenta.luminosity, 0.5);
        assert_eq!(magenta.hex(), "#FF00FF");
        assert_eq!(magenta.to_string(), "#FF00FF");
        assert_eq!(ColorModel::from_rgb_string("ff00ff").unwrap(), magenta);
    }

    #[test]
    fn test_hex_parse_errors() {
        assert_eq!(
            ColorModel::from_rgb_string("#FFF"),
            Err(ColorParseError::InvalidLength { found: 3 })
        );
        assert_eq!(
            ColorModel::from_rgb_string("##FF00FF"),
            Err(ColorParseError::InvalidLength { found: 7 })
        );
        assert_eq!(
            "FF00GG".parse::<ColorModel>(),
            Err(ColorParseError::InvalidDigits("FF00GG".to_string()))
        );
        assert_eq!(
            ColorModel::from_rgb_string("+F00FF"),
            Err(ColorParseError::InvalidDigits("+F00FF".to_string()))
        );
    }

    #[test]
    fn test_hex_truncates() {
        assert_eq!(ColorModel::new(210.0, 1.0, 0.5).hex(), "#007FFF");
        assert_eq!(ColorModel::new(120.0, 1.0, 0.25).hex(), "#007F00");
    }

    #[test]
    fn test_arithmetic() {
        let c1 = ColorModel::new(10.0, 0.5, 0.25);
        let c2 = ColorModel::new(20.0, 0.25, 0.5);
        // `Add` is in scope here, so name the inherent method explicitly
        assert_eq!(ColorModel::add(&c1, &c2), ColorModel::new(30.0, 0.75, 0.75));
        assert_eq!(c1 + c2, ColorModel::new(30.0, 0.75, 0.75));
        assert_eq!(c1.subtract(&c2), ColorModel::new(-10.0, 0.25, -0.25));
        assert_eq!(c1.multiply(&c2), ColorModel::new(200.0, 0.125, 0.125));
        assert_eq!(c2.divide(&c1), ColorModel::new(2.0, 0.5, 2.0));
        // operands untouched
        assert_eq!(c1, ColorModel::new(10.0, 0.5, 0.25));
        assert_eq!(c2, ColorModel::new(20.0, 0.25, 0.5));
    }

    #[test]
    fn test_divide_by_zero_component() {
        let quot = ColorModel::new(0.0, 1.0, 1.0).divide(&ColorModel::new(0.0, 2.0, 2.0));
        assert_eq!(quot, ColorModel::new(0.0, 0.5, 0.5));
        assert!(!quot.hue.is_nan());
    }

    #[test]
    fn test_blend() {
        let c1 = ColorModel::new(234.0, 0.6, 0.7);
        let c2 = ColorModel::new(134.0, 1.0, 0.5);
        assert_eq!(c1.blend(&c2, 0.0), c1);
        assert!(c1.blend(&c2, 1.0).approx_equal(&c2, 1e-12));
        assert!(c1
            .blend(&c2, 0.5)
            .approx_equal(&ColorModel::new(184.0, 0.8, 0.6), 1e-12));
        // saturation and luminosity move toward their own counterparts
        let half = ColorModel::new(0.0, 0.0, 1.0).blend(&ColorModel::new(0.0, 1.0, 0.0), 0.25);
        assert_eq!(half, ColorModel::new(0.0, 0.25, 0.75));
        assert!(c1
            .blend(&c2, -1.0)
            .approx_equal(&ColorModel::new(334.0, 0.2, 0.9), 1e-12));
    }

    #[test]
    fn test_shifts() {
        let color = ColorModel::new(100.0, 0.5, 0.5);
        assert_eq!(color.shifted_hue(300.0), ColorModel::new(400.0, 0.5, 0.5));
        assert_eq!(color.shifted_saturation(0.25), ColorModel::new(100.0, 0.75, 0.5));
        assert_eq!(color.shifted_luminosity(-0.25), ColorModel::new(100.0, 0.5, 0.25));
        assert_eq!(color, ColorModel::new(100.0, 0.5, 0.5));
    }

    #[test]
    fn test_copy_from_and_flags() {
        let mut color = ColorModel::default();
        assert!(!color.bright());
        assert!(!color.colorful());
        color.copy_from(&ColorModel::new(45.0, 0.5, 0.5));
        assert_eq!(color, ColorModel::new(45.0, 0.5, 0.5));
        assert!(color.bright());
        assert!(color.colorful());
    }
}
