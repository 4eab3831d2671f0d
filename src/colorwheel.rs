//! A [`Colorwheel`] turns one primary color into a family of related colors by rotating its hue.
//! Three angles control the rotation: `oppose` picks the complement (straight across the wheel by
//! default), `pitch` picks the accents on either side of a color, and `shift` turns every derived
//! hue a little further. All derived colors keep the primary's saturation and luminosity, except
//! for the `*_hue` variants, which put a derived hue onto some other color instead.

use serde_derive::{Deserialize, Serialize};

use crate::color::ColorModel;
use crate::consts::{OPPOSE, PITCH, SHIFT};

/// A primary color and the angles that relate it to the rest of its palette.
///
/// # Example
/// ```
/// # use colorwheel::color::ColorModel;
/// # use colorwheel::colorwheel::Colorwheel;
/// let wheel = Colorwheel::new(ColorModel::new(0.0, 1.0, 0.5));
/// assert_eq!(wheel.compliment().hue, 180.0);
/// assert_eq!(wheel.positive_accent().hue, 60.0);
/// assert_eq!(wheel.negative_accent().hue, -60.0);
/// assert_eq!(wheel.negative_accent().hex(), "#FF00FF");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colorwheel {
    /// The color every other color is derived from.
    pub primary_color: ColorModel,
    /// Degrees between a color and its accents.
    pub pitch: f64,
    /// Degrees between the primary and its complement.
    pub oppose: f64,
    /// Degrees added to every derived hue.
    pub shift: f64,
}

impl Colorwheel {
    /// A wheel around `primary_color` with the default pitch, oppose, and shift.
    pub fn new(primary_color: ColorModel) -> Colorwheel {
        Colorwheel::with_angles(primary_color, PITCH, OPPOSE, SHIFT)
    }

    /// A wheel around `primary_color` with every angle given explicitly.
    pub fn with_angles(primary_color: ColorModel, pitch: f64, oppose: f64, shift: f64) -> Colorwheel {
        Colorwheel {
            primary_color,
            pitch,
            oppose,
            shift,
        }
    }

    /// A copy of the primary color.
    pub fn primary(&self) -> ColorModel {
        self.primary_color
    }

    /// The primary rotated by `oppose + shift`.
    pub fn compliment(&self) -> ColorModel {
        self.primary_color.shifted_hue(self.oppose + self.shift)
    }

    /// The primary rotated by `shift + pitch`.
    pub fn positive_accent(&self) -> ColorModel {
        self.primary_color.shifted_hue(self.shift + self.pitch)
    }

    /// The primary rotated by `shift - pitch`.
    pub fn negative_accent(&self) -> ColorModel {
        self.primary_color.shifted_hue(self.shift - self.pitch)
    }

    /// The complement rotated by `shift + pitch`.
    pub fn compliment_positive_accent(&self) -> ColorModel {
        self.compliment().shifted_hue(self.shift + self.pitch)
    }

    /// The complement rotated by `shift - pitch`.
    pub fn compliment_negative_accent(&self) -> ColorModel {
        self.compliment().shifted_hue(self.shift - self.pitch)
    }

    /// `color` with its hue replaced by the complement's. `color` itself is left alone.
    /// # Example
    /// ```
    /// # use colorwheel::color::ColorModel;
    /// # use colorwheel::colorwheel::Colorwheel;
    /// let wheel = Colorwheel::new(ColorModel::new(30.0, 1.0, 0.5));
    /// let gray_blue = wheel.compliment_hue(&ColorModel::new(0.0, 0.2, 0.8));
    /// assert_eq!(gray_blue, ColorModel::new(210.0, 0.2, 0.8));
    /// ```
    pub fn compliment_hue(&self, color: &ColorModel) -> ColorModel {
        with_hue(color, self.compliment().hue)
    }

    /// `color` with its hue replaced by the complement's positive accent.
    pub fn compliment_positive_accent_hue(&self, color: &ColorModel) -> ColorModel {
        with_hue(color, self.compliment_positive_accent().hue)
    }

    /// `color` with its hue replaced by the complement's negative accent.
    pub fn compliment_negative_accent_hue(&self, color: &ColorModel) -> ColorModel {
        with_hue(color, self.compliment_negative_accent().hue)
    }
}

fn with_hue(color: &ColorModel, hue: f64) -> ColorModel {
    ColorModel::new(hue, color.saturation, color.luminosity)
}
