//! Building palettes from a color and a handful of parameters.
//!
//! A [`PaletteGenerator`] owns a collection of named [`RecipeSet`]s and something that supplies the
//! five numeric parameters: pitch, oppose, shift, brightness, and contrast. That something is
//! anything implementing [`PaletteParameters`], whose methods all default to the constants in
//! [`consts`](crate::consts). [`DefaultParameters`] uses those defaults as-is; [`PaletteConfig`]
//! overrides whichever fields are set, and can be deserialized from any serde format.
//!
//! # Example
//! ```
//! # use colorwheel::color::ColorModel;
//! # use colorwheel::generator::{PaletteConfig, PaletteGenerator};
//! let config = PaletteConfig::default().with_pitch(30.0).with_contrast(0.5);
//! let generator = PaletteGenerator::with_parameters(config);
//! let palette = generator.generate(ColorModel::new(0.0, 1.0, 0.5), None).unwrap();
//! assert_eq!(palette.get("positive_accent").unwrap().hue, 30.0);
//! assert_eq!(palette.get("primary").unwrap().saturation, 0.5);
//! assert!(generator.generate(ColorModel::default(), Some("pastel")).is_err());
//! ```

use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::color::ColorModel;
use crate::colorwheel::Colorwheel;
use crate::consts::{BRIGHTNESS, CONTRAST, DEFAULT_PALETTE, OPPOSE, PITCH, SHIFT};
use crate::palette::{Palette, PaletteError, RecipeSet};
use crate::recipes;

/// The source of a generator's numeric parameters. Every method has a default returning the
/// matching constant, so an implementation only overrides what it cares about.
pub trait PaletteParameters {
    /// Degrees between a color and its accents.
    fn pitch(&self) -> f64 {
        PITCH
    }
    /// Degrees between the primary and its complement.
    fn oppose(&self) -> f64 {
        OPPOSE
    }
    /// Degrees added to every derived hue.
    fn shift(&self) -> f64 {
        SHIFT
    }
    /// Luminosity multiplier.
    fn brightness(&self) -> f64 {
        BRIGHTNESS
    }
    /// Saturation multiplier.
    fn contrast(&self) -> f64 {
        CONTRAST
    }
}

/// Every parameter at its default.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DefaultParameters;

impl PaletteParameters for DefaultParameters {}

/// Parameters with optional overrides: any field left as `None` falls back to its default.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Overrides [`PaletteParameters::pitch`].
    pub pitch: Option<f64>,
    /// Overrides [`PaletteParameters::oppose`].
    pub oppose: Option<f64>,
    /// Overrides [`PaletteParameters::shift`].
    pub shift: Option<f64>,
    /// Overrides [`PaletteParameters::brightness`].
    pub brightness: Option<f64>,
    /// Overrides [`PaletteParameters::contrast`].
    pub contrast: Option<f64>,
}

impl PaletteConfig {
    /// Sets the pitch.
    pub fn with_pitch(mut self, pitch: f64) -> PaletteConfig {
        self.pitch = Some(pitch);
        self
    }

    /// Sets the oppose angle.
    pub fn with_oppose(mut self, oppose: f64) -> PaletteConfig {
        self.oppose = Some(oppose);
        self
    }

    /// Sets the shift.
    pub fn with_shift(mut self, shift: f64) -> PaletteConfig {
        self.shift = Some(shift);
        self
    }

    /// Sets the brightness.
    pub fn with_brightness(mut self, brightness: f64) -> PaletteConfig {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the contrast.
    pub fn with_contrast(mut self, contrast: f64) -> PaletteConfig {
        self.contrast = Some(contrast);
        self
    }
}

impl PaletteParameters for PaletteConfig {
    fn pitch(&self) -> f64 {
        self.pitch.unwrap_or(PITCH)
    }
    fn oppose(&self) -> f64 {
        self.oppose.unwrap_or(OPPOSE)
    }
    fn shift(&self) -> f64 {
        self.shift.unwrap_or(SHIFT)
    }
    fn brightness(&self) -> f64 {
        self.brightness.unwrap_or(BRIGHTNESS)
    }
    fn contrast(&self) -> f64 {
        self.contrast.unwrap_or(CONTRAST)
    }
}

/// Builds [`Palette`]s from a primary color, a recipe set chosen by name, and the parameters
/// supplied by `P`.
#[derive(Debug, Clone)]
pub struct PaletteGenerator<P = DefaultParameters> {
    palettes: BTreeMap<String, RecipeSet>,
    default_palette: Option<String>,
    parameters: P,
}

impl PaletteGenerator<DefaultParameters> {
    /// A generator with the built-in recipe sets, `complimented` as the default, and default
    /// parameters.
    pub fn new() -> PaletteGenerator<DefaultParameters> {
        PaletteGenerator::with_parameters(DefaultParameters)
    }
}

impl Default for PaletteGenerator<DefaultParameters> {
    fn default() -> PaletteGenerator<DefaultParameters> {
        PaletteGenerator::new()
    }
}

impl<P: PaletteParameters> PaletteGenerator<P> {
    /// A generator with the built-in recipe sets, `complimented` as the default, and the given
    /// parameters.
    pub fn with_parameters(parameters: P) -> PaletteGenerator<P> {
        PaletteGenerator::from_parts(recipes::builtin(), Some(DEFAULT_PALETTE.to_string()), parameters)
    }

    /// A generator with exactly the given recipe sets and default.
    pub fn from_parts(
        palettes: BTreeMap<String, RecipeSet>,
        default_palette: Option<String>,
        parameters: P,
    ) -> PaletteGenerator<P> {
        PaletteGenerator {
            palettes,
            default_palette,
            parameters,
        }
    }

    /// The parameter source.
    pub fn parameters(&self) -> &P {
        &self.parameters
    }

    /// The name used when [`generate`](PaletteGenerator::generate) is given none.
    pub fn default_palette(&self) -> Option<&str> {
        self.default_palette.as_deref()
    }

    /// Changes the default recipe set name.
    pub fn set_default_palette<S: Into<String>>(&mut self, name: Option<S>) {
        self.default_palette = name.map(Into::into);
    }

    /// Adds a recipe set under `name`, returning whatever set it replaced.
    pub fn register<S: Into<String>>(&mut self, name: S, recipes: RecipeSet) -> Option<RecipeSet> {
        self.palettes.insert(name.into(), recipes)
    }

    /// The names of every registered recipe set, in order.
    pub fn palette_names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }

    /// Builds a palette around `color` from the recipe set called `palette`, or the default set if
    /// `palette` is `None`.
    /// # Errors
    /// [`PaletteError::NoSuchPalette`] if the set isn't registered, and
    /// [`PaletteError::NoDefaultPalette`] if no name was given and there is no default.
    pub fn generate(&self, color: ColorModel, palette: Option<&str>) -> Result<Palette, PaletteError> {
        let name = palette
            .or_else(|| self.default_palette())
            .ok_or(PaletteError::NoDefaultPalette)?;
        let recipes = self
            .palettes
            .get(name)
            .ok_or_else(|| PaletteError::NoSuchPalette(name.to_string()))?;

        let params = &self.parameters;
        debug!(
            palette = name,
            color = %color,
            pitch = params.pitch(),
            oppose = params.oppose(),
            shift = params.shift(),
            brightness = params.brightness(),
            contrast = params.contrast(),
            "generating palette"
        );
        let wheel = Colorwheel::with_angles(color, params.pitch(), params.oppose(), params.shift());
        Ok(Palette::with_adjustments(
            wheel,
            recipes.clone(),
            params.contrast(),
            params.brightness(),
        ))
    }
}
