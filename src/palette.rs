//! Named palettes. A [`Recipe`] is a plain function that computes one color from a [`Palette`], a
//! [`RecipeSet`] gives recipes their names, and a [`Palette`] ties a recipe set to a
//! [`Colorwheel`] and evaluates entries on demand, applying its contrast and brightness to every
//! one of them.
//!
//! Entries are never cached: every lookup runs the recipe again, which keeps a `Palette` a plain
//! value that can be cloned and tweaked freely.
//!
//! # Example
//! ```
//! # use colorwheel::color::ColorModel;
//! # use colorwheel::colorwheel::Colorwheel;
//! # use colorwheel::palette::{Palette, RecipeSet};
//! let recipes = RecipeSet::new()
//!     .with("primary", |p| p.wheel().primary())
//!     .with("compliment", |p| p.wheel().compliment());
//! let wheel = Colorwheel::new(ColorModel::new(0.0, 1.0, 0.5));
//! let palette = Palette::new(wheel, recipes);
//! assert_eq!(palette.get("compliment").unwrap().hex(), "#00FFFF");
//! assert_eq!(palette.to_string(), "compliment:#00FFFF\nprimary:#FF0000");
//! assert!(palette.get("background").is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::{trace, warn};

use crate::color::ColorModel;
use crate::colorwheel::Colorwheel;
use crate::consts::{ADJUSTMENT_MAX, BRIGHTNESS, CONTRAST};
use crate::merge::merge;

/// A function computing one palette entry from the palette it belongs to.
pub type Recipe = fn(&Palette) -> ColorModel;

/// Errors from looking things up by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum PaletteError {
    /// The palette has no entry with this name.
    #[error("no such palette item named {0}")]
    NoSuchItem(String),
    /// No recipe set is registered under this name.
    #[error("no such palette named {0}")]
    NoSuchPalette(String),
    /// No recipe set was requested and the generator has no default.
    #[error("no palette requested and no default palette configured")]
    NoDefaultPalette,
}

/// A mapping from entry names to recipes. Iterates in name order.
#[derive(Clone, Default)]
pub struct RecipeSet {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeSet {
    /// An empty set.
    pub fn new() -> RecipeSet {
        RecipeSet::default()
    }

    /// Adds a recipe, replacing any recipe already under that name, and returns the set.
    pub fn with<S: Into<String>>(mut self, name: S, recipe: Recipe) -> RecipeSet {
        self.insert(name, recipe);
        self
    }

    /// Adds a recipe, returning the one it replaced, if any.
    pub fn insert<S: Into<String>>(&mut self, name: S, recipe: Recipe) -> Option<Recipe> {
        self.recipes.insert(name.into(), recipe)
    }

    /// The recipe under `name`, if there is one.
    pub fn get(&self, name: &str) -> Option<Recipe> {
        self.recipes.get(name).cloned()
    }

    /// Whether a recipe is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    /// Every entry name, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    /// The number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether there are no recipes at all.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Adds every recipe from `other` whose name is not already taken. Existing recipes always win.
    pub fn extend_missing(&mut self, other: &RecipeSet) {
        self.recipes = merge(&self.recipes, &other.recipes, true);
    }

    /// A new set with every recipe from `base`, plus those from `extension` that fill names `base`
    /// doesn't have.
    pub fn layered(base: &RecipeSet, extension: &RecipeSet) -> RecipeSet {
        RecipeSet {
            recipes: merge(&base.recipes, &extension.recipes, true),
        }
    }
}

impl<S: Into<String>> From<BTreeMap<S, Recipe>> for RecipeSet {
    fn from(map: BTreeMap<S, Recipe>) -> RecipeSet {
        RecipeSet {
            recipes: map.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// function pointers make for noisy output, so only list the names
impl fmt::Debug for RecipeSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// A [`Colorwheel`] with a set of named recipes and two adjustments applied to every entry:
/// `contrast` multiplies saturation and `brightness` multiplies luminosity. Both are clamped to
/// `[0, 2]`.
#[derive(Debug, Clone)]
pub struct Palette {
    wheel: Colorwheel,
    contrast: f64,
    brightness: f64,
    palette_map: RecipeSet,
}

impl Palette {
    /// A palette with neutral contrast and brightness.
    pub fn new(wheel: Colorwheel, palette_map: RecipeSet) -> Palette {
        Palette::with_adjustments(wheel, palette_map, CONTRAST, BRIGHTNESS)
    }

    /// A palette with the given contrast and brightness, each clamped to `[0, 2]`.
    pub fn with_adjustments(
        wheel: Colorwheel,
        palette_map: RecipeSet,
        contrast: f64,
        brightness: f64,
    ) -> Palette {
        Palette {
            wheel,
            contrast: clamp_adjustment("contrast", contrast),
            brightness: clamp_adjustment("brightness", brightness),
            palette_map,
        }
    }

    /// The color wheel recipes derive their colors from.
    pub fn wheel(&self) -> &Colorwheel {
        &self.wheel
    }

    /// The saturation multiplier.
    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    /// The luminosity multiplier.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// This palette's own recipes.
    pub fn recipes(&self) -> &RecipeSet {
        &self.palette_map
    }

    /// Computes the entry called `name`, with contrast and brightness applied.
    /// # Errors
    /// [`PaletteError::NoSuchItem`] if no recipe has that name.
    pub fn get(&self, name: &str) -> Result<ColorModel, PaletteError> {
        let recipe = self
            .palette_map
            .get(name)
            .ok_or_else(|| PaletteError::NoSuchItem(name.to_string()))?;
        trace!(item = name, "resolving palette item");
        Ok(self.adjust(recipe(self)))
    }

    /// Adds recipes for names this palette doesn't have yet. Existing entries are never replaced.
    pub fn extend(&mut self, recipes: &RecipeSet) {
        self.palette_map.extend_missing(recipes);
    }

    /// Runs the recipe called `name` from some other set against this palette. Contrast and
    /// brightness are *not* applied, so the result can be fed into this palette's own recipes.
    /// # Errors
    /// [`PaletteError::NoSuchItem`] if `recipes` has no recipe with that name.
    pub fn resolve_from(&self, recipes: &RecipeSet, name: &str) -> Result<ColorModel, PaletteError> {
        recipes
            .get(name)
            .map(|recipe| recipe(self))
            .ok_or_else(|| PaletteError::NoSuchItem(name.to_string()))
    }

    /// Every entry, computed and adjusted, by name.
    pub fn colors(&self) -> BTreeMap<String, ColorModel> {
        self.palette_map
            .recipes
            .iter()
            .map(|(name, recipe)| (name.clone(), self.adjust(recipe(self))))
            .collect()
    }

    fn adjust(&self, mut color: ColorModel) -> ColorModel {
        color.saturation *= self.contrast;
        color.luminosity *= self.brightness;
        color
    }
}

fn clamp_adjustment(name: &str, value: f64) -> f64 {
    let clamped = value.max(0.0).min(ADJUSTMENT_MAX);
    if clamped != value {
        warn!(adjustment = name, requested = value, clamped = clamped, "palette adjustment out of range");
    }
    clamped
}

/// One `name:#RRGGBB` line per entry, in name order.
impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lines: Vec<String> = self
            .colors()
            .iter()
            .map(|(name, color)| format!("{}:{}", name, color))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
