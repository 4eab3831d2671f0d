//! This module brings the most common Colorwheel functionality under a single namespace, to prevent
//! excessive imports: the color types, the wheel, palettes and their recipes, the generator with its
//! parameter sources, and both error types. The built-in recipe sets and the `merge` utility are not
//! included.

pub use crate::color::{ColorModel, ColorParseError, RGBColor};
pub use crate::colorwheel::Colorwheel;
pub use crate::generator::{DefaultParameters, PaletteConfig, PaletteGenerator, PaletteParameters};
pub use crate::palette::{Palette, PaletteError, Recipe, RecipeSet};
