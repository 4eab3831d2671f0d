//! Colorwheel is a library for turning one color into a whole colorscheme. Pick a primary color,
//! and it finds the complement across the wheel and the accents on either side of both, using
//! three angles you control: `pitch` (how far accents sit from their color), `oppose` (how far the
//! complement sits from the primary), and `shift` (an extra turn applied to everything). Named
//! *recipes* combine those derived colors into palette entries like `background` or `highlight`,
//! and a palette-wide contrast and brightness tune them all at once.
//!
//! The pieces, from the bottom up:
//!
//! - [`color::ColorModel`]: a hue/saturation/luminosity color, with conversion to and from RGB and
//!   hex strings.
//! - [`colorwheel::Colorwheel`]: a primary color and its three angles.
//! - [`palette::Palette`]: a color wheel plus a [`palette::RecipeSet`] of named recipes.
//! - [`generator::PaletteGenerator`]: picks a recipe set by name and builds a palette with
//!   parameters from any [`generator::PaletteParameters`] source.
//!
//! ```
//! use colorwheel::prelude::*;
//!
//! let generator = PaletteGenerator::new();
//! let color: ColorModel = "#FF00FF".parse().unwrap();
//! let palette = generator.generate(color, None).unwrap();
//! assert_eq!(palette.get("compliment").unwrap().hex(), "#00FF00");
//! println!("{}", palette);
//! ```

#![doc(html_root_url = "https://docs.rs/colorwheel/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

pub mod color;
pub mod colorwheel;
pub mod consts;
pub mod coord;
pub mod generator;
pub mod merge;
pub mod palette;
pub mod prelude;
pub mod recipes;
