//! The recipe sets that ship with this crate. Each is built once, on first use, and never changes:
//! a [`Palette`] always works on its own clone.
//!
//! - `complimented` is the six canonical colors of a [`Colorwheel`](crate::colorwheel::Colorwheel):
//!   the primary, its complement, and the accents on either side of both.
//! - `shaded` adds `background`, `foreground`, `highlight`, and `muted` entries for building
//!   editor-style themes, and fills in everything else from `complimented`.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use maplit::btreemap;

use crate::color::ColorModel;
use crate::consts::DEFAULT_PALETTE;
use crate::palette::{Palette, Recipe, RecipeSet};

/// The name of the set of background/foreground shades.
pub const SHADED: &str = "shaded";

lazy_static! {
    /// The six canonical colors of the wheel.
    pub static ref COMPLIMENTED_RECIPES: RecipeSet = RecipeSet::from(btreemap! {
        "primary" => primary as Recipe,
        "compliment" => compliment as Recipe,
        "positive_accent" => positive_accent as Recipe,
        "negative_accent" => negative_accent as Recipe,
        "compliment_positive_accent" => compliment_positive_accent as Recipe,
        "compliment_negative_accent" => compliment_negative_accent as Recipe,
    });

    /// Theme shades, layered over [`struct@COMPLIMENTED_RECIPES`].
    pub static ref SHADED_RECIPES: RecipeSet = RecipeSet::layered(
        &RecipeSet::from(btreemap! {
            "background" => background as Recipe,
            "foreground" => foreground as Recipe,
            "highlight" => highlight as Recipe,
            "muted" => muted as Recipe,
        }),
        &COMPLIMENTED_RECIPES,
    );
}

/// Every built-in set, by name.
pub fn builtin() -> BTreeMap<String, RecipeSet> {
    btreemap! {
        DEFAULT_PALETTE.to_string() => COMPLIMENTED_RECIPES.clone(),
        SHADED.to_string() => SHADED_RECIPES.clone(),
    }
}

fn primary(p: &Palette) -> ColorModel {
    p.wheel().primary()
}

fn compliment(p: &Palette) -> ColorModel {
    p.wheel().compliment()
}

fn positive_accent(p: &Palette) -> ColorModel {
    p.wheel().positive_accent()
}

fn negative_accent(p: &Palette) -> ColorModel {
    p.wheel().negative_accent()
}

fn compliment_positive_accent(p: &Palette) -> ColorModel {
    p.wheel().compliment_positive_accent()
}

fn compliment_negative_accent(p: &Palette) -> ColorModel {
    p.wheel().compliment_negative_accent()
}

// a dark, washed-out version of the primary
fn background(p: &Palette) -> ColorModel {
    p.wheel()
        .primary()
        .shifted_saturation(-0.6)
        .shifted_luminosity(-0.35)
}

// near-white, tinted toward the complement
fn foreground(p: &Palette) -> ColorModel {
    p.wheel().compliment_hue(&ColorModel::new(0.0, 0.1, 0.9))
}

fn highlight(p: &Palette) -> ColorModel {
    let lifted = p.wheel().positive_accent().shifted_luminosity(0.15);
    p.wheel().compliment_positive_accent_hue(&lifted)
}

// halfway to gray, on the far side of the complement
fn muted(p: &Palette) -> ColorModel {
    let gray = ColorModel::new(0.0, 0.0, 0.5);
    let faded = p.wheel().primary().blend(&gray, 0.5);
    p.wheel().compliment_negative_accent_hue(&faded)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colorwheel::Colorwheel;

    fn red_palette(recipes: &RecipeSet) -> Palette {
        Palette::new(Colorwheel::new(ColorModel::new(0.0, 1.0, 0.5)), recipes.clone())
    }

    #[test]
    fn test_complimented_hexes() {
        let palette = red_palette(&COMPLIMENTED_RECIPES);
        let hexes: Vec<(String, String)> = palette
            .colors()
            .into_iter()
            .map(|(name, color)| (name, color.hex()))
            .collect();
        let expected = vec![
            ("compliment", "#00FFFF"),
            ("compliment_negative_accent", "#00FF00"),
            ("compliment_positive_accent", "#0000FF"),
            ("negative_accent", "#FF00FF"),
            ("positive_accent", "#FFFF00"),
            ("primary", "#FF0000"),
        ];
        assert_eq!(hexes.len(), expected.len());
        for ((name, hex), (exp_name, exp_hex)) in hexes.iter().zip(expected) {
            assert_eq!(name, exp_name);
            assert_eq!(hex, exp_hex);
        }
    }

    #[test]
    fn test_shaded_fills_from_complimented() {
        assert_eq!(SHADED_RECIPES.len(), 10);
        for name in COMPLIMENTED_RECIPES.names() {
            assert!(SHADED_RECIPES.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_shaded_entries() {
        let palette = red_palette(&SHADED_RECIPES);
        let background = palette.get("background").unwrap();
        assert!(!background.bright());
        assert!(!background.colorful());
        assert_eq!(background.hue, 0.0);

        let foreground = palette.get("foreground").unwrap();
        assert!(foreground.bright());
        assert_eq!(foreground.hue, palette.wheel().compliment().hue);

        let highlight = palette.get("highlight").unwrap();
        assert_eq!(highlight.hue, 240.0);
        assert!((highlight.luminosity - 0.65).abs() <= 1e-12);

        let muted = palette.get("muted").unwrap();
        assert_eq!(muted.hue, 120.0);
        assert_eq!(muted.saturation, 0.5);
        assert_eq!(muted.luminosity, 0.5);
    }

    #[test]
    fn test_builtin_names() {
        let sets = builtin();
        assert_eq!(
            sets.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["complimented", "shaded"]
        );
        assert_eq!(sets["complimented"].len(), 6);
    }
}
