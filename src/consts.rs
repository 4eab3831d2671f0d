//! Default values for every tunable parameter of a color wheel and palette. These are the values
//! used whenever a [`PaletteConfig`](crate::generator::PaletteConfig) leaves a field unset.

/// Angular distance, in degrees, between a color and its accents.
pub const PITCH: f64 = 60.0;

/// Angular distance, in degrees, between a color and its complement.
pub const OPPOSE: f64 = 180.0;

/// Extra rotation, in degrees, applied to every derived hue.
pub const SHIFT: f64 = 0.0;

/// Luminosity multiplier applied to every palette entry.
pub const BRIGHTNESS: f64 = 1.0;

/// Saturation multiplier applied to every palette entry.
pub const CONTRAST: f64 = 1.0;

/// Both adjustment multipliers are clamped to `[0, ADJUSTMENT_MAX]`.
pub const ADJUSTMENT_MAX: f64 = 2.0;

/// The name of the recipe set a generator falls back to when none is requested.
pub const DEFAULT_PALETTE: &str = "complimented";
