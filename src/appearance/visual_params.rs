//! Visual parameter catalog
//!
//! Process-wide read-only reference data describing the avatar's shape,
//! color, and alpha-mask parameters. The table itself lives in
//! [`super::params_table`]; this module holds the entry types, lookup
//! helpers, and the wire quantization used by AgentSetAppearance.

use super::params_table::PARAMS;

/// Color ramp contributed by a parameter. The weight lerps between the
/// RGBA stops when the owning wearable is composited.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualColorParam {
    pub colors: &'static [[u8; 4]],
}

/// Alpha mask contributed by a driven parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualAlphaParam {
    /// Mask source image; an empty name means the descriptor is inert
    pub tga_file: &'static str,
    /// Skip compositing this mask when the weight is zero
    pub skip_if_zero: bool,
    /// Multiply instead of replace when blending the mask
    pub multiply_blend: bool,
    /// Weight scale applied before blending
    pub domain: f32,
}

/// One catalog entry. Only group-0 params are published on the wire;
/// higher groups exist to drive masks and color ramps.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualParam {
    pub id: u32,
    pub name: &'static str,
    pub group: i32,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub color: Option<VisualColorParam>,
    pub alpha: Option<VisualAlphaParam>,
    /// Param ids this one drives; the first non-bump driven alpha wins
    pub drivers: &'static [u32],
    /// Bump-layer params never contribute to the alpha accumulator
    pub bump: bool,
}

/// Number of group-0 params. The published visual-param vector always has
/// exactly this many bytes.
pub const PUBLISHED_PARAM_COUNT: usize = 218;

/// The full catalog in canonical (ascending id) order.
pub fn catalog() -> &'static [VisualParam] {
    PARAMS
}

/// Look up a catalog entry by numeric id.
pub fn find_param(id: u32) -> Option<&'static VisualParam> {
    PARAMS
        .binary_search_by_key(&id, |p| p.id)
        .ok()
        .map(|i| &PARAMS[i])
}

/// Linearly quantize a param value from `[min, max]` into a wire byte.
pub fn quantize(value: f32, min: f32, max: f32) -> u8 {
    if max <= min {
        return 0;
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    (t * 255.0).round() as u8
}

/// Reconstruct the approximate value a wire byte encodes.
pub fn dequantize(byte: u8, min: f32, max: f32) -> f32 {
    min + (byte as f32 / 255.0) * (max - min)
}
