/// Rasterizer configuration
use crate::raster::CullMode;

/// What the rectangle filler does for comparison modes other than
/// ALWAYS and NEVER.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RectCompare {
    /// Leave the buffer untouched.
    #[default]
    Skip,
    /// Test every covered cell against the rectangle's depth.
    PerPixel,
}

/// What the triangle rasterizer does with NEVER.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TriangleNever {
    /// NEVER falls through to the pass-everything branch, like ALWAYS.
    #[default]
    Pass,
    /// NEVER writes nothing, as in the rectangle filler.
    Reject,
}

/// Instruction set selection
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SimdPreference {
    /// Use the widest facility the CPU reports.
    #[default]
    Auto,
    Scalar,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RasterConfig {
    pub cull: CullMode,
    pub rect_compare: RectCompare,
    pub triangle_never: TriangleNever,
    pub simd: SimdPreference,
}

impl RasterConfig {
    /// Scalar paths only, otherwise default. Reference output for the wide paths.
    pub fn scalar() -> Self {
        Self {
            simd: SimdPreference::Scalar,
            ..Self::default()
        }
    }
}
