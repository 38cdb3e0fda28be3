/// Row kernels: the wide-store strategy selected once per rasterizer
///
/// `SimdMode::detect()` runs CPU feature detection; the chosen mode hands out
/// a `RowKernel` used for rectangle fills and buffer clears, and tells the
/// triangle rasterizer whether to walk pixels four lanes at a time.
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{__m128i, _mm_set1_epi16, _mm_storeu_si128};

/// Number of `u16` depth cells covered by one 128-bit store
pub const DEPTH_LANES: usize = 8;

/// Stores a single depth value across a run of cells.
pub trait RowKernel: Send + Sync {
    /// Short name for logs and bench labels.
    fn name(&self) -> &'static str;

    /// Set every cell of `row` to `value`.
    fn fill_row(&self, row: &mut [u16], value: u16);
}

/// Plain per-cell stores; used when no SIMD facility was detected.
pub struct ScalarKernel;

impl RowKernel for ScalarKernel {
    fn name(&self) -> &'static str {
        "scalar"
    }

    #[inline]
    fn fill_row(&self, row: &mut [u16], value: u16) {
        row.fill(value);
    }
}

/// 128-bit stores of eight replicated lanes, scalar trailer.
#[cfg(target_arch = "x86_64")]
pub struct Sse2Kernel;

#[cfg(target_arch = "x86_64")]
impl RowKernel for Sse2Kernel {
    fn name(&self) -> &'static str {
        "sse2"
    }

    #[inline]
    fn fill_row(&self, row: &mut [u16], value: u16) {
        if value == 0 {
            // Lowers to memset.
            row.fill(0);
            return;
        }
        // Sse2Kernel is only handed out by SimdMode::Sse2, which requires detection.
        unsafe { fill_row_sse2(row, value) }
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn fill_row_sse2(row: &mut [u16], value: u16) {
    let value_x8 = _mm_set1_epi16(value as i16);
    let mut chunks = row.chunks_exact_mut(DEPTH_LANES);
    for chunk in &mut chunks {
        _mm_storeu_si128(chunk.as_mut_ptr() as *mut __m128i, value_x8);
    }
    for cell in chunks.into_remainder() {
        *cell = value;
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SimdMode {
    Scalar,
    Sse2,
}

impl SimdMode {
    /// Pick the widest mode the running CPU supports.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if std::arch::is_x86_feature_detected!("sse2") {
                return SimdMode::Sse2;
            }
        }

        SimdMode::Scalar
    }

    #[inline]
    pub fn kernel(self) -> &'static dyn RowKernel {
        match self {
            SimdMode::Scalar => &ScalarKernel,
            #[cfg(target_arch = "x86_64")]
            SimdMode::Sse2 => &Sse2Kernel,
            #[cfg(not(target_arch = "x86_64"))]
            SimdMode::Sse2 => &ScalarKernel,
        }
    }

    /// Whether triangles are walked four pixels at a time.
    #[inline]
    pub fn is_wide(self) -> bool {
        self != SimdMode::Scalar
    }
}
