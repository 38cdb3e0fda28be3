/// Depth buffers: a borrowed view the rasterizer writes through, and an owned
/// buffer for callers that do not already hold emulated VRAM.
///
/// Layout is row-major, `row * stride + col`, one `u16` per cell.
use crate::count_call;
use crate::error::RasterError;
use crate::simd::SimdMode;

/// Clip rectangle in pixels. `x2`/`y2` are exclusive.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScissorRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl ScissorRect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn intersect(self, other: ScissorRect) -> ScissorRect {
        ScissorRect {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.x1 >= self.x2 || self.y1 >= self.y2
    }
}

/// Mutable view of a caller-owned depth buffer.
pub struct DepthTarget<'a> {
    data: &'a mut [u16],
    stride: usize,
    width: usize,
    height: usize,
}

impl<'a> DepthTarget<'a> {
    /// Wrap `data` as `width` x `height` cells spaced `stride` apart.
    ///
    /// The last row only needs `width` cells, so a slice cut at the end of
    /// the visible area is accepted.
    pub fn new(
        data: &'a mut [u16],
        stride: usize,
        width: usize,
        height: usize,
    ) -> Result<Self, RasterError> {
        if width > stride {
            return Err(RasterError::WidthExceedsStride { width, stride });
        }
        // Overflow means no slice can be long enough.
        let needed = if height == 0 || width == 0 {
            0
        } else {
            (height - 1)
                .checked_mul(stride)
                .and_then(|rows| rows.checked_add(width))
                .unwrap_or(usize::MAX)
        };
        if data.len() < needed {
            return Err(RasterError::TargetTooSmall {
                len: data.len(),
                width,
                height,
                stride,
                needed,
            });
        }
        Ok(Self {
            data,
            stride,
            width,
            height,
        })
    }

    /// Whole rows of `stride` cells; any partial trailing row is ignored.
    pub fn from_slice(data: &'a mut [u16], stride: usize) -> Self {
        let height = if stride == 0 { 0 } else { data.len() / stride };
        Self {
            data,
            stride,
            width: stride,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Full extent as a scissor rectangle.
    #[inline]
    pub fn bounds(&self) -> ScissorRect {
        ScissorRect::new(0, 0, clamp_extent(self.width), clamp_extent(self.height))
    }

    /// `scissor` restricted to the cells this target actually has.
    #[inline]
    pub fn clip(&self, scissor: ScissorRect) -> ScissorRect {
        scissor.intersect(self.bounds())
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.stride + x])
    }

    /// Cells `[x1, x2)` of row `y`. Callers pass coordinates already clipped
    /// to `bounds()`.
    #[inline(always)]
    pub(crate) fn row_span_mut(&mut self, y: usize, x1: usize, x2: usize) -> &mut [u16] {
        let start = y * self.stride;
        &mut self.data[start + x1..start + x2]
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.data[..]
    }
}

#[inline]
fn clamp_extent(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Owned, tightly packed depth buffer.
pub struct DepthBuffer {
    width: usize,
    height: usize,
    data: Vec<u16>,
}

impl DepthBuffer {
    /// New buffer with every cell at the far value, `u16::MAX`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![u16::MAX; width * height],
        }
    }

    pub fn clear(&mut self, value: u16) {
        self.clear_with(SimdMode::detect(), value);
    }

    /// Clear using an explicit store strategy.
    pub fn clear_with(&mut self, mode: SimdMode, value: u16) {
        count_call!(buffer_clears);
        mode.kernel().fill_row(&mut self.data, value);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.data
    }

    pub fn target(&mut self) -> DepthTarget<'_> {
        DepthTarget {
            data: &mut self.data[..],
            stride: self.width,
            width: self.width,
            height: self.height,
        }
    }

    /// Scissor covering the whole buffer.
    pub fn scissor(&self) -> ScissorRect {
        ScissorRect::new(0, 0, clamp_extent(self.width), clamp_extent(self.height))
    }
}
