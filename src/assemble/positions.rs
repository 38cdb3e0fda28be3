/// Position extraction from decoded vertex bytes
///
/// Integer formats are normalized (s8 by 1/128, s16 by 1/32768) except in
/// through mode, where they already are pixel coordinates. Multi-byte values
/// are little endian.
use glam::Vec3;

use crate::error::RasterError;
use crate::gpu::PositionFormat;

/// Bytes needed to read `count` positions at `stride`/`offset`, saturating at
/// `usize::MAX` when the layout cannot fit in memory.
pub fn required_bytes(format: PositionFormat, count: usize, stride: usize, offset: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (count - 1)
        .checked_mul(stride)
        .and_then(|n| n.checked_add(offset))
        .and_then(|n| n.checked_add(3 * format.component_size()))
        .unwrap_or(usize::MAX)
}

/// Fill `out` with one position per vertex. `format` must not be `None`.
pub fn read_positions(
    data: &[u8],
    format: PositionFormat,
    stride: usize,
    offset: usize,
    through: bool,
    out: &mut [Vec3],
) -> Result<(), RasterError> {
    let needed = required_bytes(format, out.len(), stride, offset);
    if data.len() < needed {
        return Err(RasterError::VertexDataTruncated {
            needed,
            available: data.len(),
        });
    }

    match format {
        PositionFormat::None => {}
        PositionFormat::S8 => {
            let factor = if through { 1.0 } else { 1.0 / 128.0 };
            for (i, pos) in out.iter_mut().enumerate() {
                let base = i * stride + offset;
                let c = |j: usize| data[base + j] as i8 as f32 * factor;
                *pos = Vec3::new(c(0), c(1), c(2));
            }
        }
        PositionFormat::S16 => {
            let factor = if through { 1.0 } else { 1.0 / 32768.0 };
            for (i, pos) in out.iter_mut().enumerate() {
                let base = i * stride + offset;
                let c = |j: usize| {
                    let at = base + j * 2;
                    i16::from_le_bytes([data[at], data[at + 1]]) as f32 * factor
                };
                *pos = Vec3::new(c(0), c(1), c(2));
            }
        }
        PositionFormat::Float => {
            for (i, pos) in out.iter_mut().enumerate() {
                let base = i * stride + offset;
                let c = |j: usize| {
                    let at = base + j * 4;
                    f32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
                };
                *pos = Vec3::new(c(0), c(1), c(2));
            }
        }
    }

    Ok(())
}
