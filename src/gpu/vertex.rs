/// Primitive and vertex format descriptors, decodable from GE register bits
use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PrimitiveType {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Rectangles,
    KeepPrevious,
    Invalid,
}

impl PrimitiveType {
    pub fn from_bits(bits: u32) -> Self {
        match bits {
            0 => PrimitiveType::Points,
            1 => PrimitiveType::Lines,
            2 => PrimitiveType::LineStrip,
            3 => PrimitiveType::Triangles,
            4 => PrimitiveType::TriangleStrip,
            5 => PrimitiveType::TriangleFan,
            6 => PrimitiveType::Rectangles,
            7 => PrimitiveType::KeepPrevious,
            _ => PrimitiveType::Invalid,
        }
    }

    /// Triangles, strips, fans and rectangles cover area; the rest never reach the depth buffer here.
    pub fn is_depth_rasterizable(self) -> bool {
        matches!(
            self,
            PrimitiveType::Triangles
                | PrimitiveType::TriangleStrip
                | PrimitiveType::TriangleFan
                | PrimitiveType::Rectangles
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveType::Points => "points",
            PrimitiveType::Lines => "lines",
            PrimitiveType::LineStrip => "line strip",
            PrimitiveType::Triangles => "triangles",
            PrimitiveType::TriangleStrip => "triangle strip",
            PrimitiveType::TriangleFan => "triangle fan",
            PrimitiveType::Rectangles => "rectangles",
            PrimitiveType::KeepPrevious => "keep previous",
            PrimitiveType::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PositionFormat {
    #[default]
    None,
    S8,
    S16,
    Float,
}

impl PositionFormat {
    /// Bytes per component.
    pub fn component_size(self) -> usize {
        match self {
            PositionFormat::None => 0,
            PositionFormat::S8 => 1,
            PositionFormat::S16 => 2,
            PositionFormat::Float => 4,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum IndexFormat {
    #[default]
    None,
    U8,
    U16,
    U32,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum WeightFormat {
    #[default]
    None,
    U8,
    U16,
    Float,
}

const POS_SHIFT: u32 = 7;
const WEIGHT_SHIFT: u32 = 9;
const INDEX_SHIFT: u32 = 11;
const THROUGH_BIT: u32 = 1 << 23;

/// The parts of the vertex type register the pre-pass cares about.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct VertexType {
    pub position: PositionFormat,
    /// Positions are already screen coordinates.
    pub through: bool,
    pub index: IndexFormat,
    pub weights: WeightFormat,
}

impl VertexType {
    pub fn from_bits(bits: u32) -> Self {
        let position = match (bits >> POS_SHIFT) & 3 {
            0 => PositionFormat::None,
            1 => PositionFormat::S8,
            2 => PositionFormat::S16,
            _ => PositionFormat::Float,
        };
        let weights = match (bits >> WEIGHT_SHIFT) & 3 {
            0 => WeightFormat::None,
            1 => WeightFormat::U8,
            2 => WeightFormat::U16,
            _ => WeightFormat::Float,
        };
        let index = match (bits >> INDEX_SHIFT) & 3 {
            0 => IndexFormat::None,
            1 => IndexFormat::U8,
            2 => IndexFormat::U16,
            _ => IndexFormat::U32,
        };
        Self {
            position,
            through: bits & THROUGH_BIT != 0,
            index,
            weights,
        }
    }

    pub fn with_position(position: PositionFormat) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn through(mut self, through: bool) -> Self {
        self.through = through;
        self
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.index != IndexFormat::None
    }

    #[inline]
    pub fn is_skinned(&self) -> bool {
        self.weights != WeightFormat::None
    }
}

/// Vertex layout reported by the external vertex decoder.
pub trait VertexDecoder {
    /// Bytes from one vertex to the next.
    fn vertex_size(&self) -> usize;
    /// Byte offset of the position within a vertex.
    fn position_offset(&self) -> usize;
}

/// Fixed layout, for callers that know stride and offset up front.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DecodedLayout {
    pub stride: usize,
    pub position_offset: usize,
}

impl DecodedLayout {
    pub const fn new(stride: usize, position_offset: usize) -> Self {
        Self {
            stride,
            position_offset,
        }
    }

    /// Positions only, tightly packed.
    pub fn packed(format: PositionFormat) -> Self {
        Self::new(format.component_size() * 3, 0)
    }
}

impl VertexDecoder for DecodedLayout {
    fn vertex_size(&self) -> usize {
        self.stride
    }

    fn position_offset(&self) -> usize {
        self.position_offset
    }
}

/// Front-face winding flag carried with the draw.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Winding {
    #[default]
    Clockwise,
    CounterClockwise,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_type_fields() {
        let vt = VertexType::from_bits((2 << POS_SHIFT) | THROUGH_BIT);
        assert_eq!(vt.position, PositionFormat::S16);
        assert!(vt.through);
        assert!(!vt.is_indexed());
        assert!(!vt.is_skinned());

        let vt = VertexType::from_bits((3 << POS_SHIFT) | (1 << INDEX_SHIFT) | (2 << WEIGHT_SHIFT));
        assert_eq!(vt.position, PositionFormat::Float);
        assert_eq!(vt.index, IndexFormat::U8);
        assert_eq!(vt.weights, WeightFormat::U16);
        assert!(vt.is_indexed() && vt.is_skinned());
    }

    #[test]
    fn primitive_types() {
        let rasterizable: Vec<_> = (0..10)
            .map(PrimitiveType::from_bits)
            .filter(|p| p.is_depth_rasterizable())
            .collect();
        assert_eq!(
            rasterizable,
            vec![
                PrimitiveType::Triangles,
                PrimitiveType::TriangleStrip,
                PrimitiveType::TriangleFan,
                PrimitiveType::Rectangles,
            ]
        );
        assert_eq!(PrimitiveType::from_bits(9), PrimitiveType::Invalid);
    }

    #[test]
    fn packed_layout_stride() {
        assert_eq!(DecodedLayout::packed(PositionFormat::S8).vertex_size(), 3);
        assert_eq!(DecodedLayout::packed(PositionFormat::Float).vertex_size(), 12);
    }
}
