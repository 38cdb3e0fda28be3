/// Depth comparison functions, in GE register encoding order
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CompareMode {
    Never,
    #[default]
    Always,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl CompareMode {
    /// Decode the 3-bit comparison field. Upper bits are ignored.
    pub fn from_bits(bits: u32) -> Self {
        match bits & 7 {
            0 => CompareMode::Never,
            1 => CompareMode::Always,
            2 => CompareMode::Equal,
            3 => CompareMode::NotEqual,
            4 => CompareMode::Less,
            5 => CompareMode::LessEqual,
            6 => CompareMode::Greater,
            _ => CompareMode::GreaterEqual,
        }
    }

    /// Candidate on the left, stored value on the right.
    #[inline(always)]
    pub fn passes(self, candidate: f32, stored: f32) -> bool {
        match self {
            CompareMode::Never => false,
            CompareMode::Always => true,
            CompareMode::Equal => candidate == stored,
            CompareMode::NotEqual => candidate != stored,
            CompareMode::Less => candidate < stored,
            CompareMode::LessEqual => candidate <= stored,
            CompareMode::Greater => candidate > stored,
            CompareMode::GreaterEqual => candidate >= stored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_register_bits() {
        assert_eq!(CompareMode::from_bits(0), CompareMode::Never);
        assert_eq!(CompareMode::from_bits(1), CompareMode::Always);
        assert_eq!(CompareMode::from_bits(4), CompareMode::Less);
        assert_eq!(CompareMode::from_bits(7), CompareMode::GreaterEqual);
        // Only the low three bits select the function.
        assert_eq!(CompareMode::from_bits(0x0C), CompareMode::Less);
    }

    #[test]
    fn candidate_is_left_operand() {
        assert!(CompareMode::Less.passes(10.0, 20.0));
        assert!(!CompareMode::Less.passes(20.0, 10.0));
        assert!(CompareMode::Greater.passes(20.0, 10.0));
        assert!(CompareMode::LessEqual.passes(5.0, 5.0));
        assert!(!CompareMode::NotEqual.passes(5.0, 5.0));
        assert!(CompareMode::Always.passes(f32::NAN, 0.0));
        assert!(!CompareMode::Never.passes(0.0, 1.0));
    }
}
