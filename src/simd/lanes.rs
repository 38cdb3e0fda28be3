/// Four-lane integer and float vectors
///
/// On x86_64 the operators lower to SSE2, which is part of the baseline
/// target. Elsewhere they are plain per-lane loops that the compiler is free
/// to auto-vectorize. Integer lanes wrap on overflow in both paths.
///
/// SSE2 has no 32-bit lane multiply (`pmulld` is SSE4.1), so `Vec4S32 * Vec4S32`
/// is built from two unsigned 32x32->64 multiplies on the even and odd lanes,
/// keeping the low half of each product.
use std::ops::{Add, BitOr, Mul, Sub};

#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
use core::arch::x86_64::*;

/// Four signed 32-bit lanes
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct Vec4S32(pub [i32; 4]);

/// Four 32-bit float lanes
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Vec4F32(pub [f32; 4]);

impl Vec4S32 {
    pub const ZERO: Self = Self([0; 4]);

    #[inline(always)]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self([x, y, z, w])
    }

    #[inline(always)]
    pub const fn splat(v: i32) -> Self {
        Self([v; 4])
    }

    #[inline(always)]
    pub fn to_array(self) -> [i32; 4] {
        self.0
    }

    #[inline(always)]
    pub fn lane(self, index: usize) -> i32 {
        self.0[index]
    }

    /// One bit per lane, set where the lane is negative.
    #[inline(always)]
    pub fn sign_mask(self) -> u32 {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            unsafe {
                _mm_movemask_ps(_mm_castsi128_ps(self.load())) as u32
            }
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            self.0
                .iter()
                .enumerate()
                .fold(0, |mask, (i, &v)| mask | (((v as u32) >> 31) << i))
        }
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    #[inline(always)]
    fn load(self) -> __m128i {
        unsafe { _mm_loadu_si128(self.0.as_ptr() as *const __m128i) }
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    #[inline(always)]
    fn store(v: __m128i) -> Self {
        let mut out = Self::ZERO;
        unsafe { _mm_storeu_si128(out.0.as_mut_ptr() as *mut __m128i, v) };
        out
    }
}

impl Add for Vec4S32 {
    type Output = Self;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            unsafe {
                Self::store(_mm_add_epi32(self.load(), other.load()))
            }
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            Self(std::array::from_fn(|i| self.0[i].wrapping_add(other.0[i])))
        }
    }
}

impl Sub for Vec4S32 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            unsafe {
                Self::store(_mm_sub_epi32(self.load(), other.load()))
            }
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            Self(std::array::from_fn(|i| self.0[i].wrapping_sub(other.0[i])))
        }
    }
}

impl Mul for Vec4S32 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            unsafe {
                let a = self.load();
                let b = other.load();
                let a13 = _mm_shuffle_epi32(a, 0xF5); // (-, a3, -, a1)
                let b13 = _mm_shuffle_epi32(b, 0xF5); // (-, b3, -, b1)
                let prod02 = _mm_mul_epu32(a, b); // (-, a2*b2, -, a0*b0)
                let prod13 = _mm_mul_epu32(a13, b13); // (-, a3*b3, -, a1*b1)
                let prod01 = _mm_unpacklo_epi32(prod02, prod13); // (-, -, a1*b1, a0*b0)
                let prod23 = _mm_unpackhi_epi32(prod02, prod13); // (-, -, a3*b3, a2*b2)
                Self::store(_mm_unpacklo_epi64(prod01, prod23))
            }
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            Self(std::array::from_fn(|i| self.0[i].wrapping_mul(other.0[i])))
        }
    }
}

impl BitOr for Vec4S32 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, other: Self) -> Self {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            unsafe {
                Self::store(_mm_or_si128(self.load(), other.load()))
            }
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            Self(std::array::from_fn(|i| self.0[i] | other.0[i]))
        }
    }
}

impl Vec4F32 {
    pub const ZERO: Self = Self([0.0; 4]);

    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    #[inline(always)]
    pub const fn splat(v: f32) -> Self {
        Self([v; 4])
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Lane-wise `i32 -> f32` conversion (round to nearest).
    #[inline(always)]
    pub fn from_s32(other: Vec4S32) -> Self {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            unsafe {
                Self::store(_mm_cvtepi32_ps(other.load()))
            }
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            Self(other.0.map(|v| v as f32))
        }
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    #[inline(always)]
    fn load(self) -> __m128 {
        unsafe { _mm_loadu_ps(self.0.as_ptr()) }
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    #[inline(always)]
    fn store(v: __m128) -> Self {
        let mut out = Self::ZERO;
        unsafe { _mm_storeu_ps(out.0.as_mut_ptr(), v) };
        out
    }
}

impl Add for Vec4F32 {
    type Output = Self;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            unsafe {
                Self::store(_mm_add_ps(self.load(), other.load()))
            }
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            Self(std::array::from_fn(|i| self.0[i] + other.0[i]))
        }
    }
}

impl Sub for Vec4F32 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            unsafe {
                Self::store(_mm_sub_ps(self.load(), other.load()))
            }
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            Self(std::array::from_fn(|i| self.0[i] - other.0[i]))
        }
    }
}

impl Mul for Vec4F32 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            unsafe {
                Self::store(_mm_mul_ps(self.load(), other.load()))
            }
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            Self(std::array::from_fn(|i| self.0[i] * other.0[i]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_mul_matches_wrapping_mul() {
        let cases = [
            (Vec4S32::new(1, -2, 3, -4), Vec4S32::new(5, 6, -7, -8)),
            (Vec4S32::new(i32::MAX, i32::MIN, 65536, -65536), Vec4S32::new(2, 3, 65536, 65537)),
            (Vec4S32::new(0, 1, -1, 12345), Vec4S32::splat(-1)),
        ];

        for (a, b) in cases {
            let expected: [i32; 4] = std::array::from_fn(|i| a.0[i].wrapping_mul(b.0[i]));
            assert_eq!((a * b).to_array(), expected, "{:?} * {:?}", a, b);
        }
    }

    #[test]
    fn integer_add_sub_wrap() {
        let a = Vec4S32::new(i32::MAX, 0, -5, 100);
        let b = Vec4S32::new(1, -1, 5, -200);
        assert_eq!((a + b).to_array(), [i32::MIN, -1, 0, -100]);
        assert_eq!((a - b).to_array(), [i32::MAX - 1, 1, -10, 300]);
    }

    #[test]
    fn sign_mask_flags_negative_lanes() {
        assert_eq!(Vec4S32::new(0, 1, 2, 3).sign_mask(), 0);
        assert_eq!(Vec4S32::new(-1, 1, -2, 3).sign_mask(), 0b0101);
        assert_eq!(Vec4S32::splat(i32::MIN).sign_mask(), 0b1111);

        // Or-ing edge values keeps a lane non-negative only if every input is.
        let inside = Vec4S32::new(0, 4, -1, 8) | Vec4S32::new(3, -2, 5, 0);
        assert_eq!(inside.sign_mask(), 0b0110);
    }

    #[test]
    fn float_ops_and_conversion() {
        let ints = Vec4S32::new(-3, 0, 7, 1 << 24);
        let f = Vec4F32::from_s32(ints);
        assert_eq!(f.to_array(), [-3.0, 0.0, 7.0, 16_777_216.0]);

        let a = Vec4F32::new(1.5, 2.0, -4.0, 0.25);
        let b = Vec4F32::splat(2.0);
        assert_eq!((a + b).to_array(), [3.5, 4.0, -2.0, 2.25]);
        assert_eq!((a - b).to_array(), [-0.5, 0.0, -6.0, -1.75]);
        assert_eq!((a * b).to_array(), [3.0, 4.0, -8.0, 0.5]);
    }
}
