//! Primitive stitching: vertex indices for each rectangle or triangle of a draw
//!
//! Leftover vertices that do not complete a primitive are ignored.

/// `(2i, 2i + 1)` corner pairs.
pub fn rect_pairs(count: usize) -> impl Iterator<Item = [usize; 2]> {
    (0..count / 2).map(|i| [2 * i, 2 * i + 1])
}

/// Independent triples.
pub fn triangle_list(count: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..count / 3).map(|i| [3 * i, 3 * i + 1, 3 * i + 2])
}

/// Strip triangles with alternating winding: `(0, 2, 1), (1, 2, 3), (2, 4, 3), ...`
pub fn triangle_strip(count: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..count.saturating_sub(2)).scan(2usize, |wind, i| {
        let i1 = i + *wind;
        *wind ^= 3;
        let i2 = i + *wind;
        Some([i, i1, i2])
    })
}

/// Fan around vertex 0, wound like the first strip triangle: `(0, i + 2, i + 1)`.
pub fn triangle_fan(count: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..count.saturating_sub(2)).map(|i| [0, i + 2, i + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_pairs_use_consecutive_vertices() {
        assert_eq!(rect_pairs(5).collect::<Vec<_>>(), vec![[0, 1], [2, 3]]);
        assert_eq!(rect_pairs(1).count(), 0);
    }

    #[test]
    fn list_drops_incomplete_triple() {
        assert_eq!(triangle_list(7).collect::<Vec<_>>(), vec![[0, 1, 2], [3, 4, 5]]);
    }

    #[test]
    fn strip_alternates_winding() {
        assert_eq!(
            triangle_strip(6).collect::<Vec<_>>(),
            vec![[0, 2, 1], [1, 2, 3], [2, 4, 3], [3, 4, 5]]
        );
        assert_eq!(triangle_strip(2).count(), 0);
        assert_eq!(triangle_strip(0).count(), 0);
    }

    #[test]
    fn fan_pivots_on_first_vertex() {
        assert_eq!(triangle_fan(5).collect::<Vec<_>>(), vec![[0, 2, 1], [0, 3, 2], [0, 4, 3]]);
        assert_eq!(triangle_fan(1).count(), 0);
    }
}
