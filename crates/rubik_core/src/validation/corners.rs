use crate::{ColorSet, Layer};

const fn corner(a: ColorSet, b: ColorSet, c: ColorSet) -> ColorSet {
    a.union(b).union(c)
}

/// Color sets of the eight corner pieces.
pub(super) const CORNER_COLORS: [ColorSet; 8] = {
    use ColorSet as C;
    [
        corner(C::WHITE, C::ORANGE, C::BLUE),
        corner(C::WHITE, C::RED, C::BLUE),
        corner(C::WHITE, C::ORANGE, C::GREEN),
        corner(C::WHITE, C::RED, C::GREEN),
        corner(C::YELLOW, C::ORANGE, C::BLUE),
        corner(C::YELLOW, C::RED, C::BLUE),
        corner(C::YELLOW, C::ORANGE, C::GREEN),
        corner(C::YELLOW, C::RED, C::GREEN),
    ]
};

/// One sticker of a corner slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct Facet {
    pub layer: Layer,
    pub index: usize,
    /// Amount that a white or yellow sticker here contributes to the total
    /// corner twist, mod 3.
    pub weight: u8,
}

const fn facet(layer: Layer, index: usize, weight: u8) -> Facet {
    Facet {
        layer,
        index,
        weight,
    }
}

/// Returns the three facets of each of the eight corner slots of a cube of
/// the given size, or `None` if the sticker indices overflow.
///
/// The `UP` or `DOWN` facet of each slot has weight 0. Going clockwise around
/// the corner from there, the other two facets have weights 1 and 2.
pub(super) fn corner_positions(size: usize) -> Option<[[Facet; 3]; 8]> {
    use Layer::*;

    let tl = 0;
    let tr = size.saturating_sub(1);
    let bl = size.saturating_sub(1).checked_mul(size)?;
    let br = size.checked_mul(size)?.saturating_sub(1);

    Some([
        [facet(Up, tl, 0), facet(Back, tr, 2), facet(Left, tl, 1)],
        [facet(Up, tr, 0), facet(Back, tl, 1), facet(Right, tr, 2)],
        [facet(Up, bl, 0), facet(Front, tl, 1), facet(Left, tr, 2)],
        [facet(Up, br, 0), facet(Front, tr, 2), facet(Right, tl, 1)],
        [facet(Down, bl, 0), facet(Back, br, 1), facet(Left, bl, 2)],
        [facet(Down, br, 0), facet(Back, bl, 2), facet(Right, br, 1)],
        [facet(Down, tl, 0), facet(Front, bl, 2), facet(Left, br, 1)],
        [facet(Down, tr, 0), facet(Front, br, 1), facet(Right, bl, 2)],
    ])
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::Cube;

    #[test]
    fn test_solved_corners_match_color_sets() {
        for size in 2..=5 {
            let cube = Cube::new(size).unwrap();
            let found = corner_positions(size).unwrap().map(|facets| {
                facets
                    .iter()
                    .map(|f| cube.sticker(f.layer, f.index).unwrap())
                    .collect::<ColorSet>()
            });
            assert_eq!(found, CORNER_COLORS);
        }
    }

    #[test]
    fn test_corner_facets_are_distinct() {
        let facets = corner_positions(3).unwrap().into_iter().flatten().collect_vec();
        assert_eq!(facets.len(), 24);
        assert!(facets.iter().map(|f| (f.layer, f.index)).all_unique());
    }

    #[test]
    fn test_corner_positions_overflow() {
        assert!(corner_positions(usize::MAX).is_none());
        assert!(corner_positions(1 << (usize::BITS / 2)).is_none());
    }
}
