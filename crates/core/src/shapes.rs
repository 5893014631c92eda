//! Shape catalog - canonical definitions of the seven piece kinds
//!
//! Every canonical shape sits in the top-left corner of its minimal bounding box,
//! so the smallest x and the smallest y offset are both 0.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Display color as an RGB triple
pub type Rgb = (u8, u8, u8);

/// Immutable definition of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub cells: [CellOffset; 4],
    pub color: Rgb,
    /// Square shapes are rotation invariant and skip the rotate transform.
    pub square: bool,
}

impl ShapeDef {
    /// Side of the minimal square bounding box (2, 3 or 4)
    pub fn bounding_size(&self) -> i8 {
        let w = self.cells.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
        let h = self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
        w.max(h)
    }
}

const SHAPES: [ShapeDef; 7] = [
    ShapeDef {
        kind: PieceKind::I,
        cells: [(0, 0), (1, 0), (2, 0), (3, 0)],
        color: (0, 255, 255),
        square: false,
    },
    ShapeDef {
        kind: PieceKind::O,
        cells: [(0, 0), (1, 0), (0, 1), (1, 1)],
        color: (255, 255, 0),
        square: true,
    },
    ShapeDef {
        kind: PieceKind::T,
        cells: [(0, 0), (1, 0), (2, 0), (1, 1)],
        color: (128, 0, 128),
        square: false,
    },
    ShapeDef {
        kind: PieceKind::L,
        cells: [(0, 0), (0, 1), (0, 2), (1, 2)],
        color: (255, 165, 0),
        square: false,
    },
    ShapeDef {
        kind: PieceKind::J,
        cells: [(1, 0), (1, 1), (1, 2), (0, 2)],
        color: (0, 0, 255),
        square: false,
    },
    ShapeDef {
        kind: PieceKind::S,
        cells: [(1, 0), (2, 0), (0, 1), (1, 1)],
        color: (0, 255, 0),
        square: false,
    },
    ShapeDef {
        kind: PieceKind::Z,
        cells: [(0, 0), (1, 0), (1, 1), (2, 1)],
        color: (255, 0, 0),
        square: false,
    },
];

/// Get the canonical definition for a piece kind
pub fn shape(kind: PieceKind) -> &'static ShapeDef {
    let idx = match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::L => 3,
        PieceKind::J => 4,
        PieceKind::S => 5,
        PieceKind::Z => 6,
    };
    &SHAPES[idx]
}

/// Canonical spawn-orientation cells for a piece kind
pub fn spawn_cells(kind: PieceKind) -> [CellOffset; 4] {
    shape(kind).cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(shape(kind).kind, kind);
        }
    }

    #[test]
    fn canonical_shapes_are_anchored_top_left() {
        for kind in PieceKind::ALL {
            let def = shape(kind);
            let min_x = def.cells.iter().map(|c| c.0).min().unwrap();
            let min_y = def.cells.iter().map(|c| c.1).min().unwrap();
            assert_eq!((min_x, min_y), (0, 0), "{:?} is not anchored", kind);

            let k = def.bounding_size();
            assert!((2..=4).contains(&k));
            assert!(def
                .cells
                .iter()
                .all(|&(x, y)| (0..k).contains(&x) && (0..k).contains(&y)));
        }
    }

    #[test]
    fn bounding_sizes() {
        assert_eq!(shape(PieceKind::I).bounding_size(), 4);
        assert_eq!(shape(PieceKind::O).bounding_size(), 2);
        assert_eq!(shape(PieceKind::T).bounding_size(), 3);
        assert_eq!(shape(PieceKind::L).bounding_size(), 3);
    }

    #[test]
    fn only_o_is_flagged_square() {
        for kind in PieceKind::ALL {
            assert_eq!(shape(kind).square, kind == PieceKind::O);
        }
    }
}
