//! Face names, drawing operation flags and the per-face lookup tables.

use bitflags::bitflags;

bitflags! {
    /// Set of logical faces of an extruded primitive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SurfaceNames: u8 {
        const FRONT = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const TOP = 1 << 4;
        const BOTTOM = 1 << 5;
    }
}

bitflags! {
    /// What a renderer call is asked to do. The two flags are independent.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DrawingOperationTypes: u8 {
        /// Paint on the drawing surface.
        const DRAW_ELEMENT = 1 << 0;
        /// Build (and register) the hit-test path.
        const CALC_ELEMENT_PATH = 1 << 1;
    }
}

impl DrawingOperationTypes {
    /// Whether anything is painted.
    pub fn draws(self) -> bool {
        self.contains(Self::DRAW_ELEMENT)
    }

    /// Whether a hit path is wanted.
    pub fn calcs_path(self) -> bool {
        self.contains(Self::CALC_ELEMENT_PATH)
    }
}

/// Position of a strip segment inside its connected strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSegmentType {
    First,
    #[default]
    Middle,
    Last,
    Single,
}

impl LineSegmentType {
    /// The segment starts a strip and draws the left end cap.
    pub fn has_start_cap(self) -> bool {
        matches!(self, Self::First | Self::Single)
    }

    /// The segment ends a strip and draws the right end cap.
    pub fn has_end_cap(self) -> bool {
        matches!(self, Self::Last | Self::Single)
    }

    /// Type of piece `index` when this segment is cut into `count` pieces.
    ///
    /// The start cap stays on the first piece and the end cap on the last.
    pub fn split(self, index: usize, count: usize) -> Self {
        let first = index == 0 && self.has_start_cap();
        let last = index + 1 == count && self.has_end_cap();
        match (first, last) {
            (true, true) => Self::Single,
            (true, false) => Self::First,
            (false, true) => Self::Last,
            (false, false) => Self::Middle,
        }
    }
}

/// The six faces in drawing-table order.
pub const BOX_FACES: [SurfaceNames; 6] = [
    SurfaceNames::BACK,
    SurfaceNames::BOTTOM,
    SurfaceNames::TOP,
    SurfaceNames::LEFT,
    SurfaceNames::RIGHT,
    SurfaceNames::FRONT,
];

/// Face lookup table: corner indices wound so that the first three decide
/// visibility, and the opposite face.
///
/// Corners 0-3 are the front face (x0y0, x0y1, x1y1, x1y0), 4-7 the same
/// corners on the back face.
const FACE_TABLE: [(SurfaceNames, [usize; 4], SurfaceNames); 6] = [
    (SurfaceNames::FRONT, [0, 3, 2, 1], SurfaceNames::BACK),
    (SurfaceNames::BACK, [4, 5, 6, 7], SurfaceNames::FRONT),
    (SurfaceNames::LEFT, [4, 0, 1, 5], SurfaceNames::RIGHT),
    (SurfaceNames::RIGHT, [3, 7, 6, 2], SurfaceNames::LEFT),
    (SurfaceNames::TOP, [4, 7, 3, 0], SurfaceNames::BOTTOM),
    (SurfaceNames::BOTTOM, [1, 2, 6, 5], SurfaceNames::TOP),
];

fn face_entry(face: SurfaceNames) -> &'static (SurfaceNames, [usize; 4], SurfaceNames) {
    FACE_TABLE
        .iter()
        .find(|(name, _, _)| *name == face)
        .unwrap_or(&FACE_TABLE[0])
}

/// Corner indices of a single face. Unknown or combined flags map to Front.
pub fn face_corners(face: SurfaceNames) -> [usize; 4] {
    face_entry(face).1
}

/// Face on the opposite side of the box.
pub fn opposite_face(face: SurfaceNames) -> SurfaceNames {
    face_entry(face).2
}
