//! The combination axes: shape kinds, fill modes, and size buckets.
//!
//! Every axis is a closed enum so the geometry engine can dispatch
//! exhaustively; the declared constant slices fix the enumeration order
//! that the file layout depends on.

use std::fmt;

/// Side length of the square drawing canvas, in user units.
///
/// Every SVG document is drawn in this coordinate space regardless of the
/// size bucket; smaller buckets draw proportionally smaller shapes inside
/// the same canvas.
pub const CANVAS_SIZE: u32 = 192;

/// Line thickness for outline-mode shapes, in canvas units.
pub const STROKE_WIDTH: u32 = 12;

/// A geometric shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Hexagon,
    Diamond,
}

impl ShapeKind {
    /// Lowercase name used in file names.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Diamond => "diamond",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Solid shape or stroked boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillMode {
    Filled,
    Outline,
}

impl FillMode {
    /// Lowercase name used in file names.
    pub fn name(self) -> &'static str {
        match self {
            FillMode::Filled => "filled",
            FillMode::Outline => "outline",
        }
    }

    pub fn is_outline(self) -> bool {
        matches!(self, FillMode::Outline)
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the three target pixel sizes; also a directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeBucket {
    S128,
    S144,
    S192,
}

impl SizeBucket {
    /// Target size in pixels.
    pub fn px(self) -> u32 {
        match self {
            SizeBucket::S128 => 128,
            SizeBucket::S144 => 144,
            SizeBucket::S192 => 192,
        }
    }

    /// Whether this bucket fills the whole canvas (canvas-relative sizing).
    pub fn is_canvas_sized(self) -> bool {
        self.px() == CANVAS_SIZE
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.px())
    }
}

/// Size buckets in ascending generation order.
pub const SIZE_BUCKETS: [SizeBucket; 3] = [SizeBucket::S128, SizeBucket::S144, SizeBucket::S192];

/// Shape kinds in declared generation order.
pub const SHAPE_KINDS: [ShapeKind; 4] = [
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Hexagon,
    ShapeKind::Diamond,
];

/// Fill modes in declared generation order.
pub const FILL_MODES: [FillMode; 2] = [FillMode::Filled, FillMode::Outline];

/// One fully-specified combination of the generation axes.
///
/// Immutable once constructed; one instance per generated asset pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub canvas_size: u32,
    pub size: SizeBucket,
    pub fill: FillMode,
    pub stroke_width: u32,
}

impl ShapeSpec {
    pub fn new(kind: ShapeKind, size: SizeBucket, fill: FillMode) -> Self {
        Self {
            kind,
            canvas_size: CANVAS_SIZE,
            size,
            fill,
            stroke_width: STROKE_WIDTH,
        }
    }
}
