//! Shape geometry engine.
//!
//! Maps a [`ShapeSpec`] to the vector primitives that describe it inside
//! the fixed 192×192 canvas. The computation is pure and total: every
//! combination of the declared axes yields a geometry, there is no error
//! path, and equal inputs always produce equal output.
//!
//! Sizing follows two regimes. The 192 bucket is canvas-relative: the
//! shape spans the whole canvas, and outline mode insets the boundary so
//! the outer stroke edge stays inside the canvas bound. The smaller
//! buckets are size-relative badges (`px / 3` radius, `px / 1.5` square
//! side) that never inset for stroke.

use std::f64::consts::PI;

use crate::types::{FillMode, ShapeKind, ShapeSpec};

/// A single vector primitive, positioned in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A circle around `(cx, cy)`.
    Circle { cx: f64, cy: f64, r: f64 },

    /// A closed polygon with per-vertex corner rounding.
    Polygon {
        points: Vec<(f64, f64)>,
        corner_radius: f64,
    },

    /// An axis-aligned square with rounded corners.
    RoundedRect {
        x: f64,
        y: f64,
        side: f64,
        corner_radius: f64,
    },
}

impl Primitive {
    /// Axis-aligned bounding box of the primitive's path as
    /// `(min_x, min_y, max_x, max_y)`, ignoring stroke width.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Primitive::Circle { cx, cy, r } => (cx - r, cy - r, cx + r, cy + r),
            Primitive::Polygon { points, .. } => points.iter().fold(
                (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
                |(min_x, min_y, max_x, max_y), &(x, y)| {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                },
            ),
            Primitive::RoundedRect { x, y, side, .. } => (*x, *y, x + side, y + side),
        }
    }
}

/// A primitive to be stroked rather than filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub primitive: Primitive,
    pub width: f64,
}

/// The computed geometry for one combination.
///
/// `outer` always describes the shape's outer boundary. For outline
/// fills, `stroke` holds the inset inner boundary that is actually drawn;
/// the outer boundary is suppressed from the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    pub outer: Primitive,
    pub stroke: Option<Stroke>,
}

impl ShapeGeometry {
    fn filled(outer: Primitive) -> Self {
        Self {
            outer,
            stroke: None,
        }
    }

    fn outlined(outer: Primitive, inner: Primitive, width: f64) -> Self {
        Self {
            outer,
            stroke: Some(Stroke {
                primitive: inner,
                width,
            }),
        }
    }

    /// The primitive that actually appears in the output document.
    pub fn drawable(&self) -> &Primitive {
        match &self.stroke {
            Some(stroke) => &stroke.primitive,
            None => &self.outer,
        }
    }

    pub fn is_stroked(&self) -> bool {
        self.stroke.is_some()
    }
}

/// Compute the vector geometry for one combination.
pub fn compute(spec: &ShapeSpec) -> ShapeGeometry {
    let canvas = f64::from(spec.canvas_size);
    let centre = canvas / 2.0;
    let stroke = f64::from(spec.stroke_width);

    match spec.kind {
        ShapeKind::Circle => circle(spec, centre, stroke),
        ShapeKind::Square => square(spec, canvas, stroke),
        ShapeKind::Hexagon => hexagon(spec, centre, stroke),
        ShapeKind::Diamond => diamond(spec, centre, stroke),
    }
}

/// Radius for the round-ish shapes (circle, hexagon, diamond).
///
/// Canvas-sized buckets span half the canvas minus an outline inset
/// (`inset` differs per shape so the outer stroke edge lands on the
/// canvas bound). Smaller buckets use a third of the target size,
/// truncated, with no fill-mode dependence.
fn ring_radius(spec: &ShapeSpec, centre: f64, outline_inset: f64) -> f64 {
    if spec.size.is_canvas_sized() {
        if spec.fill.is_outline() {
            centre - outline_inset
        } else {
            centre
        }
    } else {
        f64::from(spec.size.px() / 3)
    }
}

fn circle(spec: &ShapeSpec, centre: f64, stroke: f64) -> ShapeGeometry {
    // Half-stroke inset: the stroke straddles the path, so pulling the
    // path in by stroke/2 puts the outer stroke edge at the boundary.
    let r = ring_radius(spec, centre, stroke / 2.0);
    let outer = Primitive::Circle {
        cx: centre,
        cy: centre,
        r,
    };

    match spec.fill {
        FillMode::Filled => ShapeGeometry::filled(outer),
        FillMode::Outline => {
            let inner = Primitive::Circle {
                cx: centre,
                cy: centre,
                r: r - stroke / 2.0,
            };
            ShapeGeometry::outlined(outer, inner, stroke)
        }
    }
}

fn hexagon(spec: &ShapeSpec, centre: f64, stroke: f64) -> ShapeGeometry {
    let r = ring_radius(spec, centre, stroke);
    let outer = hex_ring(centre, r);

    match spec.fill {
        FillMode::Filled => ShapeGeometry::filled(outer),
        FillMode::Outline => {
            let inner = hex_ring(centre, r - stroke / 2.0);
            ShapeGeometry::outlined(outer, inner, stroke)
        }
    }
}

/// Six vertices at `i·60°`, standard trigonometric placement (first
/// vertex on the positive x axis).
fn hex_ring(centre: f64, radius: f64) -> Primitive {
    let points = (0..6)
        .map(|i| {
            let angle = f64::from(i) * PI / 3.0;
            (
                centre + radius * angle.cos(),
                centre + radius * angle.sin(),
            )
        })
        .collect();
    Primitive::Polygon {
        points,
        corner_radius: radius * 0.1,
    }
}

fn diamond(spec: &ShapeSpec, centre: f64, stroke: f64) -> ShapeGeometry {
    let r = ring_radius(spec, centre, stroke);
    let outer = diamond_ring(centre, r);

    match spec.fill {
        FillMode::Filled => ShapeGeometry::filled(outer),
        FillMode::Outline => {
            let inner = diamond_ring(centre, r - stroke / 2.0);
            ShapeGeometry::outlined(outer, inner, stroke)
        }
    }
}

/// Axis-aligned rhombus: top, right, bottom, left.
fn diamond_ring(centre: f64, radius: f64) -> Primitive {
    let points = vec![
        (centre, centre - radius),
        (centre + radius, centre),
        (centre, centre + radius),
        (centre - radius, centre),
    ];
    Primitive::Polygon {
        points,
        corner_radius: radius * 0.15,
    }
}

fn square(spec: &ShapeSpec, canvas: f64, stroke: f64) -> ShapeGeometry {
    let (offset, side, corner) = if spec.size.is_canvas_sized() {
        // Inset by the stroke width on both axes so outline mode has room.
        let side = canvas - stroke;
        (stroke / 2.0, side, side * 0.05)
    } else {
        let side = (f64::from(spec.size.px()) / 1.5).floor();
        ((canvas - side) / 2.0, side, side * 0.2)
    };

    let outer = Primitive::RoundedRect {
        x: offset,
        y: offset,
        side,
        corner_radius: corner,
    };

    match spec.fill {
        FillMode::Filled => ShapeGeometry::filled(outer),
        FillMode::Outline => {
            // Inner rect shrinks by the full stroke width; the corner
            // radius stays that of the outer rect.
            let inner = Primitive::RoundedRect {
                x: offset + stroke / 2.0,
                y: offset + stroke / 2.0,
                side: side - stroke,
                corner_radius: corner,
            };
            ShapeGeometry::outlined(outer, inner, stroke)
        }
    }
}
