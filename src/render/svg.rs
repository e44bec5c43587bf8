//! SVG document builder.
//!
//! Wraps exactly one primitive - the filled outer boundary, or the
//! stroked inner boundary for outline fills - in a fixed-size SVG
//! canvas. Geometry values are emitted with one decimal place so that
//! adjacent polygon vertices cannot drift apart through formatting;
//! canvas size and stroke width are exact integers.
//!
//! Colour values are written into `fill`/`stroke` verbatim.

use std::fmt::Write;

use crate::geometry::{Primitive, ShapeGeometry};

/// Build the complete SVG document for one combination.
pub fn svg_document(canvas_size: u32, geometry: &ShapeGeometry, colour: &str) -> String {
    let element = match &geometry.stroke {
        Some(stroke) => stroked_element(&stroke.primitive, colour, stroke.width),
        None => filled_element(&geometry.outer, colour),
    };

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{canvas_size}\" height=\"{canvas_size}\">\n  {element}\n</svg>"
    )
}

fn filled_element(primitive: &Primitive, colour: &str) -> String {
    match primitive {
        Primitive::Circle { cx, cy, r } => {
            format!("<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{r:.1}\" fill=\"{colour}\"/>")
        }
        Primitive::Polygon {
            points,
            corner_radius,
        } => {
            let points = points_attr(points);
            format!(
                "<polygon points=\"{points}\" fill=\"{colour}\" rx=\"{corner_radius:.1}\" ry=\"{corner_radius:.1}\"/>"
            )
        }
        Primitive::RoundedRect {
            x,
            y,
            side,
            corner_radius,
        } => {
            format!(
                "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{side:.1}\" height=\"{side:.1}\" rx=\"{corner_radius:.1}\" ry=\"{corner_radius:.1}\" fill=\"{colour}\"/>"
            )
        }
    }
}

fn stroked_element(primitive: &Primitive, colour: &str, width: f64) -> String {
    match primitive {
        Primitive::Circle { cx, cy, r } => {
            format!(
                "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{r:.1}\" fill=\"none\" stroke=\"{colour}\" stroke-width=\"{width}\"/>"
            )
        }
        Primitive::Polygon {
            points,
            corner_radius,
        } => {
            let points = points_attr(points);
            format!(
                "<polygon points=\"{points}\" fill=\"none\" stroke=\"{colour}\" stroke-width=\"{width}\" rx=\"{corner_radius:.1}\" ry=\"{corner_radius:.1}\"/>"
            )
        }
        Primitive::RoundedRect {
            x,
            y,
            side,
            corner_radius,
        } => {
            format!(
                "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{side:.1}\" height=\"{side:.1}\" rx=\"{corner_radius:.1}\" ry=\"{corner_radius:.1}\" fill=\"none\" stroke=\"{colour}\" stroke-width=\"{width}\"/>"
            )
        }
    }
}

/// `x,y x,y ...` with one decimal per coordinate.
fn points_attr(points: &[(f64, f64)]) -> String {
    let mut attr = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            attr.push(' ');
        }
        let _ = write!(attr, "{x:.1},{y:.1}");
    }
    attr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::compute;
    use crate::types::{FillMode, ShapeKind, ShapeSpec, SizeBucket, CANVAS_SIZE};
    use pretty_assertions::assert_eq;

    fn document(kind: ShapeKind, size: SizeBucket, fill: FillMode, colour: &str) -> String {
        let geometry = compute(&ShapeSpec::new(kind, size, fill));
        svg_document(CANVAS_SIZE, &geometry, colour)
    }

    #[test]
    fn test_circle_filled_document() {
        assert_eq!(
            document(ShapeKind::Circle, SizeBucket::S192, FillMode::Filled, "#ff0000"),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"192\" height=\"192\">\n  \
             <circle cx=\"96.0\" cy=\"96.0\" r=\"96.0\" fill=\"#ff0000\"/>\n\
             </svg>"
        );
    }

    #[test]
    fn test_circle_outline_document() {
        assert_eq!(
            document(ShapeKind::Circle, SizeBucket::S192, FillMode::Outline, "#00ff00"),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"192\" height=\"192\">\n  \
             <circle cx=\"96.0\" cy=\"96.0\" r=\"84.0\" fill=\"none\" stroke=\"#00ff00\" stroke-width=\"12\"/>\n\
             </svg>"
        );
    }

    #[test]
    fn test_diamond_filled_points() {
        let doc = document(ShapeKind::Diamond, SizeBucket::S128, FillMode::Filled, "#123abc");
        assert!(doc.contains(
            "<polygon points=\"96.0,54.0 138.0,96.0 96.0,138.0 54.0,96.0\" \
             fill=\"#123abc\" rx=\"6.3\" ry=\"6.3\"/>"
        ));
    }

    #[test]
    fn test_hexagon_points_rounded_to_one_decimal() {
        let doc = document(ShapeKind::Hexagon, SizeBucket::S128, FillMode::Filled, "#fff");
        assert!(
            doc.contains(
                "points=\"138.0,96.0 117.0,132.4 75.0,132.4 54.0,96.0 75.0,59.6 117.0,59.6\""
            ),
            "unexpected hexagon points in {doc}"
        );
    }

    #[test]
    fn test_outline_document_has_single_stroked_element() {
        let doc = document(ShapeKind::Hexagon, SizeBucket::S192, FillMode::Outline, "#fff");
        assert_eq!(doc.matches("<polygon").count(), 1);
        assert!(doc.contains("fill=\"none\""));
        assert!(doc.contains("stroke-width=\"12\""));
        // Outer ring vertex (x = 96 + 84) must not appear.
        assert!(!doc.contains("180.0,96.0"));
        // Inner ring vertex (x = 96 + 78) is what gets stroked.
        assert!(doc.contains("174.0,96.0"));
    }

    #[test]
    fn test_square_outline_document() {
        let doc = document(ShapeKind::Square, SizeBucket::S192, FillMode::Outline, "#0af");
        assert!(doc.contains(
            "<rect x=\"12.0\" y=\"12.0\" width=\"168.0\" height=\"168.0\" \
             rx=\"9.0\" ry=\"9.0\" fill=\"none\" stroke=\"#0af\" stroke-width=\"12\"/>"
        ));
    }

    #[test]
    fn test_colour_token_passed_through_verbatim() {
        let doc = document(
            ShapeKind::Circle,
            SizeBucket::S144,
            FillMode::Filled,
            "rgb(1, 2, 3)",
        );
        assert!(doc.contains("fill=\"rgb(1, 2, 3)\""));
    }

    #[test]
    fn test_document_is_byte_stable() {
        let a = document(ShapeKind::Square, SizeBucket::S128, FillMode::Outline, "#abc");
        let b = document(ShapeKind::Square, SizeBucket::S128, FillMode::Outline, "#abc");
        assert_eq!(a, b);
    }
}
