//! ikon - Themed icon-set generator
//!
//! A library for turning a named colour palette into a complete icon
//! asset set: every combination of shape, fill style, pixel size, and
//! colour, rendered as SVG and PNG and packaged into a zip archive.

pub mod assets;
pub mod cli;
pub mod error;
pub mod geometry;
pub mod output;
pub mod package;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use assets::{combination_count, enumerate, AssetJob};
pub use error::{IkonError, Result};
pub use geometry::{compute, Primitive, ShapeGeometry, Stroke};
pub use package::{AssetPackager, AssetRecord};
pub use parser::{parse_theme, parse_theme_file};
pub use render::{svg_document, RasterConverter, SvgRasterizer};
pub use types::{
    FillMode, ShapeKind, ShapeSpec, SizeBucket, ThemeConfig, CANVAS_SIZE, FILL_MODES, SHAPE_KINDS,
    SIZE_BUCKETS, STROKE_WIDTH,
};
pub use validation::{validate_theme, Diagnostic, Severity, ValidationResult};
