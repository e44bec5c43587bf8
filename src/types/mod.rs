//! Core domain types for ikon.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `ThemeConfig` - a named, ordered colour palette
//! - `ShapeKind` / `FillMode` / `SizeBucket` - the closed combination axes
//! - `ShapeSpec` - one fully-specified combination

mod shape;
mod theme;

pub use shape::{
    FillMode, ShapeKind, ShapeSpec, SizeBucket, CANVAS_SIZE, FILL_MODES, SHAPE_KINDS,
    SIZE_BUCKETS, STROKE_WIDTH,
};
pub use theme::ThemeConfig;
