//! Rendering module for ikon.
//!
//! Turns computed geometry into SVG documents and SVG documents into
//! PNG bytes.

mod raster;
mod svg;

pub use raster::{RasterConverter, SvgRasterizer};
pub use svg::svg_document;
