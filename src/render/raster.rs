//! SVG to PNG conversion.
//!
//! The pipeline treats rasterization as an external capability behind the
//! [`RasterConverter`] trait: one fallible call per combination, no
//! retries. The production implementation parses the document with usvg
//! and renders it with resvg into a tiny-skia pixmap.

use resvg::usvg::{self, TreeParsing};

use crate::error::{IkonError, Result};

/// Converts a complete SVG document into encoded raster bytes.
pub trait RasterConverter {
    /// Convert one document. `asset` is the base name of the combination,
    /// used to attribute failures.
    fn convert(&self, asset: &str, svg: &str) -> Result<Vec<u8>>;
}

/// resvg-backed converter producing PNG bytes at a fixed square size.
pub struct SvgRasterizer {
    size: u32,
}

impl SvgRasterizer {
    /// Create a rasterizer that renders into a `size`×`size` pixmap.
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

impl RasterConverter for SvgRasterizer {
    fn convert(&self, asset: &str, svg: &str) -> Result<Vec<u8>> {
        let fail = |message: String| IkonError::RasterFailed {
            asset: asset.to_string(),
            message,
        };

        let options = usvg::Options::default();
        let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
            .map_err(|e| fail(e.to_string()))?;

        let mut pixmap = tiny_skia::Pixmap::new(self.size, self.size)
            .ok_or_else(|| fail("pixmap dimensions must be non-zero".to_string()))?;

        let rtree = resvg::Tree::from_usvg(&tree);
        rtree.render(tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        pixmap.encode_png().map_err(|e| fail(e.to_string()))
    }
}
