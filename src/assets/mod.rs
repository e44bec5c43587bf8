//! Asset enumeration and naming.
//!
//! Produces the lazy, ordered sequence of every (size, shape, fill,
//! colour) combination for a theme. The ordering is a compatibility
//! contract: the directory layout, file names, and archive entries all
//! derive from it, so it must be byte-stable across runs. Sizes ascend,
//! then shapes in declared order, then fills, then colours in the order
//! the theme file defined them.

use crate::types::{ShapeSpec, SizeBucket, ThemeConfig, FILL_MODES, SHAPE_KINDS, SIZE_BUCKETS};

/// One combination to generate, with its colour binding.
#[derive(Debug, Clone, Copy)]
pub struct AssetJob<'a> {
    pub spec: ShapeSpec,
    pub colour_name: &'a str,
    pub colour_value: &'a str,
}

impl<'a> AssetJob<'a> {
    /// `{theme}-{size}-{shape}-{filltype}-{colourName}`
    pub fn base_name(&self, theme_name: &str) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            theme_name, self.spec.size, self.spec.kind, self.spec.fill, self.colour_name
        )
    }

    pub fn svg_filename(&self, theme_name: &str) -> String {
        format!("{}.svg", self.base_name(theme_name))
    }

    pub fn png_filename(&self, theme_name: &str) -> String {
        format!("{}.png", self.base_name(theme_name))
    }

    pub fn size(&self) -> SizeBucket {
        self.spec.size
    }
}

/// Enumerate every combination for a theme, in the contractual order.
///
/// The iterator is lazy and restartable: calling this again yields an
/// identical sequence.
pub fn enumerate(theme: &ThemeConfig) -> impl Iterator<Item = AssetJob<'_>> {
    SIZE_BUCKETS.into_iter().flat_map(move |size| {
        SHAPE_KINDS.into_iter().flat_map(move |kind| {
            FILL_MODES.into_iter().flat_map(move |fill| {
                theme.colours().map(move |(colour_name, colour_value)| AssetJob {
                    spec: ShapeSpec::new(kind, size, fill),
                    colour_name,
                    colour_value,
                })
            })
        })
    })
}

/// Number of combinations a theme produces (each yields an SVG/PNG pair).
pub fn combination_count(theme: &ThemeConfig) -> usize {
    SIZE_BUCKETS.len() * SHAPE_KINDS.len() * FILL_MODES.len() * theme.len()
}
