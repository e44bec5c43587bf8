//! Parser for ikon theme files.
//!
//! A theme file is plain text: the first non-blank line names the theme,
//! and every following line of the form `--name: value;` (leading `--`,
//! `:` separator, optional trailing `;`) defines a colour. Anything else
//! is ignored, so the format happily digests a CSS custom-property block:
//!
//! ```text
//! acme
//! --primary: #ff0000;
//! --secondary: #00ff00;
//! ```

mod theme;

pub use theme::{parse_theme, parse_theme_file};
