//! Formatting configuration for emitted source text.
//!
//! Settings arrive as externally supplied key-value pairs (editorconfig
//! style) and are consumed read-only through a [`figment`] provider. They
//! affect whitespace layout only, never generated semantics. Unrecognised or
//! invalid values fall back rather than fail: an unknown `indent_style` means
//! tabs, and a missing or invalid `indent_size` under space indentation means
//! three spaces.

use figment::{Figment, Provider};
use serde::Deserialize;

use crate::error::RecordBehaviorError;

/// Indentation size used when space-indented and no valid size is supplied.
const DEFAULT_SPACE_SIZE: u32 = 3;

/// Indentation character class for emitted text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndentStyle {
    /// One tab per level.
    #[default]
    Tab,
    /// A run of spaces per level.
    Space,
}

/// Whitespace layout settings for generated units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    style: IndentStyle,
    size: Option<u32>,
}

/// Raw key-value shape before fallback resolution. Both values are textual
/// because the settings originate from editorconfig-style sources.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFormat {
    indent_style: Option<String>,
    indent_size: Option<String>,
}

impl FormatConfig {
    /// Extracts formatting settings from `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBehaviorError::Format`] when the provider itself fails
    /// to yield data. Unrecognised *values* never error; they fall back as
    /// documented on the module.
    pub fn from_provider(provider: impl Provider) -> Result<Self, RecordBehaviorError> {
        let raw: RawFormat = Figment::from(provider).extract()?;
        Ok(Self::from_raw(&raw))
    }

    fn from_raw(raw: &RawFormat) -> Self {
        let style = match raw.indent_style.as_deref() {
            Some(style) if style.eq_ignore_ascii_case("space") => IndentStyle::Space,
            _ => IndentStyle::Tab,
        };
        let size = raw
            .indent_size
            .as_deref()
            .and_then(|size| size.parse::<u32>().ok())
            .filter(|size| *size >= 1);
        Self { style, size }
    }

    /// One level of indentation as text.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        match self.style {
            IndentStyle::Tab => "\t".to_owned(),
            IndentStyle::Space => {
                " ".repeat(self.size.unwrap_or(DEFAULT_SPACE_SIZE) as usize)
            }
        }
    }

    /// The resolved indentation style.
    #[must_use]
    pub fn style(&self) -> IndentStyle {
        self.style
    }
}
