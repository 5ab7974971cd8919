//! Hex color decoding into normalized sRGB components.

use thiserror::Error;

/// Reasons a color resource entry is skipped instead of converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The value does not start with `#`.
    #[error("value '{value}' does not start with '#'")]
    MissingHash {
        /// Raw value from the resource file.
        value: String,
    },
    /// The value has neither 6 nor 8 hex digits after the `#`.
    #[error("value '{value}' has {len} digits, expected 6 (RRGGBB) or 8 (AARRGGBB)")]
    InvalidLength {
        /// Raw value from the resource file.
        value: String,
        /// Number of characters after the `#`.
        len: usize,
    },
    /// The value contains characters that are not hex digits.
    #[error("value '{value}' contains non-hex digits")]
    InvalidDigits {
        /// Raw value from the resource file.
        value: String,
    },
    /// The entry has no name to derive a colorset folder from.
    #[error("color has no name")]
    EmptyName,
    /// The name would place the colorset outside the output directory.
    #[error("name '{name}' cannot be used as a colorset folder name")]
    InvalidName {
        /// Name after lower-casing its first character.
        name: String,
    },
}

/// A named color with every channel normalized to `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// Colorset name: the resource name with its first character lower-cased.
    name: String,
    /// Alpha channel.
    alpha: f32,
    /// Red channel.
    red: f32,
    /// Green channel.
    green: f32,
    /// Blue channel.
    blue: f32,
}

impl ColorEntry {
    /// Decode a resource entry, returning `None` when it should be skipped.
    pub fn from_name_and_hex(name: &str, hex: &str) -> Option<Self> {
        Self::try_from_name_and_hex(name, hex).ok()
    }

    /// Decode a resource entry, reporting why it cannot be converted.
    ///
    /// `#RRGGBB` is opaque; `#AARRGGBB` carries alpha in the leading byte.
    pub fn try_from_name_and_hex(name: &str, hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').ok_or_else(|| ColorError::MissingHash {
            value: hex.to_string(),
        })?;

        let len = digits.chars().count();
        if len != 6 && len != 8 {
            return Err(ColorError::InvalidLength {
                value: hex.to_string(),
                len,
            });
        }
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigits {
                value: hex.to_string(),
            });
        }

        let name = first_lower_cased(name);
        if name.is_empty() {
            return Err(ColorError::EmptyName);
        }
        if !is_folder_name(&name) {
            return Err(ColorError::InvalidName { name });
        }

        // All digits are ASCII here, so two-byte slices are char boundaries.
        let channel = |index: usize| -> Result<f32, ColorError> {
            let start = index * 2;
            u8::from_str_radix(&digits[start..start + 2], 16)
                .map(normalize)
                .map_err(|_| ColorError::InvalidDigits {
                    value: hex.to_string(),
                })
        };

        let (alpha, offset) = if len == 8 {
            (channel(0)?, 1)
        } else {
            (1.0, 0)
        };

        Ok(Self {
            name,
            alpha,
            red: channel(offset)?,
            green: channel(offset + 1)?,
            blue: channel(offset + 2)?,
        })
    }

    /// Colorset name for this entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alpha channel in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Red channel in `[0, 1]`.
    pub fn red(&self) -> f32 {
        self.red
    }

    /// Green channel in `[0, 1]`.
    pub fn green(&self) -> f32 {
        self.green
    }

    /// Blue channel in `[0, 1]`.
    pub fn blue(&self) -> f32 {
        self.blue
    }
}

/// Scale a byte channel into `[0, 1]`.
fn normalize(byte: u8) -> f32 {
    f32::from(byte) / 255.0
}

/// Whether `name` is a single path component that stays inside its parent.
fn is_folder_name(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Lower-case the first character of a name, leaving the rest untouched.
pub fn first_lower_cased(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
