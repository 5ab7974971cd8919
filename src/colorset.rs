//! Asset catalog colorset emission.
//!
//! Each color becomes a `<name>.colorset` directory holding a `Contents.json`
//! laid out exactly as Xcode writes it, with channel values as strings.

use std::{
    fs,
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::{
    color::ColorEntry,
    error::{Error, Result},
};

/// Directory suffix Xcode uses for color assets.
pub const COLORSET_EXTENSION: &str = "colorset";

/// File name of the colorset descriptor.
pub const CONTENTS_FILE_NAME: &str = "Contents.json";

/// Top-level `Contents.json` document.
#[derive(Debug, Serialize)]
struct Contents {
    /// Color variants; always a single universal entry.
    colors: Vec<ColorVariant>,
    /// Authoring metadata.
    info: Info,
}

/// One appearance/idiom variant of a color.
#[derive(Debug, Serialize)]
struct ColorVariant {
    /// Color space and components.
    color: ColorValue,
    /// Device idiom.
    idiom: &'static str,
}

/// Color value with its color space.
#[derive(Debug, Serialize)]
struct ColorValue {
    /// Color space identifier.
    #[serde(rename = "color-space")]
    color_space: &'static str,
    /// Channel values.
    components: Components,
}

/// Channel values as decimal strings, in the key order Xcode emits.
#[derive(Debug, Serialize)]
struct Components {
    /// Alpha channel.
    alpha: String,
    /// Blue channel.
    blue: String,
    /// Green channel.
    green: String,
    /// Red channel.
    red: String,
}

/// Authoring metadata block.
#[derive(Debug, Serialize)]
struct Info {
    /// Tool that authored the file.
    author: &'static str,
    /// Format version.
    version: u32,
}

impl Contents {
    /// Build the descriptor for a single color.
    fn for_color(color: &ColorEntry) -> Self {
        Self {
            colors: vec![ColorVariant {
                color: ColorValue {
                    color_space: "srgb",
                    components: Components {
                        alpha: component(color.alpha()),
                        blue: component(color.blue()),
                        green: component(color.green()),
                        red: component(color.red()),
                    },
                },
                idiom: "universal",
            }],
            info: Info {
                author: "xcode",
                version: 1,
            },
        }
    }
}

/// Render a channel as the shortest decimal that round-trips, e.g. `1.0`.
fn component(value: f32) -> String {
    format!("{value:?}")
}

/// Pretty printer matching Xcode's `"key" : value` spacing.
struct XcodeFormatter {
    /// Handles indentation and newlines.
    inner: PrettyFormatter<'static>,
}

impl XcodeFormatter {
    /// Create a formatter with two-space indentation.
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for XcodeFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" : ")
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Render the `Contents.json` text for a color, including the trailing newline.
pub fn render_contents(color: &ColorEntry) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, XcodeFormatter::new());
    Contents::for_color(color)
        .serialize(&mut serializer)
        .map_err(|error| Error::ColorsetSerialize {
            name: color.name().to_string(),
            source: error,
        })?;
    buffer.push(b'\n');
    // serde_json only emits UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Path of the colorset directory for a color under `output_root`.
pub fn colorset_dir(output_root: &Path, color: &ColorEntry) -> PathBuf {
    output_root.join(format!("{}.{COLORSET_EXTENSION}", color.name()))
}

/// Write one colorset, returning its directory.
///
/// An existing colorset directory is reused and its contents replaced.
pub fn write_colorset(output_root: &Path, color: &ColorEntry) -> Result<PathBuf> {
    let dir = colorset_dir(output_root, color);
    match fs::create_dir(&dir) {
        Ok(()) => {}
        Err(error) if error.kind() == ErrorKind::AlreadyExists && dir.is_dir() => {}
        Err(error) => {
            return Err(Error::ColorsetCreate {
                path: dir,
                source: error,
            });
        }
    }

    let contents = render_contents(color)?;
    let path = dir.join(CONTENTS_FILE_NAME);
    fs::write(&path, contents).map_err(|error| Error::ColorsetWrite {
        path,
        source: error,
    })?;
    Ok(dir)
}

/// Write a colorset for every color, in order, stopping at the first failure.
pub fn write_colorsets(output_root: &Path, colors: &[ColorEntry]) -> Result<Vec<PathBuf>> {
    colors
        .iter()
        .map(|color| write_colorset(output_root, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{CONTENTS_FILE_NAME, render_contents, write_colorset, write_colorsets};
    use crate::{color::ColorEntry, error::Error};

    fn color(name: &str, hex: &str) -> ColorEntry {
        ColorEntry::from_name_and_hex(name, hex).expect("valid color")
    }

    #[test]
    fn renders_xcode_layout() {
        let contents = render_contents(&color("Red", "#FF0000FF")).expect("render");
        let expected = r#"{
  "colors" : [
    {
      "color" : {
        "color-space" : "srgb",
        "components" : {
          "alpha" : "1.0",
          "blue" : "1.0",
          "green" : "0.0",
          "red" : "0.0"
        }
      },
      "idiom" : "universal"
    }
  ],
  "info" : {
    "author" : "xcode",
    "version" : 1
  }
}
"#;
        assert_eq!(contents, expected);
    }

    #[test]
    fn components_are_strings_that_round_trip() {
        let contents = render_contents(&color("Sky", "#80C0FF")).expect("render");
        let json: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
        let components = &json["colors"][0]["color"]["components"];

        let channel = |key: &str| -> f32 {
            components[key]
                .as_str()
                .expect("component is a string")
                .parse()
                .expect("component is decimal")
        };
        assert_eq!(components["alpha"], "1.0");
        assert_eq!(channel("red"), 128.0 / 255.0);
        assert_eq!(channel("green"), 192.0 / 255.0);
        assert_eq!(channel("blue"), 1.0);
        assert_eq!(json["info"]["version"], 1);
    }

    #[test]
    fn writes_contents_into_colorset_dir() {
        let dir = tempdir().expect("tempdir");
        let written = write_colorset(dir.path(), &color("Primary", "#6200EE")).expect("write");

        assert_eq!(written, dir.path().join("primary.colorset"));
        let contents = fs::read_to_string(written.join(CONTENTS_FILE_NAME)).expect("read");
        assert!(contents.contains("\"idiom\" : \"universal\""));
    }

    #[test]
    fn existing_colorset_is_overwritten() {
        let dir = tempdir().expect("tempdir");
        let colors = [color("Brand", "#000000"), color("brand", "#FFFFFF")];
        let written = write_colorsets(dir.path(), &colors).expect("write");

        assert_eq!(written.len(), 2);
        assert_eq!(written[0], written[1]);
        let contents = fs::read_to_string(written[1].join(CONTENTS_FILE_NAME)).expect("read");
        assert!(contents.contains("\"red\" : \"1.0\""));
        assert_eq!(fs::read_dir(dir.path()).expect("list").count(), 1);
    }

    #[test]
    fn missing_output_root_is_fatal() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("missing");
        let error = write_colorset(&missing, &color("Red", "#FF0000")).expect_err("should fail");
        assert!(matches!(error, Error::ColorsetCreate { .. }), "{error:?}");
    }
}
