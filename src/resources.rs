//! Color resource XML parsing.

use std::{fs, path::Path, result::Result as StdResult};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::error::{Error, Result};

/// Element name that marks a color resource.
const COLOR_TAG: &[u8] = b"color";

/// Attribute holding the color's resource name.
const NAME_ATTR: &str = "name";

/// A color declaration as written in the resource file, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColor {
    /// Value of the `name` attribute, empty when absent.
    pub(crate) name: String,
    /// Trimmed text content of the element.
    pub(crate) value: String,
}

impl RawColor {
    /// Value of the `name` attribute.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed text content, expected to be a `#` hex color.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Read every color declaration from a resource file, in document order.
pub fn read_color_resources(path: &Path) -> Result<Vec<RawColor>> {
    let contents = fs::read_to_string(path).map_err(|error| Error::InputRead {
        path: path.to_path_buf(),
        source: error,
    })?;
    parse_color_resources(path, &contents)
}

/// Parse color declarations from an XML document.
///
/// Any `color` element below the document element matches, however deeply
/// nested. `path` is only used for error reporting.
pub fn parse_color_resources(path: &Path, contents: &str) -> Result<Vec<RawColor>> {
    let mut reader = Reader::from_str(contents);
    reader.trim_text(false);
    let mut scanner = ColorScanner::default();

    loop {
        let event = reader.read_event().map_err(|error| Error::XmlParse {
            path: path.to_path_buf(),
            position: reader.buffer_position(),
            source: error,
        })?;
        let step = match event {
            Event::Start(element) => scanner.open(&element, false),
            Event::Empty(element) => scanner.open(&element, true),
            Event::End(_) => scanner.close(),
            Event::Text(text) => match text.unescape() {
                Ok(text) => scanner.text(&text),
                Err(error) => Err(Scan::Xml(error)),
            },
            Event::CData(data) => scanner.text(&String::from_utf8_lossy(&data.into_inner())),
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => Ok(()),
        };
        step.map_err(|scan| match scan {
            Scan::Xml(error) => Error::XmlParse {
                path: path.to_path_buf(),
                position: reader.buffer_position(),
                source: error,
            },
            Scan::Structure(message) => Error::XmlStructure {
                path: path.to_path_buf(),
                message,
            },
        })?;
    }

    scanner.finish().map_err(|message| Error::XmlStructure {
        path: path.to_path_buf(),
        message,
    })
}

/// Failure raised while feeding events to the scanner.
enum Scan {
    /// Low-level XML error from attribute or text decoding.
    Xml(quick_xml::Error),
    /// Document structure problem.
    Structure(String),
}

/// Tracks element nesting and the color elements currently open.
#[derive(Debug, Default)]
struct ColorScanner {
    /// Colors collected so far, ordered by start tag.
    colors: Vec<RawColor>,
    /// Current element depth.
    depth: usize,
    /// Indices into `colors` for open color elements, with their depth.
    open: Vec<(usize, usize)>,
    /// Whether the document element has been seen.
    seen_root: bool,
}

impl ColorScanner {
    /// Handle a start tag or a self-closing element.
    fn open(&mut self, element: &BytesStart<'_>, empty: bool) -> StdScan {
        if self.depth == 0 {
            if self.seen_root {
                return Err(Scan::Structure(
                    "document has more than one root element".to_string(),
                ));
            }
            self.seen_root = true;
        } else if element.name().as_ref() == COLOR_TAG {
            let name = match element.try_get_attribute(NAME_ATTR) {
                Ok(Some(attr)) => attr.unescape_value().map_err(Scan::Xml)?.into_owned(),
                Ok(None) => String::new(),
                Err(error) => return Err(Scan::Xml(error.into())),
            };
            self.colors.push(RawColor {
                name,
                value: String::new(),
            });
            if !empty {
                self.open.push((self.depth, self.colors.len() - 1));
            }
        }

        if !empty {
            self.depth += 1;
        }
        Ok(())
    }

    /// Handle an end tag.
    fn close(&mut self) -> StdScan {
        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or_else(|| Scan::Structure("unexpected closing tag".to_string()))?;

        if let Some(&(depth, index)) = self.open.last()
            && depth == self.depth
        {
            self.open.pop();
            let color = &mut self.colors[index];
            color.value = color.value.trim().to_string();
        }
        Ok(())
    }

    /// Append character data to every open color element.
    fn text(&mut self, text: &str) -> StdScan {
        if self.depth == 0 {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(Scan::Structure(
                "text outside the root element".to_string(),
            ));
        }

        for &(_, index) in &self.open {
            self.colors[index].value.push_str(text);
        }
        Ok(())
    }

    /// Check the document was complete and return the collected colors.
    fn finish(self) -> StdResult<Vec<RawColor>, String> {
        if !self.seen_root {
            return Err("document has no root element".to_string());
        }
        if self.depth > 0 {
            return Err(format!("{} element(s) left unclosed", self.depth));
        }
        Ok(self.colors)
    }
}

/// Result of feeding one event to the scanner.
type StdScan = StdResult<(), Scan>;
