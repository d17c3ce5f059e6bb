//! Minimal SVG document builder.
//!
//! A [Drawing] accumulates circles, lines and centred text labels and
//! serializes them into one self-contained SVG document. Elements are
//! written in the order they were added, so later elements paint over
//! earlier ones.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// =#========================================================================#=
// ELEMENTS
// =#========================================================================#=
/// Stroke of a circle outline or a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new<S: Into<String>>(color: S, width: f64) -> Self {
        Stroke {
            color: color.into(),
            width,
        }
    }
}

/// A drawable element of a [Drawing].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        stroke: Stroke,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    /// Text centred horizontally and vertically on `(x, y)`
    Text {
        x: f64,
        y: f64,
        font_size: f64,
        content: String,
    },
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => write!(
                f,
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                escape_xml(fill),
                escape_xml(&stroke.color),
                stroke.width
            ),
            Element::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } => write!(
                f,
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{}"/>"#,
                escape_xml(&stroke.color),
                stroke.width
            ),
            Element::Text {
                x,
                y,
                font_size,
                content,
            } => write!(
                f,
                r#"<text x="{x}" y="{y}" font-size="{font_size}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                escape_xml(content)
            ),
        }
    }
}

// =#========================================================================#=
// DRAWING
// =#========================================================================#=
/// An SVG document of fixed size, built element by element.
///
/// # Example
/// ```
/// use treeplot::svg::{Drawing, Stroke};
///
/// let mut drawing = Drawing::new(100.0, 60.0);
/// drawing.add_circle(50.0, 30.0, 20.0, "#b0b0b0", Stroke::new("black", 2.0));
/// drawing.add_text(50.0, 30.0, 14.0, "root");
///
/// let svg = drawing.to_svg_string();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains(r#"<circle cx="50" cy="30" r="20""#));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drawing {
    width: f64,
    height: f64,
    elements: Vec<Element>,
}

impl Drawing {
    /// Creates an empty drawing with the given canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Drawing {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the elements in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Appends a filled circle centred at `(cx, cy)`.
    pub fn add_circle<S: Into<String>>(&mut self, cx: f64, cy: f64, r: f64, fill: S, stroke: Stroke) {
        self.elements.push(Element::Circle {
            cx,
            cy,
            r,
            fill: fill.into(),
            stroke,
        });
    }

    /// Appends a line from `(x1, y1)` to `(x2, y2)`.
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) {
        self.elements.push(Element::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        });
    }

    /// Appends text centred on `(x, y)`.
    pub fn add_text<S: Into<String>>(&mut self, x: f64, y: f64, font_size: f64, content: S) {
        self.elements.push(Element::Text {
            x,
            y,
            font_size,
            content: content.into(),
        });
    }

    /// Serializes the drawing into an SVG document.
    pub fn to_svg_string(&self) -> String {
        // Rough per-element estimate to avoid most reallocations
        const ELEMENT_CHARS: usize = 120;
        let mut svg = String::with_capacity((self.elements.len() + 2) * ELEMENT_CHARS);

        // Writing into a String cannot fail
        let _ = writeln!(
            svg,
            r#"<svg xmlns="{SVG_NAMESPACE}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        for element in &self.elements {
            let _ = writeln!(svg, "  {element}");
        }
        svg.push_str("</svg>\n");

        svg
    }

    /// Writes the serialized drawing to `writer`.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_svg_string().as_bytes())?;
        writer.flush()
    }
}

/// Escapes the five XML special characters and replaces control
/// characters not allowed in XML 1.0 with U+FFFD.
///
/// Tab, line feed and carriage return are kept.
///
/// # Example
/// ```
/// use treeplot::svg::escape_xml;
///
/// assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell\u{FFFD}");
/// ```
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if c < ' ' => escaped.push(char::REPLACEMENT_CHARACTER),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_xml("Pukeko_42"), "Pukeko_42");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_xml(r#""x""#), "&quot;x&quot;");
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape_xml("a\u{0}b\u{1b}c"), "a\u{FFFD}b\u{FFFD}c");
        assert_eq!(escape_xml("a\tb\nc\r"), "a\tb\nc\r");
    }

    #[test]
    fn test_empty_drawing() {
        let svg = Drawing::new(0.0, 0.0).to_svg_string();
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"0\" height=\"0\" viewBox=\"0 0 0 0\">\n</svg>\n"
        );
    }

    #[test]
    fn test_elements_keep_paint_order() {
        let mut drawing = Drawing::new(10.0, 10.0);
        drawing.add_line(0.0, 0.0, 5.0, 5.0, Stroke::new("black", 2.0));
        drawing.add_circle(5.0, 5.0, 2.5, "#b0b0b0", Stroke::new("black", 2.0));
        drawing.add_text(5.0, 5.0, 12.0, "a&b");

        let svg = drawing.to_svg_string();
        let line = svg.find("<line").unwrap();
        let circle = svg.find("<circle").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(line < circle && circle < text);
        assert!(svg.contains(r#"r="2.5""#));
        assert!(svg.contains(">a&amp;b</text>"));
    }

    #[test]
    fn test_write_to_buffer() {
        let mut drawing = Drawing::new(10.0, 10.0);
        drawing.add_text(1.0, 2.0, 12.0, "x");
        let mut buffer = Vec::new();
        drawing.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), drawing.to_svg_string());
    }
}
