/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::Display;

///
/// A single SVG element: a tag with attributes, child elements and optional text content
///
/// Elements are assembled with the builder methods and rendered to markup with `Display`,
/// which is all the editor needs to produce its one static scene.
///
#[derive(Clone, PartialEq, Debug)]
pub struct SvgElement {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<SvgElement>,
    content: Option<String>,
}

impl SvgElement {
    ///
    /// Creates an empty element with the given tag
    ///
    pub fn new(tag: &'static str) -> SvgElement {
        SvgElement {
            tag,
            attributes: vec![],
            children: vec![],
            content: None,
        }
    }

    ///
    /// Adds an attribute to this element
    ///
    pub fn attr(mut self, name: &'static str, value: impl Display) -> SvgElement {
        self.attributes.push((name, value.to_string()));
        self
    }

    ///
    /// Adds a child element to this element
    ///
    pub fn child(mut self, child: SvgElement) -> SvgElement {
        self.children.push(child);
        self
    }

    ///
    /// Adds several child elements to this element
    ///
    pub fn children(mut self, children: impl IntoIterator<Item = SvgElement>) -> SvgElement {
        self.children.extend(children);
        self
    }

    ///
    /// Sets the text content of this element
    ///
    pub fn text(mut self, content: impl Into<String>) -> SvgElement {
        self.content = Some(content.into());
        self
    }
}

impl Display for SvgElement {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "<{}", self.tag)?;
        for (name, value) in self.attributes.iter() {
            write!(formatter, " {}=\"{}\"", name, escape(value))?;
        }

        if self.children.is_empty() && self.content.is_none() {
            return write!(formatter, "/>");
        }

        write!(formatter, ">")?;
        if let Some(content) = &self.content {
            write!(formatter, "{}", escape(content))?;
        }
        for child in self.children.iter() {
            write!(formatter, "{}", child)?;
        }

        write!(formatter, "</{}>", self.tag)
    }
}

///
/// Wraps a set of elements as a complete standalone SVG document
///
pub fn svg_document(width: f64, height: f64, elements: Vec<SvgElement>) -> String {
    let root = SvgElement::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", width)
        .attr("height", height)
        .children(elements);

    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", root)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
