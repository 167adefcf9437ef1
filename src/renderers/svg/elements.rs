//! SVG element mapping
//!
//! One table from scene primitives to SVG tags and attributes. The string
//! serializer and the live DOM adapter both read it, so the on-page tree and
//! the exported document carry identical markup.

use quick_xml::escape::escape;

use crate::renderers::display_list::SceneElement;
use crate::utils::fmt_num;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Tag, attributes and optional text content of one SVG element
#[derive(Clone, Debug, PartialEq)]
pub struct SvgNode {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<String>,
}

impl SvgNode {
    fn new(tag: &'static str, attributes: Vec<(&'static str, String)>) -> Self {
        Self {
            tag,
            attributes,
            text: None,
        }
    }

    /// Serialize as a single XML element with escaped attribute values and text
    pub fn to_markup(&self) -> String {
        let mut markup = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            markup.push_str(&format!(" {}=\"{}\"", name, escape(value.as_str())));
        }
        match &self.text {
            Some(text) => {
                markup.push_str(&format!(">{}</{}>", escape(text.as_str()), self.tag));
            }
            None => markup.push_str("/>"),
        }
        markup
    }
}

/// Map a scene primitive to its SVG representation
pub fn svg_node(element: &SceneElement) -> SvgNode {
    match element {
        SceneElement::Background { width, height, fill } => SvgNode::new(
            "rect",
            vec![
                ("x", "0".to_string()),
                ("y", "0".to_string()),
                ("width", fmt_num(*width)),
                ("height", fmt_num(*height)),
                ("fill", fill.clone()),
            ],
        ),
        SceneElement::CircleGuide { cx, cy, r, stroke, stroke_width } => SvgNode::new(
            "circle",
            vec![
                ("cx", fmt_num(*cx)),
                ("cy", fmt_num(*cy)),
                ("r", fmt_num(*r)),
                ("fill", "none".to_string()),
                ("stroke", stroke.clone()),
                ("stroke-width", fmt_num(*stroke_width)),
            ],
        ),
        SceneElement::Ray { x1, y1, x2, y2, stroke, stroke_width } => SvgNode::new(
            "line",
            vec![
                ("x1", fmt_num(*x1)),
                ("y1", fmt_num(*y1)),
                ("x2", fmt_num(*x2)),
                ("y2", fmt_num(*y2)),
                ("stroke", stroke.clone()),
                ("stroke-width", fmt_num(*stroke_width)),
                ("stroke-linecap", "round".to_string()),
            ],
        ),
        SceneElement::Point { cx, cy, r, fill } => SvgNode::new(
            "circle",
            vec![
                ("cx", fmt_num(*cx)),
                ("cy", fmt_num(*cy)),
                ("r", fmt_num(*r)),
                ("fill", fill.clone()),
            ],
        ),
        SceneElement::Label { x, y, text, font_size, font_family, fill } => SvgNode {
            tag: "text",
            attributes: vec![
                ("x", fmt_num(*x)),
                ("y", fmt_num(*y)),
                ("text-anchor", "middle".to_string()),
                ("dominant-baseline", "central".to_string()),
                ("font-size", fmt_num(*font_size)),
                ("font-family", font_family.clone()),
                ("fill", fill.clone()),
            ],
            text: Some(text.clone()),
        },
    }
}
