//! # render
//!
//! Turns a SlamDown [`Document`] into markup nodes, showing the values held
//! in a [`FormState`] inside the rendered form controls.
//!
//! Rendering is a pure function of `(prefix, state, document)`. Element ids
//! come from an [`IdSupply`] threaded through the walk and seeded afresh for
//! every call, so re-rendering an unchanged document reproduces the same ids.
//!
//! ```
//! use form_state::{FormState, initialize};
//! use markup::Tree;
//! use slamdown::{Block, Document, Inline};
//!
//! let doc = Document::new(vec![Block::Paragraph(vec![Inline::str("Hello")])]);
//! let state = initialize(&doc);
//! let nodes = render::render(&Tree::default(), "doc", &state, &doc);
//! assert_eq!(nodes[0].text_content(), "Hello");
//! ```

mod document;
mod fields;
mod ids;

pub use document::DocumentRenderer;
pub use fields::{REQUIRED_MARKER, UNSUPPORTED_FORM_ELEMENT};
pub use ids::{FIRST_ID, IdSupply};

use form_state::{FormEvent, FormState};
use markup::{MarkupBuilder, Node, Tree};
use slamdown::Document;

/// Renders every block of `doc` with `builder`.
///
/// Ids have the form `"<prefix>-<n>"`, counting from [`FIRST_ID`] in
/// document order.
pub fn render<B: MarkupBuilder>(
    builder: &B,
    prefix: &str,
    state: &FormState,
    doc: &Document,
) -> Vec<B::Node> {
    let (nodes, _) = DocumentRenderer::new(builder, prefix, state).blocks(IdSupply::new(), &doc.blocks);
    nodes
}

/// [`render`] into the bundled [`Node`] type, raising plain [`FormEvent`]s.
pub fn render_tree(prefix: &str, state: &FormState, doc: &Document) -> Vec<Node<FormEvent>> {
    render(&Tree::default(), prefix, state, doc)
}

#[cfg(test)]
mod tests;
