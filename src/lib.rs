//! # slamdown-forms
//!
//! Renders SlamDown documents, prose with embedded form fields, into markup
//! whose controls show the values held in a [`FormState`].
//!
//! The pieces live in their own crates and are re-exported here:
//! - [`slamdown`]: the document tree;
//! - [`form_state`]: field values and the events that change them;
//! - [`markup`]: the node vocabulary and the host's builder capability;
//! - [`render`]: the deterministic renderer.
//!
//! A host renders, routes DOM notifications back through [`dispatch`],
//! applies the resulting events and renders again:
//!
//! ```
//! use slamdown_forms::{
//!     Block, Document, Expr, FieldSpec, FormField, Inline, Notification, TextBoxKind, dispatch,
//!     initialize, render_tree,
//! };
//!
//! let doc = Document::new(vec![Block::Paragraph(vec![Inline::FormField(FormField {
//!     label: "Name".to_string(),
//!     required: true,
//!     spec: FieldSpec::TextBox {
//!         kind: TextBoxKind::PlainText,
//!         default: Some(Expr::Literal("Ada".to_string())),
//!     },
//! })])]);
//!
//! let state = initialize(&doc);
//! let nodes = render_tree("doc", &state, &doc);
//! let event = dispatch(&nodes, "doc-1", Notification::Input("Grace".to_string())).unwrap();
//!
//! let state = state.apply(event);
//! assert_eq!(state.single_value("Name"), Some("Grace"));
//! ```

pub use form_state::{self, FieldValue, FormEvent, FormState, initial_value, initialize};
pub use markup::{
    self, Attributes, Binding, Element, MarkupBuilder, Node, Notification, Tag, Tree, dispatch,
    find_by_id,
};
pub use render::{self, DocumentRenderer, IdSupply, render_tree};
pub use slamdown::{
    self, Block, Document, Expr, FieldSpec, FormField, Inline, LinkTarget, ListKind, TextBoxKind,
};
