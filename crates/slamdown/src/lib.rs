//! # slamdown
//!
//! The parsed SlamDown document tree: blocks, inlines and the embedded
//! form fields that the renderer turns into interactive controls.
//!
//! Parsing is out of scope; documents arrive already built, either from an
//! external parser or (with the `serde` feature) deserialized.

pub mod traverse;

mod types;

pub use crate::traverse::{for_each_form_field, form_fields, plain_text};
pub use crate::types::{
    Block, Document, Expr, FieldSpec, FormField, Inline, LinkTarget, ListKind, TextBoxKind,
};
