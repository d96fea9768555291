//! # markup
//!
//! The vocabulary the renderer speaks to its host:
//! - [`MarkupBuilder`]: the node-construction capability the host supplies;
//! - [`Element`], [`Tag`], [`Attributes`]: what one element looks like;
//! - [`Binding`]: which form event a control raises, as plain data;
//! - [`Node`] and [`Tree`]: a ready-made node type generic over the host's
//!   event payload, with id lookup and notification dispatch.

mod binding;
mod builder;
mod element;
mod node;
#[cfg(any(test, feature = "snapshot"))]
pub mod snapshot;

pub use binding::{Binding, Notification};
pub use builder::MarkupBuilder;
pub use element::{Attributes, Element, Tag};
pub use node::{Listener, Node, Tree, dispatch, find_by_id};
