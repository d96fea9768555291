//! # form_state
//!
//! Values entered into the form fields of a SlamDown document, kept apart
//! from the rendered markup.
//!
//! - [`initialize`] seeds a [`FormState`] from a document's literal defaults.
//! - [`FormState::apply`] merges one [`FormEvent`] and returns the next state.
//!
//! Both are total: malformed field specs and unknown keys degrade to "no
//! entry" or a fresh entry, never to an error.

mod event;
mod seed;
mod store;
mod value;

pub use event::FormEvent;
pub use seed::{initial_value, initialize};
pub use store::FormState;
pub use value::FieldValue;
