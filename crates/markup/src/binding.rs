//! Data-only descriptions of which [`FormEvent`] a control raises.
//!
//! A binding is attached to a rendered control when the document is
//! rendered. When the host observes a DOM-level [`Notification`] on that
//! control it calls [`Binding::resolve`] and feeds the resulting event to
//! [`FormState::apply`](form_state::FormState::apply).

use form_state::FormEvent;
use slamdown::TextBoxKind;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Text entry; every input notification carries the full new text.
    Input { kind: TextBoxKind, key: String },
    /// A `<select>`; the change notification carries the chosen option value.
    Change { key: String },
    /// One radio button; becoming checked chooses `value`.
    Choose { key: String, value: String },
    /// One check box option.
    Toggle { key: String, option: String },
}

/// What the DOM reported about a control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Input(String),
    Change(String),
    Checked(bool),
}

impl Binding {
    pub fn key(&self) -> &str {
        match self {
            Binding::Input { key, .. }
            | Binding::Change { key }
            | Binding::Choose { key, .. }
            | Binding::Toggle { key, .. } => key,
        }
    }

    /// Maps a notification to the event it raises.
    ///
    /// Returns `None` when the notification does not apply to this kind of
    /// control, or when a radio button reports that it was unchecked.
    pub fn resolve(&self, notification: Notification) -> Option<FormEvent> {
        match (self, notification) {
            (Binding::Input { kind, key }, Notification::Input(value)) => {
                Some(FormEvent::text_changed(*kind, key.clone(), value))
            }
            (Binding::Change { key }, Notification::Change(value)) => Some(
                FormEvent::text_changed(TextBoxKind::PlainText, key.clone(), value),
            ),
            (Binding::Choose { key, value }, Notification::Checked(true)) => Some(
                FormEvent::text_changed(TextBoxKind::PlainText, key.clone(), value.clone()),
            ),
            (Binding::Toggle { key, option }, Notification::Checked(checked)) => Some(
                FormEvent::check_box_changed(key.clone(), option.clone(), checked),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Input { kind, key } => write!(f, "input({key:?}, {kind:?})"),
            Binding::Change { key } => write!(f, "change({key:?})"),
            Binding::Choose { key, value } => write!(f, "choose({key:?}, {value:?})"),
            Binding::Toggle { key, option } => write!(f, "toggle({key:?}, {option:?})"),
        }
    }
}
