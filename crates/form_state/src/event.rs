use slamdown::TextBoxKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A discrete user edit. Events are the only way to change a [`FormState`]
/// after it has been initialized.
///
/// [`FormState`]: crate::FormState
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormEvent {
    /// A text box, radio group or drop down now holds `value`.
    TextChanged {
        kind: TextBoxKind,
        key: String,
        value: String,
    },
    /// One check box option was ticked or cleared.
    CheckBoxChanged {
        key: String,
        option: String,
        checked: bool,
    },
}

impl FormEvent {
    pub fn text_changed(kind: TextBoxKind, key: impl Into<String>, value: impl Into<String>) -> Self {
        FormEvent::TextChanged {
            kind,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn check_box_changed(
        key: impl Into<String>,
        option: impl Into<String>,
        checked: bool,
    ) -> Self {
        FormEvent::CheckBoxChanged {
            key: key.into(),
            option: option.into(),
            checked,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            FormEvent::TextChanged { key, .. } | FormEvent::CheckBoxChanged { key, .. } => key,
        }
    }
}
