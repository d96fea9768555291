//! The value held for one field key.

use slamdown::TextBoxKind;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current value of a form field.
///
/// Text boxes, radio buttons and drop downs hold a single string; check
/// boxes hold the set of options that are ticked.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldValue {
    /// `kind` remembers which text box rendering produced the value.
    SingleValue(TextBoxKind, String),
    MultipleValues(BTreeSet<String>),
}

impl FieldValue {
    pub fn single(kind: TextBoxKind, value: impl Into<String>) -> Self {
        FieldValue::SingleValue(kind, value.into())
    }

    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::MultipleValues(values.into_iter().map(Into::into).collect())
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            FieldValue::SingleValue(_, value) => Some(value),
            FieldValue::MultipleValues(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&BTreeSet<String>> {
        match self {
            FieldValue::SingleValue(..) => None,
            FieldValue::MultipleValues(values) => Some(values),
        }
    }
}
