//! Field values keyed by field label.
//!
//! A [`FormState`] is a plain value: [`FormState::apply`] consumes the
//! current state and returns the next one. Hosts that receive interactions
//! from several sources must serialize their `apply` calls themselves.

use crate::event::FormEvent;
use crate::value::FieldValue;
use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "slamdown.form_state";

/// Values of every field the user (or the document defaults) has set.
///
/// # Example
///
/// ```
/// use form_state::{FieldValue, FormEvent, FormState};
/// use slamdown::TextBoxKind;
///
/// let state = FormState::new()
///     .apply(FormEvent::text_changed(TextBoxKind::PlainText, "Name", "Ada"))
///     .apply(FormEvent::check_box_changed("Colors", "Red", true));
///
/// assert_eq!(state.single_value("Name"), Some("Ada"));
/// assert_eq!(state.get("Colors"), Some(&FieldValue::multiple(["Red"])));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormState {
    fields: BTreeMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// The held string for a text box, radio group or drop down.
    ///
    /// Returns `None` when the key is unset or holds check box selections.
    pub fn single_value(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(FieldValue::as_single)
    }

    /// The ticked options for a check box field, if it holds any.
    pub fn selected_options(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.fields.get(key).and_then(FieldValue::as_multiple)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overwrites `key`. Used while seeding from document defaults.
    pub(crate) fn insert(&mut self, key: String, value: FieldValue) {
        self.fields.insert(key, value);
    }

    /// Merges one event into the state. Never fails.
    ///
    /// Text changes always overwrite. A check box change edits the option
    /// set at `key`; when the key is unset or holds a single value, the set
    /// starts empty, so clearing an option still creates the key.
    pub fn apply(mut self, event: FormEvent) -> Self {
        log::trace!(target: LOG_TARGET, "apply {event:?}");
        match event {
            FormEvent::TextChanged { kind, key, value } => {
                self.fields.insert(key, FieldValue::SingleValue(kind, value));
            }
            FormEvent::CheckBoxChanged {
                key,
                option,
                checked,
            } => {
                let mut selected = match self.fields.remove(&key) {
                    Some(FieldValue::MultipleValues(set)) => set,
                    Some(FieldValue::SingleValue(_, previous)) => {
                        log::debug!(
                            target: LOG_TARGET,
                            "check box change on {key:?} replaces single value {previous:?}"
                        );
                        BTreeSet::new()
                    }
                    None => BTreeSet::new(),
                };
                if checked {
                    selected.insert(option);
                } else {
                    selected.remove(&option);
                }
                self.fields.insert(key, FieldValue::MultipleValues(selected));
            }
        }
        self
    }

    pub fn apply_all(self, events: impl IntoIterator<Item = FormEvent>) -> Self {
        events.into_iter().fold(self, FormState::apply)
    }
}

impl FromIterator<(String, FieldValue)> for FormState {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
