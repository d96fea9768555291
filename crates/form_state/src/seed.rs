use crate::store::FormState;
use crate::value::FieldValue;
use slamdown::{Document, Expr, FieldSpec, FormField, TextBoxKind, for_each_form_field};

const LOG_TARGET: &str = "slamdown.form_state";

/// Builds the starting state for `doc` from the literal defaults of its
/// form fields.
///
/// Fields without a literal default get no entry. When a label is declared
/// more than once, the last declaration in document order wins.
pub fn initialize(doc: &Document) -> FormState {
    let mut state = FormState::new();
    for_each_form_field(doc, |field| match initial_value(field) {
        Some(value) => {
            log::trace!(target: LOG_TARGET, "seed {:?} = {value:?}", field.label);
            state.insert(field.label.clone(), value);
        }
        None => {
            log::trace!(
                target: LOG_TARGET,
                "no literal default for {} {:?}",
                field.spec.type_name(),
                field.label
            );
        }
    });
    state
}

/// The value a single field starts with, if its spec carries a literal one.
pub fn initial_value(field: &FormField) -> Option<FieldValue> {
    match &field.spec {
        FieldSpec::TextBox {
            kind,
            default: Some(Expr::Literal(value)),
        } => Some(FieldValue::SingleValue(*kind, value.clone())),
        FieldSpec::RadioButtons {
            default: Expr::Literal(value),
            ..
        } => Some(FieldValue::SingleValue(TextBoxKind::PlainText, value.clone())),
        FieldSpec::CheckBoxes {
            checked: Expr::Literal(checked),
            options: Expr::Literal(options),
        } => {
            if checked.len() != options.len() {
                log::debug!(
                    target: LOG_TARGET,
                    "check boxes {:?}: {} flags for {} options, pairing the shorter list",
                    field.label,
                    checked.len(),
                    options.len()
                );
            }
            // zip stops at the shorter list; unmatched options are dropped.
            let selected = checked
                .iter()
                .zip(options)
                .filter(|(on, _)| **on)
                .map(|(_, option)| option.clone())
                .collect();
            Some(FieldValue::MultipleValues(selected))
        }
        FieldSpec::DropDown {
            default: Some(Expr::Literal(value)),
            ..
        } => Some(FieldValue::SingleValue(TextBoxKind::PlainText, value.clone())),
        FieldSpec::TextBox { .. }
        | FieldSpec::RadioButtons { .. }
        | FieldSpec::CheckBoxes { .. }
        | FieldSpec::DropDown { .. } => None,
    }
}
