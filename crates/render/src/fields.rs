use crate::document::{DocumentRenderer, thread};
use crate::ids::IdSupply;
use markup::{Binding, Element, MarkupBuilder, Tag};
use slamdown::{Expr, FieldSpec, FormField, TextBoxKind};
use std::iter;

const LOG_TARGET: &str = "slamdown.render";

/// Text rendered in place of a field whose spec cannot be shown.
pub const UNSUPPORTED_FORM_ELEMENT: &str = "unsupported form element";

/// Appended to the label of a required field.
pub const REQUIRED_MARKER: &str = "*";

/// A field spec with every list it needs available as a literal.
#[derive(Clone, Copy, Debug)]
enum Control<'a> {
    TextBox {
        kind: TextBoxKind,
        default: Option<&'a str>,
    },
    RadioButtons {
        default: &'a str,
        options: &'a [String],
    },
    CheckBoxes {
        checked: &'a [bool],
        options: &'a [String],
    },
    DropDown {
        options: &'a [String],
        default: Option<&'a str>,
    },
}

impl<'a> Control<'a> {
    fn classify(spec: &'a FieldSpec) -> Option<Self> {
        match spec {
            FieldSpec::TextBox { kind, default } => Some(Control::TextBox {
                kind: *kind,
                default: literal_str(default.as_ref()),
            }),
            FieldSpec::RadioButtons {
                default: Expr::Literal(default),
                options: Expr::Literal(options),
            } => Some(Control::RadioButtons { default, options }),
            FieldSpec::CheckBoxes {
                checked: Expr::Literal(checked),
                options: Expr::Literal(options),
            } => Some(Control::CheckBoxes { checked, options }),
            FieldSpec::DropDown {
                options: Expr::Literal(options),
                default,
            } => Some(Control::DropDown {
                options,
                default: literal_str(default.as_ref()),
            }),
            FieldSpec::RadioButtons { .. }
            | FieldSpec::CheckBoxes { .. }
            | FieldSpec::DropDown { .. } => None,
        }
    }

    /// Radio buttons and check boxes label each option themselves.
    fn labels_options(self) -> bool {
        matches!(
            self,
            Control::RadioButtons { .. } | Control::CheckBoxes { .. }
        )
    }
}

fn literal_str(expr: Option<&Expr<String>>) -> Option<&str> {
    expr.and_then(Expr::literal).map(String::as_str)
}

impl<B: MarkupBuilder> DocumentRenderer<'_, B> {
    /// Renders one form field: a container holding the field label and its
    /// control. Malformed specs render a placeholder and take no id.
    pub fn form_field(&self, supply: IdSupply, field: &FormField) -> (B::Node, IdSupply) {
        let Some(control) = Control::classify(&field.spec) else {
            log::debug!(
                target: LOG_TARGET,
                "unsupported {} {:?}",
                field.spec.type_name(),
                field.label
            );
            return (self.text(UNSUPPORTED_FORM_ELEMENT), supply);
        };

        let (id, supply) = supply.fresh(self.prefix);
        log::trace!(target: LOG_TARGET, "field {:?} -> {id}", field.label);

        let key = field.label.as_str();
        let (control_node, supply) = match control {
            Control::TextBox { kind, default } => (self.text_box(&id, key, kind, default), supply),
            Control::RadioButtons { default, options } => {
                self.radio_buttons(supply, &id, key, default, options)
            }
            Control::CheckBoxes { checked, options } => {
                self.check_boxes(supply, &id, key, checked, options)
            }
            Control::DropDown { options, default } => {
                (self.drop_down(&id, key, options, default), supply)
            }
        };

        let mut label_text = field.label.clone();
        if field.required {
            label_text.push_str(REQUIRED_MARKER);
        }
        let mut label = Element::new(Tag::Label).child(self.text(&label_text));
        if !control.labels_options() {
            label = label.for_id(id.as_str());
        }

        let container = Element::new(Tag::Span)
            .child(self.el(label))
            .child(control_node);
        (self.el(container), supply)
    }

    fn text_box(&self, id: &str, key: &str, kind: TextBoxKind, default: Option<&str>) -> B::Node {
        let value = self.state.single_value(key).or(default).unwrap_or("");
        self.el(
            Element::new(Tag::Input)
                .id(id)
                .name(id)
                .input_type(kind.input_type())
                .value(value)
                .bind(Binding::Input {
                    kind,
                    key: key.to_string(),
                }),
        )
    }

    fn radio_buttons(
        &self,
        supply: IdSupply,
        group: &str,
        key: &str,
        default: &str,
        options: &[String],
    ) -> (B::Node, IdSupply) {
        let selected = self.state.single_value(key).unwrap_or(default);
        let choices: Vec<&str> = iter::once(default)
            .chain(options.iter().map(String::as_str))
            .collect();

        let (items, supply) = thread(supply, &choices, |supply, choice| {
            let (option_id, supply) = supply.fresh(self.prefix);
            let input = Element::new(Tag::Input)
                .id(option_id.as_str())
                .name(group)
                .input_type("radio")
                .value(*choice)
                .checked(*choice == selected)
                .bind(Binding::Choose {
                    key: key.to_string(),
                    value: choice.to_string(),
                });
            (self.option_item(input, &option_id, choice), supply)
        });
        (self.el(Element::new(Tag::Ul).children(items)), supply)
    }

    fn check_boxes(
        &self,
        supply: IdSupply,
        group: &str,
        key: &str,
        checked: &[bool],
        options: &[String],
    ) -> (B::Node, IdSupply) {
        let pairs: Vec<(bool, &str)> = match self.state.selected_options(key) {
            Some(selected) => options
                .iter()
                .map(|option| (selected.contains(option), option.as_str()))
                .collect(),
            None => {
                if checked.len() != options.len() {
                    log::debug!(
                        target: LOG_TARGET,
                        "check boxes {key:?}: {} flags for {} options, pairing the shorter list",
                        checked.len(),
                        options.len()
                    );
                }
                checked
                    .iter()
                    .copied()
                    .zip(options.iter().map(String::as_str))
                    .collect()
            }
        };

        let (items, supply) = thread(supply, &pairs, |supply, &(on, option)| {
            let (option_id, supply) = supply.fresh(self.prefix);
            let input = Element::new(Tag::Input)
                .id(option_id.as_str())
                .name(group)
                .input_type("checkbox")
                .value(option)
                .checked(on)
                .bind(Binding::Toggle {
                    key: key.to_string(),
                    option: option.to_string(),
                });
            (self.option_item(input, &option_id, option), supply)
        });
        (self.el(Element::new(Tag::Ul).children(items)), supply)
    }

    fn drop_down(
        &self,
        id: &str,
        key: &str,
        options: &[String],
        default: Option<&str>,
    ) -> B::Node {
        let select = Element::new(Tag::Select)
            .id(id)
            .name(id)
            .bind(Binding::Change {
                key: key.to_string(),
            });

        let option = |value: &str, selected: bool| {
            self.el(
                Element::new(Tag::Option)
                    .value(value)
                    .selected(selected)
                    .child(self.text(value)),
            )
        };

        let select = match default {
            None => select
                .child(option("", false))
                .children(options.iter().map(|value| option(value.as_str(), false))),
            Some(default) => {
                let selected = self.state.single_value(key).unwrap_or(default);
                select.children(
                    options
                        .iter()
                        .map(|value| option(value.as_str(), value == selected)),
                )
            }
        };
        self.el(select)
    }

    /// `<li>` holding one radio/check box input followed by its own label.
    fn option_item(&self, input: Element<B::Node>, option_id: &str, text: &str) -> B::Node {
        let label = Element::new(Tag::Label)
            .for_id(option_id)
            .child(self.text(text));
        self.el(
            Element::new(Tag::Li)
                .child(self.el(input))
                .child(self.el(label)),
        )
    }
}
