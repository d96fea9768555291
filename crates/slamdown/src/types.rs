#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ListKind {
    Bullet,
    Ordered,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Block {
    Paragraph(Vec<Inline>),
    Header(u8, Vec<Inline>),
    Blockquote(Vec<Block>),
    List(ListKind, Vec<Vec<Block>>),
    CodeBlock(Vec<String>),
    LinkReference(String, String),
    Rule,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Inline {
    Str(String),
    Entity(String),
    Space,
    SoftBreak,
    LineBreak,
    Emph(Vec<Inline>),
    Strong(Vec<Inline>),
    Code(String),
    Link(Vec<Inline>, LinkTarget),
    Image(Vec<Inline>, String),
    FormField(FormField),
}

impl Inline {
    pub fn str(text: impl Into<String>) -> Self {
        Inline::Str(text.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LinkTarget {
    Inline(String),
    /// Reference-style link; the url is `None` when the reference never resolved.
    Reference(String, Option<String>),
}

impl LinkTarget {
    pub fn href(&self) -> &str {
        match self {
            LinkTarget::Inline(url) => url,
            LinkTarget::Reference(_, url) => url.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormField {
    pub label: String,
    pub required: bool,
    pub spec: FieldSpec,
}

/// Either a value written out in the document, or source text the host
/// evaluates on its own (a free-entry default).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr<T> {
    Literal(T),
    Unevaluated(String),
}

impl<T> Expr<T> {
    pub fn literal(&self) -> Option<&T> {
        match self {
            Expr::Literal(value) => Some(value),
            Expr::Unevaluated(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextBoxKind {
    #[default]
    PlainText,
    Date,
    Time,
    DateTime,
}

impl TextBoxKind {
    /// The `type` attribute of the `<input>` that edits this kind.
    pub fn input_type(self) -> &'static str {
        match self {
            TextBoxKind::PlainText => "text",
            TextBoxKind::Date => "date",
            TextBoxKind::Time => "time",
            TextBoxKind::DateTime => "datetime-local",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldSpec {
    TextBox {
        kind: TextBoxKind,
        default: Option<Expr<String>>,
    },
    /// The default is itself a selectable choice, shown ahead of `options`.
    RadioButtons {
        default: Expr<String>,
        options: Expr<Vec<String>>,
    },
    /// `checked` and `options` pair up by position.
    CheckBoxes {
        checked: Expr<Vec<bool>>,
        options: Expr<Vec<String>>,
    },
    DropDown {
        options: Expr<Vec<String>>,
        default: Option<Expr<String>>,
    },
}

impl FieldSpec {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldSpec::TextBox { .. } => "text box",
            FieldSpec::RadioButtons { .. } => "radio buttons",
            FieldSpec::CheckBoxes { .. } => "check boxes",
            FieldSpec::DropDown { .. } => "drop down",
        }
    }
}
