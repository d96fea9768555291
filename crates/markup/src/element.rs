use crate::binding::Binding;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Blockquote,
    Ul,
    Ol,
    Li,
    Pre,
    Code,
    A,
    Hr,
    Br,
    Em,
    Strong,
    Img,
    Span,
    Label,
    Input,
    Select,
    Option,
}

impl Tag {
    /// Heading tag for `level`, clamped into `1..=6`.
    pub fn heading(level: u8) -> Tag {
        match level {
            0 | 1 => Tag::H1,
            2 => Tag::H2,
            3 => Tag::H3,
            4 => Tag::H4,
            5 => Tag::H5,
            _ => Tag::H6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::P => "p",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::Blockquote => "blockquote",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Li => "li",
            Tag::Pre => "pre",
            Tag::Code => "code",
            Tag::A => "a",
            Tag::Hr => "hr",
            Tag::Br => "br",
            Tag::Em => "em",
            Tag::Strong => "strong",
            Tag::Img => "img",
            Tag::Span => "span",
            Tag::Label => "label",
            Tag::Input => "input",
            Tag::Select => "select",
            Tag::Option => "option",
        }
    }
}

/// The closed attribute set the renderer emits.
///
/// `input_type` is the HTML `type` attribute and `for_id` is `for`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    pub id: Option<String>,
    pub name: Option<String>,
    pub input_type: Option<&'static str>,
    pub value: Option<String>,
    pub href: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub for_id: Option<String>,
    pub checked: bool,
    pub selected: bool,
}

/// Everything a host needs to build one element node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<N> {
    pub tag: Tag,
    pub attrs: Attributes,
    pub binding: Option<Binding>,
    pub children: Vec<N>,
}

impl<N> Element<N> {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Attributes::default(),
            binding: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.attrs.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.attrs.name = Some(name.into());
        self
    }

    pub fn input_type(mut self, input_type: &'static str) -> Self {
        self.attrs.input_type = Some(input_type);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.attrs.value = Some(value.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.attrs.href = Some(href.into());
        self
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.attrs.src = Some(src.into());
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.attrs.alt = Some(alt.into());
        self
    }

    pub fn for_id(mut self, id: impl Into<String>) -> Self {
        self.attrs.for_id = Some(id.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.attrs.checked = checked;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.attrs.selected = selected;
        self
    }

    pub fn bind(mut self, binding: Binding) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn child(mut self, child: N) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children);
        self
    }
}
