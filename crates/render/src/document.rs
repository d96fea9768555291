use crate::ids::IdSupply;
use form_state::FormState;
use markup::{Element, MarkupBuilder, Tag};
use slamdown::{Block, Inline, ListKind, plain_text};

/// Renders blocks and inlines through a host's [`MarkupBuilder`].
///
/// Every method takes the current [`IdSupply`] and returns the advanced one
/// next to its output. Ids are handed out depth first, left to right.
pub struct DocumentRenderer<'a, B> {
    pub(crate) builder: &'a B,
    pub(crate) prefix: &'a str,
    pub(crate) state: &'a FormState,
}

impl<'a, B: MarkupBuilder> DocumentRenderer<'a, B> {
    pub fn new(builder: &'a B, prefix: &'a str, state: &'a FormState) -> Self {
        Self {
            builder,
            prefix,
            state,
        }
    }

    pub fn blocks(&self, supply: IdSupply, blocks: &[Block]) -> (Vec<B::Node>, IdSupply) {
        thread(supply, blocks, |supply, block| self.block(supply, block))
    }

    pub fn inlines(&self, supply: IdSupply, inlines: &[Inline]) -> (Vec<B::Node>, IdSupply) {
        thread(supply, inlines, |supply, inline| self.inline(supply, inline))
    }

    pub fn block(&self, supply: IdSupply, block: &Block) -> (B::Node, IdSupply) {
        match block {
            Block::Paragraph(inlines) => self.wrap_inlines(Tag::P, supply, inlines),
            Block::Header(level, inlines) => self.wrap_inlines(Tag::heading(*level), supply, inlines),
            Block::Blockquote(blocks) => {
                let (children, supply) = self.blocks(supply, blocks);
                (self.el(Element::new(Tag::Blockquote).children(children)), supply)
            }
            Block::List(kind, items) => {
                let tag = match kind {
                    ListKind::Bullet => Tag::Ul,
                    ListKind::Ordered => Tag::Ol,
                };
                let (items, supply) = thread(supply, items, |supply, item| {
                    let (children, supply) = self.blocks(supply, item);
                    (self.el(Element::new(Tag::Li).children(children)), supply)
                });
                (self.el(Element::new(tag).children(items)), supply)
            }
            Block::CodeBlock(lines) => {
                let code = self.el(Element::new(Tag::Code).child(self.text(&lines.join("\n"))));
                (self.el(Element::new(Tag::Pre).child(code)), supply)
            }
            Block::LinkReference(label, url) => {
                let anchor = self.el(
                    Element::new(Tag::A)
                        .id(label.as_str())
                        .name(label.as_str())
                        .href(url.as_str())
                        .child(self.text(url)),
                );
                let node = self.el(Element::new(Tag::P).child(self.text(label)).child(anchor));
                (node, supply)
            }
            Block::Rule => (self.el(Element::new(Tag::Hr)), supply),
        }
    }

    pub fn inline(&self, supply: IdSupply, inline: &Inline) -> (B::Node, IdSupply) {
        match inline {
            Inline::Str(text) | Inline::Entity(text) => (self.text(text), supply),
            Inline::Space => (self.text(" "), supply),
            Inline::SoftBreak => (self.text("\n"), supply),
            Inline::LineBreak => (self.el(Element::new(Tag::Br)), supply),
            Inline::Emph(inlines) => self.wrap_inlines(Tag::Em, supply, inlines),
            Inline::Strong(inlines) => self.wrap_inlines(Tag::Strong, supply, inlines),
            Inline::Code(text) => (self.el(Element::new(Tag::Code).child(self.text(text))), supply),
            Inline::Link(body, target) => {
                let (children, supply) = self.inlines(supply, body);
                let node = self.el(Element::new(Tag::A).href(target.href()).children(children));
                (node, supply)
            }
            Inline::Image(body, url) => {
                let node = self.el(
                    Element::new(Tag::Img)
                        .src(url.as_str())
                        .alt(plain_text(body)),
                );
                (node, supply)
            }
            Inline::FormField(field) => self.form_field(supply, field),
        }
    }

    fn wrap_inlines(&self, tag: Tag, supply: IdSupply, inlines: &[Inline]) -> (B::Node, IdSupply) {
        let (children, supply) = self.inlines(supply, inlines);
        (self.el(Element::new(tag).children(children)), supply)
    }

    pub(crate) fn el(&self, element: Element<B::Node>) -> B::Node {
        self.builder.element(element)
    }

    pub(crate) fn text(&self, text: &str) -> B::Node {
        self.builder.text(text)
    }
}

/// Maps `items` in order, passing each step the supply left by the previous one.
pub(crate) fn thread<T, N>(
    supply: IdSupply,
    items: &[T],
    mut step: impl FnMut(IdSupply, &T) -> (N, IdSupply),
) -> (Vec<N>, IdSupply) {
    items.iter().fold(
        (Vec::with_capacity(items.len()), supply),
        |(mut out, supply), item| {
            let (node, supply) = step(supply, item);
            out.push(node);
            (out, supply)
        },
    )
}
