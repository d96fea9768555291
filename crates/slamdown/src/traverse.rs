use crate::{Block, Document, FormField, Inline};

/// Visits every form field in document order, including fields nested in
/// quotes, list items, emphasis and link/image bodies.
pub fn for_each_form_field<'a>(doc: &'a Document, mut f: impl FnMut(&'a FormField)) {
    fn walk_blocks<'a>(blocks: &'a [Block], f: &mut impl FnMut(&'a FormField)) {
        for block in blocks {
            match block {
                Block::Paragraph(inlines) | Block::Header(_, inlines) => walk_inlines(inlines, f),
                Block::Blockquote(children) => walk_blocks(children, f),
                Block::List(_, items) => {
                    for item in items {
                        walk_blocks(item, f);
                    }
                }
                Block::CodeBlock(_) | Block::LinkReference(..) | Block::Rule => {}
            }
        }
    }

    fn walk_inlines<'a>(inlines: &'a [Inline], f: &mut impl FnMut(&'a FormField)) {
        for inline in inlines {
            match inline {
                Inline::FormField(field) => f(field),
                Inline::Emph(children)
                | Inline::Strong(children)
                | Inline::Link(children, _)
                | Inline::Image(children, _) => walk_inlines(children, f),
                Inline::Str(_)
                | Inline::Entity(_)
                | Inline::Space
                | Inline::SoftBreak
                | Inline::LineBreak
                | Inline::Code(_) => {}
            }
        }
    }

    walk_blocks(&doc.blocks, &mut f);
}

pub fn form_fields(doc: &Document) -> Vec<&FormField> {
    let mut out = Vec::new();
    for_each_form_field(doc, |field| out.push(field));
    out
}

/// Flattens inlines to the text a reader would see, e.g. for `alt` text.
pub fn plain_text(inlines: &[Inline]) -> String {
    fn collect(inlines: &[Inline], out: &mut String) {
        for inline in inlines {
            match inline {
                Inline::Str(s) | Inline::Entity(s) | Inline::Code(s) => out.push_str(s),
                Inline::Space => out.push(' '),
                Inline::SoftBreak | Inline::LineBreak => out.push('\n'),
                Inline::Emph(children)
                | Inline::Strong(children)
                | Inline::Link(children, _)
                | Inline::Image(children, _) => collect(children, out),
                Inline::FormField(field) => out.push_str(&field.label),
            }
        }
    }

    let mut out = String::new();
    collect(inlines, &mut out);
    out
}
