//! Seeded generators for documents and event streams.
//!
//! Deterministic per seed so a failing case can be replayed by seed alone.

use form_state::FormEvent;
use slamdown::{
    Block, Document, Expr, FieldSpec, FormField, Inline, LinkTarget, ListKind, TextBoxKind,
};

pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds from arbitrary bytes (FNV-1a), e.g. fuzzer input.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut hash = 0xcbf2_9ce4_8422_2325u64;
        for &b in bytes {
            hash ^= u64::from(b);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        Self::new(hash)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    pub fn gen_range(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.next_u64() >> 32) as usize % upper
    }

    pub fn gen_bool(&mut self) -> bool {
        self.gen_range(2) == 1
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.gen_range(items.len()))
    }
}

/// Small label pool so generated documents repeat keys.
pub const LABELS: [&str; 5] = ["Name", "Colors", "Size", "When", "Pick"];
const WORDS: [&str; 6] = ["alpha", "beta", "Red", "Green", "", "A b"];
const KINDS: [TextBoxKind; 4] = [
    TextBoxKind::PlainText,
    TextBoxKind::Date,
    TextBoxKind::Time,
    TextBoxKind::DateTime,
];

pub fn document(rng: &mut Lcg, max_blocks: usize) -> Document {
    let count = 1 + rng.gen_range(max_blocks.max(1));
    Document::new((0..count).map(|_| block(rng, 2)).collect())
}

fn block(rng: &mut Lcg, depth: usize) -> Block {
    let choice = if depth == 0 {
        rng.gen_range(3)
    } else {
        rng.gen_range(7)
    };
    match choice {
        0 => Block::Paragraph(inlines(rng, 1)),
        1 => Block::CodeBlock(vec![word(rng), word(rng)]),
        2 => Block::Rule,
        3 => Block::Header(1 + rng.gen_range(6) as u8, inlines(rng, 1)),
        4 => Block::Blockquote((0..1 + rng.gen_range(2)).map(|_| block(rng, depth - 1)).collect()),
        5 => {
            let kind = if rng.gen_bool() {
                ListKind::Bullet
            } else {
                ListKind::Ordered
            };
            let items = (0..1 + rng.gen_range(3))
                .map(|_| vec![block(rng, depth - 1)])
                .collect();
            Block::List(kind, items)
        }
        _ => Block::LinkReference(word(rng), format!("http://example.com/{}", rng.gen_range(9))),
    }
}

fn inlines(rng: &mut Lcg, depth: usize) -> Vec<Inline> {
    (0..1 + rng.gen_range(4)).map(|_| inline(rng, depth)).collect()
}

fn inline(rng: &mut Lcg, depth: usize) -> Inline {
    let choice = if depth == 0 {
        rng.gen_range(6)
    } else {
        rng.gen_range(10)
    };
    match choice {
        0 => Inline::Str(word(rng)),
        1 => Inline::Space,
        2 => Inline::SoftBreak,
        3 => Inline::LineBreak,
        4 => Inline::Code(word(rng)),
        5 => Inline::FormField(form_field(rng)),
        6 => Inline::Emph(inlines(rng, depth - 1)),
        7 => Inline::Strong(inlines(rng, depth - 1)),
        8 => Inline::Link(
            inlines(rng, depth - 1),
            LinkTarget::Reference(word(rng), None),
        ),
        _ => Inline::Image(inlines(rng, depth - 1), "img.png".to_string()),
    }
}

pub fn form_field(rng: &mut Lcg) -> FormField {
    let label = rng.pick(&LABELS).copied().unwrap_or("Name").to_string();
    let spec = match rng.gen_range(4) {
        0 => FieldSpec::TextBox {
            kind: rng.pick(&KINDS).copied().unwrap_or_default(),
            default: optional_string_expr(rng),
        },
        1 => FieldSpec::RadioButtons {
            default: string_expr(rng),
            options: list_expr(rng),
        },
        2 => {
            let checked = if rng.gen_range(5) == 0 {
                Expr::Unevaluated("!`flags`".to_string())
            } else {
                Expr::Literal((0..rng.gen_range(4)).map(|_| rng.gen_bool()).collect())
            };
            FieldSpec::CheckBoxes {
                checked,
                options: list_expr(rng),
            }
        }
        _ => FieldSpec::DropDown {
            options: list_expr(rng),
            default: optional_string_expr(rng),
        },
    };
    FormField {
        label,
        required: rng.gen_bool(),
        spec,
    }
}

fn optional_string_expr(rng: &mut Lcg) -> Option<Expr<String>> {
    match rng.gen_range(4) {
        0 => None,
        1 => Some(Expr::Unevaluated("!`x`".to_string())),
        _ => Some(Expr::Literal(word(rng))),
    }
}

fn string_expr(rng: &mut Lcg) -> Expr<String> {
    if rng.gen_range(5) == 0 {
        Expr::Unevaluated("!`x`".to_string())
    } else {
        Expr::Literal(word(rng))
    }
}

fn list_expr(rng: &mut Lcg) -> Expr<Vec<String>> {
    if rng.gen_range(5) == 0 {
        Expr::Unevaluated("!`list`".to_string())
    } else {
        Expr::Literal((0..rng.gen_range(4)).map(|_| word(rng)).collect())
    }
}

fn word(rng: &mut Lcg) -> String {
    rng.pick(&WORDS).copied().unwrap_or("").to_string()
}

pub fn event(rng: &mut Lcg) -> FormEvent {
    let key = rng.pick(&LABELS).copied().unwrap_or("Name");
    if rng.gen_bool() {
        let kind = rng.pick(&KINDS).copied().unwrap_or_default();
        FormEvent::text_changed(kind, key, word(rng))
    } else {
        let checked = rng.gen_bool();
        FormEvent::check_box_changed(key, word(rng), checked)
    }
}

pub fn events(rng: &mut Lcg, count: usize) -> Vec<FormEvent> {
    (0..count).map(|_| event(rng)).collect()
}
