use super::*;
use form_state::initialize;
use markup::snapshot::Snapshot;
use markup::{Binding, Notification, Tag, dispatch, find_by_id};
use slamdown::{Block, Expr, FieldSpec, FormField, Inline, LinkTarget, ListKind, TextBoxKind};

fn field(label: &str, required: bool, spec: FieldSpec) -> Inline {
    Inline::FormField(FormField {
        label: label.to_string(),
        required,
        spec,
    })
}

fn strings(values: &[&str]) -> Expr<Vec<String>> {
    Expr::Literal(values.iter().map(|s| s.to_string()).collect())
}

fn text_box(default: Option<&str>) -> FieldSpec {
    FieldSpec::TextBox {
        kind: TextBoxKind::PlainText,
        default: default.map(|d| Expr::Literal(d.to_string())),
    }
}

fn para(inlines: Vec<Inline>) -> Block {
    Block::Paragraph(inlines)
}

fn lines(nodes: &[Node<FormEvent>]) -> Vec<String> {
    Snapshot::new(nodes).into_lines()
}

fn inputs(node: &Node<FormEvent>) -> Vec<&Node<FormEvent>> {
    node.descendants_with_tag(Tag::Input)
}

#[test]
fn paragraph_and_required_text_box() {
    let doc = Document::new(vec![
        para(vec![Inline::str("Hello")]),
        para(vec![field("Name", true, text_box(None))]),
    ]);
    let nodes = render_tree("f", &initialize(&doc), &doc);

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].tag(), Some(Tag::P));
    assert_eq!(nodes[0].text_content(), "Hello");

    let container = &nodes[1].children()[0];
    assert_eq!(container.tag(), Some(Tag::Span));
    let label = &container.children()[0];
    assert_eq!(label.tag(), Some(Tag::Label));
    assert_eq!(label.text_content(), "Name*");
    assert_eq!(label.attrs().unwrap().for_id.as_deref(), Some("f-1"));

    let input = &container.children()[1];
    let attrs = input.attrs().unwrap();
    assert_eq!(attrs.id.as_deref(), Some("f-1"));
    assert_eq!(attrs.input_type, Some("text"));
    assert_eq!(attrs.value.as_deref(), Some(""));
}

#[test]
fn render_is_deterministic() {
    let doc = Document::new(vec![
        para(vec![field("a", false, text_box(Some("x"))), Inline::Space]),
        Block::List(
            ListKind::Ordered,
            vec![vec![para(vec![field(
                "b",
                false,
                FieldSpec::CheckBoxes {
                    checked: Expr::Literal(vec![true, false]),
                    options: strings(&["p", "q"]),
                },
            )])]],
        ),
    ]);
    let state = initialize(&doc);
    let first = render_tree("doc", &state, &doc);
    let second = render_tree("doc", &state, &doc);
    assert_eq!(first, second);
    assert_eq!(lines(&first), lines(&second));
}

#[test]
fn ids_follow_document_order_and_are_unique() {
    let radio = FieldSpec::RadioButtons {
        default: Expr::Literal("A".to_string()),
        options: strings(&["B"]),
    };
    let doc = Document::new(vec![
        para(vec![field("t1", false, text_box(None))]),
        Block::Blockquote(vec![para(vec![field("r", false, radio)])]),
        Block::List(
            ListKind::Bullet,
            vec![
                vec![para(vec![Inline::Emph(vec![field("t2", false, text_box(None))])])],
                vec![Block::Header(3, vec![field("t3", false, text_box(None))])],
            ],
        ),
    ]);
    let nodes = render_tree("p", &FormState::new(), &doc);

    let mut ids = Vec::new();
    for node in &nodes {
        for input in inputs(node) {
            ids.push(input.id().unwrap().to_string());
        }
    }
    // t1 takes 1, the radio field takes 2 and its two options 3 and 4.
    assert_eq!(ids, ["p-1", "p-3", "p-4", "p-5", "p-6"]);
    assert!(find_by_id(&nodes, "p-2").is_none());
}

#[test]
fn unsupported_field_takes_no_id() {
    let doc = Document::new(vec![para(vec![
        field(
            "bad",
            false,
            FieldSpec::RadioButtons {
                default: Expr::Unevaluated("!`x`".to_string()),
                options: strings(&["B"]),
            },
        ),
        field("good", false, text_box(None)),
    ])]);
    let nodes = render_tree("u", &FormState::new(), &doc);
    let paragraph = &nodes[0];
    assert_eq!(
        paragraph.children()[0].as_text(),
        Some(UNSUPPORTED_FORM_ELEMENT)
    );
    assert!(find_by_id(&nodes, "u-1").is_some());
    assert_eq!(
        find_by_id(&nodes, "u-1").unwrap().binding().map(Binding::key),
        Some("good")
    );
}

#[test]
fn radio_buttons_prepend_default_and_check_it() {
    let doc = Document::new(vec![para(vec![field(
        "Pick",
        false,
        FieldSpec::RadioButtons {
            default: Expr::Literal("A".to_string()),
            options: strings(&["B", "C"]),
        },
    )])]);
    let nodes = render_tree("r", &FormState::new(), &doc);
    let container = &nodes[0].children()[0];

    let label = &container.children()[0];
    assert_eq!(label.attrs().unwrap().for_id, None);

    let list = &container.children()[1];
    assert_eq!(list.tag(), Some(Tag::Ul));
    assert_eq!(list.children().len(), 3);

    let values: Vec<(&str, bool)> = inputs(list)
        .into_iter()
        .map(|input| {
            let attrs = input.attrs().unwrap();
            (attrs.value.as_deref().unwrap(), attrs.checked)
        })
        .collect();
    assert_eq!(values, [("A", true), ("B", false), ("C", false)]);

    for input in inputs(list) {
        let attrs = input.attrs().unwrap();
        assert_eq!(attrs.input_type, Some("radio"));
        assert_eq!(attrs.name.as_deref(), Some("r-1"));
    }
    let item_label = &list.children()[1].children()[1];
    assert_eq!(item_label.attrs().unwrap().for_id.as_deref(), Some("r-3"));
    assert_eq!(item_label.text_content(), "B");
}

#[test]
fn radio_selection_follows_state() {
    let doc = Document::new(vec![para(vec![field(
        "Pick",
        false,
        FieldSpec::RadioButtons {
            default: Expr::Literal("A".to_string()),
            options: strings(&["B", "C"]),
        },
    )])]);
    let state = initialize(&doc).apply(FormEvent::text_changed(TextBoxKind::PlainText, "Pick", "C"));
    let nodes = render_tree("r", &state, &doc);
    let checked: Vec<bool> = inputs(&nodes[0])
        .into_iter()
        .map(|input| input.attrs().unwrap().checked)
        .collect();
    assert_eq!(checked, [false, false, true]);
}

#[test]
fn check_boxes_follow_event_over_defaults() {
    let doc = Document::new(vec![para(vec![field(
        "Colors",
        false,
        FieldSpec::CheckBoxes {
            checked: Expr::Literal(vec![true, false]),
            options: strings(&["Red", "Green"]),
        },
    )])]);
    let state = initialize(&doc).apply(FormEvent::check_box_changed("Colors", "Green", true));
    let nodes = render_tree("c", &state, &doc);

    let boxes = inputs(&nodes[0]);
    assert_eq!(boxes.len(), 2);
    assert!(boxes.iter().all(|b| b.attrs().unwrap().checked));
    assert_eq!(
        boxes[1].binding(),
        Some(&Binding::Toggle {
            key: "Colors".to_string(),
            option: "Green".to_string(),
        })
    );
}

#[test]
fn check_boxes_without_state_truncate_to_shorter_list() {
    let doc = Document::new(vec![para(vec![field(
        "Colors",
        false,
        FieldSpec::CheckBoxes {
            checked: Expr::Literal(vec![false, true]),
            options: strings(&["Red", "Green", "Blue"]),
        },
    )])]);
    let nodes = render_tree("c", &FormState::new(), &doc);
    let values: Vec<&str> = inputs(&nodes[0])
        .into_iter()
        .map(|input| input.attrs().unwrap().value.as_deref().unwrap())
        .collect();
    assert_eq!(values, ["Red", "Green"]);
}

#[test]
fn check_boxes_with_state_show_every_option() {
    let doc = Document::new(vec![para(vec![field(
        "Colors",
        false,
        FieldSpec::CheckBoxes {
            checked: Expr::Literal(vec![true]),
            options: strings(&["Red", "Green", "Blue"]),
        },
    )])]);
    let state = FormState::new().apply(FormEvent::check_box_changed("Colors", "Blue", true));
    let nodes = render_tree("c", &state, &doc);
    let checked: Vec<bool> = inputs(&nodes[0])
        .into_iter()
        .map(|input| input.attrs().unwrap().checked)
        .collect();
    assert_eq!(checked, [false, false, true]);
}

#[test]
fn drop_down_without_default_prepends_empty_option() {
    let doc = Document::new(vec![para(vec![field(
        "Size",
        true,
        FieldSpec::DropDown {
            options: strings(&["S", "M"]),
            default: None,
        },
    )])]);
    let nodes = render_tree("d", &FormState::new(), &doc);
    assert_eq!(
        lines(&nodes),
        [
            "<p>",
            "  <span>",
            "    <label for=\"d-1\">",
            "      \"Size*\"",
            "    <select id=\"d-1\" name=\"d-1\" bind=change(\"Size\")>",
            "      <option value=\"\">",
            "        \"\"",
            "      <option value=\"S\">",
            "        \"S\"",
            "      <option value=\"M\">",
            "        \"M\"",
        ]
    );
}

#[test]
fn drop_down_marks_current_value_selected() {
    let doc = Document::new(vec![para(vec![field(
        "Size",
        false,
        FieldSpec::DropDown {
            options: strings(&["S", "M", "L"]),
            default: Some(Expr::Literal("M".to_string())),
        },
    )])]);
    let state = initialize(&doc);
    let selected = |nodes: &[Node<FormEvent>]| -> Vec<String> {
        nodes[0]
            .descendants_with_tag(Tag::Option)
            .into_iter()
            .filter(|o| o.attrs().unwrap().selected)
            .map(|o| o.text_content())
            .collect()
    };
    assert_eq!(selected(&render_tree("d", &state, &doc)[..]), ["M"]);

    let state = state.apply(FormEvent::text_changed(TextBoxKind::PlainText, "Size", "L"));
    assert_eq!(selected(&render_tree("d", &state, &doc)[..]), ["L"]);
}

#[test]
fn text_box_value_prefers_state_then_default() {
    let doc = Document::new(vec![para(vec![field(
        "When",
        false,
        FieldSpec::TextBox {
            kind: TextBoxKind::Date,
            default: Some(Expr::Literal("2020-01-01".to_string())),
        },
    )])]);
    let value = |state: &FormState| {
        let nodes = render_tree("t", state, &doc);
        let input = find_by_id(&nodes, "t-1").unwrap();
        assert_eq!(input.attrs().unwrap().input_type, Some("date"));
        input.attrs().unwrap().value.clone().unwrap()
    };
    assert_eq!(value(&FormState::new()), "2020-01-01");
    let state = FormState::new().apply(FormEvent::text_changed(TextBoxKind::Date, "When", "2021-05-06"));
    assert_eq!(value(&state), "2021-05-06");
}

#[test]
fn unevaluated_text_default_renders_empty() {
    let doc = Document::new(vec![para(vec![field(
        "When",
        false,
        FieldSpec::TextBox {
            kind: TextBoxKind::Time,
            default: Some(Expr::Unevaluated("!`now()`".to_string())),
        },
    )])]);
    let nodes = render_tree("t", &FormState::new(), &doc);
    let input = find_by_id(&nodes, "t-1").unwrap();
    assert_eq!(input.attrs().unwrap().value.as_deref(), Some(""));
    assert_eq!(input.attrs().unwrap().input_type, Some("time"));
}

#[test]
fn dispatch_and_apply_round_trip() {
    let doc = Document::new(vec![para(vec![field("Name", false, text_box(None))])]);
    let state = initialize(&doc);
    let nodes = render_tree("x", &state, &doc);

    let event = dispatch(&nodes, "x-1", Notification::Input("Ada".to_string())).unwrap();
    let state = state.apply(event);
    let nodes = render_tree("x", &state, &doc);
    let input = find_by_id(&nodes, "x-1").unwrap();
    assert_eq!(input.attrs().unwrap().value.as_deref(), Some("Ada"));
}

#[test]
fn blocks_map_to_expected_tags() {
    let doc = Document::new(vec![
        Block::Header(2, vec![Inline::str("Title")]),
        Block::CodeBlock(vec!["a".to_string(), "b".to_string()]),
        Block::LinkReference("ref".to_string(), "http://x".to_string()),
        Block::Rule,
        Block::List(
            ListKind::Ordered,
            vec![vec![para(vec![Inline::Entity("&amp;".to_string())])]],
        ),
        Block::List(ListKind::Bullet, vec![vec![Block::Rule]]),
        para(vec![
            Inline::Strong(vec![Inline::str("s")]),
            Inline::SoftBreak,
            Inline::LineBreak,
            Inline::Code("c".to_string()),
            Inline::Link(
                vec![Inline::str("l")],
                LinkTarget::Reference("r".to_string(), None),
            ),
            Inline::Image(vec![Inline::str("alt"), Inline::Space, Inline::str("t")], "i.png".to_string()),
        ]),
    ]);
    let nodes = render_tree("b", &FormState::new(), &doc);
    assert_eq!(
        lines(&nodes),
        [
            "<h2>",
            "  \"Title\"",
            "<pre>",
            "  <code>",
            "    \"a\\nb\"",
            "<p>",
            "  \"ref\"",
            "  <a id=\"ref\" name=\"ref\" href=\"http://x\">",
            "    \"http://x\"",
            "<hr>",
            "<ol>",
            "  <li>",
            "    <p>",
            "      \"&amp;\"",
            "<ul>",
            "  <li>",
            "    <hr>",
            "<p>",
            "  <strong>",
            "    \"s\"",
            "  \"\\n\"",
            "  <br>",
            "  <code>",
            "    \"c\"",
            "  <a href=\"\">",
            "    \"l\"",
            "  <img src=\"i.png\" alt=\"alt t\">",
        ]
    );
}

#[test]
fn prefix_scopes_ids() {
    let doc = Document::new(vec![para(vec![field("Name", false, text_box(None))])]);
    let a = render_tree("left", &FormState::new(), &doc);
    let b = render_tree("right", &FormState::new(), &doc);
    assert!(find_by_id(&a, "left-1").is_some());
    assert!(find_by_id(&b, "right-1").is_some());
    assert!(find_by_id(&a, "right-1").is_none());
}

#[test]
fn prefix_scopes_control_names() {
    let doc = Document::new(vec![para(vec![
        field("Name", false, text_box(None)),
        field(
            "Size",
            false,
            FieldSpec::DropDown {
                options: strings(&["S", "M"]),
                default: None,
            },
        ),
        field(
            "Pick",
            false,
            FieldSpec::RadioButtons {
                default: Expr::Literal("A".to_string()),
                options: strings(&["B"]),
            },
        ),
    ])]);
    let names = |prefix: &str| -> Vec<String> {
        let nodes = render_tree(prefix, &FormState::new(), &doc);
        let mut names = Vec::new();
        for tag in [Tag::Input, Tag::Select] {
            for node in nodes[0].descendants_with_tag(tag) {
                names.extend(node.attrs().unwrap().name.clone());
            }
        }
        names
    };
    let left = names("left");
    let right = names("right");
    assert_eq!(left.len(), 4);
    assert!(left.iter().all(|name| name.starts_with("left-")), "{left:?}");
    assert!(
        left.iter().all(|name| !right.contains(name)),
        "{left:?} vs {right:?}"
    );
}

#[test]
fn renderer_threads_supply_explicitly() {
    let doc = Document::new(vec![para(vec![
        field("a", false, text_box(None)),
        field("b", false, text_box(None)),
    ])]);
    let state = FormState::new();
    let tree = Tree::default();
    let renderer = DocumentRenderer::new(&tree, "s", &state);
    let (_, supply) = renderer.blocks(IdSupply::new(), &doc.blocks);
    assert_eq!(supply.peek(), 3);

    let (_, resumed) = renderer.blocks(supply, &doc.blocks);
    assert_eq!(resumed.peek(), 5);
}
