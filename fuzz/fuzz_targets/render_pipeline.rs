#![no_main]

use form_state::{FormEvent, initialize};
use markup::Node;
use markup::snapshot::Snapshot;
use libfuzzer_sys::fuzz_target;
use render::render_tree;
use slamdown_test_support::lcg::{self, Lcg};
use std::collections::BTreeSet;

fn allocated_ids<'a>(nodes: &'a [Node<FormEvent>], prefix: &str, out: &mut Vec<&'a str>) {
    for node in nodes {
        if let Some(id) = node.id().filter(|id| id.starts_with(prefix)) {
            out.push(id);
        }
        allocated_ids(node.children(), prefix, out);
    }
}

fuzz_target!(|data: &[u8]| {
    let mut rng = Lcg::from_bytes(data);
    let doc = lcg::document(&mut rng, 12);
    let count = rng.gen_range(32);
    let events = lcg::events(&mut rng, count);

    // apply is total over any event sequence.
    let state = initialize(&doc).apply_all(events);

    let first = render_tree("z", &state, &doc);
    let second = render_tree("z", &state, &doc);
    assert_eq!(
        Snapshot::new(&first).into_lines(),
        Snapshot::new(&second).into_lines()
    );

    let mut ids = Vec::new();
    allocated_ids(&first, "z-", &mut ids);
    let distinct: BTreeSet<&str> = ids.iter().copied().collect();
    assert_eq!(distinct.len(), ids.len(), "duplicate id in {ids:?}");
});
