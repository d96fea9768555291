use crate::expected::parse_expected_markup;
use form_state::FormEvent;
use serde::Deserialize;
use slamdown::Document;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable restricting golden runs to fixtures whose name
/// contains its value.
pub const FIXTURE_FILTER_ENV: &str = "SLAMDOWN_RENDER_FIXTURE";

/// One `fixtures/render/<name>/` directory:
///
/// - `fixture.toml`: id prefix and an optional description;
/// - `document.json`: the document;
/// - `events.json` (optional): events applied to the initial state before
///   rendering;
/// - `markup.txt`: the expected snapshot.
pub struct RenderFixture {
    pub name: String,
    pub prefix: String,
    pub description: Option<String>,
    pub document: Document,
    pub events: Vec<FormEvent>,
    pub expected: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureManifest {
    prefix: String,
    description: Option<String>,
}

pub fn load_render_fixtures(root: &Path) -> Vec<RenderFixture> {
    let mut entries: Vec<_> = fs::read_dir(root)
        .unwrap_or_else(|err| panic!("failed to read fixture root {root:?}: {err}"))
        .filter_map(Result::ok)
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    let mut fixtures = Vec::new();
    for entry in entries {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name != name.trim() {
            panic!("fixture directory has leading/trailing whitespace: '{name}'");
        }
        if name.starts_with('.') {
            continue;
        }
        fixtures.push(load_fixture(name, &path));
    }
    fixtures
}

fn load_fixture(name: String, dir: &Path) -> RenderFixture {
    let manifest_path = dir.join("fixture.toml");
    let manifest: FixtureManifest = toml::from_str(&read(&manifest_path))
        .unwrap_or_else(|err| panic!("invalid manifest {manifest_path:?}: {err}"));

    let document_path = dir.join("document.json");
    let document: Document = serde_json::from_str(&read(&document_path))
        .unwrap_or_else(|err| panic!("invalid document {document_path:?}: {err}"));

    let events_path = dir.join("events.json");
    let events = if events_path.is_file() {
        serde_json::from_str(&read(&events_path))
            .unwrap_or_else(|err| panic!("invalid events {events_path:?}: {err}"))
    } else {
        Vec::new()
    };

    RenderFixture {
        name,
        prefix: manifest.prefix,
        description: manifest.description,
        document,
        events,
        expected: parse_expected_markup(&dir.join("markup.txt")),
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

pub struct FixtureFilter {
    raw: Option<String>,
}

impl FixtureFilter {
    pub fn from_env() -> Self {
        Self {
            raw: env::var(FIXTURE_FILTER_ENV).ok(),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        let Some(filter) = &self.raw else {
            return true;
        };
        name.contains(filter)
    }
}

pub fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}
