use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Header value naming the line format of `markup.txt` files.
pub const EXPECTED_MARKUP_FORMAT_V1: &str = "markup-snapshot-v1";

const SUPPORTED_HEADERS: &[&str] = &["format", "description"];

/// Reads an expected markup snapshot. Leading indentation is significant;
/// trailing whitespace and blank lines are not.
pub fn parse_expected_markup(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read expected markup file {path:?}: {err}"));
    let (headers, lines) = parse_headers_and_lines(&content, path);
    let format = headers.get("format").map(String::as_str);
    assert_eq!(
        format,
        Some(EXPECTED_MARKUP_FORMAT_V1),
        "unsupported format in {path:?}"
    );
    assert!(
        !lines.is_empty(),
        "expected markup file {path:?} has no snapshot lines"
    );
    lines
}

fn parse_headers_and_lines(content: &str, path: &Path) -> (BTreeMap<String, String>, Vec<String>) {
    let mut lines = Vec::new();
    let mut headers = BTreeMap::<String, String>::new();

    for raw_line in content.lines() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }
        if let Some(stripped) = line.strip_prefix('#') {
            let Some((key, value)) = stripped.trim().split_once(':') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            assert!(
                SUPPORTED_HEADERS.contains(&key.as_str()),
                "unsupported header '{key}' in {path:?}"
            );
            if headers.is_empty() {
                assert_eq!(
                    key, "format",
                    "first header must be 'format' in {path:?}, found '{key}'"
                );
            }
            if headers.insert(key.clone(), value.trim().to_string()).is_some() {
                panic!("duplicate header '{key}' in {path:?}");
            }
        } else {
            lines.push(line.to_string());
        }
    }

    assert!(
        headers.contains_key("format"),
        "missing required 'format' header in {path:?}"
    );
    (headers, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_indentation_and_skips_headers() {
        let content = "# format: markup-snapshot-v1\n\n<p>  \n  \"Hi\"\n";
        let (headers, lines) = parse_headers_and_lines(content, Path::new("inline"));
        assert_eq!(headers["format"], EXPECTED_MARKUP_FORMAT_V1);
        assert_eq!(lines, ["<p>", "  \"Hi\""]);
    }

    #[test]
    #[should_panic(expected = "first header must be 'format'")]
    fn format_header_comes_first() {
        parse_headers_and_lines("# description: x\n# format: markup-snapshot-v1\n", Path::new("inline"));
    }
}
