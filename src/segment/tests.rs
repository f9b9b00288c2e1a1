use super::*;

const RULE: &str = "# ────────────────────────────────";

#[test]
fn test_separators_before_content_are_dropped() {
    let text = format!("{RULE}\n\n{RULE}\n[component]\nname = \"a\"\n");
    assert_eq!(filter_lines(&text), "[component]\nname = \"a\"\n");
}

#[test]
fn test_separators_after_content_are_kept() {
    let text = format!("[component]\nname = \"a\"\n\n{RULE}\n# Storage\n{RULE}\n");
    assert_eq!(
        filter_lines(&text),
        format!("[component]\nname = \"a\"\n\n{RULE}\n# Storage\n{RULE}\n")
    );
}

#[test]
fn test_blank_lines_kept_once_started() {
    let text = "\n\n[component]\n\n\nname = \"a\"\n";
    assert_eq!(filter_lines(text), "[component]\n\n\nname = \"a\"\n");
}

#[test]
fn test_only_separators_yields_empty() {
    let text = format!("{RULE}\n\n{RULE}\n");
    assert_eq!(filter_lines(&text), "");
}

#[test]
fn test_clean_body_keeps_trailing_rule() {
    let raw = format!("\n[component]\nname = \"a\"\n\n{RULE}\n\n");
    assert_eq!(
        clean_body(&raw).unwrap(),
        format!("[component]\nname = \"a\"\n\n{RULE}\n")
    );
}

#[test]
fn test_clean_body_normalizes_crlf() {
    let raw = "\r\n[component]\r\nname = \"a\"\r\n";
    assert_eq!(clean_body(raw).unwrap(), "[component]\nname = \"a\"\n");
}

#[test]
fn test_scan_preserves_input_order() {
    let doc = "\
# === zeta.toml ===
[component]
name = \"zeta\"

# === alpha.toml ===
[component]
name = \"alpha\"

# === mid.toml ===
[component]
name = \"mid\"
";
    let names: Vec<&str> = scan_segments(doc).iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_scan_ignores_preamble() {
    let doc = "\
# Combined component declarations
# generated, do not edit

# === net.toml ===
[component]
name = \"net\"
";
    let segments = scan_segments(doc);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].name, "net");
    assert!(!segments[0].raw_body.contains("generated"));
}

#[test]
fn test_adjacent_markers_give_empty_body() {
    let doc = "# === a.toml ===\n# === b.toml ===\n[component]\n";
    let segments = scan_segments(doc);

    assert_eq!(segments.len(), 2);
    assert_eq!(clean_body(segments[0].raw_body), Err(SkipReason::EmptyBody));
    assert_eq!(
        clean_body(segments[1].raw_body).unwrap(),
        "[component]\n"
    );
}

#[test]
fn test_rule_between_segments_stays_with_previous() {
    let doc = format!(
        "# === a.toml ===\n[component]\nname = \"a\"\n\n{RULE}\n# === b.toml ===\n[component]\nname = \"b\"\n"
    );
    let segments = scan_segments(&doc);

    assert_eq!(
        clean_body(segments[0].raw_body).unwrap(),
        format!("[component]\nname = \"a\"\n\n{RULE}\n")
    );
    assert_eq!(
        clean_body(segments[1].raw_body).unwrap(),
        "[component]\nname = \"b\"\n"
    );
}

#[test]
fn test_duplicate_names_are_both_scanned() {
    let doc = "# === a.toml ===\n[component]\nv = 1\n# === a.toml ===\n[component]\nv = 2\n";
    let segments = scan_segments(doc);

    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| s.name == "a"));
}
