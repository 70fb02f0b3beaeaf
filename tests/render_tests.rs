use std::fs;

use crtsh_finder::render::{render_json, render_json_content, render_text_content};
use crtsh_finder::ClassifiedResult;

fn sample() -> ClassifiedResult {
    ClassifiedResult {
        wildcards: vec!["*.example.com".to_string()],
        subdomains: vec!["a.example.com".to_string()],
    }
}

#[test]
fn json_round_trips_through_a_file() {
    let path = std::env::temp_dir().join("crtsh_finder_render_roundtrip.json");
    let result = sample();

    render_json(&result, Some(&path));

    let written = fs::read_to_string(&path).unwrap();
    let restored: ClassifiedResult = serde_json::from_str(&written).unwrap();
    assert_eq!(restored, result);

    fs::remove_file(&path).ok();
}

#[test]
fn wildcards_only_result_renders_no_subdomains() {
    let mut result = sample();
    result.subdomains.clear();

    let text = render_text_content(&result, true);
    assert_eq!(text, "*.example.com\n");

    let json = render_json_content(&result).unwrap();
    let restored: ClassifiedResult = serde_json::from_str(&json).unwrap();
    assert!(restored.subdomains.is_empty());
    assert_eq!(restored.wildcards, vec!["*.example.com"]);
}

#[test]
fn text_content_lists_every_entry_once() {
    let text = render_text_content(&sample(), false);
    assert_eq!(text.matches("*.example.com").count(), 1);
    assert_eq!(text.matches("a.example.com").count(), 1);
}
