use super::*;

// =============================================================
// add
// =============================================================

#[test]
fn add_trims_and_appends_in_order() {
    let mut tags = TagSet::default();
    assert!(tags.add("  lofi "));
    assert!(tags.add("jazz"));
    assert_eq!(tags.as_slice(), ["lofi", "jazz"]);
}

#[test]
fn add_rejects_empty_and_whitespace() {
    let mut tags = TagSet::default();
    assert!(!tags.add(""));
    assert!(!tags.add("   "));
    assert!(tags.is_empty());
}

#[test]
fn add_rejects_duplicate_after_trim() {
    let mut tags = TagSet::default();
    assert!(tags.add("synth"));
    assert!(!tags.add(" synth  "));
    assert_eq!(tags.len(), 1);
}

#[test]
fn add_is_case_sensitive() {
    let mut tags = TagSet::default();
    assert!(tags.add("Synth"));
    assert!(tags.add("synth"));
    assert_eq!(tags.len(), 2);
}

#[test]
fn add_stops_at_max_tags() {
    let mut tags = TagSet::default();
    for name in ["a", "b", "c", "d", "e"] {
        assert!(tags.add(name));
    }
    assert!(tags.is_full());
    assert!(!tags.add("f"));
    assert_eq!(tags.len(), TagSet::MAX_TAGS);
    assert!(!tags.contains("f"));
}

#[test]
fn arbitrary_sequences_never_exceed_cap_or_duplicate() {
    let inputs = [
        "rock", " rock", "pop", "", "  ", "pop ", "jazz", "funk", "soul", "metal", "funk", "blues",
    ];
    let mut tags = TagSet::default();
    for (i, input) in inputs.iter().enumerate() {
        tags.add(input);
        assert!(tags.len() <= TagSet::MAX_TAGS, "cap exceeded after input {i}");
        let mut seen = std::collections::HashSet::new();
        assert!(tags.as_slice().iter().all(|t| seen.insert(t.clone())), "duplicate after input {i}");
        assert!(tags.as_slice().iter().all(|t| t == t.trim() && !t.is_empty()));
    }
    assert_eq!(tags.as_slice(), ["rock", "pop", "jazz", "funk", "soul"]);
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_drops_matching_entry() {
    let mut tags = TagSet::default();
    tags.add("a");
    tags.add("b");
    tags.add("c");
    assert!(tags.remove("b"));
    assert_eq!(tags.as_slice(), ["a", "c"]);
}

#[test]
fn remove_missing_is_noop() {
    let mut tags = TagSet::default();
    tags.add("a");
    assert!(!tags.remove("z"));
    assert_eq!(tags.len(), 1);
}

#[test]
fn remove_frees_a_slot_when_full() {
    let mut tags = TagSet::default();
    for name in ["a", "b", "c", "d", "e"] {
        tags.add(name);
    }
    tags.remove("c");
    assert!(tags.add("f"));
    assert_eq!(tags.as_slice(), ["a", "b", "d", "e", "f"]);
}

// =============================================================
// Commit keys
// =============================================================

#[test]
fn enter_and_comma_commit_tags() {
    assert!(is_tag_commit_key("Enter"));
    assert!(is_tag_commit_key(","));
    assert!(!is_tag_commit_key("Tab"));
    assert!(!is_tag_commit_key(" "));
}
