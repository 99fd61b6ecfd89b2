use char_diff::{CharDiff, DiffEvent, EditOp, NewlineAuthority, RenderOptions};

#[test]
fn test_both_empty_renders_nothing() {
    let mut events = Vec::new();
    let alignment = CharDiff::render("", "", RenderOptions::default(), &mut events).unwrap();
    assert_eq!(alignment.distance(), 0);
    assert!(events.is_empty());
}

#[test]
fn test_single_symbol_texts() {
    assert_eq!(CharDiff::distance("a", "a").unwrap(), 0);
    assert_eq!(CharDiff::distance("a", "b").unwrap(), 1);

    let alignment = CharDiff::align("a", "b").unwrap();
    assert_eq!(alignment.ops(), &[EditOp::Replace]);
}

#[test]
fn test_astral_plane_symbols() {
    // Symbols outside the BMP are still single sequence elements
    let old = "a\u{1F600}b";
    let new = "a\u{1F601}b";
    let alignment = CharDiff::align(old, new).unwrap();
    assert_eq!(alignment.distance(), 1);
    assert_eq!(
        alignment.ops(),
        &[EditOp::Ignore, EditOp::Replace, EditOp::Ignore]
    );
}

#[test]
fn test_trailing_newline_difference() {
    let options = RenderOptions {
        merge_runs: true,
        newline_authority: NewlineAuthority::Both,
    };
    let mut events = Vec::new();
    CharDiff::render("line", "line\n", options, &mut events).unwrap();
    assert_eq!(
        events,
        vec![
            DiffEvent::Unchanged("l".into()),
            DiffEvent::Unchanged("i".into()),
            DiffEvent::Unchanged("n".into()),
            DiffEvent::Unchanged("e".into()),
            DiffEvent::Inserted("\n".into()),
            DiffEvent::LineBreak,
        ]
    );
}

#[test]
fn test_long_common_prefix_and_suffix() {
    let old = format!("{}X{}", "a".repeat(200), "b".repeat(200));
    let new = format!("{}Y{}", "a".repeat(200), "b".repeat(200));
    let alignment = CharDiff::align(&old, &new).unwrap();
    assert_eq!(alignment.distance(), 1);
    assert_eq!(alignment.replaced(), 1);
    assert_eq!(alignment.unchanged(), 400);
}

#[test]
fn test_repetitive_inputs_stay_consistent() {
    // Heavily tied tables still produce a path that accounts for every
    // symbol on both sides
    let old = "abab".repeat(20);
    let new = "baba".repeat(20);
    let alignment = CharDiff::align(&old, &new).unwrap();
    let consumed_old = alignment.deleted() + alignment.replaced() + alignment.unchanged();
    let produced_new = alignment.inserted() + alignment.replaced() + alignment.unchanged();
    assert_eq!(consumed_old, old.len());
    assert_eq!(produced_new, new.len());
    assert_eq!(alignment.distance(), 2);
}
