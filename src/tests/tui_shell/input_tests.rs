use super::*;

#[test]
fn edits_multibyte_text_by_char() {
    let mut input = Input::default();
    for c in "flabébé".chars() {
        input.insert_char(c);
    }
    input.move_left();
    input.backspace();
    assert_eq!(input.buf, "flabéé");
    input.move_left();
    input.delete();
    assert_eq!(input.buf, "flabé");
    assert_eq!(input.cursor, 4);
}

#[test]
fn submit_records_history_without_duplicates() {
    let mut input = Input::default();
    input.set("sort hp".to_string());
    assert_eq!(input.submit(), "sort hp");
    input.set("sort hp".to_string());
    input.submit();
    input.set("reverse".to_string());
    input.submit();
    assert!(input.is_empty());
    assert_eq!(input.history, vec!["sort hp", "reverse"]);

    input.history_up();
    assert_eq!(input.buf, "reverse");
    input.history_up();
    assert_eq!(input.buf, "sort hp");
    input.history_down();
    assert_eq!(input.buf, "reverse");
    input.history_down();
    assert!(input.is_empty());
}
