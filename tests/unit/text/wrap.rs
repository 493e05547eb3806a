use super::*;
use crate::text::metrics::FixedAdvance;

// FixedAdvance at size 10: every char is 5px wide.

#[test]
fn empty_input_yields_no_lines() {
    let mut m = FixedAdvance::new();
    assert!(wrap_greedy(&mut m, "", 100.0, 10.0, FontWeight::Regular).is_empty());
    assert!(wrap_greedy(&mut m, "   \n\t ", 100.0, 10.0, FontWeight::Regular).is_empty());
}

#[test]
fn short_text_stays_on_one_line() {
    let mut m = FixedAdvance::new();
    let lines = wrap_greedy(&mut m, "hello  world", 100.0, 10.0, FontWeight::Regular);
    assert_eq!(lines, vec!["hello world".to_owned()]);
}

#[test]
fn line_of_exact_width_is_kept() {
    let mut m = FixedAdvance::new();
    // "aaaa bbbb" is 9 chars = 45px.
    let lines = wrap_greedy(&mut m, "aaaa bbbb cc", 45.0, 10.0, FontWeight::Regular);
    assert_eq!(lines, vec!["aaaa bbbb".to_owned(), "cc".to_owned()]);
}

#[test]
fn every_line_fits_and_words_are_preserved() {
    let mut m = FixedAdvance::new();
    let text = "The only way to do great work is to love what you do";
    let lines = wrap_greedy(&mut m, text, 80.0, 10.0, FontWeight::Regular);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(m.measure(line, 10.0, FontWeight::Regular) <= 80.0, "{line}");
    }
    assert_eq!(lines.join(" "), text);
}

#[test]
fn bold_text_wraps_earlier() {
    let mut m = FixedAdvance::new();
    let text = "aaaa bbbb";
    assert_eq!(wrap_greedy(&mut m, text, 45.0, 10.0, FontWeight::Regular).len(), 1);
    assert_eq!(wrap_greedy(&mut m, text, 45.0, 10.0, FontWeight::Bold).len(), 2);
}

#[test]
fn overlong_word_is_split_by_characters() {
    let mut m = FixedAdvance::new();
    let lines = wrap_greedy(&mut m, "ab abcdefghij cd", 20.0, 10.0, FontWeight::Regular);
    assert_eq!(
        lines,
        vec![
            "ab".to_owned(),
            "abcd".to_owned(),
            "efgh".to_owned(),
            "ij".to_owned(),
            "cd".to_owned()
        ]
    );
}
