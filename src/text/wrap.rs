use super::metrics::{FontWeight, TextMeasure};

/// Greedy word wrap: a line keeps growing while its measured width stays `<= max_width`.
///
/// Words are separated by whitespace runs and rejoined with single spaces. A single word wider
/// than `max_width` is split between characters so no line overflows unless one glyph alone does.
/// Empty or whitespace-only input yields no lines.
pub fn wrap_greedy(
    measure: &mut dyn TextMeasure,
    text: &str,
    max_width: f64,
    font_size: f64,
    weight: FontWeight,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };
        if measure.measure(&candidate, font_size, weight) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if measure.measure(word, font_size, weight) <= max_width {
            current = word.to_owned();
        } else {
            current = split_long_word(measure, word, max_width, font_size, weight, &mut lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Push full-width chunks of `word` into `lines`; return the trailing partial chunk.
fn split_long_word(
    measure: &mut dyn TextMeasure,
    word: &str,
    max_width: f64,
    font_size: f64,
    weight: FontWeight,
    lines: &mut Vec<String>,
) -> String {
    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if chunk.chars().count() > 1 && measure.measure(&chunk, font_size, weight) > max_width {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(ch);
        }
    }
    chunk
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
