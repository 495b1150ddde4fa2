use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Greedy word wrap. Words wider than `max_width` are split by character.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in input_line.split(' ').filter(|w| !w.is_empty()) {
            let word_width = display_width(word);

            if word_width > max_width {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }
                let mut pieces = wrap_chars(word, max_width);
                let last = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = display_width(&last);
                current_line = last;
                continue;
            }

            let space_width = usize::from(!current_line.is_empty());
            if current_width + space_width + word_width > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            } else if space_width == 1 {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }

        lines.push(current_line);
    }

    lines
}

pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if current_width + ch_width > max_width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }
        current_line.push(ch);
        current_width += ch_width;
    }

    lines.push(current_line);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nbsp_is_one_cell_wide() {
        assert_eq!(display_width("\u{a0}"), 1);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Strawberry", 6), "Straw…");
        assert_eq!(truncate_to_width("Fig", 6), "Fig");
    }

    #[test]
    fn wrap_breaks_on_spaces() {
        assert_eq!(
            wrap_words("pick one of these", 8),
            vec!["pick one", "of these"]
        );
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_keeps_nbsp_inside_words() {
        assert_eq!(wrap_words("\u{a0}", 4), vec!["\u{a0}"]);
    }
}
