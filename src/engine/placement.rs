//! Character placement into the result buffer.

use crate::{Direction, Transform};

/// Transform `c` if a transform is given, then append it (forward) or
/// prepend it (reverse).
pub fn place(buffer: &mut String, c: char, direction: Direction, transform: Option<Transform>) {
    let c = transform.map_or(c, |t| t(c));
    match direction {
        Direction::Forward => buffer.push(c),
        Direction::Reverse => buffer.insert(0, c),
    }
}

/// Copy of `text` with `c` inserted before the `index`-th character.
///
/// Indices past the end append.
pub fn insert_at(text: &str, c: char, index: usize) -> String {
    let byte = text.char_indices().nth(index).map_or(text.len(), |(i, _)| i);
    let mut out = String::with_capacity(text.len() + c.len_utf8());
    out.push_str(&text[..byte]);
    out.push(c);
    out.push_str(&text[byte..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::symbols;
    use test_case::test_case;

    #[test_case("hello", ' ', Direction::Forward, None, "hello " ; "append")]
    #[test_case("world", '!', Direction::Reverse, None, "!world" ; "prepend")]
    #[test_case("hello", 'a', Direction::Forward, Some(symbols::to_upper as Transform), "helloA" ; "transform forward")]
    #[test_case("world", 'X', Direction::Reverse, Some(symbols::to_lower as Transform), "xworld" ; "transform reverse")]
    #[test_case("", 'a', Direction::Forward, None, "a" ; "empty buffer")]
    fn place_cases(start: &str, c: char, direction: Direction, transform: Option<Transform>, expected: &str) {
        let mut buffer = start.to_string();
        place(&mut buffer, c, direction, transform);

        assert_eq!(buffer, expected);
    }

    #[test_case("hello", 'X', 0, "Xhello" ; "beginning")]
    #[test_case("hello", '-', 2, "he-llo" ; "middle")]
    #[test_case("hello", '!', 5, "hello!" ; "end")]
    #[test_case("hello", '!', 42, "hello!" ; "past the end")]
    #[test_case("", 'a', 0, "a" ; "empty")]
    #[test_case("añb", '·', 2, "añ·b" ; "char indices")]
    fn insert_at_cases(text: &str, c: char, index: usize, expected: &str) {
        assert_eq!(insert_at(text, c, index), expected);
    }

    #[test]
    fn repeated_insertions() {
        let mut text = insert_at("hello", '1', 0);
        text = insert_at(&text, '2', 3);
        text = insert_at(&text, '3', 6);

        assert_eq!(text, "1he2ll3o");
    }
}
