//! Character predicates and transforms for the standard catalog.
//!
//! Classes are ASCII only: a mask digit is `0-9`, a mask letter is `a-zA-Z`.

/// Character the optional-digit budget treats as a required digit.
pub const REQUIRED_DIGIT: char = '0';
pub const OPTIONAL_DIGIT: char = '9';
pub const RECURSIVE_DIGIT: char = '#';
pub const ALPHANUMERIC: char = 'A';
pub const LETTER: char = 'S';
pub const UPPER_LETTER: char = 'U';
pub const LOWER_LETTER: char = 'L';
pub const ESCAPE: char = '$';

/// Returns true for `0-9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for `a-z` and `A-Z`.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true for `a-z`, `A-Z` and `0-9`.
pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

pub fn to_upper(c: char) -> char {
    c.to_ascii_uppercase()
}

pub fn to_lower(c: char) -> char {
    c.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('0', true, false, true ; "zero")]
    #[test_case('7', true, false, true ; "seven")]
    #[test_case('a', false, true, true ; "lower letter")]
    #[test_case('Z', false, true, true ; "upper letter")]
    #[test_case('-', false, false, false ; "dash")]
    #[test_case('é', false, false, false ; "accented letter")]
    #[test_case('٣', false, false, false ; "arabic indic digit")]
    fn classes(c: char, digit: bool, letter: bool, alnum: bool) {
        assert_eq!(is_digit(c), digit);
        assert_eq!(is_letter(c), letter);
        assert_eq!(is_alphanumeric(c), alnum);
    }

    #[test]
    fn case_transforms_leave_non_letters_alone() {
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_lower('Q'), 'q');
        assert_eq!(to_upper('5'), '5');
        assert_eq!(to_lower('-'), '-');
    }
}
