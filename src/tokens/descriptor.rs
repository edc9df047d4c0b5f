use regex::Regex;

/// Character transform applied to a matched (or defaulted) character before
/// it is placed.
pub type Transform = fn(char) -> char;

bitflags::bitflags! {
    /// Fill policy of a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u8 {
        /// May be left unfilled; fills draw from the optional-digit budget.
        const OPTIONAL  = 1 << 0;
        /// Member of the self-extending digit family.
        const RECURSIVE = 1 << 1;
    }
}

/// Test a candidate input character must pass to fill a token.
#[derive(Clone)]
pub enum Matcher {
    /// Plain character predicate (used by the standard catalog).
    Predicate(fn(char) -> bool),
    /// Regular expression matched against the single character.
    Regex(Regex),
}

impl Matcher {
    pub fn matches(&self, c: char) -> bool {
        match self {
            Matcher::Predicate(p) => p(c),
            Matcher::Regex(re) => {
                let mut buf = [0u8; 4];
                re.is_match(c.encode_utf8(&mut buf))
            }
        }
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Predicate(_) => f.write_str("Predicate(<function>)"),
            Matcher::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
        }
    }
}

#[derive(Debug, Clone)]
enum Role {
    Escape,
    Fill(Matcher),
}

/// A catalog entry.
///
/// A token is either the escape marker, which has no matcher and is never
/// filled, or a fillable token with a [`Matcher`]. The two roles are fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct Token {
    role: Role,
    flags: TokenFlags,
    default_value: Option<char>,
    transform: Option<Transform>,
}

impl Token {
    /// A required, fillable token.
    pub fn new(matcher: Matcher) -> Self {
        Token { role: Role::Fill(matcher), flags: TokenFlags::empty(), default_value: None, transform: None }
    }

    /// The escape marker.
    pub fn escape() -> Self {
        Token { role: Role::Escape, flags: TokenFlags::empty(), default_value: None, transform: None }
    }

    /// Fillable token that accepts characters matching `pattern`.
    ///
    /// The pattern is anchored, so it has to match the whole character.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        let re = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Token::new(Matcher::Regex(re)))
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn optional(self) -> Self {
        self.with_flags(TokenFlags::OPTIONAL)
    }

    /// Marks the token as part of the recursive digit family. Recursive tokens
    /// are always optional.
    pub fn recursive(self) -> Self {
        self.with_flags(TokenFlags::OPTIONAL | TokenFlags::RECURSIVE)
    }

    pub fn with_default(mut self, value: char) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn flags(&self) -> TokenFlags {
        self.flags
    }

    pub fn is_escape(&self) -> bool {
        matches!(self.role, Role::Escape)
    }

    pub fn is_optional(&self) -> bool {
        self.flags.contains(TokenFlags::OPTIONAL)
    }

    pub fn is_recursive(&self) -> bool {
        self.flags.contains(TokenFlags::RECURSIVE)
    }

    /// True for fillable tokens that must be filled.
    pub fn is_required(&self) -> bool {
        !self.is_escape() && !self.is_optional()
    }

    pub fn matcher(&self) -> Option<&Matcher> {
        match &self.role {
            Role::Fill(m) => Some(m),
            Role::Escape => None,
        }
    }

    /// Whether `c` can fill this token. Always false for the escape marker.
    pub fn matches(&self, c: char) -> bool {
        self.matcher().is_some_and(|m| m.matches(c))
    }

    pub fn default_value(&self) -> Option<char> {
        self.default_value
    }

    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::symbols;

    #[test]
    fn escape_has_no_matcher() {
        let token = Token::escape();

        assert!(token.is_escape());
        assert!(token.matcher().is_none());
        assert!(!token.matches('$'));
        assert!(!token.is_required());
    }

    #[test]
    fn recursive_implies_optional() {
        let token = Token::new(Matcher::Predicate(symbols::is_digit)).recursive();

        assert!(token.is_optional());
        assert!(token.is_recursive());
        assert!(!token.is_required());
    }

    #[test]
    fn pattern_is_anchored_to_the_character() {
        let token = Token::pattern("[0-9A-F]").unwrap();

        assert!(token.matches('7'));
        assert!(token.matches('C'));
        assert!(!token.matches('G'));
        assert!(!token.matches('c'));
    }

    #[test]
    fn pattern_rejects_bad_regex() {
        assert!(Token::pattern("[0-9").is_err());
    }

    #[test]
    fn builder_keeps_default_and_transform() {
        let token = token! { matches: symbols::is_letter, default: 'x', transform: symbols::to_upper };

        assert!(token.is_required());
        assert_eq!(token.default_value(), Some('x'));
        assert_eq!(token.transform().map(|t| t('q')), Some('Q'));
    }
}
