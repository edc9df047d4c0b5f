use super::descriptor::{Token, TokenFlags};
use super::symbols::{self, ALPHANUMERIC, ESCAPE, LETTER, LOWER_LETTER, OPTIONAL_DIGIT, RECURSIVE_DIGIT, UPPER_LETTER};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The standard catalog, built once on first use.
pub static DEFAULT_CATALOG: Lazy<TokenCatalog> = Lazy::new(TokenCatalog::standard);

/// Role of a mask character as resolved through a catalog.
#[derive(Debug, Clone, Copy)]
pub enum Symbol<'a> {
    /// No catalog entry: copied through verbatim.
    Literal(char),
    /// The escape marker.
    Escape,
    /// A fillable token.
    Fill(&'a Token),
}

/// Mapping from single mask characters to token descriptors.
///
/// An empty catalog is valid; every mask character is then a literal.
#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    tokens: HashMap<char, Token>,
}

impl TokenCatalog {
    pub fn empty() -> Self {
        TokenCatalog { tokens: HashMap::new() }
    }

    /// Catalog with the standard entries (`0 9 # A S U L $`).
    pub fn standard() -> Self {
        TokenCatalog::empty()
            .with(symbols::REQUIRED_DIGIT, token! { matches: symbols::is_digit, default: '0' })
            .with(OPTIONAL_DIGIT, token! { matches: symbols::is_digit, flags: TokenFlags::OPTIONAL })
            .with(RECURSIVE_DIGIT, token! { matches: symbols::is_digit, flags: TokenFlags::all() })
            .with(ALPHANUMERIC, token! { matches: symbols::is_alphanumeric })
            .with(LETTER, token! { matches: symbols::is_letter })
            .with(UPPER_LETTER, token! { matches: symbols::is_letter, transform: symbols::to_upper })
            .with(LOWER_LETTER, token! { matches: symbols::is_letter, transform: symbols::to_lower })
            .with(ESCAPE, Token::escape())
    }

    /// Standard catalog overlaid with `custom`; custom entries win.
    pub fn extended(custom: impl IntoIterator<Item = (char, Token)>) -> Self {
        let mut catalog = TokenCatalog::standard();
        catalog.extend(custom);
        catalog
    }

    /// Add or replace an entry, returning the previous one.
    pub fn insert(&mut self, key: char, token: Token) -> Option<Token> {
        self.tokens.insert(key, token)
    }

    pub fn with(mut self, key: char, token: Token) -> Self {
        self.insert(key, token);
        self
    }

    pub fn remove(&mut self, key: char) -> Option<Token> {
        self.tokens.remove(&key)
    }

    pub fn get(&self, key: char) -> Option<&Token> {
        self.tokens.get(&key)
    }

    pub fn contains(&self, key: char) -> bool {
        self.tokens.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Registered characters, sorted.
    pub fn keys(&self) -> Vec<char> {
        let mut keys: Vec<char> = self.tokens.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Resolve `c` without regard to escaping.
    pub fn classify(&self, c: char) -> Symbol<'_> {
        match self.tokens.get(&c) {
            None => Symbol::Literal(c),
            Some(token) if token.is_escape() => Symbol::Escape,
            Some(token) => Symbol::Fill(token),
        }
    }
}

impl Extend<(char, Token)> for TokenCatalog {
    fn extend<I: IntoIterator<Item = (char, Token)>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl FromIterator<(char, Token)> for TokenCatalog {
    fn from_iter<I: IntoIterator<Item = (char, Token)>>(iter: I) -> Self {
        TokenCatalog { tokens: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matcher;

    #[test]
    fn standard_entries() {
        let catalog = TokenCatalog::standard();

        assert_eq!(catalog.keys(), vec!['#', '$', '0', '9', 'A', 'L', 'S', 'U']);

        let zero = catalog.get('0').unwrap();
        assert!(zero.is_required());
        assert_eq!(zero.default_value(), Some('0'));

        let nine = catalog.get('9').unwrap();
        assert!(nine.is_optional());
        assert!(!nine.is_recursive());

        let hash = catalog.get('#').unwrap();
        assert!(hash.is_optional());
        assert!(hash.is_recursive());

        assert!(catalog.get('A').unwrap().matches('z'));
        assert!(!catalog.get('S').unwrap().matches('1'));
        assert_eq!(catalog.get('U').unwrap().transform().map(|t| t('a')), Some('A'));
        assert_eq!(catalog.get('L').unwrap().transform().map(|t| t('A')), Some('a'));
        assert!(catalog.get('$').unwrap().is_escape());
    }

    #[test]
    fn default_catalog_matches_standard() {
        assert_eq!(DEFAULT_CATALOG.keys(), TokenCatalog::standard().keys());
    }

    #[test]
    fn classify_resolves_roles() {
        let catalog = TokenCatalog::standard();

        assert!(matches!(catalog.classify('-'), Symbol::Literal('-')));
        assert!(matches!(catalog.classify('$'), Symbol::Escape));
        assert!(matches!(catalog.classify('0'), Symbol::Fill(t) if t.is_required()));
    }

    #[test]
    fn empty_catalog_makes_everything_literal() {
        let catalog = TokenCatalog::empty();

        assert!(catalog.is_empty());
        assert!(matches!(catalog.classify('0'), Symbol::Literal('0')));
    }

    #[test]
    fn extended_overrides_and_adds() {
        let hex = Token::pattern("[0-9A-F]").unwrap();
        let catalog = TokenCatalog::extended([('X', hex), ('0', Token::new(Matcher::Predicate(|c| c == '1')))]);

        assert_eq!(catalog.len(), 9);
        assert!(catalog.get('X').unwrap().matches('E'));
        assert!(!catalog.get('0').unwrap().matches('2'));
        assert!(catalog.get('0').unwrap().default_value().is_none());
    }

    #[test]
    fn insert_and_remove() {
        let mut catalog = TokenCatalog::standard();

        assert!(catalog.remove('$').is_some());
        assert!(!catalog.contains('$'));
        assert!(catalog.insert('\\', Token::escape()).is_none());
        assert!(matches!(catalog.classify('\\'), Symbol::Escape));
    }
}
