//! Read-only queries over a mask.
//!
//! Positions are signed so that lookahead can start one step outside the mask
//! (`-1` or `len`); such a scan simply finds nothing.

use crate::tokens::symbols::REQUIRED_DIGIT;
use crate::{Direction, Token, TokenCatalog};

/// Stateless helper answering questions about a mask under one catalog.
#[derive(Debug, Clone, Copy)]
pub struct PatternAnalyzer<'a> {
    catalog: &'a TokenCatalog,
}

impl<'a> PatternAnalyzer<'a> {
    pub fn new(catalog: &'a TokenCatalog) -> Self {
        PatternAnalyzer { catalog }
    }

    pub fn catalog(&self) -> &'a TokenCatalog {
        self.catalog
    }

    /// Catalog lookup; `None` for literals.
    pub fn token(&self, c: char) -> Option<&'a Token> {
        self.catalog.get(c)
    }

    /// Whether the character at `position` is escaped.
    ///
    /// Counts the run of escape markers directly before `position`. An odd
    /// run escapes; an even run (including none) cancels itself out.
    pub fn is_escaped(&self, mask: &[char], position: usize) -> bool {
        let run = mask[..position.min(mask.len())]
            .iter()
            .rev()
            .take_while(|&&c| self.token(c).is_some_and(Token::is_escape))
            .count();

        run % 2 == 1
    }

    /// Whether a fillable token lies at or beyond `position` in `direction`.
    pub fn has_more_tokens(&self, mask: &[char], position: isize, direction: Direction) -> bool {
        self.scan_ahead(mask, position, direction, |t| !t.is_escape())
    }

    /// Whether a recursive token lies at or beyond `position` in `direction`.
    pub fn has_more_recursive_tokens(&self, mask: &[char], position: isize, direction: Direction) -> bool {
        self.scan_ahead(mask, position, direction, Token::is_recursive)
    }

    /// Whether the mask holds any required token that is not escaped.
    pub fn has_required_tokens(&self, mask: &[char]) -> bool {
        mask.iter()
            .enumerate()
            .any(|(i, &c)| self.token(c).is_some_and(Token::is_required) && !self.is_escaped(mask, i))
    }

    /// Number of digits in `value` beyond those claimed by required digits.
    ///
    /// This counts `0-9` in the value and the canonical required-digit
    /// character in the mask, whatever the catalog says about either. A
    /// catalog that redefines `'0'` gets a budget that only makes sense for
    /// digit masks.
    pub fn optional_budget(&self, mask: &[char], value: &str) -> usize {
        let required = mask.iter().filter(|&&c| c == REQUIRED_DIGIT).count();
        let available = regex!("[0-9]").find_iter(value).count();

        available.saturating_sub(required)
    }

    fn scan_ahead(&self, mask: &[char], position: isize, direction: Direction, accept: impl Fn(&Token) -> bool) -> bool {
        let mut pos = position;
        while let Some(&c) = usize::try_from(pos).ok().and_then(|i| mask.get(i)) {
            if self.token(c).is_some_and(&accept) {
                return true;
            }
            pos += direction.step();
        }
        false
    }
}
