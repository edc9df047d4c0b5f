//! JSON token definitions.
//!
//! Custom catalogs can be described as a JSON object keyed by single
//! characters:
//!
//! ```json
//! {
//!   "X": { "pattern": "[0-9A-F]" },
//!   "h": { "pattern": "[0-9a-f]", "optional": true },
//!   "u": { "pattern": "[a-z]", "transform": "upper", "default": "A" },
//!   "\\": { "escape": true }
//! }
//! ```
//!
//! Patterns are anchored and matched against one character at a time.

use super::catalog::TokenCatalog;
use super::descriptor::{Token, TokenFlags};
use super::symbols;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errors raised while building a catalog from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid token catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token key \"{key}\" must be exactly one character")]
    InvalidKey { key: String },

    #[error("token '{key}' has no pattern")]
    MissingPattern { key: char },

    #[error("escape token '{key}' cannot have a pattern, flags, default or transform")]
    EscapeWithAttributes { key: char },

    #[error("token '{key}' has an invalid pattern")]
    InvalidPattern {
        key: char,
        #[source]
        source: regex::Error,
    },

    #[error("default of token '{key}' must be exactly one character, got \"{value}\"")]
    InvalidDefault { key: char, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformSpec {
    Upper,
    Lower,
}

/// One token definition as it appears in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenSpec {
    pub pattern: Option<String>,
    pub optional: bool,
    pub recursive: bool,
    pub default: Option<String>,
    pub escape: bool,
    pub transform: Option<TransformSpec>,
}

impl TokenSpec {
    /// Build the descriptor registered under `key`.
    pub fn build(&self, key: char) -> Result<Token, CatalogError> {
        if self.escape {
            let bare = self.pattern.is_none()
                && !self.optional
                && !self.recursive
                && self.default.is_none()
                && self.transform.is_none();
            return if bare { Ok(Token::escape()) } else { Err(CatalogError::EscapeWithAttributes { key }) };
        }

        let pattern = self.pattern.as_deref().ok_or(CatalogError::MissingPattern { key })?;
        let mut token = Token::pattern(pattern).map_err(|source| CatalogError::InvalidPattern { key, source })?;

        if self.optional {
            token = token.with_flags(TokenFlags::OPTIONAL);
        }
        if self.recursive {
            token = token.recursive();
        }
        if let Some(value) = &self.default {
            token = token.with_default(single_char(value).ok_or_else(|| CatalogError::InvalidDefault {
                key,
                value: value.clone(),
            })?);
        }
        token = match self.transform {
            Some(TransformSpec::Upper) => token.with_transform(symbols::to_upper),
            Some(TransformSpec::Lower) => token.with_transform(symbols::to_lower),
            None => token,
        };

        Ok(token)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_entries(json: &str) -> Result<Vec<(char, Token)>, CatalogError> {
    let specs: BTreeMap<String, TokenSpec> = serde_json::from_str(json)?;

    specs
        .iter()
        .map(|(key, spec)| {
            let c = single_char(key).ok_or_else(|| CatalogError::InvalidKey { key: key.clone() })?;
            Ok((c, spec.build(c)?))
        })
        .collect()
}

impl TokenCatalog {
    /// Catalog containing only the entries defined in `json`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(parse_entries(json)?.into_iter().collect())
    }

    /// Add (or replace) the entries defined in `json`.
    ///
    /// Nothing is inserted unless every entry is valid.
    pub fn extend_from_json(&mut self, json: &str) -> Result<(), CatalogError> {
        let entries = parse_entries(json)?;
        tracing::debug!(entries = entries.len(), "extending token catalog from JSON");
        self.extend(entries);
        Ok(())
    }
}
