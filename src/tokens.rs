//! Token catalog.
//!
//! A catalog maps single mask characters to [`Token`] descriptors. Any mask
//! character without an entry is a literal. The engine never mutates a
//! catalog; it borrows one for the duration of a scan.
//!
//! ## Parts
//!
//! - `descriptor.rs`: the `Token` descriptor, its `Matcher` and flags.
//! - `symbols.rs`: character predicates and transforms used by the standard
//!   entries.
//! - `catalog.rs`: `TokenCatalog`, the standard entries and `DEFAULT_CATALOG`.
//! - `config.rs`: JSON token definitions and `CatalogError`.
//!
//! ## Standard entries
//!
//! ```text
//! 0  required digit        default '0'
//! 9  optional digit
//! #  recursive digit       (optional, shares the digit budget)
//! A  letter or digit
//! S  letter
//! U  letter, upper-cased
//! L  letter, lower-cased
//! $  escape marker
//! ```

#[path = "tokens/catalog.rs"]
mod catalog;
#[path = "tokens/config.rs"]
mod config;
#[path = "tokens/descriptor.rs"]
mod descriptor;
#[path = "tokens/symbols.rs"]
pub mod symbols;

pub use catalog::{DEFAULT_CATALOG, Symbol, TokenCatalog};
pub use config::{CatalogError, TokenSpec, TransformSpec};
pub use descriptor::{Matcher, Token, TokenFlags, Transform};
