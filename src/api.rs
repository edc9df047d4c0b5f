use crate::engine::{MaskProcessor, ScanTrace};
use crate::{DEFAULT_CATALOG, Direction, TokenCatalog};
use std::borrow::Cow;
use std::fmt;
use std::time::{Duration, Instant};

/// Options that affect processing.
///
/// `use_defaults` left unset follows `reverse`: reverse masks backfill
/// defaults unless told otherwise, forward masks do not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Process right-to-left.
    pub reverse: bool,
    /// Fill unmet required tokens with their default value.
    pub use_defaults: Option<bool>,
}

impl Options {
    pub fn forward() -> Self {
        Options { reverse: false, use_defaults: None }
    }

    pub fn reversed() -> Self {
        Options { reverse: true, use_defaults: None }
    }

    pub fn with_defaults(mut self, use_defaults: bool) -> Self {
        self.use_defaults = Some(use_defaults);
        self
    }

    pub fn direction(&self) -> Direction {
        Direction::from(self.reverse)
    }

    pub fn resolved_use_defaults(&self) -> bool {
        self.use_defaults.unwrap_or(self.reverse)
    }
}

/// Outcome of applying a mask to a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskResult {
    /// Formatted text, truncated where the scan halted.
    pub result: String,
    /// False when a required token could not be filled.
    pub valid: bool,
}

impl fmt::Display for MaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result)
    }
}

/// Extra detail returned by [`StringMask::process_verbose`].
#[derive(Debug, Clone)]
pub struct ScanDetails {
    pub direction: Direction,
    pub use_defaults: bool,
    pub trace: ScanTrace,
    pub elapsed: Duration,
}

/// Result from [`StringMask::process_verbose`].
#[derive(Debug, Clone)]
pub struct MaskReport {
    pub mask: String,
    pub value: String,
    pub outcome: MaskResult,
    pub details: ScanDetails,
}

/// A mask bound to its options and token catalog.
///
/// # Example
/// ```
/// use strmask::{Options, StringMask};
///
/// let date = StringMask::new("00/00/0000");
/// assert_eq!(date.apply("25122025"), "25/12/2025");
/// assert!(!date.validate("2512"));
///
/// let money = StringMask::with_options("R$ #.###.###,00", Options::reversed());
/// assert_eq!(money.apply("1234567"), "12.345,67");
/// ```
#[derive(Debug, Clone)]
pub struct StringMask {
    pattern: String,
    options: Options,
    catalog: Cow<'static, TokenCatalog>,
}

impl StringMask {
    /// Forward mask over the standard catalog.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_options(pattern, Options::default())
    }

    pub fn with_options(pattern: impl Into<String>, options: Options) -> Self {
        StringMask { pattern: pattern.into(), options, catalog: Cow::Borrowed(&*DEFAULT_CATALOG) }
    }

    /// Mask over a custom catalog.
    pub fn with_catalog(pattern: impl Into<String>, options: Options, catalog: TokenCatalog) -> Self {
        StringMask { pattern: pattern.into(), options, catalog: Cow::Owned(catalog) }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    /// Format `value` and report whether it satisfied the mask.
    pub fn process(&self, value: impl AsRef<str>) -> MaskResult {
        self.processor().process(value.as_ref())
    }

    /// Process a possibly absent, possibly non-text value.
    ///
    /// `None` is treated as the empty string; anything else is rendered
    /// through `Display` first.
    pub fn process_value<T: fmt::Display>(&self, value: Option<T>) -> MaskResult {
        self.process(normalize_value(value))
    }

    /// Formatted text only.
    pub fn apply(&self, value: impl AsRef<str>) -> String {
        self.process(value).result
    }

    /// Validity only.
    pub fn validate(&self, value: impl AsRef<str>) -> bool {
        self.process(value).valid
    }

    /// Process `value` and return the scan trace alongside the result.
    ///
    /// The plain [`process`](Self::process) path does not record a trace.
    pub fn process_verbose(&self, value: impl AsRef<str>) -> MaskReport {
        let value = value.as_ref();
        let processor = self.processor();

        let start = Instant::now();
        let (outcome, trace) = processor.process_traced(value);
        let elapsed = start.elapsed();

        MaskReport {
            mask: self.pattern.clone(),
            value: value.to_string(),
            outcome,
            details: ScanDetails {
                direction: processor.direction(),
                use_defaults: processor.use_defaults(),
                trace,
                elapsed,
            },
        }
    }

    fn processor(&self) -> MaskProcessor<'_> {
        MaskProcessor::new(
            &self.pattern,
            self.options.direction(),
            self.options.resolved_use_defaults(),
            &self.catalog,
        )
    }
}

/// Text form of an optional value: `None` becomes the empty string.
pub fn normalize_value<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Apply `pattern` to `value` once, with the standard catalog.
pub fn process(value: &str, pattern: &str, options: Options) -> MaskResult {
    StringMask::with_options(pattern, options).process(value)
}

/// Like [`process`], returning the formatted text only.
pub fn apply(value: &str, pattern: &str, options: Options) -> String {
    process(value, pattern, options).result
}

/// Like [`process`], returning validity only.
pub fn validate(value: &str, pattern: &str, options: Options) -> bool {
    process(value, pattern, options).valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HaltReason, Token};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn hex_catalog() -> TokenCatalog {
        TokenCatalog::empty().with('X', Token::pattern("[0-9A-F]").unwrap())
    }

    #[test]
    fn process_returns_result_and_validity() {
        let masker = StringMask::new("000-0000");

        assert_eq!(masker.process("1234567"), MaskResult { result: "123-4567".into(), valid: true });
    }

    #[test]
    fn absent_and_empty_values() {
        let masker = StringMask::new("000-0000");

        assert_eq!(masker.process_value(None::<&str>), MaskResult { result: String::new(), valid: false });
        assert_eq!(masker.process(""), MaskResult { result: String::new(), valid: false });
        assert_eq!(masker.apply(normalize_value(None::<i32>)), "");
        assert!(!masker.validate(""));
    }

    #[test]
    fn numeric_values_are_rendered_first() {
        let masker = StringMask::new("000-0000");

        assert_eq!(masker.process_value(Some(1234567)), MaskResult { result: "123-4567".into(), valid: true });
        assert_eq!(normalize_value(Some(0)), "0");
        assert_eq!(normalize_value(Some(true)), "true");
    }

    #[test_case("(000) 000-0000", "1234567890", "(123) 456-7890" ; "phone")]
    #[test_case("000.000.000-00", "12345678901", "123.456.789-01" ; "cpf")]
    #[test_case("(00) 0000-0000", "11987654321", "(11) 9876-5432" ; "landline drops extra digit")]
    #[test_case("(00) 00000-0000", "11987654321", "(11) 98765-4321" ; "mobile")]
    #[test_case("0000 0000 0000 0000", "4111111111111111", "4111 1111 1111 1111" ; "card")]
    #[test_case("00/00/0000", "25122025", "25/12/2025" ; "date")]
    #[test_case("00000-000", "01310100", "01310-100" ; "cep")]
    #[test_case("00.000.000/0000-00", "12345678000199", "12.345.678/0001-99" ; "cnpj")]
    fn forward_real_world(pattern: &str, value: &str, expected: &str) {
        assert_eq!(StringMask::new(pattern).apply(value), expected);
    }

    #[test_case("1234567", "12.345,67" ; "prefix dropped when budget runs out")]
    #[test_case("123456789", "1.234.567,89" ; "prefix dropped when tokens run out")]
    fn reverse_currency(value: &str, expected: &str) {
        let masker = StringMask::with_options("R$ #.###.###,00", Options::reversed());

        assert_eq!(masker.process(value), MaskResult { result: expected.into(), valid: true });
    }

    #[test]
    fn validate_cases() {
        let masker = StringMask::new("000-0000");

        assert!(masker.validate("1234567"));
        assert!(!masker.validate("12345"));
        assert!(!StringMask::new("0000").validate("abcd"));
    }

    #[test]
    fn reverse_option() {
        assert_eq!(StringMask::with_options("000.000,00", Options::reversed()).apply("123456"), "001.234,56");
        assert_eq!(StringMask::with_options("000.000,00", Options::forward()).apply("123456"), "123.456,");
    }

    #[test]
    fn use_defaults_option() {
        let with = StringMask::with_options("000-0000", Options::forward().with_defaults(true));
        let without = StringMask::with_options("000-0000", Options::forward().with_defaults(false));

        assert_eq!(with.process("123"), MaskResult { result: "123-0000".into(), valid: true });
        assert_eq!(without.process("123"), MaskResult { result: "123-".into(), valid: false });
    }

    #[test]
    fn use_defaults_follows_reverse_when_unset() {
        assert!(Options::reversed().resolved_use_defaults());
        assert!(!Options::forward().resolved_use_defaults());
        assert!(!Options::reversed().with_defaults(false).resolved_use_defaults());

        assert_eq!(StringMask::with_options("000,00", Options::reversed()).apply("1"), "000,01");
        assert_eq!(
            StringMask::with_options("000,00", Options::reversed().with_defaults(false)).process("1"),
            MaskResult { result: "1".into(), valid: false }
        );
    }

    #[test]
    fn custom_catalog() {
        let masker = StringMask::with_catalog("XX-XX", Options::default(), hex_catalog());
        assert_eq!(masker.apply("12AB"), "12-AB");

        let strict = StringMask::with_catalog("XXXX", Options::default(), hex_catalog());
        assert!(strict.validate("12AB"));
        assert!(!strict.validate("12GH"));
        assert_eq!(strict.apply("12GH"), "12");
    }

    #[test]
    fn free_functions() {
        assert_eq!(process("1234567", "000-0000", Options::default()).result, "123-4567");
        assert_eq!(apply("123456", "000.000,00", Options::reversed()), "001.234,56");
        assert!(validate("1234567", "000-0000", Options::default()));
        assert!(!validate("12345", "000-0000", Options::default()));
    }

    #[test]
    fn verbose_carries_trace() {
        let masker = StringMask::new("000-0000");
        let report = masker.process_verbose("12345");

        assert_eq!(report.mask, "000-0000");
        assert_eq!(report.value, "12345");
        assert_eq!(report.outcome, masker.process("12345"));
        assert_eq!(report.details.direction, Direction::Forward);
        assert!(!report.details.use_defaults);
        assert_eq!(report.details.trace.consumed, 5);
        assert_eq!(report.details.trace.halt, Some(HaltReason::RequiredUnmet));
    }

    #[test]
    fn accessors() {
        let masker = StringMask::with_options("#.##0", Options::reversed());

        assert_eq!(masker.pattern(), "#.##0");
        assert_eq!(masker.options(), Options::reversed());
        assert_eq!(masker.catalog().len(), DEFAULT_CATALOG.len());
        assert_eq!(masker.process("12").to_string(), "12");
    }
}
