#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a fillable catalog entry.
///
/// ```ignore
/// token! {
///     matches: symbols::is_digit,
///     flags: TokenFlags::OPTIONAL | TokenFlags::RECURSIVE,
///     default: '0',
///     transform: symbols::to_upper,
/// }
/// ```
///
/// Only `matches` is mandatory.
#[macro_export]
macro_rules! token {
    (
        matches: $pred:expr
        $(, flags: $flags:expr)?
        $(, default: $default:expr)?
        $(, transform: $transform:expr)?
        $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut token = $crate::Token::new($crate::Matcher::Predicate($pred));
        $( token = token.with_flags($flags); )?
        $( token = token.with_default($default); )?
        $( token = token.with_transform($transform); )?
        token
    }};
}
