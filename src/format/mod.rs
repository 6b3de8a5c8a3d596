//! Formatters that rebuild tokenized text in a particular casing style.
//!
//! Every formatter tokenizes its input with [`tokenize`](crate::tokenize) first, so delimiters in the
//! input never survive into the output. Empty input always produces an empty string.

mod text;

pub use self::text::*;

use crate::{is_acronym, tokenize, CaseOptions, InternalString};

/// Joins the tokens of `input` with `sep`, transforming each token with `transform`.
/// The transformer receives the token's position and the token itself.
fn join_tokens<F>(input: &str, sep: &str, mut transform: F) -> String
  where F: FnMut(usize, &str) -> InternalString
{
  let tokens = tokenize(input);
  let mut output = String::with_capacity(input.len() + tokens.len() * sep.len());
  for (i, token) in tokens.iter().enumerate() {
    if i > 0 {
      output.push_str(sep);
    }
    output.push_str(transform(i, token.as_str()).as_str());
  }
  output
}

/// Uses `token` as-is when `preserve` is set and it is an acronym; otherwise applies `fallback`.
#[inline]
fn keep_acronym_or<F>(token: &str, preserve: bool, fallback: F) -> InternalString
  where F: FnOnce(&str) -> InternalString
{
  if preserve && is_acronym(token) {
    InternalString::from(token)
  } else {
    fallback(token)
  }
}

/// Converts to camelCase: the first word lowercased, every later word capitalized.
pub fn to_camel_case(input: &str, locale: CasingLocale) -> String {
  join_tokens(input, "", |i, token| if i == 0 {
    locale.to_lower(token)
  } else {
    locale.capitalize(token)
  })
}

/// Converts to PascalCase: every word capitalized.
pub fn to_pascal_case(input: &str, locale: CasingLocale) -> String {
  join_tokens(input, "", |_, token| locale.capitalize(token))
}

/// Converts to PascalCase, keeping acronyms intact if `preserve_acronyms_in_title_casing` is set.
pub fn to_pascal_case_with(input: &str, locale: CasingLocale, options: &CaseOptions) -> String {
  let preserve = options.preserve_acronyms_in_title_casing;
  join_tokens(input, "", |_, token| keep_acronym_or(token, preserve, |t| locale.capitalize(t)))
}

/// Converts to snake_case: lowercase words joined by underscores.
pub fn to_snake_case(input: &str, locale: CasingLocale) -> String {
  join_tokens(input, "_", |_, token| locale.to_lower(token))
}

/// Converts to snake_case, keeping acronyms intact if `preserve_acronyms_in_delimited` is set.
pub fn to_snake_case_with(input: &str, locale: CasingLocale, options: &CaseOptions) -> String {
  let preserve = options.preserve_acronyms_in_delimited;
  join_tokens(input, "_", |_, token| keep_acronym_or(token, preserve, |t| locale.to_lower(t)))
}

/// Converts to kebab-case: lowercase words joined by hyphens.
pub fn to_kebab_case(input: &str, locale: CasingLocale) -> String {
  join_tokens(input, "-", |_, token| locale.to_lower(token))
}

/// Converts to kebab-case, keeping acronyms intact if `preserve_acronyms_in_delimited` is set.
pub fn to_kebab_case_with(input: &str, locale: CasingLocale, options: &CaseOptions) -> String {
  let preserve = options.preserve_acronyms_in_delimited;
  join_tokens(input, "-", |_, token| keep_acronym_or(token, preserve, |t| locale.to_lower(t)))
}

/// Converts to UPPER CASE: uppercase words joined by spaces.
pub fn to_upper_case(input: &str, locale: CasingLocale) -> String {
  join_tokens(input, " ", |_, token| locale.to_upper(token))
}

/// Converts to UPPER CASE, keeping acronyms intact if `preserve_acronyms_in_plain` is set.
pub fn to_upper_case_with(input: &str, locale: CasingLocale, options: &CaseOptions) -> String {
  let preserve = options.preserve_acronyms_in_plain;
  join_tokens(input, " ", |_, token| keep_acronym_or(token, preserve, |t| locale.to_upper(t)))
}

/// Converts to lower case: lowercase words joined by spaces.
pub fn to_lower_case(input: &str, locale: CasingLocale) -> String {
  join_tokens(input, " ", |_, token| locale.to_lower(token))
}

/// Converts to lower case, keeping acronyms intact if `preserve_acronyms_in_plain` is set.
pub fn to_lower_case_with(input: &str, locale: CasingLocale, options: &CaseOptions) -> String {
  let preserve = options.preserve_acronyms_in_plain;
  join_tokens(input, " ", |_, token| keep_acronym_or(token, preserve, |t| locale.to_lower(t)))
}

/// Converts to Title Case: capitalized words joined by spaces.
pub fn to_title_case(input: &str, locale: CasingLocale) -> String {
  join_tokens(input, " ", |_, token| locale.capitalize(token))
}

/// Converts to Title Case, keeping acronyms intact if `preserve_acronyms_in_title_casing` is set.
pub fn to_title_case_with(input: &str, locale: CasingLocale, options: &CaseOptions) -> String {
  let preserve = options.preserve_acronyms_in_title_casing;
  join_tokens(input, " ", |_, token| keep_acronym_or(token, preserve, |t| locale.capitalize(t)))
}

/// Converts to Sentence case: the first word capitalized, the rest lowercased, joined by spaces.
pub fn to_sentence_case(input: &str, locale: CasingLocale) -> String {
  join_tokens(input, " ", |i, token| if i == 0 {
    locale.capitalize(token)
  } else {
    locale.to_lower(token)
  })
}
