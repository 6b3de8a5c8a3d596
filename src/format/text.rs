use std::fmt::Display;
use std::str::FromStr;

use crate::{InternalString, ParseError};

/// Provides locale disambiguation for casing operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CasingLocale {
  /// Follow the default casing rules defined by Unicode.
  Invariant,
  /// Follow casing rules specific to the [Common Turkic Alphabet](https://en.wikipedia.org/wiki/Common_Turkic_Alphabet).
  Turkic,
}

impl CasingLocale {
  /// Converts every character of `input` to uppercase.
  #[inline]
  pub fn to_upper(&self, input: &str) -> InternalString {
    transform_str(input, match self {
      CasingLocale::Invariant => convert_char_upper_invariant,
      CasingLocale::Turkic => convert_char_upper_turkic,
    })
  }

  /// Converts every character of `input` to lowercase.
  #[inline]
  pub fn to_lower(&self, input: &str) -> InternalString {
    transform_str(input, match self {
      CasingLocale::Invariant => convert_char_lower_invariant,
      CasingLocale::Turkic => convert_char_lower_turkic,
    })
  }

  /// Writes the uppercase form of `c` to `buffer`. Some characters expand to more than one.
  #[inline]
  pub fn push_upper(&self, c: char, buffer: &mut InternalString) {
    match self {
      CasingLocale::Invariant => convert_char_upper_invariant(c, buffer),
      CasingLocale::Turkic => convert_char_upper_turkic(c, buffer),
    }
  }

  /// Writes the lowercase form of `c` to `buffer`.
  #[inline]
  pub fn push_lower(&self, c: char, buffer: &mut InternalString) {
    match self {
      CasingLocale::Invariant => convert_char_lower_invariant(c, buffer),
      CasingLocale::Turkic => convert_char_lower_turkic(c, buffer),
    }
  }

  /// Lowercases the whole token, then uppercases its first character.
  ///
  /// A single-character token is simply uppercased.
  pub fn capitalize(&self, token: &str) -> InternalString {
    let mut chars = token.chars();
    let first = match chars.next() {
      Some(c) => c,
      None => return InternalString::new(),
    };

    let mut output = InternalString::new();
    if chars.as_str().is_empty() {
      self.push_upper(first, &mut output);
      return output
    }

    // Lowering can expand the first character, so capitalize the first char of the lowered form.
    let lowered = self.to_lower(token);
    let mut lowered_chars = lowered.chars();
    if let Some(head) = lowered_chars.next() {
      self.push_upper(head, &mut output);
    }
    output.push_str(lowered_chars.as_str());
    output
  }
}

impl Default for CasingLocale {
  fn default() -> Self {
    Self::Invariant
  }
}

impl Display for CasingLocale {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      CasingLocale::Invariant => "invariant",
      CasingLocale::Turkic => "turkic",
    })
  }
}

impl FromStr for CasingLocale {
  type Err = ParseError;

  /// Accepts `"invariant"`, `"turkic"`, or a language tag whose primary subtag is `tr` or `az`.
  /// Any other well-formed tag is rejected rather than silently folded with invariant rules.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let lang = s.split(|c| c == '-' || c == '_').next().unwrap_or_default();
    if s.is_empty() || s.eq_ignore_ascii_case("invariant") {
      return Ok(Self::Invariant)
    }
    if s.eq_ignore_ascii_case("turkic") || lang.eq_ignore_ascii_case("tr") || lang.eq_ignore_ascii_case("az") {
      return Ok(Self::Turkic)
    }
    Err(ParseError::UnknownLocale(s.to_owned()))
  }
}

fn transform_str<F>(input: &str, transformer: F) -> InternalString
  where F: Fn(char, &mut InternalString)
{
  let mut output = InternalString::new();
  for c in input.chars() {
    transformer(c, &mut output);
  }
  output
}

#[inline]
fn convert_char_upper_invariant(input: char, buffer: &mut InternalString) {
  buffer.extend(input.to_uppercase())
}

#[inline]
fn convert_char_lower_invariant(input: char, buffer: &mut InternalString) {
  buffer.extend(input.to_lowercase())
}

#[inline]
fn convert_char_upper_turkic(input: char, buffer: &mut InternalString) {
  match input {
    'i' => buffer.push('İ'),
    other => convert_char_upper_invariant(other, buffer)
  }
}

#[inline]
fn convert_char_lower_turkic(input: char, buffer: &mut InternalString) {
  match input {
    'I' => buffer.push('ı'),
    'İ' => buffer.push('i'),
    other => convert_char_lower_invariant(other, buffer)
  }
}
