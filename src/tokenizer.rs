//! Splits text into word tokens.
//!
//! Words are separated by delimiter characters (which are dropped) and by boundaries inside runs of
//! non-delimiters: a lowercase-to-uppercase change, the last capital of an acronym run when it starts
//! a capitalized word, and any change between letters and digits.

use smallvec::SmallVec;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::InternalString;

/// Number of tokens stored inline before a token list spills to the heap.
pub const TOKEN_INLINE_COUNT: usize = 8;

/// An ordered list of word tokens.
pub type Tokens = SmallVec<[InternalString; TOKEN_INLINE_COUNT]>;

/// Characters that always separate words and never appear in a token.
pub const DELIMITERS: &[char] = &[
  ' ', '\t', '\n', '\r', '_', '-', '.', '/', '\\', ':', ';', ',', '\'', '"',
  '(', ')', '[', ']', '{', '}', '|', '+', '*', '&', '#', '@', '!', '?',
];

/// Returns `true` if `c` is a word delimiter.
#[inline]
pub fn is_delimiter(c: char) -> bool {
  matches!(c,
    ' ' | '\t' | '\n' | '\r' | '_' | '-' | '.' | '/' | '\\' | ':' | ';' | ',' | '\'' | '"' |
    '(' | ')' | '[' | ']' | '{' | '}' | '|' | '+' | '*' | '&' | '#' | '@' | '!' | '?'
  )
}

/// Splits `input` into word tokens.
///
/// ```
/// let tokens = casefold::tokenize("HTTPServer2");
/// let words: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(vec!["HTTP", "Server", "2"], words);
/// ```
pub fn tokenize(input: &str) -> Tokens {
  let mut tokens = Tokens::new();
  if input.is_empty() {
    return tokens
  }

  let mut buffer = InternalString::new();
  let mut chars = input.chars().peekable();
  let mut prev: Option<char> = None;

  while let Some(c) = chars.next() {
    if is_delimiter(c) {
      flush_token(&mut buffer, &mut tokens);
      prev = Some(c);
      continue
    }

    if let Some(prev) = prev {
      if is_word_boundary(prev, c, chars.peek().copied()) {
        flush_token(&mut buffer, &mut tokens);
      }
    }

    buffer.push(c);
    prev = Some(c);
  }

  flush_token(&mut buffer, &mut tokens);
  tokens
}

/// Returns `true` if `token` is an acronym: longer than one character, with at least one letter
/// and no lowercase or uncased letters.
///
/// Digits and other non-letters are ignored, so `"MP3"` qualifies while `"42"` does not.
pub fn is_acronym(token: &str) -> bool {
  let mut chars = token.chars();
  if chars.next().is_none() || chars.next().is_none() {
    return false
  }

  let mut has_letter = false;
  for c in token.chars().filter(|c| is_letter(*c)) {
    if !is_upper_letter(c) {
      return false
    }
    has_letter = true;
  }
  has_letter
}

#[inline]
fn flush_token(buffer: &mut InternalString, tokens: &mut Tokens) {
  if buffer.is_empty() {
    return
  }
  let token = std::mem::take(buffer);
  if !token.chars().all(char::is_whitespace) {
    tokens.push(token);
  }
}

/// Letters are the `L*` general categories; letter-like numerals and symbols (`Ⅻ`, `Ⓐ`) are not.
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
  matches!(get_general_category(c),
    GeneralCategory::UppercaseLetter | GeneralCategory::LowercaseLetter | GeneralCategory::TitlecaseLetter |
    GeneralCategory::ModifierLetter | GeneralCategory::OtherLetter
  )
}

#[inline]
pub(crate) fn is_lower_letter(c: char) -> bool {
  get_general_category(c) == GeneralCategory::LowercaseLetter
}

#[inline]
pub(crate) fn is_upper_letter(c: char) -> bool {
  get_general_category(c) == GeneralCategory::UppercaseLetter
}

/// Decimal digits (`Nd`) only; superscripts, fractions and Roman numerals are not digits.
#[inline]
pub(crate) fn is_digit(c: char) -> bool {
  get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Checks whether a word ends between `prev` and `cur`. `next` is the character after `cur`, if any.
#[inline]
fn is_word_boundary(prev: char, cur: char, next: Option<char>) -> bool {
  // myHTTP => my | HTTP
  if is_lower_letter(prev) && is_upper_letter(cur) {
    return true
  }

  // HTTPServer => HTTP | Server; a trailing run like "ServerHTTP" stays whole
  if is_upper_letter(prev) && is_upper_letter(cur) && next.map_or(false, is_lower_letter) {
    return true
  }

  (is_letter(prev) && is_digit(cur)) || (is_digit(prev) && is_letter(cur))
}
