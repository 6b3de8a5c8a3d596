/// Controls how acronym tokens (see [`is_acronym`](crate::is_acronym)) are treated by the formatters.
///
/// Every flag defaults to `false`, and a default value behaves exactly like the formatters
/// that take no options.
///
/// ```
/// use casefold::{CaseOptions, CaseType, CasingLocale, convert_with};
///
/// let options = CaseOptions {
///   preserve_acronyms_in_delimited: true,
///   .. Default::default()
/// };
/// assert_eq!("HTTP_server", convert_with("HTTPServer", CaseType::SnakeCase, &options, CasingLocale::Invariant));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CaseOptions {
  /// Keep acronyms unchanged in PascalCase and Title Case output.
  /// Also biases [`detect_with`](crate::detect_with) toward Title Case.
  pub preserve_acronyms_in_title_casing: bool,
  /// Keep acronyms unchanged in snake_case and kebab-case output, e.g. `HTTP_server`.
  pub preserve_acronyms_in_delimited: bool,
  /// Keep acronyms unchanged in UPPER CASE and lower case output, e.g. `HTTP server`.
  pub preserve_acronyms_in_plain: bool,
}

impl CaseOptions {
  /// Options with every flag cleared.
  pub const DEFAULT: CaseOptions = CaseOptions {
    preserve_acronyms_in_title_casing: false,
    preserve_acronyms_in_delimited: false,
    preserve_acronyms_in_plain: false,
  };

  /// Creates a new set of options with every flag cleared.
  #[inline]
  pub fn new() -> Self {
    Self::DEFAULT
  }

  /// Options with every preservation flag set.
  #[inline]
  pub fn preserve_all() -> Self {
    Self {
      preserve_acronyms_in_title_casing: true,
      preserve_acronyms_in_delimited: true,
      preserve_acronyms_in_plain: true,
    }
  }

  /// Sets whether PascalCase and Title Case keep acronyms unchanged.
  #[inline]
  pub fn with_title_casing_acronyms(mut self, preserve: bool) -> Self {
    self.preserve_acronyms_in_title_casing = preserve;
    self
  }

  /// Sets whether snake_case and kebab-case keep acronyms unchanged.
  #[inline]
  pub fn with_delimited_acronyms(mut self, preserve: bool) -> Self {
    self.preserve_acronyms_in_delimited = preserve;
    self
  }

  /// Sets whether UPPER CASE and lower case keep acronyms unchanged.
  #[inline]
  pub fn with_plain_acronyms(mut self, preserve: bool) -> Self {
    self.preserve_acronyms_in_plain = preserve;
    self
  }

  /// Sets the old aggregate "preserve acronyms" toggle, which only ever affected title casing.
  #[deprecated(note = "use `with_title_casing_acronyms` or `with_delimited_acronyms` instead")]
  #[inline]
  pub fn with_preserve_acronyms(self, preserve: bool) -> Self {
    self.with_title_casing_acronyms(preserve)
  }

  /// Returns `true` if no flag is set.
  #[inline]
  pub fn is_default(&self) -> bool {
    *self == Self::DEFAULT
  }
}
