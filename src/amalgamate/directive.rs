//! Include-directive matching and `#line` directive rendering.
//!
//! Only includes whose path starts with the configured prefix are considered
//! part of the library and inlined. Everything else (`<vector>`, third-party
//! headers) passes through untouched.

use crate::core::HdrgenError;
use regex::bytes::Regex;

/// Whether `#line` directives in the output are live or commented out.
///
/// Live directives make compiler diagnostics point back into the original
/// header tree. Commented-out directives keep that information readable while
/// diagnostics point into the single header itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineRefs {
    /// Emit `#line N "file"`
    Live,
    /// Emit `// #line N "file"`
    #[default]
    Commented,
}

impl LineRefs {
    /// Map the `--linerefs` flag to a variant.
    #[must_use]
    pub const fn from_flag(live: bool) -> Self {
        if live { Self::Live } else { Self::Commented }
    }

    /// Text written in front of every `#line` directive.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Live => "",
            Self::Commented => "// ",
        }
    }

    /// Render a full directive line, newline included.
    ///
    /// `next_line` is the 1-based number the line *following* the directive
    /// has in `file`.
    #[must_use]
    pub fn directive(self, next_line: usize, file: &str) -> String {
        format!("{}#line {} \"{}\"\n", self.prefix(), next_line, file)
    }
}

/// Recognizes `#include "<prefix>..."` and `#include <<prefix>...>` lines.
///
/// Leading whitespace and blanks around `#` and `include` are allowed. The
/// prefix is matched literally. Lines are raw bytes so headers in legacy
/// encodings can be scanned; only the include name has to be UTF-8.
#[derive(Debug, Clone)]
pub struct IncludeMatcher {
    prefix: String,
    regex: Regex,
}

impl IncludeMatcher {
    /// Build a matcher for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`HdrgenError::EmptyPrefix`] when `prefix` is empty or only
    /// whitespace. An empty prefix would inline every include, system headers
    /// included.
    pub fn new(prefix: &str) -> Result<Self, HdrgenError> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(HdrgenError::EmptyPrefix);
        }

        let pattern = format!(
            r#"^\s*#\s*include\s*["<](?P<include>{}[^"<>\r\n]*)[">]"#,
            regex::escape(prefix)
        );
        let regex = Regex::new(&pattern).map_err(|e| HdrgenError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            regex,
        })
    }

    /// The prefix this matcher was built for.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Return the include name if `line` is a matching directive.
    #[must_use]
    pub fn include_name<'l>(&self, line: &'l [u8]) -> Option<&'l str> {
        let name = self.regex.captures(line)?.name("include")?;
        std::str::from_utf8(name.as_bytes()).ok()
    }
}
