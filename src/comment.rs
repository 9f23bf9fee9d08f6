//! Banner comment formatting.
//!
//! A banner is a single line of exactly `width` characters: the open marker,
//! filler on the left, the trimmed text wrapped in one space on each side,
//! filler on the right, and the close marker. When the padding is odd the
//! right side gets the extra filler character.
//!
//! ```
//! use gen_comment_lib::comment::format_comment;
//!
//! let line = format_comment("SECTION").unwrap();
//! assert_eq!(line.chars().count(), 80);
//! assert!(line.starts_with("/* ") && line.ends_with(" */"));
//! ```

use log::debug;

/// Errors produced while formatting a banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("text must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Layout constants for a banner line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
    pub width: usize,
    pub open: &'static str,
    pub close: &'static str,
    pub filler: char,
}

impl Default for CommentStyle {
    fn default() -> Self {
        Self {
            width: 80,
            open: "/* ",
            close: " */",
            filler: '=',
        }
    }
}

impl CommentStyle {
    /// Room left for padding plus wrapped text once both markers are placed.
    pub fn available_width(&self) -> usize {
        self.width
            .saturating_sub(self.open.chars().count())
            .saturating_sub(self.close.chars().count())
    }

    /// Longest trimmed text that still fits, leaving room for the two
    /// separator spaces.
    pub fn max_text_len(&self) -> usize {
        self.available_width().saturating_sub(2)
    }

    /// Format `text` as a centered banner in this style.
    ///
    /// # Errors
    /// Returns [`FormatError::TooLong`] when the trimmed text is longer than
    /// [`CommentStyle::max_text_len`]. The error reports the length of `text`
    /// as given, surrounding whitespace included.
    pub fn format(&self, text: &str) -> Result<String, FormatError> {
        let trimmed = text.trim();
        let wrapped = format!(" {} ", trimmed);
        let wrapped_len = wrapped.chars().count();
        let available = self.available_width();

        if wrapped_len > available {
            return Err(FormatError::TooLong {
                max: self.max_text_len(),
                actual: text.chars().count(),
            });
        }

        let total_padding = available - wrapped_len;
        let left = total_padding / 2;
        let right = total_padding - left;
        debug!("padding: total={} left={} right={}", total_padding, left, right);

        let filler = |n: usize| std::iter::repeat_n(self.filler, n).collect::<String>();
        let mut line = String::with_capacity(self.width + wrapped.len() - wrapped_len);
        line.push_str(self.open);
        line.push_str(&filler(left));
        line.push_str(&wrapped);
        line.push_str(&filler(right));
        line.push_str(self.close);
        Ok(line)
    }
}

/// Format `text` as an 80-column `/* ==== text ==== */` banner.
pub fn format_comment(text: &str) -> Result<String, FormatError> {
    CommentStyle::default().format(text)
}
