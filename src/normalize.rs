//! Input normalization.
//!
//! User and account identifiers never contain blanks, so everything the user
//! types or pastes is stripped of whitespace before it is accepted. Zero-width
//! spaces are removed as well since they often ride along when identifiers are
//! copied out of chat messages or web pages.

use std::borrow::Cow;

/// Zero-width space (U+200B).
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Byte-order mark / zero-width no-break space (U+FEFF).
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Next line (U+0085). Unicode whitespace, but kept by [`normalize`].
pub const NEXT_LINE: char = '\u{85}';

/// Reports whether `c` is removed by [`normalize`].
///
/// Covers the Unicode `White_Space` characters except [`NEXT_LINE`], plus the
/// zero-width space and the byte-order mark.
pub fn is_stripped(c: char) -> bool {
    (c.is_whitespace() && c != NEXT_LINE) || c == ZERO_WIDTH_SPACE || c == BYTE_ORDER_MARK
}

/// Removes whitespace and zero-width spaces from `text` unless
/// `disable_trim` is set.
///
/// Borrows when nothing needs to be removed.
///
/// ```rust
/// use bubbletea_user_input::normalize::normalize;
///
/// assert_eq!(normalize(" al ice\u{200B}\n", false), "alice");
/// assert_eq!(normalize(" al ice ", true), " al ice ");
/// ```
pub fn normalize(text: &str, disable_trim: bool) -> Cow<'_, str> {
    if disable_trim || !text.chars().any(is_stripped) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|c| !is_stripped(*c)).collect())
}
