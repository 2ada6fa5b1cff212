//! Reaction glyph normalization

/// Normalize a raw reaction string to a single emoji grapheme.
///
/// Accepts either an emoji itself (the whole string must be exactly one
/// emoji) or a `:short_code:` that resolves to one. Returns `None` for
/// anything else: plain text, multiple emoji, unknown short-codes.
pub fn normalize_reaction(raw: &str) -> Option<String> {
    if let Some(code) = raw
        .strip_prefix(':')
        .and_then(|rest| rest.strip_suffix(':'))
    {
        if code.is_empty() {
            return None;
        }
        return emojis::get_by_shortcode(code).map(|e| e.as_str().to_owned());
    }

    emojis::get(raw).map(|e| e.as_str().to_owned())
}
