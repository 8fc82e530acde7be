//! Name normalization and bucketing for search keys.
//!
//! Both the builder and the query side run names through [`normalize`], so a
//! user-typed prefix and an indexed symbol always compare in the same form.

/// Width of a bucket key in characters. Names shorter than this form their
/// own (smaller) buckets.
pub(crate) const BUCKET_KEY_LEN: usize = 2;

/// Characters that belong to an identifier for spacing purposes.
fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters that belong to a word for boundary detection. Unlike
/// [`is_ident`], `_` is a separator here so `unroll_loops` has a word
/// boundary before `loops`.
fn is_word(c: char) -> bool {
    c.is_alphanumeric()
}

/// Normalizes a display name into its canonical search key.
///
/// Lower-cases, trims, and collapses whitespace. Whitespace survives only
/// between two identifier characters (`operator bool` keeps its space), so
/// spacing variations around punctuation collide to one key:
/// `Foo<Bar>` and `Foo< Bar >` both normalize to `foo<bar>`.
pub(crate) fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let trimmed = lowered.trim();

    let mut out = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            // Swallow the rest of the whitespace run
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            let prev_ident = out.chars().next_back().is_some_and(is_ident);
            let next_ident = chars.peek().copied().is_some_and(is_ident);
            if prev_ident && next_ident {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Derives the bucket key for a normalized name: its first
/// [`BUCKET_KEY_LEN`] characters, or the whole name when shorter.
///
/// A pure function of the normalized key, so bucket membership is
/// deterministic and testable.
pub(crate) fn bucket_key(normalized: &str) -> String {
    normalized.chars().take(BUCKET_KEY_LEN).collect()
}

/// Byte offsets of word boundaries inside a normalized key, excluding 0.
///
/// A boundary sits wherever the word/separator classification flips, in
/// either direction: `unroll_loops` has boundaries at the `_` and at the
/// `l` after it, so both `loops` and `_loops` can match as word prefixes.
pub(crate) fn word_boundaries(key: &str) -> Vec<usize> {
    let mut boundaries = vec![];
    let mut prev: Option<char> = None;
    for (i, c) in key.char_indices() {
        if let Some(p) = prev
            && is_word(c) != is_word(p)
        {
            boundaries.push(i);
        }
        prev = Some(c);
    }
    boundaries
}
