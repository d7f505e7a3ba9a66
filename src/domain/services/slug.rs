//! Public-link slug generation.
//!
//! Normalization policy: the title is lower-cased and every maximal run of
//! characters outside `[a-z0-9]` collapses to a single hyphen. Non-ASCII
//! letters are NOT transliterated; they act as separators, so
//! "Cumpleaños" becomes "cumplea-os". Titles that normalize to nothing fall
//! back to a fixed placeholder segment. The creation instant (milliseconds
//! since epoch) is appended so that identical titles created at different
//! instants never share a slug. The result always matches
//! `^[a-z0-9]+(-[a-z0-9]+)*-[0-9]+$`.
//!
//! Uniqueness is still enforced by the store's UNIQUE constraint; on a
//! constraint hit the caller regenerates with a fresh instant, at most
//! `SLUG_MAX_ATTEMPTS` times.

pub const SLUG_PLACEHOLDER: &str = "invitation";
pub const SLUG_MAX_ATTEMPTS: u32 = 3;

pub fn generate_slug(title: &str, instant_ms: i64) -> String {
    let base = normalize_title(title);
    if base.is_empty() {
        format!("{}-{}", SLUG_PLACEHOLDER, instant_ms)
    } else {
        format!("{}-{}", base, instant_ms)
    }
}

fn normalize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut gap = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }

    out
}
