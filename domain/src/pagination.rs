//! Page-based slicing of ordered result sets.
//!
//! The engine never fails: a page past the end of the data is simply empty,
//! and it is up to the caller to decide what an empty page means.

/// Number of questions served per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number as requested by a client (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page(u64);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: u64) -> Self {
        Self(number)
    }

    /// Parse the raw `page` query value.
    ///
    /// A missing value or one that is not an integer falls back to the first
    /// page. Zero and negative numbers are kept as page 0, which selects
    /// nothing. Integers too large to represent saturate, so they also land
    /// past the end.
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::FIRST;
        };
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::FIRST;
        }
        if negative {
            return Self(0);
        }
        Self(digits.parse().unwrap_or(u64::MAX))
    }

    pub fn number(self) -> u64 {
        self.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Return the window of `items` addressed by `page`.
///
/// Computes `start = (page - 1) * page_size` and returns `items[start..end]`
/// with `end` clamped to the slice length. Returns an empty slice when
/// `start` is past the end, when the page is 0, or when the offset does not
/// fit in `usize`.
pub fn paginate<T>(items: &[T], page: Page, page_size: usize) -> &[T] {
    let Some(index) = page.number().checked_sub(1) else {
        return &[];
    };
    let start = usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(page_size));
    match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}
