//! Offset/limit windows applied to already-filtered result lists.

/// Page size used when a request does not specify `limit`.
pub const DEFAULT_LIMIT: usize = 50;

/// Parse a textual count, falling back to `default` on anything that is not a
/// non-negative integer.
pub fn parse_count(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Requested slice of a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Window {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Build a window from raw query-string values.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self {
            limit: parse_count(limit, DEFAULT_LIMIT),
            offset: parse_count(offset, 0),
        }
    }

    /// Cut the window out of `items`, reporting the full length as `total`.
    pub fn apply<T>(self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let items = items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect();

        Page {
            items,
            total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// One window of a filtered result list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the list before windowing.
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_input_falls_back_to_defaults() {
        assert_eq!(Window::parse(Some("ten"), Some("-3")), Window::default());
        assert_eq!(Window::parse(None, None), Window::new(50, 0));
        assert_eq!(Window::parse(Some(" 5 "), Some("2")), Window::new(5, 2));
        assert_eq!(Window::parse(Some("10abc"), Some("3.5")), Window::default());
    }

    #[test]
    fn total_is_independent_of_window() {
        let page = Window::new(2, 0).apply(vec!['a', 'b', 'c']);
        assert_eq!(page.items, vec!['a', 'b']);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn offset_past_end_yields_empty_page() {
        let page = Window::new(10, 7).apply(vec![1, 2, 3]);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.offset, 7);
    }
}
