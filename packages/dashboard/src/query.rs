use serde::{Deserialize, Serialize};

/// The list view's position: which page, how many records per page.
///
/// Carried in the URL as `?page=N&per_page=M` so a position can be shared.
/// Both values are always positive; zero (what a missing or unparsable query
/// argument decodes to) is replaced by the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
}

impl PageQuery {
    pub const DEFAULT_PAGE: u32 = 1;

    /// Build from raw URL values, substituting defaults for zero.
    pub fn new(page: u32, per_page: u32, default_per_page: u32) -> Self {
        Self {
            page: if page == 0 { Self::DEFAULT_PAGE } else { page },
            per_page: match (per_page, default_per_page) {
                (0, 0) => api::config::DEFAULT_PER_PAGE,
                (0, fallback) => fallback,
                (n, _) => n,
            },
        }
    }

    /// The same page size at another page (clamped to at least 1).
    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(0, 0, api::config::DEFAULT_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values_take_defaults() {
        assert_eq!(
            PageQuery::new(0, 0, 25),
            PageQuery {
                page: 1,
                per_page: 25
            }
        );
        assert_eq!(PageQuery::new(0, 0, 0).per_page, 10);
        assert_eq!(PageQuery::default(), PageQuery::new(1, 10, 10));
    }

    #[test]
    fn test_explicit_values_kept() {
        let query = PageQuery::new(3, 5, 10);
        assert_eq!(query.page, 3);
        assert_eq!(query.per_page, 5);
    }

    #[test]
    fn test_with_page_keeps_page_size() {
        let query = PageQuery::new(3, 5, 10);
        assert_eq!(query.with_page(4), PageQuery::new(4, 5, 10));
        assert_eq!(query.with_page(0).page, 1);
    }
}
