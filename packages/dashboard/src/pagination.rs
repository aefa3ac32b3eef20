/// A "Previous" or "Next" control: where it leads and whether it can be pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageControl {
    pub target: u32,
    pub enabled: bool,
}

/// Which pagination controls to show for the current page.
///
/// "Previous" exists only past the first page and "Next" only before the last.
/// Each also carries its own boundary check as `enabled`, so a control rendered
/// from stale state cannot step outside `1..=total_pages`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current: u32,
    pub total_pages: u32,
    pub previous: Option<PageControl>,
    pub next: Option<PageControl>,
}

impl Pagination {
    pub fn new(current: u32, total_pages: u32) -> Self {
        let previous = (current > 1).then(|| PageControl {
            target: current - 1,
            enabled: current >= 2,
        });
        let next = (current < total_pages).then(|| PageControl {
            target: current + 1,
            enabled: current < total_pages,
        });
        Self {
            current,
            total_pages,
            previous,
            next,
        }
    }

    /// Human-readable position, e.g. `Page 2 of 5`.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total_pages.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_no_previous() {
        let p = Pagination::new(1, 3);
        assert!(p.previous.is_none());
        assert_eq!(
            p.next,
            Some(PageControl {
                target: 2,
                enabled: true
            })
        );
    }

    #[test]
    fn test_last_page_has_no_next() {
        let p = Pagination::new(3, 3);
        assert!(p.next.is_none());
        assert_eq!(p.previous.map(|c| c.target), Some(2));
    }

    #[test]
    fn test_middle_page_has_both_enabled() {
        let p = Pagination::new(2, 3);
        assert!(p.previous.is_some_and(|c| c.enabled && c.target == 1));
        assert!(p.next.is_some_and(|c| c.enabled && c.target == 3));
    }

    #[test]
    fn test_controls_at_the_edges_stay_enabled() {
        let p = Pagination::new(2, 2);
        assert_eq!(
            p.previous,
            Some(PageControl {
                target: 1,
                enabled: true
            })
        );
        assert!(p.next.is_none());

        let p = Pagination::new(1, 2);
        assert!(p.next.is_some_and(|c| c.enabled && c.target == 2));
    }

    #[test]
    fn test_single_and_empty() {
        let p = Pagination::new(1, 1);
        assert!(p.previous.is_none() && p.next.is_none());

        let p = Pagination::new(1, 0);
        assert!(p.previous.is_none() && p.next.is_none());
        assert_eq!(p.label(), "Page 1 of 1");
    }

    #[test]
    fn test_page_past_the_end_can_go_back() {
        let p = Pagination::new(7, 3);
        assert!(p.next.is_none());
        assert_eq!(p.previous.map(|c| c.target), Some(6));
    }
}
