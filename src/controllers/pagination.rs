/// Page position for a list endpoint that never reports a total.
///
/// The upper bound is inferred from the last fetch only: a full page means
/// one more page may exist, anything shorter means this page is the last.
/// Items added or removed between fetches can make the guess wrong in
/// either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: u32,
    upper_bound: u32,
    limit: u32,
}

impl PageCursor {
    pub fn new(limit: u32) -> Self {
        Self {
            current: 1,
            upper_bound: 1,
            limit: limit.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn upper_bound(&self) -> u32 {
        self.upper_bound
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Moves to `page` after a successful fetch that returned `fetched` items.
    pub fn record(&mut self, page: u32, fetched: usize) {
        self.current = page;
        self.upper_bound = if fetched == self.limit as usize {
            page.saturating_add(1)
        } else {
            page
        };
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.upper_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_page_advances_upper_bound() {
        let mut cursor = PageCursor::new(10);
        cursor.record(1, 10);
        assert_eq!(cursor.upper_bound(), 2);
        assert!(cursor.has_next());
        assert!(!cursor.has_previous());

        cursor.record(2, 10);
        assert_eq!((cursor.current(), cursor.upper_bound()), (2, 3));
        assert!(cursor.has_previous());
    }

    #[test]
    fn test_short_page_is_last() {
        let mut cursor = PageCursor::new(10);
        cursor.record(3, 4);
        assert_eq!((cursor.current(), cursor.upper_bound()), (3, 3));
        assert!(!cursor.has_next());
        assert!(cursor.has_previous());
    }

    #[test]
    fn test_exactly_full_last_page_overestimates() {
        // Known limitation: 20 songs in total still offers a third page.
        let mut cursor = PageCursor::new(10);
        cursor.record(2, 10);
        assert!(cursor.has_next());

        cursor.record(3, 0);
        assert_eq!(cursor.upper_bound(), 3);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_going_back_shrinks_bound_on_short_page() {
        // Known limitation: if earlier pages shrink, the bound shrinks with them.
        let mut cursor = PageCursor::new(10);
        cursor.record(2, 10);
        cursor.record(1, 7);
        assert_eq!(cursor.upper_bound(), 1);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_full_page_at_last_page_number_stays_put() {
        let mut cursor = PageCursor::new(10);
        cursor.record(u32::MAX, 10);
        assert_eq!(cursor.upper_bound(), u32::MAX);
        assert!(!cursor.has_next());
        assert!(cursor.has_previous());
    }
}
