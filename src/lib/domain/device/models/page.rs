/// Hard upper bound on the number of devices returned by a single page.
pub const MAX_ELEMENTS_PER_REQUEST: u32 = 50;

/// Represents always valid page selection. `page` is a zero-based page number, not a row offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Builds a page request, clamping `limit` into `1..=MAX_ELEMENTS_PER_REQUEST`.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit: limit.clamp(1, MAX_ELEMENTS_PER_REQUEST),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of rows preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, MAX_ELEMENTS_PER_REQUEST)
    }
}

/// One page of results together with the size of the whole collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_elements: u64) -> Self {
        Self {
            items,
            total_elements,
        }
    }

    pub fn items(&self) -> &Vec<T> {
        &self.items
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }
}

#[cfg(test)]
mod page_request_tests {
    use super::*;

    #[test]
    fn test_limit_is_clamped_to_maximum() {
        let req = PageRequest::new(0, 1000);

        assert_eq!(req.limit(), MAX_ELEMENTS_PER_REQUEST);
    }

    #[test]
    fn test_zero_limit_is_raised_to_one() {
        let req = PageRequest::new(0, 0);

        assert_eq!(req.limit(), 1);
    }

    #[test]
    fn test_offset_is_page_times_limit() {
        let req = PageRequest::new(3, 20);

        assert_eq!(req.offset(), 60);
    }

    #[test]
    fn test_offset_does_not_overflow() {
        let req = PageRequest::new(u32::MAX, u32::MAX);

        assert_eq!(req.offset(), u64::from(u32::MAX) * 50);
    }

    #[test]
    fn test_default() {
        assert_eq!(PageRequest::default(), PageRequest::new(0, 50));
    }
}
