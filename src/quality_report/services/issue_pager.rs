/// IssuePager - pagination state for the issues search
///
/// Pages are requested from 1 upwards. A page holding fewer issues than
/// the page size (including an empty page) is the last one. The total
/// reported by the server is captured from the first page only.
#[derive(Debug, Clone)]
pub struct IssuePager {
    page_size: u32,
    next_page: u32,
    finished: bool,
    reported_total: Option<u64>,
    fetched: u64,
}

impl IssuePager {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            next_page: 1,
            finished: false,
            reported_total: None,
            fetched: 0,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the page to request next, or `None` once the last page was seen
    pub fn next_page(&self) -> Option<u32> {
        if self.finished {
            None
        } else {
            Some(self.next_page)
        }
    }

    /// Records the outcome of the page returned by `next_page`
    pub fn record_page(&mut self, issue_count: usize, total: u64) {
        if self.reported_total.is_none() {
            self.reported_total = Some(total);
        }
        self.fetched += issue_count as u64;

        if issue_count < self.page_size as usize {
            self.finished = true;
        } else {
            self.next_page += 1;
        }
    }

    /// Total reported by the first page, 0 before any page was recorded
    pub fn reported_total(&self) -> u64 {
        self.reported_total.unwrap_or(0)
    }

    pub fn fetched(&self) -> u64 {
        self.fetched
    }
}
