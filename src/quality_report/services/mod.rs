/// Domain services for the quality report export
mod issue_pager;

pub use issue_pager::IssuePager;
