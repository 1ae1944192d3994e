/// Mock implementations for testing
mod mock_presenter;
mod mock_progress_reporter;
mod mock_quality_server_api;

pub use mock_presenter::MockPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_quality_server_api::MockQualityServerApi;
