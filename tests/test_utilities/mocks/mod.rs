mod mock_progress_reporter;
mod mock_resource_lister;
mod mock_row_store;
mod mock_subscription_directory;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resource_lister::MockResourceLister;
pub use mock_row_store::{MockRowSink, MockRowSource};
pub use mock_subscription_directory::MockSubscriptionDirectory;
