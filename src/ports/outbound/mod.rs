/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, ARM API, console).
pub mod analysis_store;
pub mod progress_reporter;
pub mod resource_lister;
pub mod row_store;
pub mod subscription_directory;

pub use analysis_store::AnalysisStore;
pub use progress_reporter::ProgressReporter;
pub use resource_lister::ResourceLister;
pub use row_store::{GroupRowSink, GroupRowSource};
pub use subscription_directory::SubscriptionDirectory;
