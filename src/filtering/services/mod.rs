pub mod environment_filter;

pub use environment_filter::EnvironmentFilter;
