//! Row-filter pipeline: domain model and services for scrubbing
//! non-production entries out of exported user-group CSVs.

pub mod domain;
pub mod services;
