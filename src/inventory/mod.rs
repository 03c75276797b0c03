//! Inventory pipeline: domain model and services for scanning Azure
//! subscriptions and aggregating their resources into a report.

pub mod domain;
pub mod services;
