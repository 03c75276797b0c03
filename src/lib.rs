//! azure-estate - reporting tools for an Azure estate
//!
//! Two independent pipelines share this library:
//!
//! - **group-filter**: reads an exported user-group CSV, drops every row
//!   whose name carries an environment marker (DEV/UAT/QA/...), and writes
//!   the surviving production entries.
//! - **resource-report**: resolves target subscriptions against the
//!   tenant, lists their resources through the ARM API, aggregates counts
//!   by type, location, resource group and subscription, renders a text
//!   report and persists the aggregation as JSON.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layers** (`filtering`, `inventory`): Pure business logic and
//!   domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod filtering;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::azure::{ArmClient, AzureCliCredential};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{CsvGroupStore, JsonAnalysisWriter};
    pub use crate::adapters::outbound::formatters::TextReportFormatter;
    pub use crate::application::dto::{FilterRequest, FilterSummary, ScanRequest, ScanResponse};
    pub use crate::application::use_cases::{FilterGroupsUseCase, ScanInventoryUseCase};
    pub use crate::filtering::domain::GroupRow;
    pub use crate::filtering::services::EnvironmentFilter;
    pub use crate::inventory::domain::{
        resource_group_from_id, Resource, ResourceAnalysis, Subscription, TypeBreakdown,
    };
    pub use crate::inventory::services::{analyze, resolve_targets, DescriptionTable, Resolution};
    pub use crate::ports::outbound::{
        AnalysisStore, GroupRowSink, GroupRowSource, ProgressReporter, ResourceLister,
        SubscriptionDirectory,
    };
    pub use crate::shared::error::{EstateError, ExitCode};
    pub use crate::shared::Result;
}
