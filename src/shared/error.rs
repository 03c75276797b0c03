use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI binaries.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the run completed, possibly with per-subscription warnings
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (CSV error, credential error, ARM API error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the estate tools.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum EstateError {
    #[error("Input file not found: {path}\n\n💡 Hint: {suggestion}")]
    SourceNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to process CSV file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is UTF-8 encoded and starts with a Name,Id header row")]
    CsvProcessing { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Failed to acquire an Azure access token\nDetails: {details}\n\n💡 Hint: Run 'az login' and make sure the Azure CLI is on your PATH")]
    CredentialAcquisition { details: String },

    #[error("Failed to list subscriptions from the account directory\nDetails: {details}\n\n💡 Hint: Please verify that your account can read subscriptions in this tenant")]
    SubscriptionDirectoryUnavailable { details: String },

    #[error("Failed to list resources in subscription {subscription_id}\nDetails: {details}")]
    ResourceListing {
        subscription_id: String,
        details: String,
    },
}
