pub mod arm_client;
pub mod credential;

pub use arm_client::ArmClient;
pub use credential::AzureCliCredential;
