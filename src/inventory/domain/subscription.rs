/// An Azure subscription as returned by the account directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub display_name: String,
    pub id: String,
    pub state: String,
}

impl Subscription {
    pub fn new(
        display_name: impl Into<String>,
        id: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            id: id.into(),
            state: state.into(),
        }
    }

    /// Only enabled subscriptions are visible to target resolution.
    /// Disabled, warned, and past-due subscriptions are all ineligible.
    pub fn is_enabled(&self) -> bool {
        self.state == "Enabled"
    }
}
