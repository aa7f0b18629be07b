use chrono::{DateTime, Utc};

/// Launch parameters for the demo's single instance
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Machine image to launch from
    pub image_id: String,
    /// Instance type name, e.g. `t2.micro`
    pub instance_type: String,
}

/// Read-only view of one provisioned instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSummary {
    /// Provider-assigned instance ID
    pub id: String,
    /// Lifecycle state name, e.g. `pending`, `running`, `terminated`
    pub state: String,
    /// Instance type name
    pub instance_type: String,
    /// Launch timestamp, when the provider reported one
    pub launch_time: Option<DateTime<Utc>>,
}

impl InstanceSummary {
    /// Whether the instance has fully left the fleet
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state == "terminated"
    }
}
