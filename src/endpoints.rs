//! Endpoint templates for the PurpleAir v1 API.
//!
//! One variant per remote target; path parameters are carried in the variant
//! so a template can only be rendered with every substitution supplied.

/// A relative endpoint path under the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Keys,
    Sensors,
    Sensor { sensor_index: u64 },
    Groups,
    Group { group_id: u64 },
    GroupMembers { group_id: u64 },
    GroupMember { group_id: u64, member_id: u64 },
}

impl Endpoint {
    /// Render the path relative to the API base URL.
    pub(crate) fn path(self) -> String {
        match self {
            Endpoint::Keys => "keys".to_string(),
            Endpoint::Sensors => "sensors".to_string(),
            Endpoint::Sensor { sensor_index } => format!("sensors/{sensor_index}"),
            Endpoint::Groups => "groups".to_string(),
            Endpoint::Group { group_id } => format!("groups/{group_id}"),
            Endpoint::GroupMembers { group_id } => format!("groups/{group_id}/members"),
            Endpoint::GroupMember {
                group_id,
                member_id,
            } => format!("groups/{group_id}/members/{member_id}"),
        }
    }
}
