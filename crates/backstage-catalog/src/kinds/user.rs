//! User — a person, such as an employee or a contractor.

use serde::{Deserialize, Serialize};

use super::{KindSpec, Profile, KIND_USER};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    /// Groups the user is a direct member of (no transitive memberships).
    #[serde(default)]
    pub member_of: Vec<String>,
}

impl KindSpec for UserSpec {
    const KIND: &'static str = KIND_USER;
}
