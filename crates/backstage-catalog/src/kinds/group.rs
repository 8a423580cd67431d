//! Group — an organizational entity such as a team or a business unit.

use serde::{Deserialize, Serialize};

use super::{KindSpec, Profile, KIND_GROUP};

/// Specification of a `Group` entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Free-form group type, e.g. `team` or `business-unit`.
    #[serde(rename = "type")]
    pub group_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    /// Entity ref of the immediate parent group. A group has at most one parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Entity refs of immediate child groups. Always present, possibly empty.
    #[serde(default)]
    pub children: Vec<String>,

    /// Entity refs of member users.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

impl KindSpec for GroupSpec {
    const KIND: &'static str = KIND_GROUP;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_always_serialized() {
        let spec = GroupSpec {
            group_type: "team".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "team", "children": [] }));
    }
}
