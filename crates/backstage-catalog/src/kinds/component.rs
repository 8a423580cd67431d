//! Component — a piece of software, such as a website or a backend service.

use serde::{Deserialize, Serialize};

use super::{KindSpec, KIND_COMPONENT};

/// Specification of a `Component` entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Type of component, e.g. `service` or `website`.
    #[serde(rename = "type")]
    pub component_type: String,

    /// Lifecycle state, e.g. `production` or `experimental`.
    pub lifecycle: String,

    /// Entity ref of the owner.
    pub owner: String,

    /// Entity ref of the component this one is a part of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcomponent_of: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provides_apis: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes_apis: Vec<String>,

    /// Entity refs of the components and resources this component depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    /// Entity ref of the system the component belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl KindSpec for ComponentSpec {
    const KIND: &'static str = KIND_COMPONENT;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::ComponentEntityV1alpha1;

    #[test]
    fn test_component_deserialization() {
        let component: ComponentEntityV1alpha1 = serde_json::from_value(serde_json::json!({
            "apiVersion": "backstage.io/v1alpha1",
            "kind": "Component",
            "metadata": { "name": "artist-web", "namespace": "default" },
            "spec": {
                "type": "website",
                "lifecycle": "production",
                "owner": "team-a",
                "providesApis": ["artist-api"],
                "dependsOn": ["resource:artists-db"]
            }
        }))
        .unwrap();

        assert_eq!(component.spec.component_type, "website");
        assert_eq!(component.spec.provides_apis, vec!["artist-api"]);
        assert!(component.spec.consumes_apis.is_empty());
        assert_eq!(component.spec.system, None);
    }
}
