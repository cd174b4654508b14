use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Target environment a service is deployed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeployMethod {
    Web,
    Kubernetes,
    Loadbalance,
    Database,
}

impl DeployMethod {
    /// Fixed panel order, used by the initial load and the post-stop refresh.
    pub const ALL: [DeployMethod; 4] = [
        DeployMethod::Web,
        DeployMethod::Kubernetes,
        DeployMethod::Loadbalance,
        DeployMethod::Database,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployMethod::Web => "Web",
            DeployMethod::Kubernetes => "Kubernetes",
            DeployMethod::Loadbalance => "Loadbalance",
            DeployMethod::Database => "Database",
        }
    }

    /// Identifier of the container that displays this method's records.
    pub fn container_id(&self) -> &'static str {
        match self {
            DeployMethod::Web => "Web-service-data-container",
            DeployMethod::Kubernetes => "K8s-service-data-container",
            DeployMethod::Loadbalance => "LB-service-data-container",
            DeployMethod::Database => "DB-service-data-container",
        }
    }

    /// Workflow whose records populate this method's panel.
    pub fn default_workflow(&self) -> &'static str {
        match self {
            DeployMethod::Web => "playbook/playbook.yml",
            DeployMethod::Kubernetes => "playbook/container_playbook.yml",
            DeployMethod::Loadbalance => "playbook/k8s_playbook.yml",
            DeployMethod::Database => "test.yml",
        }
    }

    /// Short label used in panel headings and control identifiers.
    pub fn short_label(&self) -> &'static str {
        match self {
            DeployMethod::Web => "Web",
            DeployMethod::Kubernetes => "K8s",
            DeployMethod::Loadbalance => "LB",
            DeployMethod::Database => "DB",
        }
    }
}

impl fmt::Display for DeployMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeployMethod {
    type Err = PanelError;

    /// Wire names are matched exactly, as the backend spells them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeployMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| PanelError::UnknownDeployMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        for method in DeployMethod::ALL {
            assert_eq!(method.as_str().parse::<DeployMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("web".parse::<DeployMethod>().is_err());
        assert!("K8s".parse::<DeployMethod>().is_err());
        assert!("".parse::<DeployMethod>().is_err());
    }

    #[test]
    fn test_container_ids() {
        assert_eq!(DeployMethod::Web.container_id(), "Web-service-data-container");
        assert_eq!(DeployMethod::Kubernetes.container_id(), "K8s-service-data-container");
        assert_eq!(DeployMethod::Loadbalance.container_id(), "LB-service-data-container");
        assert_eq!(DeployMethod::Database.container_id(), "DB-service-data-container");
    }

    #[test]
    fn test_serializes_as_wire_name() {
        let body = serde_json::json!({ "deploy_method": DeployMethod::Loadbalance });
        assert_eq!(body.to_string(), r#"{"deploy_method":"Loadbalance"}"#);
    }
}
