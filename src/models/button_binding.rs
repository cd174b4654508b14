use serde::Serialize;

use crate::models::DeployMethod;

/// Marker carried by the identifiers of stop controls.
pub const STOP_MARKER: &str = "Stop";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BindingKind {
    /// Trigger the workflow and reload its panel
    Start,
    /// Stop the method's services and refresh every panel
    Stop,
}

/// A control on the panel and the behaviour a click on it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonBinding {
    pub id: &'static str,
    pub workflow: &'static str,
    pub deploy_method: DeployMethod,
    pub kind: BindingKind,
    pub service_name: Option<&'static str>,
}

impl ButtonBinding {
    const fn start(id: &'static str, deploy_method: DeployMethod, workflow: &'static str) -> Self {
        Self {
            id,
            workflow,
            deploy_method,
            kind: BindingKind::Start,
            service_name: None,
        }
    }

    const fn stop(id: &'static str, deploy_method: DeployMethod) -> Self {
        Self {
            id,
            workflow: "stop-service",
            deploy_method,
            kind: BindingKind::Stop,
            service_name: Some(""),
        }
    }

    pub fn is_stop(&self) -> bool {
        self.kind == BindingKind::Stop
    }

    /// Button caption shown on the dashboard.
    pub fn label(&self) -> String {
        match self.kind {
            BindingKind::Start => format!("Deploy {}", self.deploy_method.short_label()),
            BindingKind::Stop => format!("Stop {}", self.deploy_method.short_label()),
        }
    }
}

/// Naming convention the control identifiers follow; agrees with `BindingKind` for every binding.
pub fn is_stop_identifier(id: &str) -> bool {
    id.contains(STOP_MARKER)
}

pub static BUTTON_BINDINGS: [ButtonBinding; 8] = [
    ButtonBinding::start("Web_Button", DeployMethod::Web, "playbook/playbook.yml"),
    ButtonBinding::stop("WebStop_Button", DeployMethod::Web),
    ButtonBinding::start("K8s_Button", DeployMethod::Kubernetes, "playbook/container_playbook.yml"),
    ButtonBinding::stop("K8sStop_Button", DeployMethod::Kubernetes),
    ButtonBinding::start("LB_Button", DeployMethod::Loadbalance, "playbook/k8s_playbook.yml"),
    ButtonBinding::stop("LBStop_Button", DeployMethod::Loadbalance),
    ButtonBinding::start("DB_Button", DeployMethod::Database, "test.yml"),
    ButtonBinding::stop("DBStop_Button", DeployMethod::Database),
];

pub fn find_binding(id: &str) -> Option<&'static ButtonBinding> {
    BUTTON_BINDINGS.iter().find(|b| b.id == id)
}
