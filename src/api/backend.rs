use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::api::client::HttpBackend;
use crate::error::PanelError;
use crate::models::{DeployMethod, ServiceRecord};

pub const TRIGGER_ENDPOINT: &str = "/trigger-github-action";
pub const STOP_ENDPOINT: &str = "/stop-service";
pub const VM_DATA_ENDPOINT: &str = "/vm-data";

/// Remote side of the panel: the three endpoints the controls talk to.
#[async_trait]
pub trait PanelBackend: Send + Sync {
    /// Start a workflow; the reply is the raw JSON body.
    async fn trigger_workflow(&self, workflow: &str) -> Result<Value, PanelError>;

    /// Stop the services of one deploy method and drop their records.
    async fn stop_service(&self, deploy_method: DeployMethod) -> Result<Value, PanelError>;

    /// Records of a workflow, optionally narrowed to one deploy method.
    async fn vm_data(
        &self,
        service: &str,
        deploy_method: Option<&str>,
    ) -> Result<Vec<ServiceRecord>, PanelError>;
}

#[async_trait]
impl<T: PanelBackend + ?Sized> PanelBackend for std::sync::Arc<T> {
    async fn trigger_workflow(&self, workflow: &str) -> Result<Value, PanelError> {
        (**self).trigger_workflow(workflow).await
    }

    async fn stop_service(&self, deploy_method: DeployMethod) -> Result<Value, PanelError> {
        (**self).stop_service(deploy_method).await
    }

    async fn vm_data(
        &self,
        service: &str,
        deploy_method: Option<&str>,
    ) -> Result<Vec<ServiceRecord>, PanelError> {
        (**self).vm_data(service, deploy_method).await
    }
}

#[async_trait]
impl PanelBackend for HttpBackend {
    async fn trigger_workflow(&self, workflow: &str) -> Result<Value, PanelError> {
        self.call(Method::POST, TRIGGER_ENDPOINT, None, &[("workflow", workflow)])
            .await
    }

    async fn stop_service(&self, deploy_method: DeployMethod) -> Result<Value, PanelError> {
        let body = json!({ "deploy_method": deploy_method });
        self.call(Method::POST, STOP_ENDPOINT, Some(&body), &[]).await
    }

    async fn vm_data(
        &self,
        service: &str,
        deploy_method: Option<&str>,
    ) -> Result<Vec<ServiceRecord>, PanelError> {
        let mut params = vec![("service", service)];
        if let Some(method) = deploy_method {
            params.push(("deploy_method", method));
        }
        let reply = self.call(Method::GET, VM_DATA_ENDPOINT, None, &params).await?;
        Ok(records_from_value(reply))
    }
}

/// Interpret a `/vm-data` reply. Anything but an array means no records;
/// non-object entries become single-field records.
pub fn records_from_value(reply: Value) -> Vec<ServiceRecord> {
    match reply {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(obj) => obj,
                other => {
                    let mut single = Map::new();
                    single.insert("value".to_string(), other);
                    single
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}
