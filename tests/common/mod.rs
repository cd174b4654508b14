#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use serde_json::{json, Value};
use tracing_subscriber::fmt::MakeWriter;

use deploy_panel::api::{records_from_value, PanelBackend};
use deploy_panel::models::{DeployMethod, ServiceRecord, StatusMessage};
use deploy_panel::surface::{Content, Page, Surface};
use deploy_panel::PanelError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Trigger(String),
    Stop(DeployMethod),
    VmData {
        service: String,
        deploy_method: Option<String>,
    },
}

fn transport_failure() -> PanelError {
    PanelError::Decode(serde_json::from_str::<Value>("<html>").unwrap_err())
}

/// In-memory backend with canned replies. A `None` reply fails like a dropped connection.
///
/// A gated request is recorded as started, then holds its reply until the gate is notified.
pub struct FakeBackend {
    pub trigger_reply: Option<Value>,
    pub stop_reply: Option<Value>,
    /// Keyed by deploy method; methods without an entry answer `[]`.
    pub vm_data_replies: HashMap<String, Option<Value>>,
    trigger_gate: Option<Arc<Notify>>,
    vm_data_gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<Call>>,
    finished: Mutex<Vec<Call>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            trigger_reply: Some(json!({"message": "Workflow triggered"})),
            stop_reply: Some(json!({"message": "Service stopped"})),
            vm_data_replies: HashMap::new(),
            trigger_gate: None,
            vm_data_gate: None,
            calls: Mutex::new(Vec::new()),
            finished: Mutex::new(Vec::new()),
        }
    }

    pub fn with_trigger_reply(mut self, reply: Option<Value>) -> Self {
        self.trigger_reply = reply;
        self
    }

    pub fn with_stop_reply(mut self, reply: Option<Value>) -> Self {
        self.stop_reply = reply;
        self
    }

    pub fn with_vm_data(mut self, deploy_method: &str, reply: Option<Value>) -> Self {
        self.vm_data_replies.insert(deploy_method.to_string(), reply);
        self
    }

    pub fn with_trigger_gate(mut self, gate: Arc<Notify>) -> Self {
        self.trigger_gate = Some(gate);
        self
    }

    pub fn with_vm_data_gate(mut self, gate: Arc<Notify>) -> Self {
        self.vm_data_gate = Some(gate);
        self
    }

    /// Requests that have returned their reply, in completion order.
    pub fn finished(&self) -> Vec<Call> {
        self.finished.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn vm_data_calls(&self) -> Vec<(String, Option<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::VmData { service, deploy_method } => Some((service, deploy_method)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn hold(&self, gate: Option<&Arc<Notify>>, call: Call) {
        self.record(call.clone());
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.finished.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PanelBackend for FakeBackend {
    async fn trigger_workflow(&self, workflow: &str) -> Result<Value, PanelError> {
        self.hold(self.trigger_gate.as_ref(), Call::Trigger(workflow.to_string()))
            .await;
        self.trigger_reply.clone().ok_or_else(transport_failure)
    }

    async fn stop_service(&self, deploy_method: DeployMethod) -> Result<Value, PanelError> {
        self.hold(None, Call::Stop(deploy_method)).await;
        self.stop_reply.clone().ok_or_else(transport_failure)
    }

    async fn vm_data(
        &self,
        service: &str,
        deploy_method: Option<&str>,
    ) -> Result<Vec<ServiceRecord>, PanelError> {
        let call = Call::VmData {
            service: service.to_string(),
            deploy_method: deploy_method.map(str::to_string),
        };
        self.hold(self.vm_data_gate.as_ref(), call).await;
        let reply = self
            .vm_data_replies
            .get(deploy_method.unwrap_or_default())
            .cloned()
            .unwrap_or_else(|| Some(json!([])));
        reply.map(records_from_value).ok_or_else(transport_failure)
    }
}

/// Page surface that also keeps every write in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub page: Page,
    statuses: Mutex<Vec<StatusMessage>>,
    writes: Mutex<Vec<(String, Content)>>,
}

impl RecordingSurface {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    pub fn statuses(&self) -> Vec<StatusMessage> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn writes_to(&self, id: &str) -> Vec<Content> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|(target, _)| target == id)
            .map(|(_, content)| content.clone())
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn contains(&self, id: &str) -> bool {
        self.page.contains(id)
    }

    fn replace(&self, id: &str, content: Content) {
        self.writes.lock().unwrap().push((id.to_string(), content.clone()));
        self.page.replace(id, content);
    }

    fn paint_status(&self, id: &str, message: &StatusMessage) {
        self.statuses.lock().unwrap().push(message.clone());
        self.page.paint_status(id, message);
    }

    fn alert(&self, text: &str) {
        self.page.alert(text);
    }
}

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn count(&self, level: &str) -> usize {
        self.contents().lines().filter(|l| l.contains(level)).count()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route this thread's log events into a capture until the guard drops.
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
