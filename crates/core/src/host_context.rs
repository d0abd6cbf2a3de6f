use std::collections::HashMap;

/// Read-only view of the host build's properties and task graph.
///
/// The runner only ever needs these two lookups, so the concrete host build
/// tool stays out of the picture entirely.
pub trait HostContext {
    fn property(&self, name: &str) -> Option<String>;
    fn has_task_named(&self, name: &str) -> bool;
}

/// [`HostContext`] backed by a parsed properties map and the task names the
/// host invocation requested.
#[derive(Debug, Default, Clone)]
pub struct PropertiesHostContext {
    properties: HashMap<String, String>,
    requested_tasks: Vec<String>,
}

impl PropertiesHostContext {
    pub fn new(properties: HashMap<String, String>, requested_tasks: Vec<String>) -> Self {
        Self {
            properties,
            requested_tasks,
        }
    }
}

impl HostContext for PropertiesHostContext {
    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }

    fn has_task_named(&self, name: &str) -> bool {
        self.requested_tasks.iter().any(|task| task == name)
    }
}
