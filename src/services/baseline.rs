use crate::domain::constants::{INVALID_ACTION, TENANT_SCOPE};
use crate::domain::models::BaselineRecord;
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

/// Previously recorded decisions keyed by (namespace, action, scope).
#[derive(Debug, Default, Clone)]
pub struct DecisionTable {
    decisions: HashMap<(String, String, String), String>,
}

impl DecisionTable {
    /// Reads the baseline CSV; a missing file yields an empty table.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no baseline file, comparing against empty table");
            return Ok(Self::default());
        }
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open baseline {}", path.display()))?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            let record: BaselineRecord =
                record.with_context(|| format!("invalid baseline row in {}", path.display()))?;
            records.push(record);
        }
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: impl IntoIterator<Item = BaselineRecord>) -> Self {
        let decisions = records
            .into_iter()
            .map(|r| ((r.namespace, r.action, r.scope), r.decision))
            .collect();
        Self { decisions }
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn decision(&self, namespace: &str, action: &str, scope: &str) -> Option<&str> {
        self.decisions
            .get(&(namespace.to_string(), action.to_string(), scope.to_string()))
            .map(String::as_str)
    }

    /// Whether the tenant-wide baseline marks the action as `invalidAction`.
    /// Always consults scope `/`, whatever scopes are being checked.
    pub fn is_invalid_action(&self, namespace: &str, action: &str) -> bool {
        self.decision(namespace, action, TENANT_SCOPE) == Some(INVALID_ACTION)
    }
}
