use crate::domain::constants::PAGE_SIZE;
use crate::domain::models::ObjectKind;
use crate::graph::{GraphClient, GraphError, ObjectEntry};
use crate::services::output::Console;

/// What a `--scope` argument asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSpec {
    /// One scope per object of the collection.
    Objects(ObjectKind),
    Literal(Vec<String>),
}

impl ScopeSpec {
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "users" => Self::Objects(ObjectKind::Users),
            "devices" => Self::Objects(ObjectKind::Devices),
            _ => Self::Literal(input.split(',').map(prefix_scope).collect()),
        }
    }
}

fn prefix_scope(token: &str) -> String {
    let token = token.trim();
    if token.starts_with('/') {
        token.to_string()
    } else {
        format!("/{}", token)
    }
}

pub fn resolve_scopes(
    client: &GraphClient,
    input: &str,
    console: &Console,
) -> Result<Vec<String>, GraphError> {
    match ScopeSpec::parse(input) {
        ScopeSpec::Literal(scopes) => Ok(scopes),
        ScopeSpec::Objects(kind) => {
            console.info(&format!("Fetching all {}...", kind.collection()));
            let path = format!("{}?$select=id&$top={}", kind.collection(), PAGE_SIZE);
            let scopes: Vec<String> = client
                .fetch_all::<ObjectEntry>(&path)?
                .into_iter()
                .map(|o| format!("/{}", o.id))
                .collect();
            tracing::debug!(kind = kind.collection(), count = scopes.len(), "resolved scopes");
            Ok(scopes)
        }
    }
}
