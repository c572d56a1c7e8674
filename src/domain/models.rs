use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Namespace → actions, in the order the directory listed them.
pub type Catalog = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    NotAllowed,
    Conditional,
    Other(String),
}

impl AccessDecision {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "allowed" => Self::Allowed,
            "notAllowed" => Self::NotAllowed,
            "conditional" => Self::Conditional,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Allowed => "allowed",
            Self::NotAllowed => "notAllowed",
            Self::Conditional => "conditional",
            Self::Other(s) => s,
        }
    }
}

/// Scope-listing collections that can be expanded into one scope per object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Users,
    Devices,
}

impl ObjectKind {
    pub fn collection(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Devices => "devices",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BaselineRecord {
    pub namespace: String,
    pub action: String,
    pub scope: String,
    pub decision: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub namespace: String,
    pub action: String,
    pub scope: String,
    pub decision: String,
    pub default_decision: String,
    #[serde(serialize_with = "title_case_bool")]
    pub expected: bool,
}

// Results files have always carried `True`/`False`; downstream diffing relies on it.
fn title_case_bool<S: Serializer>(v: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(if *v { "True" } else { "False" })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckFilter {
    pub namespace: Option<String>,
    pub action: Option<String>,
    pub valid_only: bool,
}

/// Actions that survived filtering for one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacePlan {
    pub namespace: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub rows: Vec<ResultRow>,
    pub submitted_chunks: usize,
    pub failed_chunks: usize,
}

impl CheckReport {
    pub fn mismatches(&self) -> usize {
        self.rows.iter().filter(|r| !r.expected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::AccessDecision;

    #[test]
    fn decisions_keep_unknown_values() {
        assert_eq!(AccessDecision::parse("allowed"), AccessDecision::Allowed);
        assert_eq!(
            AccessDecision::parse("invalidAction"),
            AccessDecision::Other("invalidAction".into())
        );
        assert_eq!(AccessDecision::parse("notAllowed").as_str(), "notAllowed");
    }
}
