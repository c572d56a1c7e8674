pub const NAMESPACES_PATH: &str = "roleManagement/directory/resourceNamespaces";
pub const ESTIMATE_ACCESS_PATH: &str = "roleManagement/directory/estimateAccess";

/// `$top` used for every listing that accepts it.
pub const PAGE_SIZE: u32 = 999;
/// Upper bound of authorization checks per `estimateAccess` request.
pub const MAX_CHUNK: usize = 20;

pub const DEFAULT_AUTH_FILE: &str = ".roadtools_auth";
pub const DEFAULT_CONFIG_FILE: &str = "entraperm.toml";
pub const COLLECTED_FILE: &str = "collected_actions.json";
pub const RESULTS_FILE: &str = "action_results.csv";
pub const BASELINE_FILE: &str = "default_results.csv";

pub const TENANT_SCOPE: &str = "/";
pub const INVALID_ACTION: &str = "invalidAction";
