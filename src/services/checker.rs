use crate::domain::constants::MAX_CHUNK;
use crate::domain::models::{
    AccessDecision, Catalog, CheckFilter, CheckReport, NamespacePlan, ResultRow,
};
use crate::graph::{AccessEstimator, CheckRequest};
use crate::services::baseline::DecisionTable;
use crate::services::output::Console;

/// Namespace segment of an action: the text before its first `/`.
pub fn action_namespace(action: &str) -> &str {
    action.split('/').next().unwrap_or(action)
}

/// Applies the `--action`, `--namespace` and `--valid` filters to the catalog,
/// keeping catalog order. Namespaces left without actions are dropped.
pub fn plan_checks(
    catalog: &Catalog,
    table: &DecisionTable,
    filter: &CheckFilter,
) -> Vec<NamespacePlan> {
    let action = filter.action.as_deref().filter(|a| !a.is_empty());
    let namespace_filter = match action {
        Some(a) => Some(action_namespace(a)),
        None => filter.namespace.as_deref().filter(|n| !n.is_empty()),
    };

    let mut plans = Vec::new();
    for (ns, actions) in catalog {
        if namespace_filter.is_some_and(|wanted| wanted != ns.as_str()) {
            continue;
        }
        let mut actions: Vec<String> = match action {
            Some(a) => vec![a.to_string()],
            None => actions.clone(),
        };
        if filter.valid_only {
            actions.retain(|a| !table.is_invalid_action(ns, a));
        }
        if actions.is_empty() {
            continue;
        }
        plans.push(NamespacePlan {
            namespace: ns.clone(),
            actions,
        });
    }
    plans
}

/// Action-major cross product of actions and scopes.
pub fn build_checks(actions: &[String], scopes: &[String]) -> Vec<CheckRequest> {
    actions
        .iter()
        .flat_map(|action| {
            scopes.iter().map(move |scope| CheckRequest {
                resource_action: action.clone(),
                directory_scope_id: scope.clone(),
            })
        })
        .collect()
}

/// Submits every plan in chunks of `MAX_CHUNK`. A failed chunk is reported and
/// skipped; its rows are missing from the report.
pub fn run_checks<E: AccessEstimator + ?Sized>(
    estimator: &E,
    plans: &[NamespacePlan],
    scopes: &[String],
    table: &DecisionTable,
    console: &Console,
) -> CheckReport {
    let mut report = CheckReport::default();
    for plan in plans {
        console.info(&format!("\nChecking {}...", plan.namespace));
        let checks = build_checks(&plan.actions, scopes);
        for chunk in checks.chunks(MAX_CHUNK) {
            report.submitted_chunks += 1;
            let items = match estimator.estimate_access(chunk) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(
                        namespace = %plan.namespace,
                        size = chunk.len(),
                        error = %e,
                        "estimateAccess chunk failed"
                    );
                    console.error(&format!("Error during chunk request: {}", e));
                    report.failed_chunks += 1;
                    continue;
                }
            };
            for item in items {
                let default_decision = table
                    .decision(&plan.namespace, &item.resource_action, &item.directory_scope_id)
                    .unwrap_or_default()
                    .to_string();
                console.decision(
                    &item.resource_action,
                    &AccessDecision::parse(&item.access_decision),
                    &item.directory_scope_id,
                );
                report.rows.push(ResultRow {
                    namespace: plan.namespace.clone(),
                    expected: item.access_decision == default_decision,
                    action: item.resource_action,
                    scope: item.directory_scope_id,
                    decision: item.access_decision,
                    default_decision,
                });
            }
        }
    }
    report
}
