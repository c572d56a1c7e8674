use crate::domain::constants::{NAMESPACES_PATH, PAGE_SIZE};
use crate::domain::models::Catalog;
use crate::graph::{GraphClient, GraphError, NamedEntry};
use crate::services::output::Console;

pub fn collect_namespaces(client: &GraphClient) -> Result<Vec<String>, GraphError> {
    Ok(client
        .fetch_all::<NamedEntry>(NAMESPACES_PATH)?
        .into_iter()
        .map(|e| e.name)
        .collect())
}

pub fn collect_actions(client: &GraphClient, namespace: &str) -> Result<Vec<String>, GraphError> {
    let path = format!(
        "{}/{}/resourceActions?$select=name&$top={}",
        NAMESPACES_PATH, namespace, PAGE_SIZE
    );
    Ok(client
        .fetch_all::<NamedEntry>(&path)?
        .into_iter()
        .map(|e| e.name)
        .collect())
}

/// Walks every namespace in listing order. The first failed request aborts the
/// whole walk.
pub fn collect_catalog(client: &GraphClient, console: &Console) -> Result<Catalog, GraphError> {
    let namespaces = collect_namespaces(client)?;
    tracing::debug!(count = namespaces.len(), "listed namespaces");
    let mut catalog = Catalog::with_capacity(namespaces.len());
    for ns in namespaces {
        console.info(&format!("Collecting actions for {}", ns));
        let actions = collect_actions(client, &ns)?;
        catalog.insert(ns, actions);
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::StaticToken;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn catalog_follows_listing_order_across_pages() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/roleManagement/directory/resourceNamespaces");
            then.status(200).json_body(json!({
                "value": [{"name": "microsoft.directory"}],
                "@odata.nextLink": server.url("/namespaces/next"),
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/namespaces/next");
            then.status(200)
                .json_body(json!({"value": [{"name": "microsoft.azure.print"}]}));
        });
        let directory = server.mock(|when, then| {
            when.method(GET)
                .path("/roleManagement/directory/resourceNamespaces/microsoft.directory/resourceActions")
                .query_param("$select", "name")
                .query_param("$top", "999");
            then.status(200).json_body(json!({
                "value": [
                    {"name": "microsoft.directory/users/create"},
                    {"name": "microsoft.directory/users/delete"}
                ]
            }));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/roleManagement/directory/resourceNamespaces/microsoft.azure.print/resourceActions");
            then.status(200).json_body(json!({"value": []}));
        });

        let client = GraphClient::new(server.base_url(), Box::new(StaticToken("t".into())))
            .expect("client");
        let catalog = collect_catalog(&client, &Console::new(false)).expect("collect");

        directory.assert();
        let keys: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["microsoft.directory", "microsoft.azure.print"]);
        assert_eq!(
            catalog["microsoft.directory"],
            vec![
                "microsoft.directory/users/create",
                "microsoft.directory/users/delete"
            ]
        );
        assert!(catalog["microsoft.azure.print"].is_empty());
    }

    #[test]
    fn failed_action_listing_aborts_collection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/roleManagement/directory/resourceNamespaces");
            then.status(200)
                .json_body(json!({"value": [{"name": "ns1"}, {"name": "ns2"}]}));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/roleManagement/directory/resourceNamespaces/ns1/resourceActions");
            then.status(500);
        });

        let client = GraphClient::new(server.base_url(), Box::new(StaticToken("t".into())))
            .expect("client");
        let err = collect_catalog(&client, &Console::new(false)).unwrap_err();
        assert!(err.to_string().contains("ns1/resourceActions"));
    }
}
