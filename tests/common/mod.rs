#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TOKEN: &str = "test-access-token";
pub const HEADER: &str = "namespace,action,scope,decision,default_decision,expected";

/// Isolated working directory plus a local stand-in for the directory API.
pub struct TestEnv {
    _tmp: TempDir,
    pub work: PathBuf,
    pub data: PathBuf,
    pub server: MockServer,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self::without_token();
        fs::write(
            env.work.join(".roadtools_auth"),
            json!({"accessToken": TOKEN, "tokenType": "Bearer"}).to_string(),
        )
        .expect("write token file");
        env
    }

    pub fn without_token() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let work = tmp.path().join("work");
        let data = tmp.path().join("data");
        fs::create_dir_all(&work).expect("create work dir");
        fs::create_dir_all(&data).expect("create data dir");
        Self {
            _tmp: tmp,
            work,
            data,
            server: MockServer::start(),
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("entraperm");
        cmd.current_dir(&self.work)
            .arg("--no-color")
            .arg("--graph-url")
            .arg(self.server.base_url())
            .arg("--data-dir")
            .arg(&self.data);
        cmd
    }

    pub fn collected_path(&self) -> PathBuf {
        self.work.join("collected_actions.json")
    }

    pub fn results_path(&self) -> PathBuf {
        self.work.join("action_results.csv")
    }

    pub fn write_catalog(&self, catalog: &str) -> PathBuf {
        let path = self.work.join("catalog.json");
        fs::write(&path, catalog).expect("write catalog");
        path
    }

    pub fn write_baseline(&self, rows: &[&str]) {
        let mut body = String::from("namespace,action,scope,decision\n");
        for row in rows {
            body.push_str(row);
            body.push('\n');
        }
        fs::write(self.data.join("default_results.csv"), body).expect("write baseline");
    }

    /// Lines of the results file, line endings stripped.
    pub fn result_lines(&self) -> Vec<String> {
        fs::read_to_string(self.results_path())
            .expect("read results")
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn mock_namespaces(&self, names: &[&str]) -> Mock<'_> {
        let value: Vec<Value> = names.iter().map(|n| json!({"name": n})).collect();
        self.server.mock(|when, then| {
            when.method(GET)
                .path("/roleManagement/directory/resourceNamespaces")
                .header("authorization", format!("Bearer {}", TOKEN));
            then.status(200).json_body(json!({"value": value}));
        })
    }

    pub fn mock_actions(&self, namespace: &str, actions: &[&str]) -> Mock<'_> {
        let value: Vec<Value> = actions.iter().map(|a| json!({"name": a})).collect();
        let path = format!(
            "/roleManagement/directory/resourceNamespaces/{}/resourceActions",
            namespace
        );
        self.server.mock(|when, then| {
            when.method(GET)
                .path(path)
                .query_param("$select", "name")
                .query_param("$top", "999");
            then.status(200).json_body(json!({"value": value}));
        })
    }

    /// Expects exactly these (action, scope) checks in one request and answers
    /// each with `decision`.
    pub fn mock_estimate(&self, checks: &[(&str, &str)], decision: &str) -> Mock<'_> {
        let request: Vec<Value> = checks
            .iter()
            .map(|(a, s)| json!({"resourceAction": a, "directoryScopeId": s}))
            .collect();
        let response: Vec<Value> = checks
            .iter()
            .map(|(a, s)| {
                json!({"resourceAction": a, "directoryScopeId": s, "accessDecision": decision})
            })
            .collect();
        self.server.mock(|when, then| {
            when.method(POST)
                .path("/roleManagement/directory/estimateAccess")
                .header("authorization", format!("Bearer {}", TOKEN))
                .json_body(json!({"resourceActionAuthorizationChecks": request}));
            then.status(200).json_body(json!({"value": response}));
        })
    }

    pub fn mock_estimate_failure(&self, checks: &[(&str, &str)], status: u16) -> Mock<'_> {
        let request: Vec<Value> = checks
            .iter()
            .map(|(a, s)| json!({"resourceAction": a, "directoryScopeId": s}))
            .collect();
        self.server.mock(|when, then| {
            when.method(POST)
                .path("/roleManagement/directory/estimateAccess")
                .json_body(json!({"resourceActionAuthorizationChecks": request}));
            then.status(status)
                .json_body(json!({"error": {"code": "Request_BadRequest"}}));
        })
    }
}
