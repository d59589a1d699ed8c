// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mock Kubernetes API and fakes for the add-on seams.

use crate::apply::HelmInstaller;
use crate::context::ClusterContext;
use crate::error::Result as AddonResult;
use crate::graph::{Manifest, ResourceId};
use crate::manifests::HelmRelease;
use async_trait::async_trait;
use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Route = (String, String);

const NOT_FOUND: &str =
    r#"{"kind":"Status","apiVersion":"v1","status":"Failure","reason":"NotFound","code":404}"#;

/// A mock HTTP service that returns predefined responses based on request
/// paths and records every request it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<Route, (u16, String)>>>,
    requests: Arc<Mutex<Vec<Route>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PATCH requests matching the path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, status, body)
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        let route = (method.to_string(), path.to_string());
        self.responses
            .lock()
            .unwrap()
            .insert(route, (status, body.to_string()));
        self
    }

    /// Requests received so far as `(method, path)` pairs
    pub fn requests(&self) -> Vec<Route> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();

        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Prefix match for paths like /api/v1/namespaces/foo
        responses
            .iter()
            .find(|((m, p), _)| m == method && path.starts_with(p.as_str()))
            .map(|(_, resp)| resp.clone())
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let response = self.find_response(&method, &path);
        self.requests.lock().unwrap().push((method, path));

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| (404, NOT_FOUND.to_string()));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// A call made against a [`RecordingContext`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Namespace(String),
    ServiceAccount(String),
    Manifest(String),
    HelmChart(String),
    Dependency(String, String),
}

/// Cluster context that only records the calls made against it
#[derive(Debug, Default)]
pub struct RecordingContext {
    pub calls: Vec<Call>,
}

impl ClusterContext for RecordingContext {
    fn create_namespace(&mut self, name: &str) -> AddonResult<ResourceId> {
        self.calls.push(Call::Namespace(name.to_string()));
        Ok(ResourceId::namespace(name))
    }

    fn add_service_account(
        &mut self,
        name: &str,
        _namespace: &str,
        _role_arn: Option<&str>,
    ) -> AddonResult<ResourceId> {
        self.calls.push(Call::ServiceAccount(name.to_string()));
        Ok(ResourceId::new(name))
    }

    fn add_manifest(&mut self, id: &str, _manifest: Manifest) -> AddonResult<ResourceId> {
        self.calls.push(Call::Manifest(id.to_string()));
        Ok(ResourceId::new(id))
    }

    fn add_helm_chart(&mut self, id: &str, _release: HelmRelease) -> AddonResult<ResourceId> {
        self.calls.push(Call::HelmChart(id.to_string()));
        Ok(ResourceId::new(id))
    }

    fn add_dependency(
        &mut self,
        dependent: &ResourceId,
        dependency: &ResourceId,
    ) -> AddonResult<()> {
        self.calls.push(Call::Dependency(
            dependent.to_string(),
            dependency.to_string(),
        ));
        Ok(())
    }
}

/// Helm installer that records the releases it was asked to install
#[derive(Debug, Clone, Default)]
pub struct RecordingHelm {
    installed: Arc<Mutex<Vec<String>>>,
}

impl RecordingHelm {
    pub fn installed(&self) -> Vec<String> {
        self.installed.lock().unwrap().clone()
    }
}

#[async_trait]
impl HelmInstaller for RecordingHelm {
    async fn upgrade_install(&self, release: &HelmRelease) -> AddonResult<()> {
        self.installed.lock().unwrap().push(release.release.clone());
        Ok(())
    }
}
