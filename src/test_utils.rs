// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! An in-memory stand-in for the namespace and pod endpoints of the API server.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

pub const CREATION_TIMESTAMP: &str = "2026-01-01T00:00:00Z";

#[derive(Default)]
struct ClusterState {
    namespaces: BTreeMap<String, Value>,
    pods: BTreeMap<(String, String), Value>,
    requests: Vec<(String, String)>,
    next_uid: u64,
}

/// A fake API server that keeps namespaces and pods in memory and serves
/// create, get, list and delete for both.
#[derive(Clone, Default)]
pub struct FakeApiServer {
    state: Arc<Mutex<ClusterState>>,
}

impl FakeApiServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing namespace
    pub fn with_namespace(self, name: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let ns = namespace_json(name);
            state.namespaces.insert(name.to_string(), ns);
        }
        self
    }

    /// Seed an existing pod
    pub fn with_pod(self, namespace: &str, name: &str, labels: &[(&str, &str)]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let labels: BTreeMap<&str, &str> = labels.iter().copied().collect();
            state.pods.insert(
                (namespace.to_string(), name.to_string()),
                json!({
                    "apiVersion": "v1",
                    "kind": "Pod",
                    "metadata": {
                        "name": name,
                        "namespace": namespace,
                        "labels": labels,
                        "creationTimestamp": CREATION_TIMESTAMP
                    }
                }),
            );
        }
        self
    }

    /// Build a kube Client backed by this fake
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Every request seen so far as (method, path)
    pub fn requests(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().requests.clone()
    }

    /// True if any request matched the method and path
    pub fn saw(&self, method: &str, path: &str) -> bool {
        self.requests()
            .iter()
            .any(|(m, p)| m == method && p == path)
    }

    fn handle(&self, method: &str, path: &str, query: Option<&str>, body: &[u8]) -> (u16, Value) {
        let mut state = self.state.lock().unwrap();
        state
            .requests
            .push((method.to_string(), path.to_string()));

        let segments: Vec<&str> = path
            .trim_start_matches("/api/v1/")
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match (method, segments.as_slice()) {
            ("GET", ["namespaces"]) => {
                (200, list_json("NamespaceList", state.namespaces.values()))
            }
            ("POST", ["namespaces"]) => {
                let Ok(mut ns) = serde_json::from_slice::<Value>(body) else {
                    return (400, status_json(400, "BadRequest", "invalid body"));
                };
                let name = ns["metadata"]["name"].as_str().unwrap_or_default().to_string();
                if state.namespaces.contains_key(&name) {
                    return (409, already_exists_json("namespaces", &name));
                }
                state.next_uid += 1;
                ns["metadata"]["uid"] = json!(format!("uid-{}", state.next_uid));
                ns["metadata"]["creationTimestamp"] = json!(CREATION_TIMESTAMP);
                ns["status"] = json!({ "phase": "Active" });
                state.namespaces.insert(name, ns.clone());
                (201, ns)
            }
            ("GET", ["namespaces", name]) => match state.namespaces.get(*name) {
                Some(ns) => (200, ns.clone()),
                None => (404, not_found_json("namespaces", name)),
            },
            ("DELETE", ["namespaces", name]) => match state.namespaces.remove(*name) {
                Some(mut ns) => {
                    state.pods.retain(|(pod_ns, _), _| pod_ns != name);
                    ns["status"] = json!({ "phase": "Terminating" });
                    (200, ns)
                }
                None => (404, not_found_json("namespaces", name)),
            },
            ("GET", ["pods"]) => {
                let selector = label_selector(query);
                let pods = state.pods.values().filter(|p| matches_selector(p, &selector));
                (200, list_json("PodList", pods))
            }
            ("GET", ["namespaces", namespace, "pods"]) => {
                let selector = label_selector(query);
                let pods = state
                    .pods
                    .iter()
                    .filter(|((ns, _), p)| ns == namespace && matches_selector(p, &selector))
                    .map(|(_, p)| p);
                (200, list_json("PodList", pods))
            }
            ("POST", ["namespaces", namespace, "pods"]) => {
                if !state.namespaces.contains_key(*namespace) {
                    return (404, not_found_json("namespaces", namespace));
                }
                let Ok(mut pod) = serde_json::from_slice::<Value>(body) else {
                    return (400, status_json(400, "BadRequest", "invalid body"));
                };
                let name = pod["metadata"]["name"].as_str().unwrap_or_default().to_string();
                let key = (namespace.to_string(), name.clone());
                if state.pods.contains_key(&key) {
                    return (409, already_exists_json("pods", &name));
                }
                state.next_uid += 1;
                pod["metadata"]["namespace"] = json!(namespace);
                pod["metadata"]["uid"] = json!(format!("uid-{}", state.next_uid));
                pod["metadata"]["creationTimestamp"] = json!(CREATION_TIMESTAMP);
                pod["status"] = json!({ "phase": "Pending" });
                state.pods.insert(key, pod.clone());
                (201, pod)
            }
            ("GET", ["namespaces", namespace, "pods", name]) => {
                match state.pods.get(&(namespace.to_string(), name.to_string())) {
                    Some(pod) => (200, pod.clone()),
                    None => (404, not_found_json("pods", name)),
                }
            }
            ("DELETE", ["namespaces", namespace, "pods", name]) => {
                match state.pods.remove(&(namespace.to_string(), name.to_string())) {
                    Some(pod) => (200, pod),
                    None => (404, not_found_json("pods", name)),
                }
            }
            _ => (404, not_found_json("path", path)),
        }
    }
}

impl Service<Request<Body>> for FakeApiServer {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let server = self.clone();
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let query = req.uri().query().map(str::to_string);

        Box::pin(async move {
            let body = req.into_body().collect().await?.to_bytes();
            let (status, value) = server.handle(&method, &path, query.as_deref(), &body);

            let response = Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(value.to_string().into_bytes()))?;
            Ok::<_, tower::BoxError>(response)
        })
    }
}

fn label_selector(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "labelSelector")
        .map(|(_, v)| v.into_owned())
}

/// Equality selectors (`a=b,c=d`) and bare key existence checks
fn matches_selector(object: &Value, selector: &Option<String>) -> bool {
    let Some(selector) = selector else {
        return true;
    };
    let labels = &object["metadata"]["labels"];

    selector
        .split(',')
        .filter(|term| !term.is_empty())
        .all(|term| match term.split_once('=') {
            Some((key, value)) => labels[key.trim()].as_str() == Some(value.trim()),
            None => !labels[term.trim()].is_null(),
        })
}

fn list_json<'a>(kind: &str, items: impl Iterator<Item = &'a Value>) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": kind,
        "metadata": { "resourceVersion": "1" },
        "items": items.cloned().collect::<Vec<_>>()
    })
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": format!("uid-{}", name),
            "creationTimestamp": CREATION_TIMESTAMP
        },
        "status": { "phase": "Active" }
    })
}

fn status_json(code: u16, reason: &str, message: &str) -> Value {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> Value {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create a 409 conflict response
pub fn already_exists_json(resource: &str, name: &str) -> Value {
    status_json(
        409,
        "AlreadyExists",
        &format!("{} \"{}\" already exists", resource, name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_selector() {
        let pod = json!({ "metadata": { "labels": { "k8s-app": "kube-dns", "tier": "web" } } });

        assert!(matches_selector(&pod, &None));
        assert!(matches_selector(&pod, &Some("k8s-app=kube-dns".to_string())));
        assert!(matches_selector(&pod, &Some("k8s-app=kube-dns,tier".to_string())));
        assert!(!matches_selector(&pod, &Some("k8s-app=coredns".to_string())));
        assert!(!matches_selector(&json!({}), &Some("tier".to_string())));
    }

    #[test]
    fn test_label_selector_is_decoded() {
        assert_eq!(
            label_selector(Some("&labelSelector=k8s-app%3Dkube-dns")).as_deref(),
            Some("k8s-app=kube-dns")
        );
        assert_eq!(label_selector(Some("limit=5")), None);
        assert_eq!(label_selector(None), None);
    }
}
