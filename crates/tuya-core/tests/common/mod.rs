//! A recording transport double for exercising the session core.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use tuya_core::endpoints::TOKEN_GRANT;
use tuya_core::error::ProtocolError;
use tuya_core::{ApiRequest, Result, Transport};

/// Records every request and answers from canned results.
///
/// Token grants pop the next configured token; other paths answer with the
/// configured result, or `null` when none is configured.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<ApiRequest>>,
    grants: Mutex<VecDeque<String>>,
    results: Mutex<HashMap<String, Value>>,
    failures: Mutex<HashMap<String, (u16, i64, String)>>,
    hang: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose calls never complete.
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    pub fn with_grant(self, token: &str) -> Self {
        self.grants.lock().unwrap().push_back(token.to_string());
        self
    }

    pub fn with_result(self, path: &str, result: Value) -> Self {
        self.results.lock().unwrap().insert(path.to_string(), result);
        self
    }

    pub fn with_failure(self, path: &str, status: u16, code: i64, msg: &str) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, code, msg.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> ApiRequest {
        self.calls.lock().unwrap().last().cloned().expect("no calls")
    }

    fn respond(&self, request: &ApiRequest) -> Result<Value> {
        if let Some((status, code, msg)) = self.failures.lock().unwrap().get(&request.path) {
            return Err(ProtocolError::new(*status, Some(*code), Some(msg.clone())).into());
        }

        if request.path == TOKEN_GRANT {
            let token = self
                .grants
                .lock()
                .unwrap()
                .pop_front()
                .expect("no token grant configured");
            return Ok(json!({
                "access_token": token,
                "expire_time": 7200,
                "refresh_token": format!("refresh-{}", token),
                "uid": "bay1622097934070h5Mpi"
            }));
        }

        Ok(self
            .results
            .lock()
            .unwrap()
            .get(&request.path)
            .cloned()
            .unwrap_or(Value::Null))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_request<R>(&self, request: ApiRequest) -> Result<R>
    where
        R: DeserializeOwned + Send + 'static,
    {
        let response = self.respond(&request);
        self.calls.lock().unwrap().push(request);

        if self.hang {
            std::future::pending::<()>().await;
        }

        Ok(serde_json::from_value(response?)?)
    }
}
