use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{RemoteClient, RemoteError};

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    /// Sends `req` once and turns any non-success status into a typed error.
    pub(super) fn send(&self, req: RequestBuilder, label: &'static str) -> Result<Response, RemoteError> {
        let resp = self
            .authorize(req)
            .send()
            .map_err(|source| {
                tracing::warn!(op = label, error = %source, "request failed");
                RemoteError::Transport { label, source }
            })?;
        self.ensure_ok(resp, label)
    }

    pub(super) fn ensure_ok(&self, resp: Response, label: &'static str) -> Result<Response, RemoteError> {
        let status = resp.status();
        tracing::debug!(op = label, url = %resp.url(), status = status.as_u16(), "response");
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
        tracing::warn!(op = label, status = status.as_u16(), %message, "request rejected");
        Err(RemoteError::from_status(label, status, message))
    }

    pub(super) fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        label: &'static str,
    ) -> Result<T, RemoteError> {
        self.send(req, label)?
            .json()
            .map_err(|source| RemoteError::InvalidResponse { label, source })
    }
}

/// Pulls a human-readable message out of an error body. Accepts the usual
/// `{"error": ".."}` / `{"message": ".."}` shapes or plain text.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        return ["error", "message", "detail"]
            .iter()
            .find_map(|k| v.get(*k).and_then(|m| m.as_str()))
            .map(str::to_string);
    }
    Some(body.chars().take(200).collect())
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
