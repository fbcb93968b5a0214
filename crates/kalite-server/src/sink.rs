//! Submit collaborators: where a finished record goes.

use kalite_taxonomy::cache::BoxFuture;
use kalite_wizard::error::SubmitError;
use kalite_wizard::submit::{SubmitHandler, SubmitPayload, SubmitReceipt};

use crate::config::StoreConfig;

/// Posts each record to a REST data store at `{url}/{form}`.
///
/// One attempt per submission. A failure is reported back to the wizard,
/// which keeps the draft so the user can retry.
pub struct RemoteStoreSink {
    base_url: String,
    api_key: Option<String>,
}

impl RemoteStoreSink {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self, payload: &SubmitPayload) -> String {
        format!("{}/{}", self.base_url, payload.form.as_str())
    }

    fn post(url: &str, api_key: Option<&str>, body: &[u8]) -> Result<String, SubmitError> {
        let mut request = ureq::post(url).header("Content-Type", "application/json");
        if let Some(key) = api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", &format!("Bearer {key}"));
        }

        let mut response = request.send(body).map_err(|e| match e {
            ureq::Error::StatusCode(status) if (400..500).contains(&status) => {
                SubmitError::Rejected(format!("data store returned {status}"))
            }
            other => SubmitError::Unavailable(other.to_string()),
        })?;

        response
            .body_mut()
            .read_to_string()
            .map_err(|e| SubmitError::Unavailable(e.to_string()))
    }
}

/// Pull a record id out of a store response: either an object with an
/// `id`, or an array whose first element has one.
pub fn record_id(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let record = match &value {
        serde_json::Value::Array(rows) => rows.first()?,
        other => other,
    };
    match record.get("id")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl SubmitHandler for RemoteStoreSink {
    fn submit<'a>(
        &'a self,
        payload: &'a SubmitPayload,
    ) -> BoxFuture<'a, Result<SubmitReceipt, SubmitError>> {
        Box::pin(async move {
            let url = self.endpoint(payload);
            let body = serde_json::to_vec(&payload.record)?;
            let api_key = self.api_key.clone();

            tracing::debug!(form = %payload.form, url = %url, "posting record");
            let response = tokio::task::spawn_blocking(move || {
                Self::post(&url, api_key.as_deref(), &body)
            })
            .await
            .map_err(|e| SubmitError::Unavailable(e.to_string()))??;

            Ok(SubmitReceipt {
                record_id: record_id(&response),
            })
        })
    }
}

/// Logs each record instead of storing it. Used when no store is
/// configured.
pub struct LogSink;

impl SubmitHandler for LogSink {
    fn submit<'a>(
        &'a self,
        payload: &'a SubmitPayload,
    ) -> BoxFuture<'a, Result<SubmitReceipt, SubmitError>> {
        Box::pin(async move {
            let record = serde_json::to_string(&payload.record)?;
            tracing::info!(form = %payload.form, %record, "record received (no data store configured)");
            Ok(SubmitReceipt::default())
        })
    }
}
