//! HTTP tracking store
//!
//! JSON client for a remote tracking server. One URL per store operation
//! under `/api/2.0/`; non-2xx responses surface as
//! [`TrackingError::Server`] with the status code and the response body.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::TrackingConfig;
use crate::entities::{LoggedModel, Run, RunStatus, TrackedDataset};
use crate::error::{Result, TrackingError};
use crate::store::{DatasetProfile, LogModelRequest, TrackingStore};

/// JSON-over-HTTP implementation of [`TrackingStore`]
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CreateRunRequest<'a> {
    run_name: &'a str,
}

#[derive(Serialize)]
struct UpdateRunRequest<'a> {
    run_id: &'a str,
    status: RunStatus,
}

#[derive(Serialize)]
struct LogMetricsRequest<'a> {
    model_id: &'a str,
    dataset_id: &'a str,
    metrics: &'a BTreeMap<String, f64>,
}

impl RestStore {
    /// Create a store talking to the server selected by the configuration
    pub fn connect(config: &TrackingConfig) -> Result<RestStore> {
        let client = ClientBuilder::new().build()?;

        Ok(RestStore {
            client,
            base_url: config.tracking_uri.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/2.0/{}", self.base_url, endpoint)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TrackingError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!(%url, "tracking request");
        let response = self.client.post(&url).json(body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn post_unit<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<()> {
        let url = self.url(endpoint);
        debug!(%url, "tracking request");
        let response = self.client.post(&url).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(endpoint);
        debug!(%url, "tracking request");
        let response = self.client.get(&url).query(query).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[async_trait]
impl TrackingStore for RestStore {
    async fn create_run(&self, run_name: &str) -> Result<Run> {
        self.post("runs/create", &CreateRunRequest { run_name })
            .await
    }

    async fn get_run(&self, run_id: &str) -> Result<Run> {
        self.get("runs/get", &[("run_id", run_id)]).await
    }

    async fn finish_run(&self, run_id: &str, status: RunStatus) -> Result<()> {
        self.post_unit("runs/update", &UpdateRunRequest { run_id, status })
            .await
    }

    async fn register_dataset(&self, profile: DatasetProfile) -> Result<TrackedDataset> {
        self.post("datasets/create", &profile).await
    }

    async fn log_model(&self, request: LogModelRequest) -> Result<LoggedModel> {
        self.post("models/create", &request).await
    }

    async fn get_logged_model(&self, model_id: &str) -> Result<LoggedModel> {
        self.get("models/get", &[("model_id", model_id)]).await
    }

    async fn log_metrics(
        &self,
        model_id: &str,
        dataset_id: &str,
        metrics: &BTreeMap<String, f64>,
    ) -> Result<()> {
        self.post_unit(
            "metrics/log",
            &LogMetricsRequest {
                model_id,
                dataset_id,
                metrics,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_regardless_of_trailing_slash() {
        let config = TrackingConfig {
            tracking_uri: "http://localhost:5000/".to_string(),
        };
        let store = RestStore::connect(&config).unwrap();
        assert_eq!(
            store.url("runs/create"),
            "http://localhost:5000/api/2.0/runs/create"
        );

        let config = TrackingConfig {
            tracking_uri: "http://tracker:8080".to_string(),
        };
        let store = RestStore::connect(&config).unwrap();
        assert_eq!(
            store.url("models/get"),
            "http://tracker:8080/api/2.0/models/get"
        );
    }

    #[test]
    fn run_update_request_serializes_the_terminal_status() {
        let request = UpdateRunRequest {
            run_id: "r-1",
            status: RunStatus::Failed,
        };
        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(encoded, r#"{"run_id":"r-1","status":"FAILED"}"#);
    }
}
