use super::{DashboardClient, Mutation};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use trackdeck_types::Snapshot;

/// Client for the HTTP data service.
///
/// Endpoints mirror the service's REST surface: `GET /data` for the
/// snapshot, `POST` per collection for creates, `PATCH` for updates.
pub struct HttpClient {
    base: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

impl HttpClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        HttpClient {
            base,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Extract the service's error message, falling back to the status code.
    async fn api_error(response: reqwest::Response) -> Error {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("request failed ({})", status));
        Error::Api(message)
    }
}

#[async_trait]
impl DashboardClient for HttpClient {
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let response = self.http.get(self.url("/data")).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json::<Snapshot>().await?)
    }

    async fn mutate(&self, mutation: Mutation) -> Result<()> {
        let request = match &mutation {
            Mutation::CreateJob(payload) => self.http.post(self.url("/jobs")).json(payload),
            Mutation::CreateCoding(payload) => self.http.post(self.url("/coding")).json(payload),
            Mutation::CreateProject(payload) => {
                self.http.post(self.url("/projects")).json(payload)
            }
            Mutation::CreateContact(payload) => {
                self.http.post(self.url("/networking")).json(payload)
            }
            Mutation::UpdateJobStatus(payload) => {
                self.http.patch(self.url("/jobs/status")).json(payload)
            }
            Mutation::UpdateGoal(payload) => self.http.patch(self.url("/goals")).json(payload),
        };

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }
}
