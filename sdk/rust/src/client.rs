use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The agent's uniform response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    pub message: String,
    pub data: Value,
}

pub type ApiResult = Result<(StatusCode, Envelope), Box<dyn std::error::Error>>;

/// Typed client for the router agent API.
pub struct AgentClient {
    client: Client,
    base_url: String,
    token: String,
}

impl AgentClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Liveness probe; data is the agent's local timestamp.
    pub async fn ping(&self) -> ApiResult {
        self.get("/api/ping", &[]).await
    }

    /// Read an interface's credentials.
    pub async fn network_option(&self, interface: &str) -> ApiResult {
        self.get("/api/network/option", &[("interface", interface)])
            .await
    }

    /// Write an interface's credentials; empty values are left untouched.
    pub async fn set_network_option(
        &self,
        interface: &str,
        username: &str,
        password: &str,
    ) -> ApiResult {
        self.post(
            "/api/network/option",
            json!({
                "interface": interface,
                "username": username,
                "password": password,
            }),
        )
        .await
    }

    /// Query an interface's status document.
    pub async fn interface_status(&self, interface: &str) -> ApiResult {
        self.get("/api/network/status", &[("interface", interface)])
            .await
    }

    /// Bring an interface down then up, returning its fresh status.
    pub async fn cycle_interface(&self, interface: &str) -> ApiResult {
        self.post("/api/network/status", json!({ "interface": interface }))
            .await
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> ApiResult {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .header("Access-Token", &self.token)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("Access-Token", &self.token)
            .json(&body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn decode(resp: reqwest::Response) -> ApiResult {
        let status = resp.status();
        let text = resp.text().await?;
        let envelope: Envelope = serde_json::from_str(&text)?;
        Ok((status, envelope))
    }
}
