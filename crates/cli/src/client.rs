//! Daemon HTTP Client

use anyhow::Result;
use orchard_common::{
    CreateFruitRequest, Fruit, FruitResponse, ListFruitsResponse, UpdateFruitRequest,
};

/// Client for communicating with the orchard daemon
pub struct FruitsClient {
    base_url: String,
    http: reqwest::Client,
}

impl FruitsClient {
    /// Create a new client for the given daemon address
    pub fn new(addr: &str) -> Self {
        Self {
            base_url: addr.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Check if the daemon is healthy
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self.http.get(url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Store a new fruit under a registry-assigned id
    pub async fn create_fruit(&self, name: &str) -> Result<Fruit> {
        self.create_fruit_raw(Fruit::named(name)).await
    }

    /// Submit an arbitrary fruit candidate for creation.
    ///
    /// The daemon rejects candidates that carry an id; the rejection surfaces
    /// here as an error with the server's message.
    pub async fn create_fruit_raw(&self, fruit: Fruit) -> Result<Fruit> {
        let url = format!("{}/api/fruits", self.base_url);
        let resp = self
            .http
            .post(url)
            .json(&CreateFruitRequest { fruit })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            anyhow::bail!("create rejected ({}): {}", status, error_message(resp).await);
        }

        let body: FruitResponse = resp.json().await?;
        body.fruit
            .ok_or_else(|| anyhow::anyhow!("No fruit in response"))
    }

    /// Get a fruit by ID
    pub async fn get_fruit(&self, id: &str) -> Result<Option<Fruit>> {
        let url = format!("{}/api/fruits/{}", self.base_url, id);
        let resp = self.http.get(url).send().await?.error_for_status()?;
        let body: FruitResponse = resp.json().await?;
        Ok(body.fruit)
    }

    /// List all fruits
    pub async fn get_fruits(&self) -> Result<Vec<Fruit>> {
        let url = format!("{}/api/fruits", self.base_url);
        let resp = self.http.get(url).send().await?.error_for_status()?;
        let body: ListFruitsResponse = resp.json().await?;
        Ok(body.fruits)
    }

    /// Rename a fruit by ID
    pub async fn update_fruit(&self, id: &str, name: &str) -> Result<Option<Fruit>> {
        let url = format!("{}/api/fruits/{}", self.base_url, id);
        let resp = self
            .http
            .put(url)
            .json(&UpdateFruitRequest {
                name: name.to_string(),
            })
            .send()
            .await?
            .error_for_status()?;
        let body: FruitResponse = resp.json().await?;
        Ok(body.fruit)
    }

    /// Remove a fruit by ID, returning it as it was stored
    pub async fn remove_fruit(&self, id: &str) -> Result<Option<Fruit>> {
        let url = format!("{}/api/fruits/{}", self.base_url, id);
        let resp = self.http.delete(url).send().await?.error_for_status()?;
        let body: FruitResponse = resp.json().await?;
        Ok(body.fruit)
    }

    /// Remove all fruits
    pub async fn remove_all_fruits(&self) -> Result<()> {
        let url = format!("{}/api/fruits", self.base_url);
        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}

async fn error_message(resp: reqwest::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(e) => e.to_string(),
    }
}
