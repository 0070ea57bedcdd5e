use reqwest::Client;

use crate::domain::user::UserRecord;
use crate::source::{FetchError, FetchResult, UserSource};

/// Fetches the user collection with a single `GET` to a fixed URL.
#[derive(Clone, Debug)]
pub struct HttpUserSource {
    client: Client,
    url: String,
}

impl HttpUserSource {
    pub fn new(url: impl Into<String>) -> FetchResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> FetchResult<Vec<UserRecord>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let users = serde_json::from_slice(&body)?;
        log::debug!("Fetched users from {}", self.url);

        Ok(users)
    }
}
