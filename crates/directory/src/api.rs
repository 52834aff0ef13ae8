use crate::collation;
use crate::error::{DirectoryError, DirectoryResult};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";
const ALL_COUNTRIES_PATH: &str = "v3.1/all";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct CountryDirectory {
    client: Client,
    endpoint: Url,
}

fn all_countries_endpoint(base_url: &str) -> DirectoryResult<Url> {
    let mut base = Url::parse(base_url)
        .map_err(|e| DirectoryError::InvalidUrl(format!("{base_url}: {e}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(ALL_COUNTRIES_PATH)
        .map_err(|e| DirectoryError::InvalidUrl(format!("{base_url}: {e}")))
}

fn common_names(data: &Value) -> DirectoryResult<Vec<String>> {
    let records = data
        .as_array()
        .ok_or_else(|| DirectoryError::Decode("expected a JSON array of countries".to_string()))?;

    let names: Vec<String> = records
        .iter()
        .filter_map(|record| Some(record.get("name")?.get("common")?.as_str()?.to_string()))
        .collect();

    let skipped = records.len() - names.len();
    if skipped > 0 {
        tracing::debug!(skipped, "Ignored country records without name.common");
    }
    Ok(names)
}

impl CountryDirectory {
    /// `timeout` bounds the whole request; `None` lets a slow directory
    /// keep the request pending for as long as the connection stays open.
    pub fn build(
        base_url: &str,
        connect_timeout: Duration,
        timeout: Option<Duration>,
    ) -> DirectoryResult<Self> {
        let endpoint = all_countries_endpoint(base_url)?;
        let mut builder = Client::builder()
            .user_agent(concat!("shipbook/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(connect_timeout);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches every country's common name, sorted for display.
    pub async fn fetch_country_names(&self) -> DirectoryResult<Vec<String>> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching country directory");
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let data: Value =
            serde_json::from_str(&body).map_err(|e| DirectoryError::Decode(e.to_string()))?;

        let mut names = common_names(&data)?;
        collation::sort_names(&mut names);
        tracing::info!(count = names.len(), "Loaded country directory");
        Ok(names)
    }
}
