use elasticsearch::Elasticsearch;
use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use elasticsearch::indices::{IndicesCreateParts, IndicesGetParts};
use url::Url;

use crate::config::Config;
use crate::error::AppError;

pub fn create_client(config: &Config) -> Result<Elasticsearch, AppError> {
    let url = Url::parse(&config.base_url())?;
    let pool = SingleNodeConnectionPool::new(url);
    let transport = TransportBuilder::new(pool).disable_proxy().build()?;
    Ok(Elasticsearch::new(transport))
}

/// Create `index_name` unless a GET on it already succeeds.
pub async fn ensure_index(client: &Elasticsearch, index_name: &str) -> Result<(), AppError> {
    let exists = client
        .indices()
        .get(IndicesGetParts::Index(&[index_name]))
        .send()
        .await?;

    if exists.status_code().is_success() {
        tracing::debug!("Index {index_name} already exists");
        return Ok(());
    }

    tracing::info!("Index {index_name} doesn't exist yet. Creating it.");
    let response = client
        .indices()
        .create(IndicesCreateParts::Index(index_name))
        .send()
        .await?;

    let status = response.status_code();
    if !status.is_success() {
        let details = response.text().await?;
        tracing::error!("Unable to create index {index_name}: {details}");
        return Err(AppError::CreateIndex {
            index: index_name.to_string(),
            status_code: status.as_u16(),
            details,
        });
    }

    tracing::info!("Created index {index_name}");
    Ok(())
}
