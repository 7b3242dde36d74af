use elasticsearch::Elasticsearch;
use elasticsearch::http::headers::HeaderMap;
use elasticsearch::http::request::JsonBody;
use elasticsearch::http::{Method, StatusCode};
use elasticsearch::indices::IndicesGetMappingParts;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::AppError;

/// Body of `GET /{index}/_mapping`, keyed by index name.
pub type MappingResponse = HashMap<String, IndexMappings>;

#[derive(Debug, Clone, Deserialize)]
pub struct IndexMappings {
    #[serde(default)]
    pub mappings: Map<String, Value>,
}

pub async fn fetch_mapping(
    client: &Elasticsearch,
    index_name: &str,
) -> Result<MappingResponse, AppError> {
    let response = client
        .indices()
        .get_mapping(IndicesGetMappingParts::Index(&[index_name]))
        .send()
        .await?;

    let status = response.status_code();
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::IndexNotFound(index_name.to_string()));
    }
    if !status.is_success() {
        let details = response.text().await?;
        return Err(AppError::FetchMapping {
            index: index_name.to_string(),
            status_code: status.as_u16(),
            details,
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Take the mapping of one type out of a fetched mapping document.
pub fn extract_mapping(
    mut mapping: MappingResponse,
    index_name: &str,
    mapping_type: &str,
) -> Result<Value, AppError> {
    let mut index = mapping
        .remove(index_name)
        .ok_or_else(|| AppError::IndexNotFound(index_name.to_string()))?;

    index
        .mappings
        .remove(mapping_type)
        .ok_or_else(|| AppError::MappingTypeNotFound {
            index: index_name.to_string(),
            mapping_type: mapping_type.to_string(),
        })
}

/// PUT `mapping` as `/{index}/_mapping/{type}`. Any non-success status is an error.
pub async fn put_mapping(
    client: &Elasticsearch,
    index_name: &str,
    mapping_type: &str,
    mapping: &Value,
) -> Result<StatusCode, AppError> {
    let path = format!("/{index_name}/_mapping/{mapping_type}");
    tracing::debug!("PUT {path}");

    let response = client
        .send(
            Method::Put,
            &path,
            HeaderMap::new(),
            Option::<&()>::None,
            Some(JsonBody::new(mapping)),
            None,
        )
        .await?;

    let status = response.status_code();
    tracing::info!("Mapping PUT response: {}", status.as_u16());

    if !status.is_success() {
        let details = response.text().await?;
        tracing::error!("Mapping PUT to {index_name} failed: {details}");
        return Err(AppError::PutMapping {
            index: index_name.to_string(),
            mapping_type: mapping_type.to_string(),
            status_code: status.as_u16(),
            details,
        });
    }

    Ok(status)
}
