use axum::{extract::State, http::header, response::IntoResponse};
use std::sync::Arc;

use crate::odata::MetadataProvider;
use crate::utils::error::ApiError;

/// `GET /odata/$metadata`
pub async fn get_metadata(
    State(metadata): State<Arc<MetadataProvider>>,
) -> Result<impl IntoResponse, ApiError> {
    let document = metadata.document().await?;

    Ok(([(header::CONTENT_TYPE, "application/xml")], document))
}
