use crate::api::error::ApiError;
use crate::models::{PointsResponse, ProcessResponse, Receipt};
use crate::service::ReceiptService;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

const RECEIPTS_PREFIX: &str = "/receipts/";

/// POST /receipts/process
///
/// 请求体按 JSON 解析, 不校验 Content-Type。
pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(ApiError::MalformedReceipt)?;
    let id = service.process(&receipt);
    json_ok(&ProcessResponse { id })
}

/// GET /receipts/{id}/points
pub async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let id = receipt_id_from_path(uri.path())
        .ok_or_else(|| ApiError::InvalidPath(uri.path().to_string()))?;

    let points = service
        .points(id)
        .ok_or_else(|| ApiError::ReceiptNotFound(id.to_string()))?;

    json_ok(&PointsResponse { points })
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// 从 /receipts/{id}/points 中取出 {id}; 形状不符返回 None
fn receipt_id_from_path(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(RECEIPTS_PREFIX)?;
    match rest.split('/').collect::<Vec<_>>().as_slice() {
        [id, "points"] if !id.is_empty() => Some(*id),
        _ => None,
    }
}

fn json_ok<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(ApiError::Encode)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_points_path() {
        assert_eq!(receipt_id_from_path("/receipts/abc-123/points"), Some("abc-123"));
    }

    #[test]
    fn rejects_malformed_points_paths() {
        for path in [
            "/receipts/abc",
            "/receipts/abc/score",
            "/receipts//points",
            "/receipts/a/b/points",
            "/receipts/abc/points/",
            "/other/abc/points",
        ] {
            assert_eq!(receipt_id_from_path(path), None, "path {}", path);
        }
    }
}
