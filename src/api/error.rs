//! API error types and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// 接口错误; 响应体为纯文本
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求体不是合法的小票 JSON
    #[error("Failed to parse receipt JSON")]
    MalformedReceipt(#[source] serde_json::Error),

    /// 路径不是 /receipts/{id}/points 形式
    #[error("Invalid path or method")]
    InvalidPath(String),

    #[error("Receipt not found")]
    ReceiptNotFound(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Not Found")]
    RouteNotFound,

    /// 响应序列化失败
    #[error("Failed to encode response JSON")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedReceipt(_) | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::ReceiptNotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::MalformedReceipt(e) => tracing::warn!("Rejected receipt body: {}", e),
            Self::InvalidPath(path) => tracing::warn!("Rejected lookup path: {}", path),
            Self::ReceiptNotFound(id) => tracing::debug!("Lookup for unknown receipt {}", id),
            Self::Encode(e) => tracing::error!("Response encoding failed: {}", e),
            Self::MethodNotAllowed | Self::RouteNotFound => {}
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
