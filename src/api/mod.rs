pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::*;

use crate::service::ReceiptService;
use axum::{
    extract::DefaultBodyLimit,
    routing::{on, post, MethodFilter, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

/// 请求体上限 (与 axum 默认一致), 超出返回 413
pub const MAX_RECEIPT_BODY_BYTES: usize = 2 * 1024 * 1024;

/// 构建路由
///
/// `/receipts/process` 为静态路由, 优先于 `/receipts/*rest` 匹配;
/// 其余路径形状由 [`get_points`] 自行校验。
pub fn router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route(
            "/receipts/process",
            post(process_receipt).fallback(method_not_allowed),
        )
        .route("/receipts/", points_route())
        .route("/receipts/*rest", points_route())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new().layer(DefaultBodyLimit::max(MAX_RECEIPT_BODY_BYTES)),
        )
        .with_state(service)
}

/// 仅 GET (不含 HEAD), 其余方法 405
fn points_route() -> MethodRouter<Arc<ReceiptService>> {
    on(MethodFilter::GET, get_points).fallback(method_not_allowed)
}
