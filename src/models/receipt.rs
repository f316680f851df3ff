use serde::{Deserialize, Serialize};

/// 小票明细行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String, // 十进制字符串, 如 "6.49"
}

/// 提交的购物小票 (仅在一次计分请求内存在)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String, // YYYY-MM-DD
    pub purchase_time: String, // HH:MM, 24h
    pub items: Vec<Item>,
    pub total: String,
}

/// POST /receipts/process 响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// GET /receipts/{id}/points 响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}
