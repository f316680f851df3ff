use crate::models::Receipt;
use crate::service::scoring;
use crate::store::ReceiptStore;

/// 小票积分服务: 计分 -> 分配 ID -> 存储, 以及按 ID 查询
pub struct ReceiptService {
    store: ReceiptStore,
}

impl ReceiptService {
    pub fn new(store: ReceiptStore) -> Self {
        Self { store }
    }

    /// 处理一张小票, 返回新分配的 ID
    pub fn process(&self, receipt: &Receipt) -> String {
        let points = scoring::compute_score(receipt);
        let id = self.store.insert_new(points);
        tracing::info!(
            "Receipt {} from {:?} scored {} points ({} items)",
            id,
            receipt.retailer,
            points,
            receipt.items.len()
        );
        id
    }

    pub fn points(&self, id: &str) -> Option<i64> {
        self.store.get(id)
    }
}

impl Default for ReceiptService {
    fn default() -> Self {
        Self::new(ReceiptStore::new())
    }
}
