pub mod id;

pub use id::{IdGenerator, UuidGenerator};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// 小票积分存储 (ID -> 积分), 进程内、无过期
///
/// 所有读写经由 [`DashMap`] 分片锁完成; 分配新 ID 时
/// "检查是否存在 + 插入" 在同一把分片锁内原子完成。
pub struct ReceiptStore {
    records: DashMap<String, i64>,
    ids: Arc<dyn IdGenerator>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::with_generator(Arc::new(UuidGenerator))
    }

    pub fn with_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            records: DashMap::new(),
            ids,
        }
    }

    /// 分配一个未被占用的 ID 并写入积分, 返回该 ID
    pub fn insert_new(&self, points: i64) -> String {
        loop {
            let candidate = self.ids.generate();
            match self.records.entry(candidate) {
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    slot.insert(points);
                    return id;
                }
                Entry::Occupied(taken) => {
                    tracing::warn!("Receipt id {} already allocated, regenerating", taken.key());
                }
            }
        }
    }

    /// 直接写入; 覆盖已有记录不是预期行为, 但不禁止
    pub fn put(&self, id: impl Into<String>, points: i64) {
        self.records.insert(id.into(), points);
    }

    pub fn get(&self, id: &str) -> Option<i64> {
        self.records.get(id).map(|entry| *entry.value())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}
