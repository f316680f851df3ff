use uuid::Uuid;

/// 标识符生成器: 每次调用返回一个候选 ID, 唯一性由存储层确认
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// 随机 UUID v4 (122 位随机)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_are_hyphenated_v4() {
        let id = UuidGenerator.generate();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn uuid_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
