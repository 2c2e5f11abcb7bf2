// Config Value Objects
//
// 配置相关的值对象定义

use serde::{Deserialize, Serialize};

/// 持久化后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// 仅在进程内存中，重启后丢失
    Memory,
    /// 数据目录下每个键一个 JSON 文件
    #[default]
    File,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File => "file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_serde() {
        let json = serde_json::to_string(&StorageBackend::Memory).unwrap();
        assert_eq!(json, "\"memory\"");
        let backend: StorageBackend = serde_json::from_str("\"file\"").unwrap();
        assert_eq!(backend, StorageBackend::File);
    }
}
