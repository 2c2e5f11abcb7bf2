use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 密码摘要
///
/// 值对象：SHA-256 小写十六进制字符串。明文密码只在计算摘要时短暂出现，从不持久化
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// 计算明文密码的摘要
    pub fn digest(plain_text: &str) -> Self {
        Self(hex::encode(Sha256::digest(plain_text.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// 不在日志里输出摘要
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
