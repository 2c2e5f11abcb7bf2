use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::PasswordHash;
use crate::shared::{timestamp_now, UserId};

const AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";

/// 社交登录专业人士的默认职业
pub const SOCIAL_PROFESSION: &str = "Profissional Verificado";

/// 身份角色
///
/// 存储格式与 Web 客户端一致：客户以 "user" 表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user", alias = "client")]
    Client,
    #[serde(rename = "professional")]
    Professional,
}

/// 身份实体
///
/// 邮箱在注册时全表唯一（区分大小写，不做空白规范化）；ID 分配后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    id: UserId,
    name: String,
    email: String,
    /// 密码摘要；社交登录身份没有密码
    #[serde(rename = "password", default, skip_serializing_if = "Option::is_none")]
    password_hash: Option<PasswordHash>,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(rename = "avatar", default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    /// 早期记录没有该字段，读取时以当前时间补齐
    #[serde(default = "timestamp_now", with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl Identity {
    /// 以指定 ID 创建身份（用于演示数据和测试）
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password_hash: None,
            role,
            profession: None,
            phone: None,
            avatar_url: None,
            created_at: timestamp_now(),
        }
    }

    /// 注册新身份：分配新 ID，计算密码摘要并生成头像地址
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
        role: Role,
    ) -> Self {
        let name = name.into();
        let avatar_url = avatar_url_for(&name);
        Self::new(UserId::generate(), name, email, role)
            .with_password(password)
            .with_avatar_url(avatar_url)
    }

    /// 由社交登录提供商合成身份
    ///
    /// 邮箱和 ID 都只由提供商名称决定，同一提供商重复登录得到同一个身份
    pub fn social(provider: &str, role: Role) -> Self {
        let provider = provider.trim();
        let key = provider.to_lowercase();

        let mut identity = Self::new(
            format!("social_{}", key),
            format!("Usuário {}", provider),
            social_email(provider),
            role,
        )
        .with_avatar_url(avatar_url_for(provider));

        if role == Role::Professional {
            identity = identity.with_profession(SOCIAL_PROFESSION);
        }
        identity
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password_hash = Some(PasswordHash::digest(password));
        self
    }

    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = non_empty(profession.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_empty(phone.into());
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = non_empty(avatar_url.into());
        self
    }

    // Getters
    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> Option<&PasswordHash> {
        self.password_hash.as_ref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn profession(&self) -> Option<&str> {
        self.profession.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 邮箱与密码摘要是否同时匹配；没有密码的身份永远不匹配
    pub fn matches_credentials(&self, email: &str, password_hash: &PasswordHash) -> bool {
        self.email == email && self.password_hash.as_ref() == Some(password_hash)
    }

    /// 去掉密码摘要的副本，用于会话
    pub fn sanitized(&self) -> Identity {
        Identity {
            password_hash: None,
            ..self.clone()
        }
    }
}

/// 社交登录提供商对应的合成邮箱
pub fn social_email(provider: &str) -> String {
    format!("user@{}.com", provider.trim().to_lowercase())
}

fn avatar_url_for(name: &str) -> String {
    format!(
        "{}?name={}&background=random",
        AVATAR_SERVICE_URL,
        name.trim().replace(' ', "+")
    )
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
