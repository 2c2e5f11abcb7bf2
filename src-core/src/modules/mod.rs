// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - storage: 键值存储端口与适配器
// - auth: 会话存储和身份目录
// - chat: 会话存储，处理消息和轮询
// - professionals: 职业档案、收藏和信息流
// - notifications: 应用内通知
// - triage: AI 分诊
// - config: 配置模块，处理应用设置

pub mod auth;
pub mod chat;
pub mod config;
pub mod notifications;
pub mod professionals;
pub mod storage;
pub mod triage;

pub use auth::AuthModule;
pub use chat::ChatModule;
pub use config::ConfigModule;
pub use notifications::NotificationCenter;
pub use professionals::ProfessionalsModule;
pub use triage::TriageService;
