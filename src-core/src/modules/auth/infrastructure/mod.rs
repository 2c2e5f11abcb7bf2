// Auth Infrastructure Layer
// 基础设施层包含端口的具体实现

pub mod repositories;

pub use repositories::{StoreIdentityRepository, StoreSessionRepository};
