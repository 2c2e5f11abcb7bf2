// Auth Ports Layer
// 端口定义了身份目录和会话持久化的抽象接口

mod identity_repository;
mod session_repository;

pub use identity_repository::*;
pub use session_repository::*;
