// Auth Domain Layer
// 领域层包含身份实体、密码摘要值对象和演示数据

pub mod entities;
pub mod seed;
pub mod value_objects;

pub use entities::{Identity, Role};
pub use seed::demo_identities;
pub use value_objects::PasswordHash;
