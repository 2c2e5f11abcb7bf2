// Config Domain Layer
//
// 配置领域层，包含配置实体和值对象

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
