// Professionals Domain Layer
// 领域层包含职业档案实体、信息流筛选规则和演示数据

mod feed;
mod profile;
mod seed;

pub use feed::*;
pub use profile::*;
pub use seed::*;
