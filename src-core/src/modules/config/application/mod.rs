// Config Application Layer
//
// 配置应用层，提供配置服务门面

pub mod service;

pub use service::*;
