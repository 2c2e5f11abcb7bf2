// Auth Commands - 命令定义和处理器

mod login;
mod logout;
mod register;
mod social_login;

pub use login::*;
pub use logout::*;
pub use register::*;
pub use social_login::*;
