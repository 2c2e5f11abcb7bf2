// Chat Observers - 会话观察者
//
// 两种观察方式：
// - ConversationSubscription: 进程内推送，过滤事件总线上的消息
// - ConversationPoller: 定时重新加载会话，跨进程可见

mod poller;
mod subscription;

pub use poller::*;
pub use subscription::*;
