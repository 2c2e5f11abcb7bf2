// Triage Module - AI 分诊
//
// 根据求助描述建议职业和紧急程度：
// - domain: 分诊结果和紧急程度
// - ports: 分诊协作者端口
// - infrastructure: OpenAI 兼容适配器和禁用适配器
// - application: 带兜底的分诊服务

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::TriageService;
pub use domain::{TriageSuggestion, Urgency, FALLBACK_ADVICE, FALLBACK_URGENT_ADVICE};
pub use infrastructure::{create_triage_port, DisabledTriageAdapter, OpenAITriageAdapter};
pub use ports::{TriageError, TriagePort};
