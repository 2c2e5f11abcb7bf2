use serde::{Deserialize, Deserializer, Serialize};

/// 无法自动分析时给出的建议
pub const FALLBACK_ADVICE: &str =
    "Não conseguimos analisar automaticamente. Veja os profissionais abaixo.";

/// 紧急建议无法生成时给出的提示
pub const FALLBACK_URGENT_ADVICE: &str =
    "Não foi possível conectar ao assistente inteligente. Por favor, dirija-se a um hospital imediatamente se for urgente.";

/// 紧急程度
///
/// 读取时不区分大小写，接受不带重音和英文的写法；无法识别的值按 `Baixa` 处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Urgency {
    #[default]
    Baixa,
    #[serde(rename = "Média")]
    Media,
    Alta,
}

impl Urgency {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "média" | "media" | "medium" => Urgency::Media,
            "alta" | "high" => Urgency::Alta,
            _ => Urgency::Baixa,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Baixa => "Baixa",
            Urgency::Media => "Média",
            Urgency::Alta => "Alta",
        }
    }
}

impl<'de> Deserialize<'de> for Urgency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(Urgency::from_label).unwrap_or_default())
    }
}

/// AI 分诊结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSuggestion {
    /// 立即可执行的建议
    pub advice: String,
    /// 建议寻找的职业，空字符串表示没有建议
    #[serde(default)]
    pub suggested_profession: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl TriageSuggestion {
    pub fn fallback() -> Self {
        Self {
            advice: FALLBACK_ADVICE.to_string(),
            suggested_profession: String::new(),
            urgency: Urgency::Baixa,
            keywords: Vec::new(),
        }
    }

    pub fn has_profession(&self) -> bool {
        !self.suggested_profession.trim().is_empty()
    }
}
