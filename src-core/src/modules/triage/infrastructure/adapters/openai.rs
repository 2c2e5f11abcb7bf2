// OpenAI 兼容分诊适配器
//
// 通过 chat/completions 接口调用模型，分诊请求使用 JSON 响应模式

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::modules::config::TriageConfig;
use crate::modules::triage::domain::TriageSuggestion;
use crate::modules::triage::ports::{TriageError, TriagePort};

const TRIAGE_SYSTEM_PROMPT: &str = "Você é o assistente de triagem do app AJUDE-IA. \
Responda em PORTUGUÊS DO BRASIL e apenas com um objeto JSON com os campos: \
'advice' (conselhos práticos de primeiros passos, no máximo 2 frases), \
'suggestedProfession' (UMA profissão chave, ex: Encanador, Psicólogo, Médico, Advogado), \
'urgency' ('Baixa', 'Média' ou 'Alta') e 'keywords' (3 palavras-chave).";

const URGENT_SYSTEM_PROMPT: &str = "Você é um assistente médico compassivo. \
Dê um conselho muito curto, calmo e claro (no máximo 2 frases) em português. \
Se parecer uma emergência, enfatize ligar imediatamente para o 192 (SAMU).";

/// OpenAI API 请求格式
#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// OpenAI API 响应格式
#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

/// OpenAI 兼容分诊适配器
pub struct OpenAITriageAdapter {
    client: Client,
    config: TriageConfig,
}

impl OpenAITriageAdapter {
    pub fn new(config: TriageConfig) -> Result<Self, TriageError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TriageError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取 API URL
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    fn build_request(&self, system: &str, user: String, json_mode: bool) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: user,
                },
            ],
            temperature: Some(0.3),
            response_format: json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        }
    }

    /// 发送补全请求并返回第一条回复内容
    async fn complete(&self, request: OpenAIRequest) -> Result<String, TriageError> {
        debug!("Sending triage request to model {}", request.model);

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| TriageError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Triage API error: {} - {}", status, error_text);

            if status.as_u16() == 401 {
                return Err(TriageError::AuthenticationError(
                    "Invalid API key".to_string(),
                ));
            }

            return Err(TriageError::ApiError {
                code: status.to_string(),
                message: error_text,
            });
        }

        let body: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| TriageError::InvalidResponse(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TriageError::InvalidResponse("No choices in response".to_string()))
    }
}

/// 解析模型返回的分诊 JSON
///
/// 部分模型会把 JSON 包在 Markdown 代码块里
pub(crate) fn parse_suggestion(content: &str) -> Result<TriageSuggestion, TriageError> {
    let trimmed = content.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(json).map_err(|e| TriageError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl TriagePort for OpenAITriageAdapter {
    fn name(&self) -> &str {
        "openai"
    }

    async fn suggest(&self, problem: &str) -> Result<TriageSuggestion, TriageError> {
        let request = self.build_request(
            TRIAGE_SYSTEM_PROMPT,
            format!("Pedido: \"{}\"", problem),
            true,
        );
        let content = self.complete(request).await?;
        parse_suggestion(&content)
    }

    async fn urgent_advice(&self, symptoms: &str) -> Result<String, TriageError> {
        let request = self.build_request(
            URGENT_SYSTEM_PROMPT,
            format!("Sintomas/situação relatados: \"{}\"", symptoms),
            false,
        );
        let content = self.complete(request).await?;
        let advice = content.trim();
        if advice.is_empty() {
            return Err(TriageError::InvalidResponse("Empty advice".to_string()));
        }
        Ok(advice.to_string())
    }
}
