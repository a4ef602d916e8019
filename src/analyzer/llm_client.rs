use crate::analyzer::prompts::PromptTemplate;
use crate::analyzer::response::parse_count_response;
use crate::error::TallyError;
use crate::models::GenderCounts;
use futures::future::BoxFuture;
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionModel};
use rig::providers::{anthropic, gemini, openai};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub model_name: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Counts produced by a remote provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartCounts {
    pub counts: GenderCounts,
    pub model_used: String,
    pub duration_ms: u64,
}

/// A remote classifier. Slow and fallible; never required by the local path.
pub trait AnalysisProvider: Send + Sync {
    fn analyze<'a>(
        &'a self,
        text: &'a str,
    ) -> BoxFuture<'a, Result<SmartCounts, TallyError>>;
    fn get_model_name(&self) -> &str;
    fn get_timeout(&self) -> Duration;
}

pub struct RigLlmClient {
    config: LlmConfig,
    provider: RigProvider,
}

enum RigProvider {
    OpenAI(openai::Client),
    Anthropic(anthropic::Client),
    Gemini(gemini::Client),
}

impl RigLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, TallyError> {
        let provider = create_provider(&config)?;
        Ok(Self { config, provider })
    }

    /// Model id without the optional `provider/` routing prefix.
    fn api_model_name(&self) -> &str {
        let name = self.config.model_name.trim();
        ["gemini/", "openai/", "anthropic/"]
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix))
            .unwrap_or(name)
    }

    async fn make_api_request(&self, text: &str) -> Result<String, TallyError> {
        let prompt = PromptTemplate::build_count_prompt(text);
        let system_prompt = PromptTemplate::build_system_prompt();

        match &self.provider {
            RigProvider::OpenAI(client) => {
                let model = client.completion_model(self.api_model_name());
                self.send_completion_request(model, &prompt, system_prompt).await
            }
            RigProvider::Anthropic(client) => {
                let model = client.completion_model(self.api_model_name());
                self.send_completion_request(model, &prompt, system_prompt).await
            }
            RigProvider::Gemini(client) => {
                let model = client.completion_model(self.api_model_name());
                self.send_completion_request(model, &prompt, system_prompt).await
            }
        }
    }

    async fn send_completion_request<M: CompletionModel>(
        &self,
        model: M,
        prompt: &str,
        system_prompt: String,
    ) -> Result<String, TallyError> {
        let mut builder = model.completion_request(prompt).preamble(system_prompt);

        // Reasoning models reject an explicit temperature.
        if let Some(temp) = self.config.temperature {
            if !self.config.model_name.starts_with("gpt-5") && !self.config.model_name.starts_with("o1") {
                builder = builder.temperature(temp as f64);
            }
        }

        if let Some(max_tokens) = self.config.max_tokens {
            builder = builder.max_tokens(max_tokens as u64);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TallyError::LlmClientError(format!("Request failed: {}", e)))?;

        let mut extracted_text = String::new();
        for content in response.choice.iter() {
            if let AssistantContent::Text(text_content) = content {
                extracted_text.push_str(&text_content.text);
            }
        }

        Ok(extracted_text)
    }
}

impl AnalysisProvider for RigLlmClient {
    fn analyze<'a>(
        &'a self,
        text: &'a str,
    ) -> BoxFuture<'a, Result<SmartCounts, TallyError>> {
        Box::pin(async move {
            let start_time = std::time::Instant::now();

            let response_content = self.make_api_request(text).await?;
            tracing::debug!(response = %response_content, "raw smart analysis response");

            let counts = parse_count_response(&response_content)?;

            Ok(SmartCounts {
                counts,
                model_used: self.config.model_name.clone(),
                duration_ms: start_time.elapsed().as_millis() as u64,
            })
        })
    }

    fn get_model_name(&self) -> &str {
        &self.config.model_name
    }

    fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }
}

fn resolve_api_key(config: &LlmConfig, env_vars: &[&str], provider: &str) -> Result<String, TallyError> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            env_vars
                .iter()
                .find_map(|var| std::env::var(var).ok().filter(|key| !key.trim().is_empty()))
        })
        .ok_or_else(|| {
            TallyError::Config(format!(
                "{} API key is missing. Set {} or pass --api-key",
                provider,
                env_vars.join(" or ")
            ))
        })
}

fn create_provider(config: &LlmConfig) -> Result<RigProvider, TallyError> {
    let model_name = config.model_name.trim();

    if is_gemini_model(model_name) {
        let api_key = resolve_api_key(config, &["GEMINI_API_KEY", "API_KEY"], "Gemini")?;
        Ok(RigProvider::Gemini(gemini::Client::new(&api_key)))
    } else if is_openai_model(model_name) {
        let api_key = resolve_api_key(config, &["OPENAI_API_KEY"], "OpenAI")?;
        Ok(RigProvider::OpenAI(openai::Client::new(&api_key)))
    } else if is_claude_model(model_name) {
        let api_key = resolve_api_key(config, &["ANTHROPIC_API_KEY"], "Anthropic")?;
        Ok(RigProvider::Anthropic(anthropic::Client::new(&api_key)))
    } else {
        Err(TallyError::Config(format!(
            "Unsupported model '{}'. Use Gemini (gemini-*), OpenAI (gpt-*) or Anthropic (claude-*) models",
            model_name
        )))
    }
}

pub fn create_analysis_client(
    model: &str,
    api_key: Option<String>,
    timeout_seconds: u64,
) -> Result<Box<dyn AnalysisProvider>, TallyError> {
    let config = LlmConfig {
        model_name: model.to_string(),
        api_key,
        timeout_seconds,
        max_tokens: Some(256),
        temperature: Some(0.0),
    };

    let client = RigLlmClient::new(config)?;
    Ok(Box::new(client))
}

fn is_openai_model(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    let candidate = candidate.strip_prefix("ft:").unwrap_or(candidate);

    candidate.starts_with("gpt-")
        || candidate.starts_with("chatgpt-")
        || candidate.starts_with("o1")
        || candidate.starts_with("o3")
        || candidate.starts_with("o4")
}

fn is_claude_model(model: &str) -> bool {
    let candidate = model.strip_prefix("anthropic/").unwrap_or(model);
    candidate.starts_with("claude-")
}

fn is_gemini_model(model: &str) -> bool {
    let candidate = model.strip_prefix("gemini/").unwrap_or(model);
    candidate.starts_with("gemini-")
}
