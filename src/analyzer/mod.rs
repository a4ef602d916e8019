// Analyzer module - optional remote (LLM) classification

pub mod llm_client;
pub mod prompts;
pub mod response;
pub mod session;

pub use llm_client::{create_analysis_client, AnalysisProvider, LlmConfig, SmartCounts, DEFAULT_MODEL};
pub use prompts::PromptTemplate;
pub use response::parse_count_response;
pub use session::{AnalysisSession, ApplyOutcome, Ticket};
