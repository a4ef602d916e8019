use crate::analyzer::llm_client::{create_analysis_client, AnalysisProvider, SmartCounts};
use crate::error::TallyError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::{timeout, Duration};

/// Identifies one smart-analysis request. Only the newest ticket may apply
/// its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub enum ApplyOutcome {
    Applied(SmartCounts),
    /// A newer request was started before this one finished.
    Stale,
    Failed(TallyError),
}

/// Runs remote analyses for one input surface.
///
/// Every `begin` supersedes earlier tickets, so a slow reply for old input is
/// dropped instead of overwriting the result for newer input. Failures never
/// replace the last good result.
pub struct AnalysisSession {
    provider: Arc<dyn AnalysisProvider>,
    timeout: Duration,
    generation: AtomicU64,
    last_good: Mutex<Option<SmartCounts>>,
}

impl AnalysisSession {
    pub fn new(provider: Arc<dyn AnalysisProvider>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            generation: AtomicU64::new(0),
            last_good: Mutex::new(None),
        }
    }

    pub fn from_model(
        model: &str,
        api_key: Option<String>,
        timeout_seconds: u64,
    ) -> Result<Self, TallyError> {
        let client = create_analysis_client(model, api_key, timeout_seconds)?;
        Ok(Self::new(client.into(), Duration::from_secs(timeout_seconds)))
    }

    pub fn model_name(&self) -> &str {
        self.provider.get_model_name()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate any in-flight request without starting a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Call the provider under the session timeout.
    pub async fn run(&self, text: &str) -> Result<SmartCounts, TallyError> {
        if text.trim().is_empty() {
            return Err(TallyError::AnalysisUnavailable(
                "nothing to analyze".to_string(),
            ));
        }

        timeout(self.timeout, self.provider.analyze(text))
            .await
            .map_err(|_| TallyError::AnalysisTimeout {
                timeout: self.timeout_seconds(),
            })?
    }

    // Whole seconds, rounded up so a sub-second timeout never reports 0.
    fn timeout_seconds(&self) -> u64 {
        self.timeout.as_secs() + u64::from(self.timeout.subsec_nanos() > 0)
    }

    pub fn apply(&self, ticket: Ticket, result: Result<SmartCounts, TallyError>) -> ApplyOutcome {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "dropping stale smart analysis result");
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(smart) => {
                let mut last_good = self
                    .last_good
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                *last_good = Some(smart.clone());
                ApplyOutcome::Applied(smart)
            }
            Err(err) => {
                tracing::warn!(error = %err, "smart analysis failed");
                ApplyOutcome::Failed(err)
            }
        }
    }

    /// `begin`, `run` and `apply` in one call.
    pub async fn analyze(&self, text: &str) -> ApplyOutcome {
        let ticket = self.begin();
        tracing::info!(model = self.model_name(), "starting smart analysis");
        let result = self.run(text).await;
        self.apply(ticket, result)
    }

    pub fn last_good(&self) -> Option<SmartCounts> {
        self.last_good
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
