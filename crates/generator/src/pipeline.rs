use std::sync::Arc;

use crate::{
    completion::{CompletionClient, CompletionError, CompletionRequest},
    prompt::assemble_messages,
    refine::refine,
    sanitize::sanitize,
    technology::Technology,
    validate::{Violation, validate_dependencies},
};

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub refine: bool,
    pub refine_temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.8,
            refine: true,
            refine_temperature: 0.2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub text: String,
    pub technology: Technology,
    pub current_code: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Generation {
    pub code: String,
    pub technology: Technology,
    pub valid: bool,
    pub violations: Vec<Violation>,
    pub improved: Option<bool>,
}

#[derive(Clone)]
pub struct Generator {
    client: Arc<dyn CompletionClient>,
    settings: GenerationSettings,
}

impl Generator {
    pub fn new(client: Arc<dyn CompletionClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Assemble, complete, sanitize, validate and optionally refine. Only the
    /// first completion call can fail the generation.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Generation, CompletionError> {
        let technology = request.technology;
        let completion = CompletionRequest {
            model: self.settings.model.clone(),
            temperature: self.settings.temperature,
            messages: assemble_messages(
                &request.text,
                technology,
                request.current_code.as_deref(),
            ),
        };

        let raw = self.client.complete(&completion).await?;
        let code = sanitize(&raw, technology);
        if code.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }
        let report = validate_dependencies(&code, technology);

        let (report, improved) = if self.settings.refine {
            let outcome = refine(
                self.client.as_ref(),
                &self.settings.model,
                self.settings.refine_temperature,
                technology,
                report,
            )
            .await;
            (outcome.report, outcome.improved)
        } else {
            (report, None)
        };

        tracing::debug!(
            technology = %technology,
            valid = report.valid,
            improved = ?improved,
            "Generated component"
        );

        Ok(Generation {
            code: report.code,
            technology,
            valid: report.valid,
            violations: report.violations,
            improved,
        })
    }
}
