use crate::{
    completion::{CompletionClient, CompletionRequest},
    prompt::critique_messages,
    sanitize::extract_component,
    technology::Technology,
    validate::{ValidationReport, validate_dependencies},
};

#[derive(Clone, Debug)]
pub struct RefineOutcome {
    pub report: ValidationReport,
    /// `Some(true)` when the critique produced a different version that was
    /// kept, `Some(false)` when it ran but the original stayed, `None` when the
    /// call failed.
    pub improved: Option<bool>,
}

/// Second round-trip asking the model to critique and fix its own output.
/// Never fails: any error keeps `original`.
pub async fn refine(
    client: &dyn CompletionClient,
    model: &str,
    temperature: f32,
    technology: Technology,
    original: ValidationReport,
) -> RefineOutcome {
    let request = CompletionRequest {
        model: model.to_string(),
        temperature,
        messages: critique_messages(&original.code, technology),
    };

    let raw = match client.complete(&request).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(
                technology = %technology,
                error = %err,
                "Refinement pass failed; keeping first draft"
            );
            return RefineOutcome {
                report: original,
                improved: None,
            };
        }
    };

    let candidate = match extract_component(&raw, technology) {
        Some(code) if !code.trim().is_empty() => validate_dependencies(&code, technology),
        _ => {
            tracing::debug!("Refinement returned no code; keeping first draft");
            return RefineOutcome {
                report: original,
                improved: Some(false),
            };
        }
    };
    if original.valid && !candidate.valid {
        tracing::debug!(
            violations = candidate.violations.len(),
            "Refinement introduced disallowed dependencies; keeping first draft"
        );
        return RefineOutcome {
            report: original,
            improved: Some(false),
        };
    }

    let improved = candidate.code != original.code;
    RefineOutcome {
        report: if improved { candidate } else { original },
        improved: Some(improved),
    }
}
