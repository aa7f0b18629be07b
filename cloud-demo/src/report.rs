//! Per-step outcomes and the final run report
//!
//! Every workflow step records an explicit outcome instead of swallowing
//! its error; the report aggregates them into a partial-success summary.

use std::fmt::Write as _;

use serde::Serialize;
use strum::Display;

/// Workflow steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Launch the demo compute instance
    CreateInstance,
    /// Create the timestamped demo bucket
    CreateBucket,
    /// Create the demo queue
    CreateQueue,
    /// Poll until created resources are visible
    SettleWait,
    /// List instances, buckets, and queues
    EnumerateResources,
    /// Upload the empty demo object
    UploadObject,
    /// Send, count, receive, and re-count queue messages
    QueueExercise,
    /// Terminate all instances
    TerminateInstances,
    /// Empty and delete all buckets
    DeleteBuckets,
    /// Delete all queues
    DeleteQueues,
    /// Poll until torn-down resources are gone
    DrainWait,
    /// List what remains after teardown
    FinalEnumeration,
}

/// Result of one step
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepResult {
    /// The step completed
    Success {
        /// Human-readable summary of what happened
        detail: String,
    },
    /// The step failed; the run still continued
    Failure {
        /// Rendered error
        error: String,
    },
}

/// One recorded step outcome
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// Which step this outcome belongs to
    pub step: Step,
    /// How the step ended
    #[serde(flatten)]
    pub result: StepResult,
}

/// Aggregated outcomes for one run
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    outcomes: Vec<StepOutcome>,
}

impl RunReport {
    /// Records a successful step
    pub fn record_success(&mut self, step: Step, detail: impl Into<String>) {
        self.outcomes.push(StepOutcome {
            step,
            result: StepResult::Success {
                detail: detail.into(),
            },
        });
    }

    /// Records a failed step
    pub fn record_failure(&mut self, step: Step, error: impl std::fmt::Display) {
        self.outcomes.push(StepOutcome {
            step,
            result: StepResult::Failure {
                error: error.to_string(),
            },
        });
    }

    /// All recorded outcomes, in execution order
    #[must_use]
    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    /// Steps that failed, in execution order
    #[must_use]
    pub fn failed_steps(&self) -> Vec<Step> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.result, StepResult::Failure { .. }))
            .map(|outcome| outcome.step)
            .collect()
    }

    /// Whether every recorded step succeeded
    #[must_use]
    pub fn is_full_success(&self) -> bool {
        self.failed_steps().is_empty()
    }

    /// Renders the human-readable report
    #[must_use]
    pub fn render(&self) -> String {
        let failed = self.failed_steps().len();
        let total = self.outcomes.len();

        let mut out = format!(
            "Run report: {}/{} steps succeeded\n",
            total - failed,
            total
        );
        for outcome in &self.outcomes {
            match &outcome.result {
                StepResult::Success { detail } => {
                    let _ = writeln!(out, "  ok    {:<20} {detail}", outcome.step.to_string());
                }
                StepResult::Failure { error } => {
                    let _ = writeln!(out, "  FAIL  {:<20} {error}", outcome.step.to_string());
                }
            }
        }
        out
    }

    /// Renders the report as JSON
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mixed_report() -> RunReport {
        let mut report = RunReport::default();
        report.record_success(Step::CreateInstance, "i-0abc");
        report.record_failure(Step::CreateQueue, "Failed to create queue");
        report.record_success(Step::DeleteQueues, "deleted 0 queues");
        report
    }

    #[test]
    fn partial_failure_is_not_full_success() {
        let report = mixed_report();

        assert!(!report.is_full_success());
        assert_eq!(report.failed_steps(), vec![Step::CreateQueue]);
        assert_eq!(report.outcomes().len(), 3);
    }

    #[test]
    fn all_success_report() {
        let mut report = RunReport::default();
        report.record_success(Step::CreateBucket, "bucket1-1700000000000");

        assert!(report.is_full_success());
        assert!(report.failed_steps().is_empty());
    }

    #[test]
    fn render_shows_both_outcomes() {
        let rendered = mixed_report().render();

        assert!(rendered.starts_with("Run report: 2/3 steps succeeded"));
        assert!(rendered.contains("ok    create-instance"));
        assert!(rendered.contains("FAIL  create-queue"));
    }

    #[test]
    fn json_carries_step_and_status() {
        let json = mixed_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let outcomes = value["outcomes"].as_array().unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0]["step"], "create-instance");
        assert_eq!(outcomes[0]["status"], "success");
        assert_eq!(outcomes[1]["status"], "failure");
    }
}
