//! Compose the prompt document and its progress record.

use crate::app::AppContext;
use crate::domain::{AnswerSet, StepCompletion, compose, step_completion};
use crate::ports::HistoryStore;

/// Result of composing an answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOutcome {
    pub document: String,
    pub completion: StepCompletion,
}

impl ComposeOutcome {
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }
}

pub fn execute<H: HistoryStore>(ctx: &AppContext<H>, answers: &AnswerSet) -> ComposeOutcome {
    ComposeOutcome {
        document: compose(answers, ctx.catalog()),
        completion: step_completion(answers, ctx.catalog()),
    }
}

/// One line per step, `[x]` or `[ ]`, followed by the percentage.
pub fn format_progress(completion: &StepCompletion) -> String {
    let mut out = String::new();
    for (step, done) in completion.iter() {
        out.push_str(if done { "[x] " } else { "[ ] " });
        out.push_str(step.display_name());
        out.push('\n');
    }
    out.push_str(&format!(
        "{}/{} steps complete ({}%)\n",
        completion.completed_count(),
        completion.total(),
        completion.percent()
    ));
    out
}
