use crate::{FlowError, Result, SelectionState};
use pattern_catalog::{PatternRecord, Question};

/// Result of one accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// The candidate subset consistent with every selection so far.
    /// Empty is a legitimate terminal state, not an error.
    pub candidates: Vec<PatternRecord>,

    /// Set when this answer completed the question sequence with a
    /// non-empty subset: the `requirement` of the first resulting record,
    /// to be credited by the frequency tracker. Only a completed flow
    /// credits the final discriminating attribute.
    pub resolved: Option<String>,
}

/// Sequential constraint-filtering over the catalog.
///
/// States are `step ∈ [0, N]` for `N` questions: `step < N` accepts an
/// answer for `questions[step]`, `step == N` presents the final candidates.
/// `answer` advances by exactly one; `restart` is the only transition back.
pub struct FilterEngine {
    catalog: Vec<PatternRecord>,
    questions: Vec<Question>,
    selections: SelectionState,
    candidates: Vec<usize>,
    step: usize,
}

impl FilterEngine {
    pub fn new(catalog: Vec<PatternRecord>, questions: Vec<Question>) -> Self {
        let candidates = (0..catalog.len()).collect();
        Self {
            catalog,
            questions,
            selections: SelectionState::new(),
            candidates,
            step: 0,
        }
    }

    /// Engine over the reference three-step flow.
    pub fn with_default_flow(catalog: Vec<PatternRecord>) -> Self {
        Self::new(catalog, Question::default_flow())
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.step >= self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.step)
    }

    #[must_use]
    pub fn selections(&self) -> &SelectionState {
        &self.selections
    }

    #[must_use]
    pub fn candidates(&self) -> Vec<&PatternRecord> {
        self.candidates.iter().map(|&idx| &self.catalog[idx]).collect()
    }

    /// Distinct values of the current question's column across the current
    /// candidates, first-encountered order. Blank fields contribute no
    /// option; they stay in the candidate set and never match a concrete
    /// selection. Empty when the flow is complete or no candidates remain.
    #[must_use]
    pub fn current_options(&self) -> Vec<String> {
        let Some(question) = self.current_question() else {
            return Vec::new();
        };

        let mut options: Vec<String> = Vec::new();
        for &idx in &self.candidates {
            let value = self.catalog[idx].field(&question.column);
            if value.is_empty() {
                continue;
            }
            if !options.iter().any(|seen| seen.eq_ignore_ascii_case(value)) {
                options.push(value.to_string());
            }
        }
        options
    }

    /// Apply the answer for the current step.
    ///
    /// The candidate subset is recomputed from the full catalog as the
    /// records matching *every* selection made so far, not just the latest.
    /// Rejects answers for any column other than the current question's;
    /// rejection changes no state.
    pub fn answer(&mut self, column: &str, value: &str) -> Result<AnswerOutcome> {
        let Some(question) = self.questions.get(self.step) else {
            return Err(FlowError::FlowComplete);
        };
        if !question.column.eq_ignore_ascii_case(column) {
            return Err(FlowError::OutOfOrderAnswer {
                expected: question.column.clone(),
                got: column.to_string(),
            });
        }

        // Canonical column spelling comes from the question, not the caller.
        let selections = self
            .selections
            .with(question.column.clone(), value.to_string());
        let candidates: Vec<usize> = (0..self.catalog.len())
            .filter(|&idx| {
                selections
                    .iter()
                    .all(|(col, chosen)| self.catalog[idx].matches(col, chosen))
            })
            .collect();

        log::debug!(
            "{}={:?} narrowed candidates to {}",
            question.column,
            value,
            candidates.len()
        );

        self.selections = selections;
        self.candidates = candidates;
        if self.step < self.questions.len() {
            self.step += 1;
        }

        let resolved = if self.is_complete() {
            self.candidates
                .first()
                .map(|&idx| self.catalog[idx].requirement.clone())
                .filter(|requirement| !requirement.is_empty())
        } else {
            None
        };

        Ok(AnswerOutcome {
            candidates: self.candidate_records(),
            resolved,
        })
    }

    /// Reset to step 0 with the full catalog and no selections, regardless
    /// of prior history.
    pub fn restart(&mut self) {
        self.selections = SelectionState::new();
        self.candidates = (0..self.catalog.len()).collect();
        self.step = 0;
    }

    /// Owned snapshot of the candidate subset, for callers that outlive
    /// the borrow.
    #[must_use]
    pub fn candidate_records(&self) -> Vec<PatternRecord> {
        self.candidates
            .iter()
            .map(|&idx| self.catalog[idx].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(tool: &str, environment: &str, platform: &str, requirement: &str) -> PatternRecord {
        PatternRecord {
            tool: tool.to_string(),
            environment: environment.to_string(),
            platform: platform.to_string(),
            requirement: requirement.to_string(),
            ..Default::default()
        }
    }

    fn reference_catalog() -> Vec<PatternRecord> {
        vec![
            record("Azure", "prod", "cloud", "HA"),
            record("Dynatrace", "prod", "cloud", "monitoring"),
            record("SCOM", "nonprod", "onprem", "monitoring"),
        ]
    }

    #[test]
    fn narrows_the_reference_catalog_step_by_step() {
        let mut engine = FilterEngine::with_default_flow(reference_catalog());

        let first = engine.answer("Environment", "prod").unwrap();
        assert_eq!(first.candidates.len(), 2);
        assert_eq!(first.resolved, None);

        let second = engine.answer("Platform", "cloud").unwrap();
        assert_eq!(second.candidates.len(), 2);
        assert_eq!(second.resolved, None);

        let last = engine.answer("Requirement", "monitoring").unwrap();
        assert_eq!(last.candidates.len(), 1);
        assert_eq!(last.candidates[0].tool, "Dynatrace");
        assert_eq!(last.resolved.as_deref(), Some("monitoring"));
        assert!(engine.is_complete());
    }

    #[test]
    fn answers_compare_case_insensitively() {
        let mut engine = FilterEngine::with_default_flow(reference_catalog());
        let outcome = engine.answer("Environment", "PROD").unwrap();
        assert_eq!(outcome.candidates.len(), 2);
    }

    #[test]
    fn out_of_order_answer_changes_no_state() {
        let mut engine = FilterEngine::with_default_flow(reference_catalog());
        engine.answer("Environment", "prod").unwrap();

        let err = engine.answer("Requirement", "monitoring").unwrap_err();
        assert_eq!(
            err,
            FlowError::OutOfOrderAnswer {
                expected: "Platform".to_string(),
                got: "Requirement".to_string(),
            }
        );
        assert_eq!(engine.step(), 1);
        assert_eq!(engine.selections().len(), 1);
        assert_eq!(engine.candidates().len(), 2);
    }

    #[test]
    fn answering_past_the_last_question_is_rejected() {
        let mut engine = FilterEngine::with_default_flow(reference_catalog());
        engine.answer("Environment", "prod").unwrap();
        engine.answer("Platform", "cloud").unwrap();
        engine.answer("Requirement", "monitoring").unwrap();

        assert_eq!(
            engine.answer("Requirement", "monitoring").unwrap_err(),
            FlowError::FlowComplete
        );
    }

    #[test]
    fn zero_candidates_is_a_valid_state_not_an_error() {
        let mut engine = FilterEngine::with_default_flow(reference_catalog());
        let outcome = engine.answer("Environment", "staging").unwrap();
        assert_eq!(outcome.candidates, vec![]);
        assert_eq!(engine.current_options(), Vec::<String>::new());

        // The remaining steps still accept answers and stay empty.
        let outcome = engine.answer("Platform", "cloud").unwrap();
        assert_eq!(outcome.candidates, vec![]);
        let last = engine.answer("Requirement", "monitoring").unwrap();
        assert_eq!(last.candidates, vec![]);
        assert_eq!(last.resolved, None);
    }

    #[test]
    fn options_are_distinct_in_first_encountered_order() {
        let catalog = vec![
            record("A", "prod", "cloud", "HA"),
            record("B", "Prod", "cloud", "monitoring"),
            record("C", "nonprod", "onprem", "backup"),
            record("D", "", "cloud", "HA"),
        ];
        let engine = FilterEngine::with_default_flow(catalog);

        // Case variants collapse onto the first-seen spelling; blanks are
        // not offered.
        assert_eq!(engine.current_options(), vec!["prod", "nonprod"]);
    }

    #[test]
    fn resolved_event_credits_the_first_record_of_a_multi_match_final() {
        let catalog = vec![
            record("A", "prod", "cloud", "monitoring"),
            record("B", "prod", "cloud", "monitoring"),
        ];
        let mut engine = FilterEngine::with_default_flow(catalog);
        engine.answer("Environment", "prod").unwrap();
        engine.answer("Platform", "cloud").unwrap();
        let last = engine.answer("Requirement", "monitoring").unwrap();

        assert_eq!(last.candidates.len(), 2);
        assert_eq!(last.resolved.as_deref(), Some("monitoring"));
    }

    #[test]
    fn restart_returns_to_the_initial_state() {
        let mut engine = FilterEngine::with_default_flow(reference_catalog());
        engine.answer("Environment", "prod").unwrap();
        engine.answer("Platform", "cloud").unwrap();

        engine.restart();
        assert_eq!(engine.step(), 0);
        assert!(engine.selections().is_empty());
        assert_eq!(engine.candidates().len(), 3);
        assert_eq!(
            engine.current_question().map(|q| q.column.as_str()),
            Some("Environment")
        );
    }
}
