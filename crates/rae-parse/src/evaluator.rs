use boa_engine::{Context, Source};
use thiserror::Error;

/// Iteration cap applied to every loop in a challenge program.
///
/// The brute-force challenges the service issues stay well under a million
/// iterations per loop.
pub const DEFAULT_LOOP_LIMIT: u64 = 10_000_000;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct EvaluationError(pub String);

/// Runs the challenge program extracted from a page.
///
/// `program` is a function body whose return value is the challenge
/// function. An implementation runs the body with no access to host state,
/// calls the function it returns and reports the result as a string.
pub trait ChallengeEvaluator: Send + Sync {
    fn evaluate(&self, program: &str) -> Result<String, EvaluationError>;
}

/// Evaluates challenges with the Boa JavaScript engine.
///
/// Every call gets a fresh [`Context`] holding only the ECMAScript
/// built-ins: no `document`, no `window`, no I/O.
#[derive(Debug, Clone)]
pub struct BoaEvaluator {
    loop_limit: u64,
}

impl BoaEvaluator {
    pub fn new() -> Self {
        Self::with_loop_limit(DEFAULT_LOOP_LIMIT)
    }

    pub fn with_loop_limit(loop_limit: u64) -> Self {
        Self { loop_limit }
    }
}

impl Default for BoaEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeEvaluator for BoaEvaluator {
    fn evaluate(&self, program: &str) -> Result<String, EvaluationError> {
        let mut context = Context::default();
        context
            .runtime_limits_mut()
            .set_loop_iteration_limit(self.loop_limit);

        let source = format!("(function () {{\n{program}\n}})()()");
        let value = context
            .eval(Source::from_bytes(source.as_bytes()))
            .map_err(|e| EvaluationError(e.to_string()))?;

        if value.is_undefined() || value.is_null() {
            return Err(EvaluationError("challenge produced no value".to_string()));
        }

        let text = value
            .to_string(&mut context)
            .map_err(|e| EvaluationError(e.to_string()))?;
        Ok(text.to_std_string_escaped())
    }
}
