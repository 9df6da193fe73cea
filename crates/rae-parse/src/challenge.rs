use crate::evaluator::{BoaEvaluator, ChallengeEvaluator};
use rae_model::{ChallengeForm, RaeError};
use regex::Regex;
use scraper::{Html, Selector};

/// Start of the challenge computation inside the page's second script.
const CHALLENGE_MARKER: &str = "function challenge()";

/// The statement through which the challenge hands its answer to the form.
const ANSWER_ASSIGNMENT: &str = r"document\.forms\[0\]\.elements\[1\]\.value\s*=\s*";

/// Solve the challenge in an initial response and fill in its form, using
/// the default [`BoaEvaluator`].
pub fn parse_challenge(html: &str) -> Result<ChallengeForm, RaeError> {
    parse_challenge_with(html, &BoaEvaluator::default())
}

/// Solve the challenge in an initial response and fill in its form.
///
/// Fails with [`RaeError::ChallengeExtraction`] when the challenge script
/// cannot be found and with [`RaeError::Parser`] when it fails to evaluate.
pub fn parse_challenge_with(
    html: &str,
    evaluator: &dyn ChallengeEvaluator,
) -> Result<ChallengeForm, RaeError> {
    let document = Html::parse_document(html);

    let script = challenge_script(&document)?;
    let program = challenge_program(&script)?;
    tracing::debug!(bytes = program.len(), "Extracted challenge program");

    let code = evaluator
        .evaluate(&program)
        .map_err(|e| RaeError::Parser(e.to_string()))?;
    tracing::debug!(code = %code, "Solved challenge");

    let form = collect_form(&document, &code);
    tracing::debug!(fields = form.len(), "Built challenge form");
    Ok(form)
}

/// Text of the second `<script>` element in document order.
fn challenge_script(document: &Html) -> Result<String, RaeError> {
    let script_sel = Selector::parse("script").expect("valid selector");
    let script = document
        .select(&script_sel)
        .nth(1)
        .ok_or(RaeError::ChallengeExtraction)?;

    let text: String = script.text().collect();
    if text.trim().is_empty() {
        return Err(RaeError::ChallengeExtraction);
    }
    Ok(text)
}

/// Turn the script into a function body that returns the challenge function,
/// with the form assignment rewritten into a `return`.
fn challenge_program(script: &str) -> Result<String, RaeError> {
    let start = script
        .find(CHALLENGE_MARKER)
        .ok_or(RaeError::ChallengeExtraction)?;
    let snippet = &script[start..];

    let assignment = Regex::new(ANSWER_ASSIGNMENT).expect("valid regex");
    if !assignment.is_match(snippet) {
        return Err(RaeError::ChallengeExtraction);
    }
    let snippet = assignment.replacen(snippet, 1, "return ");

    Ok(format!("return {snippet}"))
}

/// One entry per named `input` under `body`, in document order. Inputs
/// without a value take the challenge code.
fn collect_form(document: &Html, code: &str) -> ChallengeForm {
    let input_sel = Selector::parse("body input").expect("valid selector");
    let mut form = ChallengeForm::new();

    for input in document.select(&input_sel) {
        let element = input.value();
        let Some(name) = element.attr("name") else {
            tracing::debug!("Skipping input without a name");
            continue;
        };
        let value = element
            .attr("value")
            .filter(|v| !v.is_empty())
            .unwrap_or(code);
        form.insert(name, value);
    }

    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::EvaluationError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed code and counts how often it was asked.
    struct StubEvaluator {
        code: &'static str,
        calls: AtomicUsize,
    }

    impl StubEvaluator {
        fn new(code: &'static str) -> Self {
            Self { code, calls: AtomicUsize::new(0) }
        }
    }

    impl ChallengeEvaluator for StubEvaluator {
        fn evaluate(&self, _program: &str) -> Result<String, EvaluationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.code.to_string())
        }
    }

    struct FailingEvaluator;

    impl ChallengeEvaluator for FailingEvaluator {
        fn evaluate(&self, _program: &str) -> Result<String, EvaluationError> {
            Err(EvaluationError("ReferenceError: table is not defined".into()))
        }
    }

    const CHALLENGE_PAGE: &str = r#"
        <html>
        <head>
          <script type="text/javascript" src="/TSPD/08a0.js"></script>
          <script type="text/javascript">
            function challenge() {
              var slt = "HsGx3Ljw";
              var c = 0;
              for (var i = 0; i < 10; i++) { c += i; }
              document.forms[0].elements[1].value= "aaab" + ":" + slt + ":" + c;
            }
            challenge();
            document.forms[0].submit();
          </script>
        </head>
        <body onload="challenge();">
          <form method="POST" action="">
            <input type="hidden" name="TS017111a7_id" value="3"/>
            <input type="hidden" name="TS017111a7_cr" value=""/>
            <input type="hidden" name="TS017111a7_76" value="0"/>
            <input type="hidden" name="TS017111a7_86" value="0"/>
            <input type="hidden" name="TS017111a7_md" value="1"/>
          </form>
        </body>
        </html>
    "#;

    #[test]
    fn test_solves_challenge_with_boa() {
        let form = parse_challenge(CHALLENGE_PAGE).unwrap();
        assert_eq!(form.get("TS017111a7_cr"), Some("aaab:HsGx3Ljw:45"));
        assert_eq!(
            form.to_form_body(),
            "TS017111a7_id=3&TS017111a7_cr=aaab:HsGx3Ljw:45&TS017111a7_76=0&TS017111a7_86=0&TS017111a7_md=1"
        );
    }

    #[test]
    fn test_stub_code_fills_valueless_input() {
        let stub = StubEvaluator::new("zzzz:salt:123");
        let form = parse_challenge_with(CHALLENGE_PAGE, &stub).unwrap();
        assert_eq!(form.len(), 5);
        assert_eq!(form.get("TS017111a7_cr"), Some("zzzz:salt:123"));
        assert_eq!(form.get("TS017111a7_id"), Some("3"));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reparsing_is_idempotent() {
        let first = parse_challenge(CHALLENGE_PAGE).unwrap();
        let second = parse_challenge(CHALLENGE_PAGE).unwrap();
        assert_eq!(first.to_form_body(), second.to_form_body());
    }

    #[test]
    fn test_missing_value_attribute_takes_code() {
        let html = r#"
            <html><head>
            <script></script>
            <script>function challenge() { document.forms[0].elements[1].value=1; }</script>
            </head><body>
              <input type="hidden" name="a" value="x">
              <input type="hidden" name="b">
              <input type="hidden" value="orphan">
            </body></html>
        "#;
        let form = parse_challenge_with(html, &StubEvaluator::new("42")).unwrap();
        assert_eq!(form.to_form_body(), "a=x&b=42");
    }

    #[test]
    fn test_no_scripts() {
        let html = "<html><body><input name='a'></body></html>";
        let err = parse_challenge_with(html, &StubEvaluator::new("1")).unwrap_err();
        assert_eq!(err, RaeError::ChallengeExtraction);
    }

    #[test]
    fn test_only_one_script() {
        let html = r#"
            <html><head>
            <script>function challenge() { document.forms[0].elements[1].value=1; }</script>
            </head><body><input name="a"></body></html>
        "#;
        let stub = StubEvaluator::new("1");
        let err = parse_challenge_with(html, &stub).unwrap_err();
        assert_eq!(err, RaeError::ChallengeExtraction);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_second_script_without_marker() {
        let html = r#"
            <html><head>
            <script src="/a.js"></script>
            <script>var analytics = true;</script>
            </head><body><input name="a"></body></html>
        "#;
        let err = parse_challenge_with(html, &StubEvaluator::new("1")).unwrap_err();
        assert_eq!(err, RaeError::ChallengeExtraction);
    }

    #[test]
    fn test_marker_without_form_assignment() {
        let html = r#"
            <html><head>
            <script src="/a.js"></script>
            <script>function challenge() { return 1; }</script>
            </head><body><input name="a"></body></html>
        "#;
        let err = parse_challenge_with(html, &StubEvaluator::new("1")).unwrap_err();
        assert_eq!(err, RaeError::ChallengeExtraction);
    }

    #[test]
    fn test_evaluation_fault_is_a_parser_error() {
        let err = parse_challenge_with(CHALLENGE_PAGE, &FailingEvaluator).unwrap_err();
        assert_eq!(
            err,
            RaeError::Parser("ReferenceError: table is not defined".into())
        );
    }

    #[test]
    fn test_program_rewrites_first_assignment_only() {
        let script = "var x; function challenge() { document.forms[0].elements[1].value = 5; } \
                      document.forms[0].elements[1].value=6;";
        let program = challenge_program(script).unwrap();
        assert!(program.starts_with("return function challenge()"));
        assert!(program.contains("{ return 5; }"));
        assert!(program.contains("document.forms[0].elements[1].value=6;"));
    }
}
