//! Parsers for the two pages of an RAE lookup.
//!
//! The first response carries a small JavaScript challenge and a hidden
//! form; [`parse_challenge`] solves the challenge and fills the form. The
//! second response carries the definitions; [`parse_result`] turns it into
//! a [`RetrievalResult`](rae_model::RetrievalResult).

pub mod challenge;
pub mod evaluator;
pub mod normalize;
pub mod result;

pub use challenge::{parse_challenge, parse_challenge_with};
pub use evaluator::{BoaEvaluator, ChallengeEvaluator, EvaluationError};
pub use result::{parse_result, parse_result_with};
