pub mod evaluator;
pub mod interpreter;
