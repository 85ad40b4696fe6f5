pub mod calculators;
pub mod predictor;
