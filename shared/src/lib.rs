mod location;
mod prediction;

pub use location::{Location, Sex};
pub use prediction::{Prediction, PredictionResult, Probability, RiskLevel, UserInputs};
