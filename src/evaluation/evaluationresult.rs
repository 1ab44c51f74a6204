use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub input: f64,
    pub output: f64
}

impl EvaluationResult {
    pub fn new(input: f64, output: f64) -> EvaluationResult {
        EvaluationResult { input, output }
    }

    /// Legend text used for the plot marker.
    pub fn marker_label(&self) -> String {
        format!("Input: {:.2}, Output: {:.4}", self.input, self.output)
    }
}
