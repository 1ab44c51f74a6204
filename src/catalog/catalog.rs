use std::collections::HashMap;

use crate::activation::activationfunction::ActivationFunction;
use crate::activation::domain::Domain;
use crate::catalog::functionspec::{
    FunctionSpec,
    FunctionSummary
};
use crate::evaluation::evaluationerror::EvaluationError;

pub const DEFAULT_FUNCTION_ID: &str = "sigmoid";

/// Read-only table of the supported activation functions.
///
/// Entries keep their insertion order for listing; lookups go through an
/// id index.
pub struct Catalog {
    specs: Vec<FunctionSpec>,
    index: HashMap<&'static str, usize>
}

impl Catalog {
    fn from_specs(specs: Vec<FunctionSpec>) -> Catalog {
        let index = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.id(), i))
            .collect();
        Catalog { specs, index }
    }

    pub fn standard() -> Catalog {
        Catalog::from_specs(vec![
            FunctionSpec::new("sigmoid", "Sigmoid", Domain::new(-10.0, 10.0), ActivationFunction::Sigmoid),
            FunctionSpec::new("tanh", "Tanh", Domain::new(-5.0, 5.0), ActivationFunction::Tanh),
            FunctionSpec::new("relu", "ReLU", Domain::new(-5.0, 5.0), ActivationFunction::Relu),
            FunctionSpec::new("leaky_relu", "Leaky ReLU", Domain::new(-5.0, 5.0), ActivationFunction::leaky_relu()),
            FunctionSpec::new("swish", "Swish", Domain::new(-5.0, 5.0), ActivationFunction::Swish),
            FunctionSpec::new("gelu", "GELU", Domain::new(-3.0, 3.0), ActivationFunction::Gelu),
            FunctionSpec::new("elu", "ELU", Domain::new(-3.0, 5.0), ActivationFunction::elu())
        ])
    }

    pub fn lookup(&self, id: &str) -> Result<&FunctionSpec, EvaluationError> {
        self.index.get(id).map_or(
            Err(EvaluationError::UnknownFunction(id.to_owned())),
            |&i| Ok(&self.specs[i])
        )
    }

    pub fn entries(&self) -> &[FunctionSpec] {
        &self.specs
    }

    pub fn summaries(&self) -> Vec<FunctionSummary> {
        self.specs.iter().map(FunctionSpec::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
