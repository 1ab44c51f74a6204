use serde::Serialize;

use crate::activation::activationfunction::ActivationFunction;
use crate::activation::domain::Domain;

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    id: &'static str,
    display_name: &'static str,
    domain: Domain,
    formula: ActivationFunction
}

/// What the catalog listing exposes for one entry.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub domain: (f64, f64)
}

impl FunctionSpec {
    pub const fn new(id: &'static str,
                     display_name: &'static str,
                     domain: Domain,
                     formula: ActivationFunction) -> FunctionSpec {
        FunctionSpec { id, display_name, domain, formula }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn formula(&self) -> ActivationFunction {
        self.formula
    }

    pub fn summary(&self) -> FunctionSummary {
        FunctionSummary {
            id: self.id,
            name: self.display_name,
            domain: (self.domain.min(), self.domain.max())
        }
    }
}
