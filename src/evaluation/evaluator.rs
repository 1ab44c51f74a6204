use crate::catalog::catalog::Catalog;
use crate::catalog::functionspec::FunctionSpec;
use crate::evaluation::curve::Curve;
use crate::evaluation::evaluationerror::EvaluationError;
use crate::evaluation::evaluationresult::EvaluationResult;

pub const DEFAULT_GRID_SIZE: usize = 1000;

pub fn sample_curve(spec: &FunctionSpec, grid_size: usize) -> Curve {
    let xs = spec.domain().linspace(grid_size);
    let ys = spec.formula().values(&xs);
    Curve::new(xs, ys)
}

pub fn evaluate_point(spec: &FunctionSpec, x: f64) -> f64 {
    spec.formula().value(x)
}

/// Drops `_` separators that sit between two digits, as in `1_000`.
/// Any other underscore makes the text unparseable.
fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut stripped = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            stripped.push(c);
            continue;
        }
        let between_digits = i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(char::is_ascii_digit);
        if !between_digits {
            return None;
        }
    }
    Some(stripped)
}

/// Parses a raw query value. Missing, non-numeric and non-finite values are
/// rejected.
pub fn parse_input(raw: Option<&str>) -> Result<f64, EvaluationError> {
    let text = raw.ok_or_else(|| EvaluationError::InvalidInput(String::new()))?;
    let parsed = strip_digit_separators(text.trim()).and_then(|digits| digits.parse::<f64>().ok());
    match parsed {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(EvaluationError::InvalidInput(text.to_owned()))
    }
}

pub fn calculate<'a>(catalog: &'a Catalog,
                     id: &str,
                     raw_input: Option<&str>) -> Result<(&'a FunctionSpec, EvaluationResult), EvaluationError> {
    let spec = catalog.lookup(id)?;
    let x = parse_input(raw_input)?;
    Ok((spec, EvaluationResult::new(x, evaluate_point(spec, x))))
}

/// Marker for a plot, or `None` when the input is missing, unparseable or
/// outside the plotted domain.
pub fn plot_marker(spec: &FunctionSpec, raw_input: Option<&str>) -> Option<EvaluationResult> {
    let x = parse_input(raw_input).ok()?;
    if !spec.domain().contains(x) {
        return None;
    }
    Some(EvaluationResult::new(x, evaluate_point(spec, x)))
}
