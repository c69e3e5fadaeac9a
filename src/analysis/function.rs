//! Parametric functions of one variable.

use super::ObjectId;
use crate::error::{PlotError, Result};

/// Highest polynomial degree a `Pn` codelet may ask for.
pub const MAX_POLYNOMIAL_DEGREE: usize = 32;

/// Shape of a function, selected by its codelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `amplitude * exp(-0.5 * ((x - mean) / sigma)^2)`, codelet `G`.
    Gaussian,
    /// `amplitude * exp(exponent * x)`, codelet `E`.
    Exponential,
    /// Polynomial of the given degree, codelet `Pn`.
    Polynomial(usize),
}

impl FunctionKind {
    /// Parse a codelet such as `G`, `E` or `P2`.
    pub fn from_codelet(codelet: &str) -> Result<Self> {
        let code = codelet.trim();
        match code.to_ascii_uppercase().as_str() {
            "G" => Ok(Self::Gaussian),
            "E" => Ok(Self::Exponential),
            other => other
                .strip_prefix('P')
                .and_then(|degree| degree.parse::<usize>().ok())
                .filter(|&degree| degree <= MAX_POLYNOMIAL_DEGREE)
                .map(Self::Polynomial)
                .ok_or_else(|| PlotError::InvalidCodelet(code.to_string())),
        }
    }

    /// Codelet text.
    pub fn codelet(self) -> String {
        match self {
            Self::Gaussian => "G".to_string(),
            Self::Exponential => "E".to_string(),
            Self::Polynomial(n) => format!("P{}", n),
        }
    }

    /// Names of the parameters, in order.
    pub fn parameter_names(self) -> Vec<String> {
        match self {
            Self::Gaussian => vec!["amplitude".into(), "mean".into(), "sigma".into()],
            Self::Exponential => vec!["amplitude".into(), "exponent".into()],
            Self::Polynomial(n) => (0..=n).map(|i| format!("p{}", i)).collect(),
        }
    }

    fn default_parameters(self) -> Vec<f64> {
        match self {
            Self::Gaussian => vec![1.0, 0.0, 1.0],
            Self::Exponential => vec![1.0, -1.0],
            Self::Polynomial(n) => {
                let mut p = vec![0.0; n + 1];
                if n >= 1 {
                    p[1] = 1.0;
                }
                p
            },
        }
    }
}

/// A function of one variable with named parameters.
#[derive(Debug, Clone)]
pub struct Function {
    id: ObjectId,
    title: String,
    kind: FunctionKind,
    parameters: Vec<f64>,
}

impl Function {
    /// Build a function from a codelet with default parameters.
    pub fn from_codelet(title: impl Into<String>, codelet: &str) -> Result<Self> {
        let kind = FunctionKind::from_codelet(codelet)?;
        Ok(Self {
            id: ObjectId::next(),
            title: title.into(),
            kind,
            parameters: kind.default_parameters(),
        })
    }

    /// Gaussian with the given amplitude, mean and sigma.
    pub fn gaussian(title: impl Into<String>, amplitude: f64, mean: f64, sigma: f64) -> Self {
        Self {
            id: ObjectId::next(),
            title: title.into(),
            kind: FunctionKind::Gaussian,
            parameters: vec![amplitude, mean, sigma],
        }
    }

    /// Polynomial with coefficients in increasing power order.
    pub fn polynomial(title: impl Into<String>, coefficients: &[f64]) -> Self {
        let coefficients = if coefficients.is_empty() {
            vec![0.0]
        } else {
            coefficients.to_vec()
        };
        Self {
            id: ObjectId::next(),
            title: title.into(),
            kind: FunctionKind::Polynomial(coefficients.len() - 1),
            parameters: coefficients,
        }
    }

    /// Identity of this function.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Function title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Function shape.
    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// Number of variables.
    pub fn dimension(&self) -> usize {
        1
    }

    /// Parameter names.
    pub fn parameter_names(&self) -> Vec<String> {
        self.kind.parameter_names()
    }

    /// Current parameter values.
    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    /// Replace all parameters at once.
    pub fn set_parameters(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.parameters.len() {
            return Err(PlotError::ParameterCount {
                expected: self.parameters.len(),
                actual: values.len(),
            });
        }
        self.parameters.copy_from_slice(values);
        Ok(())
    }

    /// Set one parameter by name.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<()> {
        let idx = self
            .parameter_names()
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| PlotError::unknown_parameter(name))?;
        self.parameters[idx] = value;
        Ok(())
    }

    /// Evaluate at `x`.
    pub fn value(&self, x: f64) -> f64 {
        let p = &self.parameters;
        match self.kind {
            FunctionKind::Gaussian => {
                let sigma = p[2];
                if sigma == 0.0 {
                    return if x == p[1] { p[0] } else { 0.0 };
                }
                let z = (x - p[1]) / sigma;
                p[0] * (-0.5 * z * z).exp()
            },
            FunctionKind::Exponential => p[0] * (p[1] * x).exp(),
            // Horner
            FunctionKind::Polynomial(_) => p.iter().rev().fold(0.0, |acc, c| acc * x + c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codelets() {
        assert_eq!(FunctionKind::from_codelet("G").unwrap(), FunctionKind::Gaussian);
        assert_eq!(FunctionKind::from_codelet(" e ").unwrap(), FunctionKind::Exponential);
        assert_eq!(FunctionKind::from_codelet("p3").unwrap(), FunctionKind::Polynomial(3));
        assert!(matches!(
            FunctionKind::from_codelet("Q"),
            Err(PlotError::InvalidCodelet(_))
        ));
        assert!(FunctionKind::from_codelet("P").is_err());
    }

    #[test]
    fn rejects_oversized_polynomial_degrees() {
        let max = format!("P{}", MAX_POLYNOMIAL_DEGREE);
        assert_eq!(
            FunctionKind::from_codelet(&max).unwrap(),
            FunctionKind::Polynomial(MAX_POLYNOMIAL_DEGREE)
        );
        for codelet in [
            format!("P{}", MAX_POLYNOMIAL_DEGREE + 1),
            "P4000000000".to_string(),
            format!("P{}", usize::MAX),
        ] {
            assert!(matches!(
                Function::from_codelet("p", &codelet),
                Err(PlotError::InvalidCodelet(_))
            ));
        }
    }

    #[test]
    fn gaussian_peaks_at_mean() {
        let f = Function::gaussian("g", 10.0, 2.0, 0.5);
        assert_eq!(f.value(2.0), 10.0);
        assert!(f.value(3.0) < f.value(2.5));
    }

    #[test]
    fn polynomial_uses_increasing_powers() {
        let f = Function::polynomial("p", &[1.0, 2.0, 3.0]);
        assert_eq!(f.kind(), FunctionKind::Polynomial(2));
        assert_eq!(f.value(2.0), 1.0 + 4.0 + 12.0);
        assert_eq!(f.parameter_names(), vec!["p0", "p1", "p2"]);
    }

    #[test]
    fn parameter_updates_are_checked() {
        let mut f = Function::from_codelet("e", "E").unwrap();
        assert!(matches!(
            f.set_parameters(&[1.0]),
            Err(PlotError::ParameterCount { expected: 2, actual: 1 })
        ));
        f.set_parameter("exponent", 0.0).unwrap();
        assert_eq!(f.value(5.0), 1.0);
        assert!(f.set_parameter("sigma", 1.0).is_err());
    }
}
