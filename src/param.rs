use std::fmt;

/// Scalar value substituted into a template placeholder.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Real(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// A stat entry in an outfit's parameter table: either a fixed value or a
/// value interpolated across the upgrade stages.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Param {
    Const(Value),
    /// Real-valued linear interpolation between two endpoints.
    Lerp { a: f64, b: f64 },
    /// Linear interpolation rounded to the nearest integer
    /// (ties away from zero, the `f64::round` convention).
    LerpRound { a: f64, b: f64 },
}

impl Param {
    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Const(value.into())
    }

    pub fn lerp(a: f64, b: f64) -> Self {
        Self::Lerp { a, b }
    }

    pub fn lerp_round(a: f64, b: f64) -> Self {
        Self::LerpRound { a, b }
    }

    /// Evaluate at normalized position `x` in `[0,1]`.
    ///
    /// Constants pass through unchanged. Interpolated params are exact at the
    /// endpoints: `sample(0.0)` yields `a` and `sample(1.0)` yields `b`.
    pub fn sample(&self, x: f64) -> Value {
        match self {
            Self::Const(v) => v.clone(),
            Self::Lerp { a, b } => Value::Real(lerp_at(*a, *b, x)),
            Self::LerpRound { a, b } => Value::Int(lerp_at(*a, *b, x).round() as i64),
        }
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Self::Const(Value::Int(v))
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Self::Const(Value::Real(v))
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Self::Const(Value::Text(v.to_string()))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

// Endpoints are returned verbatim so stage 0 and stage n-1 never pick up
// floating-point drift from the interpolation formula.
fn lerp_at(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        a
    } else if x >= 1.0 {
        b
    } else {
        a + x * (b - a)
    }
}

/// Normalized position of stage `k` among `n` stages: 0 for a singleton
/// sequence, else `k / (n - 1)`. The first stage is always 0 and the last
/// always 1.
pub fn stage_position(k: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        k as f64 / (n - 1) as f64
    }
}
