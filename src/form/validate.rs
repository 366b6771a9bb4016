use std::fmt;

/// Lower bound a numeric field must respect.
///
/// An inclusive bound accepts `limit` itself, an exclusive one rejects it.
/// The message wording follows the kind ("greater than or equal to" vs
/// "greater than").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    pub limit: f64,
    pub inclusive: bool,
}

impl Constraint {
    pub const fn at_least(limit: f64) -> Self {
        Self {
            limit,
            inclusive: true,
        }
    }

    pub const fn above(limit: f64) -> Self {
        Self {
            limit,
            inclusive: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationFailure {
    Missing,
    NotNumeric,
    BelowLimit { limit: f64, inclusive: bool },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::Missing => f.write_str("Please enter a value."),
            ValidationFailure::NotNumeric => f.write_str("Value must be numeric."),
            ValidationFailure::BelowLimit { limit, inclusive } => {
                let qualifier = if *inclusive {
                    "greater than or equal to"
                } else {
                    "greater than"
                };
                write!(f, "Value must be {qualifier} {}.", trim_float(*limit))
            }
        }
    }
}

/// Checks one raw field value and returns the parsed number when it passes.
pub fn check(value: &str, constraint: Option<Constraint>) -> Result<f64, ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::Missing);
    }
    let v = parse_number(value).ok_or(ValidationFailure::NotNumeric)?;
    if let Some(c) = constraint {
        let below = if c.inclusive {
            v < c.limit
        } else {
            v <= c.limit
        };
        if below {
            return Err(ValidationFailure::BelowLimit {
                limit: c.limit,
                inclusive: c.inclusive,
            });
        }
    }
    Ok(v)
}

/// Error text for a raw value; the empty string means the value is valid.
pub fn validate(value: &str, constraint: Option<Constraint>) -> String {
    match check(value, constraint) {
        Ok(_) => String::new(),
        Err(failure) => failure.to_string(),
    }
}

// Accepts decimal literals only: `inf`, `nan` and blank text are rejected.
fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{v:.0}");
    }
    let mut s = format!("{v:.6}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
