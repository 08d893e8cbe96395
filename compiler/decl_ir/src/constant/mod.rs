//! Constant values and field initializer expressions.

use std::fmt;
use std::num::FpCategory;

/// A statically known constant value.
#[derive(Clone, PartialEq, Debug)]
pub enum ConstantValue {
    Bool(bool),
    Char(char),
    Int(i64),
    Long(i64),
    Double(f64),
    Str(String),
}

/// Renders the way the JVM's `toString` does: strings unquoted, doubles with
/// at least one fraction digit and in `1.0E7` notation outside
/// `[1e-3, 1e7)`.
impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Bool(b) => write!(f, "{b}"),
            ConstantValue::Char(c) => write!(f, "{c}"),
            ConstantValue::Int(v) | ConstantValue::Long(v) => write!(f, "{v}"),
            ConstantValue::Double(v) => fmt_double(*v, f),
            ConstantValue::Str(s) => f.write_str(s),
        }
    }
}

fn fmt_double(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if v.classify() == FpCategory::Zero {
        return f.write_str(if v.is_sign_negative() { "-0.0" } else { "0.0" });
    }
    if (1e-3..1e7).contains(&v.abs()) {
        let text = v.to_string();
        f.write_str(&text)?;
        if !text.contains('.') {
            f.write_str(".0")?;
        }
        return Ok(());
    }
    let text = format!("{v:e}");
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    f.write_str(mantissa)?;
    if !mantissa.contains('.') {
        f.write_str(".0")?;
    }
    write!(f, "E{exponent}")
}

/// Binary operators allowed in constant initializers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

/// A field initializer expression.
#[derive(Clone, PartialEq, Debug)]
pub enum ConstExpr {
    Literal(ConstantValue),
    /// Reference to another field of the same class.
    Ref(String),
    Neg(Box<ConstExpr>),
    Binary {
        op: BinaryOp,
        lhs: Box<ConstExpr>,
        rhs: Box<ConstExpr>,
    },
}

impl ConstExpr {
    pub fn int(v: i64) -> Self {
        ConstExpr::Literal(ConstantValue::Int(v))
    }

    pub fn string(s: impl Into<String>) -> Self {
        ConstExpr::Literal(ConstantValue::Str(s.into()))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        ConstExpr::Ref(name.into())
    }

    pub fn binary(op: BinaryOp, lhs: ConstExpr, rhs: ConstExpr) -> Self {
        ConstExpr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// The literal value if this expression needs no evaluation.
    pub fn as_literal(&self) -> Option<&ConstantValue> {
        match self {
            ConstExpr::Literal(value) => Some(value),
            _ => None,
        }
    }
}
