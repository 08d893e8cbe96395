//! Constant folding of field initializers.
//!
//! A field has a constant value when it is `final`, is not an enum constant,
//! and its initializer folds. Folding follows JVM constant rules:
//!
//! - `int` arithmetic is 32-bit, `long` is 64-bit; both wrap on overflow
//! - mixed operands widen `int` -> `long` -> `double`, `char` counts as `int`
//! - integral division or remainder by zero is not constant
//! - `+` with a string operand concatenates
//! - references name other fields of the same class; cycles are not constant

use decl_ir::{BinaryOp, ConstExpr, ConstantValue, FieldDecl, Modifiers, TypeDecl};
use rustc_hash::FxHashSet;

/// Fold the initializer of `field`, a field declared in `owner`.
pub fn fold_constant(owner: &TypeDecl, field: &FieldDecl) -> Option<ConstantValue> {
    if !is_constant_candidate(field) {
        return None;
    }
    let init = field.initializer.as_ref()?;
    let mut visiting = FxHashSet::default();
    visiting.insert(field.name.as_str());
    Folder { owner, visiting }.fold(init)
}

/// Whether `field` could have a constant value at all.
pub(crate) fn is_constant_candidate(field: &FieldDecl) -> bool {
    !field.enum_constant && field.modifiers.has(Modifiers::FINAL)
}

struct Folder<'a> {
    owner: &'a TypeDecl,
    visiting: FxHashSet<&'a str>,
}

impl<'a> Folder<'a> {
    fn fold(&mut self, expr: &'a ConstExpr) -> Option<ConstantValue> {
        match expr {
            ConstExpr::Literal(value) => Some(value.clone()),
            ConstExpr::Ref(name) => self.fold_ref(name),
            ConstExpr::Neg(operand) => negate(self.fold(operand)?),
            ConstExpr::Binary { op, lhs, rhs } => {
                let lhs = self.fold(lhs)?;
                let rhs = self.fold(rhs)?;
                binary(*op, lhs, rhs)
            }
        }
    }

    fn fold_ref(&mut self, name: &'a str) -> Option<ConstantValue> {
        let target = self.owner.field(name)?;
        if !is_constant_candidate(target) || !self.visiting.insert(name) {
            return None;
        }
        let value = target.initializer.as_ref().and_then(|init| self.fold(init));
        self.visiting.remove(name);
        value
    }
}

fn negate(value: ConstantValue) -> Option<ConstantValue> {
    match value {
        ConstantValue::Int(v) => Some(int(as_i32(v)?.wrapping_neg())),
        ConstantValue::Char(c) => Some(ConstantValue::Int(-i64::from(u32::from(c)))),
        ConstantValue::Long(v) => Some(ConstantValue::Long(v.wrapping_neg())),
        ConstantValue::Double(v) => Some(ConstantValue::Double(-v)),
        ConstantValue::Bool(_) | ConstantValue::Str(_) => None,
    }
}

/// Numeric operand after widening.
#[derive(Copy, Clone)]
enum Num {
    Int(i64),
    Long(i64),
    Double(f64),
}

impl Num {
    fn of(value: &ConstantValue) -> Option<Num> {
        match value {
            ConstantValue::Int(v) => Some(Num::Int(*v)),
            ConstantValue::Char(c) => Some(Num::Int(i64::from(u32::from(*c)))),
            ConstantValue::Long(v) => Some(Num::Long(*v)),
            ConstantValue::Double(v) => Some(Num::Double(*v)),
            ConstantValue::Bool(_) | ConstantValue::Str(_) => None,
        }
    }

    #[expect(clippy::cast_precision_loss, reason = "JVM widening to double")]
    fn as_double(self) -> f64 {
        match self {
            Num::Int(v) | Num::Long(v) => v as f64,
            Num::Double(v) => v,
        }
    }

    fn as_integral(self) -> Option<i64> {
        match self {
            Num::Int(v) | Num::Long(v) => Some(v),
            Num::Double(_) => None,
        }
    }
}

fn binary(op: BinaryOp, lhs: ConstantValue, rhs: ConstantValue) -> Option<ConstantValue> {
    if op == BinaryOp::Add
        && (matches!(lhs, ConstantValue::Str(_)) || matches!(rhs, ConstantValue::Str(_)))
    {
        return Some(ConstantValue::Str(format!("{lhs}{rhs}")));
    }

    let (a, b) = (Num::of(&lhs)?, Num::of(&rhs)?);
    match (a, b) {
        (Num::Double(_), _) | (_, Num::Double(_)) => {
            Some(ConstantValue::Double(double_op(op, a.as_double(), b.as_double())))
        }
        (Num::Long(_), _) | (_, Num::Long(_)) => {
            let v = long_op(op, a.as_integral()?, b.as_integral()?)?;
            Some(ConstantValue::Long(v))
        }
        (Num::Int(a), Num::Int(b)) => Some(int(int_op(op, as_i32(a)?, as_i32(b)?)?)),
    }
}

fn double_op(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Rem => a % b,
    }
}

fn int_op(op: BinaryOp, a: i32, b: i32) -> Option<i32> {
    match op {
        BinaryOp::Add => Some(a.wrapping_add(b)),
        BinaryOp::Sub => Some(a.wrapping_sub(b)),
        BinaryOp::Mul => Some(a.wrapping_mul(b)),
        BinaryOp::Div => (b != 0).then(|| a.wrapping_div(b)),
        BinaryOp::Rem => (b != 0).then(|| a.wrapping_rem(b)),
    }
}

fn long_op(op: BinaryOp, a: i64, b: i64) -> Option<i64> {
    match op {
        BinaryOp::Add => Some(a.wrapping_add(b)),
        BinaryOp::Sub => Some(a.wrapping_sub(b)),
        BinaryOp::Mul => Some(a.wrapping_mul(b)),
        BinaryOp::Div => (b != 0).then(|| a.wrapping_div(b)),
        BinaryOp::Rem => (b != 0).then(|| a.wrapping_rem(b)),
    }
}

/// An `int` operand; literals outside the 32-bit range are not `int`s.
fn as_i32(v: i64) -> Option<i32> {
    i32::try_from(v).ok()
}

fn int(v: i32) -> ConstantValue {
    ConstantValue::Int(i64::from(v))
}

#[cfg(test)]
mod tests;
