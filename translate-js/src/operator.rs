//! Fixed mappings from IR operator kinds to the concrete operators the
//! output tree carries.
//!
//! Every operator an IR producer can construct must have a table entry; a
//! miss is a producer bug surfaced as a fatal error by the visitor, never a
//! recoverable condition.

use crate::ir::{BinOp, UnaryOp};
use ahash::HashMap;
use ahash::HashMapExt;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Concrete JavaScript operators the output tree can carry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum OperatorName {
  Addition,
  Subtraction,
  Multiplication,
  Division,
  Remainder,
  Equality,
  StrictEquality,
  Inequality,
  StrictInequality,
  LessThan,
  LessThanOrEqual,
  GreaterThan,
  GreaterThanOrEqual,
  LogicalAnd,
  LogicalOr,
  BitwiseAnd,
  Assignment,
  LogicalNot,
  UnaryNegation,
  UnaryPlus,
  Typeof,
}

impl OperatorName {
  /// Token text as it appears in JavaScript source.
  pub fn token(self) -> &'static str {
    match self {
      OperatorName::Addition => "+",
      OperatorName::Subtraction => "-",
      OperatorName::Multiplication => "*",
      OperatorName::Division => "/",
      OperatorName::Remainder => "%",
      OperatorName::Equality => "==",
      OperatorName::StrictEquality => "===",
      OperatorName::Inequality => "!=",
      OperatorName::StrictInequality => "!==",
      OperatorName::LessThan => "<",
      OperatorName::LessThanOrEqual => "<=",
      OperatorName::GreaterThan => ">",
      OperatorName::GreaterThanOrEqual => ">=",
      OperatorName::LogicalAnd => "&&",
      OperatorName::LogicalOr => "||",
      OperatorName::BitwiseAnd => "&",
      OperatorName::Assignment => "=",
      OperatorName::LogicalNot => "!",
      OperatorName::UnaryNegation => "-",
      OperatorName::UnaryPlus => "+",
      OperatorName::Typeof => "typeof",
    }
  }
}

#[rustfmt::skip]
pub static BINARY_OPERATOR_MAPPING: Lazy<HashMap<BinOp, OperatorName>> = Lazy::new(|| {
  let mut map = HashMap::<BinOp, OperatorName>::new();
  map.insert(BinOp::Add, OperatorName::Addition);
  map.insert(BinOp::Sub, OperatorName::Subtraction);
  map.insert(BinOp::Mul, OperatorName::Multiplication);
  map.insert(BinOp::Div, OperatorName::Division);
  map.insert(BinOp::Mod, OperatorName::Remainder);
  map.insert(BinOp::Lt, OperatorName::LessThan);
  map.insert(BinOp::Leq, OperatorName::LessThanOrEqual);
  map.insert(BinOp::Gt, OperatorName::GreaterThan);
  map.insert(BinOp::Geq, OperatorName::GreaterThanOrEqual);
  map.insert(BinOp::LooseEq, OperatorName::Equality);
  map.insert(BinOp::StrictEq, OperatorName::StrictEquality);
  map.insert(BinOp::NotLooseEq, OperatorName::Inequality);
  map.insert(BinOp::NotStrictEq, OperatorName::StrictInequality);
  map.insert(BinOp::And, OperatorName::LogicalAnd);
  map.insert(BinOp::Or, OperatorName::LogicalOr);
  map.insert(BinOp::BitAnd, OperatorName::BitwiseAnd);
  map
});

#[rustfmt::skip]
pub static UNARY_OPERATOR_MAPPING: Lazy<HashMap<UnaryOp, OperatorName>> = Lazy::new(|| {
  let mut map = HashMap::<UnaryOp, OperatorName>::new();
  map.insert(UnaryOp::Neg, OperatorName::UnaryNegation);
  map.insert(UnaryOp::Plus, OperatorName::UnaryPlus);
  map
});

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_binary_op_has_an_entry() {
    let all = [
      BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div, BinOp::Mod,
      BinOp::Lt, BinOp::Leq, BinOp::Gt, BinOp::Geq,
      BinOp::LooseEq, BinOp::StrictEq, BinOp::NotLooseEq, BinOp::NotStrictEq,
      BinOp::And, BinOp::Or, BinOp::BitAnd,
    ];
    for op in all {
      assert!(BINARY_OPERATOR_MAPPING.contains_key(&op), "{op:?}");
    }
    assert_eq!(BINARY_OPERATOR_MAPPING.len(), all.len());
  }

  #[test]
  fn every_unary_op_has_an_entry() {
    for op in [UnaryOp::Neg, UnaryOp::Plus] {
      assert!(UNARY_OPERATOR_MAPPING.contains_key(&op), "{op:?}");
    }
  }

  #[test]
  fn token_text() {
    assert_eq!(OperatorName::StrictEquality.token(), "===");
    assert_eq!(OperatorName::Remainder.token(), "%");
    assert_eq!(OperatorName::Typeof.token(), "typeof");
    assert_eq!(BINARY_OPERATOR_MAPPING[&BinOp::BitAnd].token(), "&");
  }
}
