use crate::ir::{BinOp, UnaryOp};
use crate::ScriptTarget;

/// A failed translation. Every variant is a producer-contract violation:
/// the IR handed to the engine contains a shape it must never contain, or
/// requires a capability the selected target lacks. There is no recoverable
/// path and no partial output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslateError {
  #[error("lowering {0} is not implemented")]
  NotImplemented(&'static str),
  #[error("cannot lower class `{name}` while targeting {target:?}: classes require ES2015")]
  ClassesRequireEs2015 { name: String, target: ScriptTarget },
  #[error("external reference is missing a symbol name")]
  UnknownImport,
  #[error("binary operator {0:?} has no output mapping")]
  UnsupportedBinaryOperator(BinOp),
  #[error("unary operator {0:?} has no output mapping")]
  UnsupportedUnaryOperator(UnaryOp),
}

pub type TranslateResult<T> = Result<T, TranslateError>;
