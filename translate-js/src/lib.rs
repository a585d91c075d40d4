//! Lowers a backend-neutral statement/expression IR into a JavaScript
//! syntax tree ready for serialization or a downstream pretty-printer.
//!
//! The engine encodes everything the IR leaves implicit: statement versus
//! expression position (threaded as an explicit [`Context`] bit),
//! parenthesization hazards (recorded structurally as grouping nodes),
//! capability-tier-dependent codegen ([`ScriptTarget`] selects the
//! localized-string strategy and binding kinds), symbol import resolution
//! (delegated to an injected [`ImportResolver`]), and source-location and
//! comment provenance (per-run descriptor cache plus leading trivia).
//!
//! Call [`translate_expression`] or [`translate_statement`] with one IR
//! node, the two collaborators, and a target. Each call is pure with
//! respect to every other call; a fresh visitor and descriptor cache live
//! for exactly that call.
//!
//! # Example
//! ```
//! use translate_js::ast::expr::Expr;
//! use translate_js::imports::{ImportResolver, ResolvedImport, UsageRecorder};
//! use translate_js::ir;
//! use translate_js::{translate_expression, ScriptTarget};
//!
//! struct Ambient;
//! impl ImportResolver for Ambient {
//!   fn named_import(&mut self, _module: &str, symbol: &str) -> ResolvedImport {
//!     ResolvedImport { module_alias: None, symbol: symbol.to_string() }
//!   }
//! }
//!
//! struct Ignore;
//! impl UsageRecorder for Ignore {
//!   fn record_used_identifier(&mut self, _name: &str) {}
//! }
//!
//! let expr = ir::Expr::ReadVar(ir::ReadVarExpr { name: "count".into(), span: None });
//! let node = translate_expression(&expr, &mut Ambient, &mut Ignore, ScriptTarget::Es2015).unwrap();
//! assert_eq!(node.stx.identifier_name(), Some("count"));
//! ```

pub mod ast;
pub mod context;
pub mod error;
pub mod imports;
pub mod ir;
pub mod operator;
pub mod source;
mod translate;

pub use context::Context;
pub use error::TranslateError;
pub use error::TranslateResult;
pub use imports::ImportResolver;
pub use imports::ResolvedImport;
pub use imports::UsageRecorder;
pub use translate::PURE_ANNOTATION;

use ast::node::Node;
use translate::Translator;

/// Output-runtime feature level. Ordered: later targets are strict
/// supersets, with [`ScriptTarget::Es2015`] unlocking block-scoped bindings
/// and template-literal syntax. Fixed for a whole translation call.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum ScriptTarget {
  Es5,
  Es2015,
}

/// Lowers one IR expression into an output expression node.
pub fn translate_expression(
  expression: &ir::Expr,
  imports: &mut dyn ImportResolver,
  usage: &mut dyn UsageRecorder,
  target: ScriptTarget,
) -> TranslateResult<Node<ast::expr::Expr>> {
  Translator::new(target, imports, usage).expression(expression, Context::new(false))
}

/// Lowers one IR statement into an output statement node.
pub fn translate_statement(
  statement: &ir::Stmt,
  imports: &mut dyn ImportResolver,
  usage: &mut dyn UsageRecorder,
  target: ScriptTarget,
) -> TranslateResult<Node<ast::stmt::Stmt>> {
  Translator::new(target, imports, usage).statement(statement, Context::new(true))
}
