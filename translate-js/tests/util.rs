use serde_json::Value;
use std::collections::HashMap;
use translate_js::ast::expr::Expr;
use translate_js::ast::node::Node;
use translate_js::ast::stmt::Stmt;
use translate_js::imports::{ImportResolver, ResolvedImport, UsageRecorder};
use translate_js::ir;
use translate_js::{translate_expression, translate_statement, ScriptTarget};

/// Resolver fake: hands out configured aliases and records every request.
#[derive(Default)]
pub struct RecordingResolver {
  aliases: HashMap<String, String>,
  pub requests: Vec<(String, String)>,
}

impl RecordingResolver {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_alias(module: &str, alias: &str) -> Self {
    let mut resolver = Self::default();
    resolver.aliases.insert(module.to_string(), alias.to_string());
    resolver
  }
}

impl ImportResolver for RecordingResolver {
  fn named_import(&mut self, module: &str, symbol: &str) -> ResolvedImport {
    self.requests.push((module.to_string(), symbol.to_string()));
    ResolvedImport {
      module_alias: self.aliases.get(module).cloned(),
      symbol: symbol.to_string(),
    }
  }
}

/// Usage recorder fake: remembers every identifier it was notified about.
#[derive(Default)]
pub struct RecordingUsage {
  pub used: Vec<String>,
}

impl UsageRecorder for RecordingUsage {
  fn record_used_identifier(&mut self, name: &str) {
    self.used.push(name.to_string());
  }
}

pub fn translate_expr(expr: &ir::Expr, target: ScriptTarget) -> Node<Expr> {
  translate_expression(
    expr,
    &mut RecordingResolver::new(),
    &mut RecordingUsage::default(),
    target,
  )
  .expect("translation should succeed")
}

pub fn translate_stmt(stmt: &ir::Stmt, target: ScriptTarget) -> Node<Stmt> {
  translate_statement(
    stmt,
    &mut RecordingResolver::new(),
    &mut RecordingUsage::default(),
    target,
  )
  .expect("translation should succeed")
}

pub fn serialize<T: serde::Serialize>(value: &T) -> Value {
  serde_json::to_value(value).expect("serialize value")
}

// IR builders. Spans and comments default to empty; tests that exercise
// provenance construct nodes by hand.

pub fn read_var(name: &str) -> ir::Expr {
  ir::Expr::ReadVar(ir::ReadVarExpr {
    name: name.to_string(),
    span: None,
  })
}

pub fn literal(value: ir::LiteralValue) -> ir::Expr {
  ir::Expr::Literal(ir::LiteralExpr { value, span: None })
}

pub fn num(value: f64) -> ir::Expr {
  literal(ir::LiteralValue::Num(value))
}

pub fn str_lit(value: &str) -> ir::Expr {
  literal(ir::LiteralValue::Str(value.to_string()))
}

pub fn write_var(name: &str, value: ir::Expr) -> ir::Expr {
  ir::Expr::WriteVar(ir::WriteVarExpr {
    name: name.to_string(),
    value: Box::new(value),
    span: None,
  })
}

pub fn conditional(condition: ir::Expr, true_case: ir::Expr, false_case: ir::Expr) -> ir::Expr {
  ir::Expr::Conditional(ir::ConditionalExpr {
    condition: Box::new(condition),
    true_case: Box::new(true_case),
    false_case: Box::new(false_case),
    span: None,
  })
}

pub fn expr_stmt(expr: ir::Expr) -> ir::Stmt {
  ir::Stmt::Expr(ir::ExprStmt {
    expr,
    span: None,
    comments: Vec::new(),
  })
}

pub fn declare_var(name: &str, value: Option<ir::Expr>, is_final: bool) -> ir::Stmt {
  ir::Stmt::DeclareVar(ir::DeclareVarStmt {
    name: name.to_string(),
    value,
    is_final,
    span: None,
    comments: Vec::new(),
  })
}

pub fn return_stmt(value: ir::Expr) -> ir::Stmt {
  ir::Stmt::Return(ir::ReturnStmt {
    value,
    span: None,
    comments: Vec::new(),
  })
}

pub fn message_part(cooked: &str, raw: &str) -> ir::MessagePart {
  ir::MessagePart {
    cooked: cooked.to_string(),
    raw: raw.to_string(),
    span: None,
  }
}

pub fn localized(head: ir::MessagePart, segments: Vec<(ir::Expr, ir::MessagePart)>) -> ir::Expr {
  ir::Expr::LocalizedString(ir::LocalizedStringExpr {
    head,
    segments: segments
      .into_iter()
      .map(|(expr, part)| ir::LocalizedSegment {
        placeholder: ir::Placeholder { expr, span: None },
        part,
      })
      .collect(),
    span: None,
  })
}
