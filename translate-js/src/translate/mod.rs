//! The translation visitor: exhaustive dispatch over every IR statement and
//! expression variant.
//!
//! The statement/expression position bit is threaded explicitly as a
//! [`Context`] parameter at every recursive step; each handler derives the
//! context its children see from the one it received. The visitor owns the
//! per-run source descriptor cache and borrows the two collaborators for
//! exactly one top-level call.

mod localize;

use crate::ast::expr::BinaryExpr;
use crate::ast::expr::CallExpr;
use crate::ast::expr::ComputedMemberExpr;
use crate::ast::expr::CondExpr;
use crate::ast::expr::Expr;
use crate::ast::expr::FuncExpr;
use crate::ast::expr::IdExpr;
use crate::ast::expr::LitArrExpr;
use crate::ast::expr::LitBoolExpr;
use crate::ast::expr::LitNullExpr;
use crate::ast::expr::LitNumExpr;
use crate::ast::expr::LitObjExpr;
use crate::ast::expr::LitStrExpr;
use crate::ast::expr::MemberExpr;
use crate::ast::expr::NewExpr;
use crate::ast::expr::ObjKey;
use crate::ast::expr::ObjMember;
use crate::ast::expr::ParenExpr;
use crate::ast::expr::UnaryExpr;
use crate::ast::node::Node;
use crate::ast::stmt::BlockStmt;
use crate::ast::stmt::ExprStmt;
use crate::ast::stmt::FuncDecl;
use crate::ast::stmt::IfStmt;
use crate::ast::stmt::ReturnStmt;
use crate::ast::stmt::Stmt;
use crate::ast::stmt::ThrowStmt;
use crate::ast::stmt::VarDecl;
use crate::ast::stmt::VarDeclMode;
use crate::ast::stmt::VarDeclarator;
use crate::ast::trivia::Comment;
use crate::context::Context;
use crate::error::TranslateError;
use crate::error::TranslateResult;
use crate::imports::ImportResolver;
use crate::imports::UsageRecorder;
use crate::ir;
use crate::operator::OperatorName;
use crate::operator::BINARY_OPERATOR_MAPPING;
use crate::operator::UNARY_OPERATOR_MAPPING;
use crate::source::SourceCache;
use crate::source::SourceSpan;
use crate::ScriptTarget;
use derive_visitor::Drive;
use derive_visitor::DriveMut;

/// Machine-readable hint attached ahead of pure invocations so later passes
/// may drop the call when its result is unused.
pub const PURE_ANNOTATION: &str = "@__PURE__";

pub(crate) struct Translator<'a> {
  target: ScriptTarget,
  imports: &'a mut dyn ImportResolver,
  usage: &'a mut dyn UsageRecorder,
  sources: SourceCache,
}

impl<'a> Translator<'a> {
  pub fn new(
    target: ScriptTarget,
    imports: &'a mut dyn ImportResolver,
    usage: &'a mut dyn UsageRecorder,
  ) -> Self {
    Self {
      target,
      imports,
      usage,
      sources: SourceCache::new(),
    }
  }

  pub fn statement(&mut self, stmt: &ir::Stmt, ctx: Context) -> TranslateResult<Node<Stmt>> {
    let mut node = match stmt {
      ir::Stmt::DeclareVar(s) => self.declare_var(s, ctx)?,
      ir::Stmt::DeclareFn(s) => self.declare_fn(s, ctx)?,
      ir::Stmt::DeclareClass(s) => return Err(self.class_error(s)),
      ir::Stmt::Expr(s) => {
        // Keep the statement bit: an assignment spanning a whole statement
        // must not be grouped as if it were a sub-expression.
        let expr = self.expression(&s.expr, ctx.with_statement_mode())?;
        stmt_node(ExprStmt { expr })
      }
      ir::Stmt::Return(s) => {
        let value = self.expression(&s.value, ctx.with_expression_mode())?;
        stmt_node(ReturnStmt { value })
      }
      ir::Stmt::If(s) => self.if_stmt(s, ctx)?,
      ir::Stmt::TryCatch(_) => {
        return Err(TranslateError::NotImplemented("try/catch statements"))
      }
      ir::Stmt::Throw(s) => {
        let value = self.expression(&s.error, ctx.with_expression_mode())?;
        stmt_node(ThrowStmt { value })
      }
    };
    attach_comments(&mut node.trivia, stmt.comments());
    Ok(node)
  }

  pub fn expression(&mut self, expr: &ir::Expr, ctx: Context) -> TranslateResult<Node<Expr>> {
    match expr {
      ir::Expr::ReadVar(e) => {
        let mut node = expr_node(IdExpr {
          name: e.name.clone(),
        });
        self.map(&mut node, &e.span);
        Ok(node)
      }
      ir::Expr::WriteVar(e) => self.write_var(e, ctx),
      ir::Expr::WriteKey(e) => self.write_key(e, ctx),
      ir::Expr::WriteProp(e) => self.write_prop(e, ctx),
      ir::Expr::InvokeMethod(e) => self.invoke_method(e, ctx),
      ir::Expr::InvokeFn(e) => self.invoke_fn(e, ctx),
      ir::Expr::Instantiate(e) => self.instantiate(e, ctx),
      ir::Expr::Literal(e) => self.literal(e),
      ir::Expr::LocalizedString(e) => {
        if self.target >= ScriptTarget::Es2015 {
          self.localized_tagged_template(e, ctx)
        } else {
          self.localized_function_call(e, ctx)
        }
      }
      ir::Expr::External(e) => self.external(e),
      ir::Expr::Conditional(e) => self.conditional(e, ctx),
      ir::Expr::Not(e) => {
        let argument = self.expression(&e.condition, ctx)?;
        Ok(expr_node(UnaryExpr {
          operator: OperatorName::LogicalNot,
          argument,
        }))
      }
      ir::Expr::AssertNotNull(e) => self.expression(&e.expr, ctx),
      ir::Expr::Cast(e) => self.expression(&e.expr, ctx),
      ir::Expr::Fn(e) => {
        // Body statements see the incoming context unchanged, unlike
        // declare-function which forces statement mode.
        let body = self.statements(&e.body, ctx)?;
        Ok(expr_node(FuncExpr {
          name: e.name.clone(),
          parameters: e.params.clone(),
          body,
        }))
      }
      ir::Expr::Unary(e) => {
        let operator = *UNARY_OPERATOR_MAPPING
          .get(&e.op)
          .ok_or(TranslateError::UnsupportedUnaryOperator(e.op))?;
        let argument = self.expression(&e.operand, ctx)?;
        Ok(expr_node(UnaryExpr { operator, argument }))
      }
      ir::Expr::Binary(e) => {
        let operator = *BINARY_OPERATOR_MAPPING
          .get(&e.op)
          .ok_or(TranslateError::UnsupportedBinaryOperator(e.op))?;
        let left = self.expression(&e.lhs, ctx)?;
        let right = self.expression(&e.rhs, ctx)?;
        Ok(expr_node(BinaryExpr {
          operator,
          left,
          right,
        }))
      }
      ir::Expr::ReadProp(e) => {
        let left = self.expression(&e.receiver, ctx)?;
        Ok(expr_node(MemberExpr {
          left,
          right: e.name.clone(),
        }))
      }
      ir::Expr::ReadKey(e) => {
        let object = self.expression(&e.receiver, ctx)?;
        let member = self.expression(&e.index, ctx)?;
        Ok(expr_node(ComputedMemberExpr { object, member }))
      }
      ir::Expr::LitArr(e) => {
        let elements = self.expressions(&e.entries, ctx)?;
        let mut node = expr_node(LitArrExpr { elements });
        self.map(&mut node, &e.span);
        Ok(node)
      }
      ir::Expr::LitMap(e) => self.literal_map(e, ctx),
      ir::Expr::Comma(_) => Err(TranslateError::NotImplemented("comma expressions")),
      ir::Expr::Wrapped(e) => {
        if let Some(name) = e.node.stx.identifier_name() {
          self.usage.record_used_identifier(name);
        }
        Ok(e.node.clone())
      }
      ir::Expr::Typeof(e) => {
        let argument = self.expression(&e.operand, ctx)?;
        Ok(expr_node(UnaryExpr {
          operator: OperatorName::Typeof,
          argument,
        }))
      }
    }
  }

  fn declare_var(&mut self, s: &ir::DeclareVarStmt, ctx: Context) -> TranslateResult<Node<Stmt>> {
    // Only the modern tier has block-scoped bindings; below it every
    // declaration degrades to `var` regardless of finality.
    let mode = if self.target >= ScriptTarget::Es2015 && s.is_final {
      VarDeclMode::Const
    } else {
      VarDeclMode::Var
    };
    let initializer = match &s.value {
      Some(value) => Some(self.expression(value, ctx.with_expression_mode())?),
      None => None,
    };
    Ok(stmt_node(VarDecl {
      mode,
      declarators: vec![VarDeclarator {
        name: s.name.clone(),
        initializer,
      }],
    }))
  }

  fn declare_fn(&mut self, s: &ir::DeclareFnStmt, ctx: Context) -> TranslateResult<Node<Stmt>> {
    let body = self.statements(&s.body, ctx.with_statement_mode())?;
    Ok(stmt_node(FuncDecl {
      name: s.name.clone(),
      parameters: s.params.clone(),
      body,
    }))
  }

  fn class_error(&self, s: &ir::DeclareClassStmt) -> TranslateError {
    if self.target < ScriptTarget::Es2015 {
      TranslateError::ClassesRequireEs2015 {
        name: s.name.clone(),
        target: self.target,
      }
    } else {
      TranslateError::NotImplemented("class declarations")
    }
  }

  fn if_stmt(&mut self, s: &ir::IfStmt, ctx: Context) -> TranslateResult<Node<Stmt>> {
    let test = self.expression(&s.condition, ctx)?;
    let consequent = self.block(&s.true_case, ctx)?;
    let alternate = if s.false_case.is_empty() {
      None
    } else {
      Some(self.block(&s.false_case, ctx)?)
    };
    Ok(stmt_node(IfStmt {
      test,
      consequent,
      alternate,
    }))
  }

  fn write_var(&mut self, e: &ir::WriteVarExpr, ctx: Context) -> TranslateResult<Node<Expr>> {
    let left = expr_node(IdExpr {
      name: e.name.clone(),
    });
    let right = self.expression(&e.value, ctx)?;
    let assignment = expr_node(BinaryExpr {
      operator: OperatorName::Assignment,
      left,
      right,
    });
    // A bare assignment is not valid in every sub-expression position.
    Ok(if ctx.is_statement() {
      assignment
    } else {
      parenthesized(assignment)
    })
  }

  fn write_key(&mut self, e: &ir::WriteKeyExpr, ctx: Context) -> TranslateResult<Node<Expr>> {
    let ectx = ctx.with_expression_mode();
    let object = self.expression(&e.receiver, ectx)?;
    let member = self.expression(&e.index, ectx)?;
    let left = expr_node(ComputedMemberExpr { object, member });
    let right = self.expression(&e.value, ectx)?;
    let assignment = expr_node(BinaryExpr {
      operator: OperatorName::Assignment,
      left,
      right,
    });
    Ok(if ctx.is_statement() {
      assignment
    } else {
      parenthesized(assignment)
    })
  }

  fn write_prop(&mut self, e: &ir::WritePropExpr, ctx: Context) -> TranslateResult<Node<Expr>> {
    // Unlike variable and keyed writes, property writes are never grouped.
    let receiver = self.expression(&e.receiver, ctx)?;
    let left = expr_node(MemberExpr {
      left: receiver,
      right: e.name.clone(),
    });
    let right = self.expression(&e.value, ctx)?;
    Ok(expr_node(BinaryExpr {
      operator: OperatorName::Assignment,
      left,
      right,
    }))
  }

  fn invoke_method(&mut self, e: &ir::InvokeMethodExpr, ctx: Context) -> TranslateResult<Node<Expr>> {
    let target = self.expression(&e.receiver, ctx)?;
    // A nameless method call invokes the receiver itself.
    let callee = match &e.method {
      Some(name) => expr_node(MemberExpr {
        left: target,
        right: name.clone(),
      }),
      None => target,
    };
    let arguments = self.expressions(&e.args, ctx)?;
    Ok(expr_node(CallExpr { callee, arguments }))
  }

  fn invoke_fn(&mut self, e: &ir::InvokeFnExpr, ctx: Context) -> TranslateResult<Node<Expr>> {
    let callee = self.expression(&e.callee, ctx)?;
    let arguments = self.expressions(&e.args, ctx)?;
    let mut node = expr_node(CallExpr { callee, arguments });
    if e.pure {
      node.trivia.push(Comment::block(PURE_ANNOTATION, false));
    }
    Ok(node)
  }

  fn instantiate(&mut self, e: &ir::InstantiateExpr, ctx: Context) -> TranslateResult<Node<Expr>> {
    let callee = self.expression(&e.class_expr, ctx)?;
    let arguments = self.expressions(&e.args, ctx)?;
    Ok(expr_node(NewExpr { callee, arguments }))
  }

  fn literal(&mut self, e: &ir::LiteralExpr) -> TranslateResult<Node<Expr>> {
    let mut node = match &e.value {
      // There is no undefined literal; the global is referenced by name.
      ir::LiteralValue::Undefined => expr_node(IdExpr {
        name: "undefined".to_string(),
      }),
      ir::LiteralValue::Null => expr_node(LitNullExpr {}),
      ir::LiteralValue::Bool(value) => expr_node(LitBoolExpr { value: *value }),
      ir::LiteralValue::Num(value) => expr_node(LitNumExpr { value: *value }),
      ir::LiteralValue::Str(value) => expr_node(LitStrExpr {
        value: value.clone(),
      }),
    };
    self.map(&mut node, &e.span);
    Ok(node)
  }

  fn external(&mut self, e: &ir::ExternalExpr) -> TranslateResult<Node<Expr>> {
    let name = match &e.name {
      Some(name) => name,
      None => return Err(TranslateError::UnknownImport),
    };
    Ok(match &e.module {
      Some(module) => {
        let resolved = self.imports.named_import(module, name);
        match resolved.module_alias {
          Some(alias) => expr_node(MemberExpr {
            left: expr_node(IdExpr { name: alias }),
            right: resolved.symbol,
          }),
          // The resolver decided the symbol is ambient after all.
          None => expr_node(IdExpr {
            name: resolved.symbol,
          }),
        }
      }
      // No module: ambient by assumption, no resolver involved.
      None => expr_node(IdExpr { name: name.clone() }),
    })
  }

  fn conditional(&mut self, e: &ir::ConditionalExpr, ctx: Context) -> TranslateResult<Node<Expr>> {
    let mut test = self.expression(&e.condition, ctx)?;
    // Ternaries associate to the right; a conditional used as the test of
    // another conditional encodes a left-associative chain and must be
    // grouped to keep its branches its own.
    if matches!(*e.condition, ir::Expr::Conditional(_)) {
      test = parenthesized(test);
    }
    let consequent = self.expression(&e.true_case, ctx)?;
    let alternate = self.expression(&e.false_case, ctx)?;
    Ok(expr_node(CondExpr {
      test,
      consequent,
      alternate,
    }))
  }

  fn literal_map(&mut self, e: &ir::LiteralMapExpr, ctx: Context) -> TranslateResult<Node<Expr>> {
    let mut members = Vec::with_capacity(e.entries.len());
    for entry in &e.entries {
      let key = if entry.quoted {
        ObjKey::Str(entry.key.clone())
      } else {
        ObjKey::Ident(entry.key.clone())
      };
      let value = self.expression(&entry.value, ctx)?;
      members.push(Node::new(ObjMember { key, value }));
    }
    let mut node = expr_node(LitObjExpr { members });
    self.map(&mut node, &e.span);
    Ok(node)
  }

  fn statements(&mut self, stmts: &[ir::Stmt], ctx: Context) -> TranslateResult<Vec<Node<Stmt>>> {
    let mut out = Vec::with_capacity(stmts.len());
    for stmt in stmts {
      out.push(self.statement(stmt, ctx)?);
    }
    Ok(out)
  }

  fn expressions(&mut self, exprs: &[ir::Expr], ctx: Context) -> TranslateResult<Vec<Node<Expr>>> {
    let mut out = Vec::with_capacity(exprs.len());
    for expr in exprs {
      out.push(self.expression(expr, ctx)?);
    }
    Ok(out)
  }

  fn block(&mut self, stmts: &[ir::Stmt], ctx: Context) -> TranslateResult<Node<BlockStmt>> {
    let body = self.statements(stmts, ctx.with_statement_mode())?;
    Ok(Node::new(BlockStmt { body }))
  }

  fn map<S: Drive + DriveMut>(&mut self, node: &mut Node<S>, span: &Option<SourceSpan>) {
    if let Some(span) = span {
      node.mapping = self.sources.mapping(span);
    }
  }
}

fn expr_node<S>(stx: S) -> Node<Expr>
where
  S: Drive + DriveMut,
  Expr: From<Node<S>>,
{
  Node::new(Expr::from(Node::new(stx)))
}

fn stmt_node<S>(stx: S) -> Node<Stmt>
where
  S: Drive + DriveMut,
  Stmt: From<Node<S>>,
{
  Node::new(Stmt::from(Node::new(stx)))
}

fn parenthesized(expr: Node<Expr>) -> Node<Expr> {
  expr_node(ParenExpr { expr })
}

/// Reproduces the statement's leading comments as output trivia. A block
/// comment becomes one unit with its exact text; a line comment is split on
/// line breaks into one unit per line, all sharing the trailing-newline
/// flag, so the concatenated trivia reproduces the original text exactly.
fn attach_comments(trivia: &mut Vec<Comment>, comments: &[ir::LeadingComment]) {
  for comment in comments {
    if comment.multiline {
      trivia.push(Comment::block(&comment.text, comment.trailing_newline));
    } else {
      for line in comment.text.split('\n') {
        trivia.push(Comment::line(line, comment.trailing_newline));
      }
    }
  }
}
