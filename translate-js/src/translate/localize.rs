//! Lowering of localized-string expressions.
//!
//! Two strategies produce equivalent content; the capability tier is the
//! only decision variable. The modern tier emits a tagged template, the
//! legacy tier reconstructs the tagged-template object at runtime through a
//! well-known helper and calls the tag as a plain function.

use super::expr_node;
use super::Translator;
use crate::ast::expr::CallExpr;
use crate::ast::expr::Expr;
use crate::ast::expr::IdExpr;
use crate::ast::expr::LitArrExpr;
use crate::ast::expr::LitStrExpr;
use crate::ast::expr::MemberExpr;
use crate::ast::expr::TaggedTemplateExpr;
use crate::ast::expr::TemplatePart;
use crate::ast::expr::TemplateStr;
use crate::ast::node::Node;
use crate::context::Context;
use crate::error::TranslateResult;
use crate::imports::LOCALIZE_TAG;
use crate::imports::MAKE_TEMPLATE_OBJECT;
use crate::imports::RUNTIME_MODULE;
use crate::ir;
use crate::source::SourceSpan;

impl<'a> Translator<'a> {
  /// `` $localize`…` `` — head/middle/tail segments with each placeholder
  /// spliced in between, every segment and placeholder carrying its own
  /// mapping.
  pub(super) fn localized_tagged_template(
    &mut self,
    e: &ir::LocalizedStringExpr,
    ctx: Context,
  ) -> TranslateResult<Node<Expr>> {
    let function = expr_node(IdExpr {
      name: LOCALIZE_TAG.to_string(),
    });
    let mut parts = Vec::with_capacity(e.segments.len() * 2 + 1);
    parts.push(TemplatePart::String(self.template_str(&e.head)));
    for segment in &e.segments {
      let mut expr = self.expression(&segment.placeholder.expr, ctx)?;
      self.map(&mut expr, &segment.placeholder.span);
      parts.push(TemplatePart::Substitution(expr));
      parts.push(TemplatePart::String(self.template_str(&segment.part)));
    }
    Ok(expr_node(TaggedTemplateExpr { function, parts }))
  }

  /// `$localize(__makeTemplateObject(cooked, raw), …exprs)` — the helper is
  /// fetched from the runtime support library through the import resolver,
  /// and may itself resolve to an ambient identifier.
  pub(super) fn localized_function_call(
    &mut self,
    e: &ir::LocalizedStringExpr,
    ctx: Context,
  ) -> TranslateResult<Node<Expr>> {
    let localize = expr_node(IdExpr {
      name: LOCALIZE_TAG.to_string(),
    });
    let resolved = self.imports.named_import(RUNTIME_MODULE, MAKE_TEMPLATE_OBJECT);
    let helper = match resolved.module_alias {
      Some(alias) => expr_node(MemberExpr {
        left: expr_node(IdExpr { name: alias }),
        right: resolved.symbol,
      }),
      None => expr_node(IdExpr {
        name: resolved.symbol,
      }),
    };
    let mut cooked = Vec::with_capacity(e.segments.len() + 1);
    let mut raw = Vec::with_capacity(e.segments.len() + 1);
    for part in e.parts() {
      cooked.push(self.str_literal(&part.cooked, &part.span));
      raw.push(self.str_literal(&part.raw, &part.span));
    }
    let template_object = expr_node(CallExpr {
      callee: helper,
      arguments: vec![
        expr_node(LitArrExpr { elements: cooked }),
        expr_node(LitArrExpr { elements: raw }),
      ],
    });
    let mut arguments = vec![template_object];
    for segment in &e.segments {
      arguments.push(self.expression(&segment.placeholder.expr, ctx)?);
    }
    Ok(expr_node(CallExpr {
      callee: localize,
      arguments,
    }))
  }

  fn template_str(&mut self, part: &ir::MessagePart) -> Node<TemplateStr> {
    let mut node = Node::new(TemplateStr {
      cooked: part.cooked.clone(),
      raw: part.raw.clone(),
    });
    self.map(&mut node, &part.span);
    node
  }

  fn str_literal(&mut self, value: &str, span: &Option<SourceSpan>) -> Node<Expr> {
    let mut node = expr_node(LitStrExpr {
      value: value.to_string(),
    });
    self.map(&mut node, span);
    node
  }
}
