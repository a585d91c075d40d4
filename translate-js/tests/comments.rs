mod util;

use translate_js::ast::trivia::{Comment, CommentKind};
use translate_js::ir;
use translate_js::ScriptTarget;
use util::*;

fn commented(comments: Vec<ir::LeadingComment>) -> ir::Stmt {
  ir::Stmt::Return(ir::ReturnStmt {
    value: num(1.0),
    span: None,
    comments,
  })
}

#[test]
fn block_comment_attaches_as_a_single_unit() {
  let node = translate_stmt(
    &commented(vec![ir::LeadingComment {
      text: "a\nmulti-line\nblock".to_string(),
      multiline: true,
      trailing_newline: true,
    }]),
    ScriptTarget::Es2015,
  );
  assert_eq!(node.trivia, vec![Comment::block("a\nmulti-line\nblock", true)]);
}

#[test]
fn multi_line_line_comment_splits_into_one_unit_per_line() {
  let text = "first line\nsecond line\nthird line";
  let node = translate_stmt(
    &commented(vec![ir::LeadingComment {
      text: text.to_string(),
      multiline: false,
      trailing_newline: true,
    }]),
    ScriptTarget::Es2015,
  );
  // One unit per line break plus one.
  assert_eq!(node.trivia.len(), text.matches('\n').count() + 1);
  for unit in &node.trivia {
    assert_eq!(unit.kind, CommentKind::Line);
    assert!(unit.trailing_newline);
  }
  // Concatenating the units reproduces the original text exactly.
  let joined = node
    .trivia
    .iter()
    .map(|c| c.text.as_str())
    .collect::<Vec<_>>()
    .join("\n");
  assert_eq!(joined, text);
}

#[test]
fn comment_order_and_flags_are_preserved() {
  let node = translate_stmt(
    &commented(vec![
      ir::LeadingComment {
        text: "license".to_string(),
        multiline: true,
        trailing_newline: false,
      },
      ir::LeadingComment {
        text: "note".to_string(),
        multiline: false,
        trailing_newline: true,
      },
    ]),
    ScriptTarget::Es2015,
  );
  assert_eq!(node.trivia, vec![
    Comment::block("license", false),
    Comment::line("note", true),
  ]);
}

#[test]
fn declarations_attach_comments_after_construction() {
  let stmt = ir::Stmt::DeclareVar(ir::DeclareVarStmt {
    name: "x".to_string(),
    value: Some(num(1.0)),
    is_final: true,
    span: None,
    comments: vec![ir::LeadingComment {
      text: "the answer".to_string(),
      multiline: false,
      trailing_newline: true,
    }],
  });
  let node = translate_stmt(&stmt, ScriptTarget::Es2015);
  assert_eq!(node.trivia, vec![Comment::line("the answer", true)]);
}

#[test]
fn uncommented_statements_have_no_trivia() {
  let node = translate_stmt(&commented(Vec::new()), ScriptTarget::Es2015);
  assert!(node.trivia.is_empty());
}
