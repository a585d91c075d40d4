use super::node::Node;
use super::stmt::Stmt;
use crate::operator::OperatorName;
use derive_more::derive::{From, TryInto};
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

// Each variant wraps Node<T> so visitors can observe the Node rather than
// just the syntax inside it.
#[derive(Clone, Debug, Drive, DriveMut, From, Serialize, TryInto)]
#[serde(tag = "$t")]
pub enum Expr {
  Binary(Node<BinaryExpr>),
  Call(Node<CallExpr>),
  ComputedMember(Node<ComputedMemberExpr>),
  Cond(Node<CondExpr>),
  Func(Node<FuncExpr>),
  Id(Node<IdExpr>),
  Member(Node<MemberExpr>),
  New(Node<NewExpr>),
  Paren(Node<ParenExpr>),
  TaggedTemplate(Node<TaggedTemplateExpr>),
  Unary(Node<UnaryExpr>),

  // Literals.
  LitArr(Node<LitArrExpr>),
  LitBool(Node<LitBoolExpr>),
  LitNull(Node<LitNullExpr>),
  LitNum(Node<LitNumExpr>),
  LitObj(Node<LitObjExpr>),
  LitStr(Node<LitStrExpr>),
}

impl Expr {
  /// Name of the identifier this expression denotes, if it is a bare
  /// identifier reference.
  pub fn identifier_name(&self) -> Option<&str> {
    match self {
      Expr::Id(id) => Some(&id.stx.name),
      _ => None,
    }
  }
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct BinaryExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub left: Node<Expr>,
  pub right: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct CallExpr {
  pub callee: Node<Expr>,
  pub arguments: Vec<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ComputedMemberExpr {
  pub object: Node<Expr>,
  pub member: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct CondExpr {
  pub test: Node<Expr>,
  pub consequent: Node<Expr>,
  pub alternate: Node<Expr>,
}

// A function value. Parameters carry names only; the IR has no parameter
// types or defaults at this layer.
#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct FuncExpr {
  #[drive(skip)]
  pub name: Option<String>,
  #[drive(skip)]
  pub parameters: Vec<String>,
  pub body: Vec<Node<Stmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct IdExpr {
  #[drive(skip)]
  pub name: String,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct MemberExpr {
  pub left: Node<Expr>,
  #[drive(skip)]
  pub right: String,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct NewExpr {
  pub callee: Node<Expr>,
  pub arguments: Vec<Node<Expr>>,
}

/// Explicit grouping. The downstream printer performs no precedence
/// analysis, so required parentheses are recorded structurally.
#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ParenExpr {
  pub expr: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct TaggedTemplateExpr {
  pub function: Node<Expr>,
  pub parts: Vec<TemplatePart>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub enum TemplatePart {
  Substitution(Node<Expr>),
  String(Node<TemplateStr>),
}

/// One literal segment of a template. `cooked` is the interpreted text;
/// `raw` is the text as it must appear between backticks.
#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct TemplateStr {
  #[drive(skip)]
  pub cooked: String,
  #[drive(skip)]
  pub raw: String,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct UnaryExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub argument: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct LitArrExpr {
  pub elements: Vec<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct LitBoolExpr {
  #[drive(skip)]
  pub value: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct LitNullExpr {}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct LitNumExpr {
  #[drive(skip)]
  pub value: f64,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct LitObjExpr {
  pub members: Vec<Node<ObjMember>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ObjMember {
  #[drive(skip)]
  pub key: ObjKey,
  pub value: Node<Expr>,
}

/// Object literal keys are either bare identifiers or quoted strings,
/// chosen by the producer, never rewritten here.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ObjKey {
  Ident(String),
  Str(String),
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct LitStrExpr {
  #[drive(skip)]
  pub value: String,
}
