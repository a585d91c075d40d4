use super::expr::Expr;
use super::node::Node;
use derive_more::derive::{From, TryInto};
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

#[derive(Clone, Debug, Drive, DriveMut, From, Serialize, TryInto)]
#[serde(tag = "$t")]
pub enum Stmt {
  Block(Node<BlockStmt>),
  Expr(Node<ExprStmt>),
  FunctionDecl(Node<FuncDecl>),
  If(Node<IfStmt>),
  Return(Node<ReturnStmt>),
  Throw(Node<ThrowStmt>),
  VarDecl(Node<VarDecl>),
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct BlockStmt {
  pub body: Vec<Node<Stmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ExprStmt {
  pub expr: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct FuncDecl {
  #[drive(skip)]
  pub name: String,
  #[drive(skip)]
  pub parameters: Vec<String>,
  pub body: Vec<Node<Stmt>>,
}

// Branches are always blocks; an absent alternate means no else at all.
#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct IfStmt {
  pub test: Node<Expr>,
  pub consequent: Node<BlockStmt>,
  pub alternate: Option<Node<BlockStmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ReturnStmt {
  pub value: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ThrowStmt {
  pub value: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct VarDecl {
  #[drive(skip)]
  pub mode: VarDeclMode,
  pub declarators: Vec<VarDeclarator>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct VarDeclarator {
  #[drive(skip)]
  pub name: String,
  pub initializer: Option<Node<Expr>>,
}

#[derive(Eq, PartialEq, Clone, Copy, Debug, Serialize)]
pub enum VarDeclMode {
  Const,
  Let,
  Var,
}
