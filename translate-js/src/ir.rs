//! The backend-neutral statement/expression IR consumed by this crate.
//!
//! Nodes are produced and owned upstream and are read-only here; the engine
//! only ever borrows them. Every node optionally carries a [`SourceSpan`]
//! recording where in an original file it came from, and statements
//! additionally carry leading comments.

use crate::ast;
use crate::source::SourceSpan;

/// A leading comment carried by a statement, reproduced ahead of the
/// statement's rendering.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LeadingComment {
  pub text: String,
  pub multiline: bool,
  pub trailing_newline: bool,
}

#[derive(Debug, Clone)]
pub enum Stmt {
  DeclareVar(DeclareVarStmt),
  DeclareFn(DeclareFnStmt),
  DeclareClass(DeclareClassStmt),
  Expr(ExprStmt),
  Return(ReturnStmt),
  If(IfStmt),
  TryCatch(TryCatchStmt),
  Throw(ThrowStmt),
}

impl Stmt {
  pub fn comments(&self) -> &[LeadingComment] {
    match self {
      Stmt::DeclareVar(s) => &s.comments,
      Stmt::DeclareFn(s) => &s.comments,
      Stmt::DeclareClass(s) => &s.comments,
      Stmt::Expr(s) => &s.comments,
      Stmt::Return(s) => &s.comments,
      Stmt::If(s) => &s.comments,
      Stmt::TryCatch(s) => &s.comments,
      Stmt::Throw(s) => &s.comments,
    }
  }
}

#[derive(Debug, Clone)]
pub struct DeclareVarStmt {
  pub name: String,
  pub value: Option<Expr>,
  /// The producer requested an immutable binding.
  pub is_final: bool,
  pub span: Option<SourceSpan>,
  pub comments: Vec<LeadingComment>,
}

#[derive(Debug, Clone)]
pub struct DeclareFnStmt {
  pub name: String,
  pub params: Vec<String>,
  pub body: Vec<Stmt>,
  pub span: Option<SourceSpan>,
  pub comments: Vec<LeadingComment>,
}

// Class lowering is not implemented by this engine; the variant exists so
// that a producer handing one over gets a precise contract error.
#[derive(Debug, Clone)]
pub struct DeclareClassStmt {
  pub name: String,
  pub span: Option<SourceSpan>,
  pub comments: Vec<LeadingComment>,
}

#[derive(Debug, Clone)]
pub struct ExprStmt {
  pub expr: Expr,
  pub span: Option<SourceSpan>,
  pub comments: Vec<LeadingComment>,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
  pub value: Expr,
  pub span: Option<SourceSpan>,
  pub comments: Vec<LeadingComment>,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
  pub condition: Expr,
  pub true_case: Vec<Stmt>,
  pub false_case: Vec<Stmt>,
  pub span: Option<SourceSpan>,
  pub comments: Vec<LeadingComment>,
}

#[derive(Debug, Clone)]
pub struct TryCatchStmt {
  pub body: Vec<Stmt>,
  pub catch_stmts: Vec<Stmt>,
  pub span: Option<SourceSpan>,
  pub comments: Vec<LeadingComment>,
}

#[derive(Debug, Clone)]
pub struct ThrowStmt {
  pub error: Expr,
  pub span: Option<SourceSpan>,
  pub comments: Vec<LeadingComment>,
}

#[derive(Debug, Clone)]
pub enum Expr {
  ReadVar(ReadVarExpr),
  WriteVar(WriteVarExpr),
  WriteKey(WriteKeyExpr),
  WriteProp(WritePropExpr),
  InvokeMethod(InvokeMethodExpr),
  InvokeFn(InvokeFnExpr),
  Instantiate(InstantiateExpr),
  Literal(LiteralExpr),
  LocalizedString(LocalizedStringExpr),
  External(ExternalExpr),
  Conditional(ConditionalExpr),
  Not(NotExpr),
  AssertNotNull(AssertNotNullExpr),
  Cast(CastExpr),
  Fn(FnExpr),
  Unary(UnaryExpr),
  Binary(BinaryExpr),
  ReadProp(ReadPropExpr),
  ReadKey(ReadKeyExpr),
  LitArr(LiteralArrayExpr),
  LitMap(LiteralMapExpr),
  Comma(CommaExpr),
  Wrapped(WrappedNodeExpr),
  Typeof(TypeofExpr),
}

#[derive(Debug, Clone)]
pub struct ReadVarExpr {
  pub name: String,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct WriteVarExpr {
  pub name: String,
  pub value: Box<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct WriteKeyExpr {
  pub receiver: Box<Expr>,
  pub index: Box<Expr>,
  pub value: Box<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct WritePropExpr {
  pub receiver: Box<Expr>,
  pub name: String,
  pub value: Box<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct InvokeMethodExpr {
  pub receiver: Box<Expr>,
  /// `None` turns the invocation into a call of the receiver itself,
  /// used for call-through forms.
  pub method: Option<String>,
  pub args: Vec<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct InvokeFnExpr {
  pub callee: Box<Expr>,
  pub args: Vec<Expr>,
  /// The call is side-effect-free and may be elided if its result is unused.
  pub pure: bool,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct InstantiateExpr {
  pub class_expr: Box<Expr>,
  pub args: Vec<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct LiteralExpr {
  pub value: LiteralValue,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
  Undefined,
  Null,
  Bool(bool),
  Num(f64),
  Str(String),
}

/// An internationalizable message: literal parts interleaved with
/// placeholder expressions. The head part comes first; each segment then
/// contributes one placeholder followed by one part, so there is always
/// exactly one more part than there are placeholders.
#[derive(Debug, Clone)]
pub struct LocalizedStringExpr {
  pub head: MessagePart,
  pub segments: Vec<LocalizedSegment>,
  pub span: Option<SourceSpan>,
}

impl LocalizedStringExpr {
  /// All message parts in order: the head, then the part following each
  /// placeholder.
  pub fn parts(&self) -> impl Iterator<Item = &MessagePart> {
    std::iter::once(&self.head).chain(self.segments.iter().map(|s| &s.part))
  }
}

/// One literal segment of a localized message. `cooked` may begin with a
/// colon-delimited metadata block (`:meta:text`); `raw` is the same segment
/// as it must appear in raw template position, escaping preserved.
#[derive(Debug, Clone)]
pub struct MessagePart {
  pub cooked: String,
  pub raw: String,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct LocalizedSegment {
  pub placeholder: Placeholder,
  pub part: MessagePart,
}

/// An expression spliced into a localized message. The span covers the
/// placeholder position in the message source, not the expression itself.
#[derive(Debug, Clone)]
pub struct Placeholder {
  pub expr: Expr,
  pub span: Option<SourceSpan>,
}

/// A reference to a symbol, optionally qualified by the module it must be
/// imported from. Without a module the symbol is assumed ambient.
#[derive(Debug, Clone)]
pub struct ExternalExpr {
  pub module: Option<String>,
  pub name: Option<String>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct ConditionalExpr {
  pub condition: Box<Expr>,
  pub true_case: Box<Expr>,
  pub false_case: Box<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct NotExpr {
  pub condition: Box<Expr>,
  pub span: Option<SourceSpan>,
}

// Compile-time-only annotation; lowering is the identity.
#[derive(Debug, Clone)]
pub struct AssertNotNullExpr {
  pub expr: Box<Expr>,
  pub span: Option<SourceSpan>,
}

// Compile-time-only annotation; lowering is the identity.
#[derive(Debug, Clone)]
pub struct CastExpr {
  pub expr: Box<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct FnExpr {
  pub name: Option<String>,
  pub params: Vec<String>,
  pub body: Vec<Stmt>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
  pub op: UnaryOp,
  pub operand: Box<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
  pub op: BinOp,
  pub lhs: Box<Expr>,
  pub rhs: Box<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct ReadPropExpr {
  pub receiver: Box<Expr>,
  pub name: String,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct ReadKeyExpr {
  pub receiver: Box<Expr>,
  pub index: Box<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct LiteralArrayExpr {
  pub entries: Vec<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct LiteralMapExpr {
  pub entries: Vec<LiteralMapEntry>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct LiteralMapEntry {
  pub key: String,
  /// Render the key as a quoted string literal instead of a bare identifier.
  pub quoted: bool,
  pub value: Expr,
}

// Comma sequences must never reach this engine; a producer bug if one does.
#[derive(Debug, Clone)]
pub struct CommaExpr {
  pub parts: Vec<Expr>,
  pub span: Option<SourceSpan>,
}

/// Passthrough of an already-built output node, spliced into the result
/// verbatim.
#[derive(Debug, Clone)]
pub struct WrappedNodeExpr {
  pub node: ast::node::Node<ast::expr::Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone)]
pub struct TypeofExpr {
  pub operand: Box<Expr>,
  pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum BinOp {
  Add,
  Sub,
  Mul,
  Div,
  Mod,
  Lt,
  Leq,
  Gt,
  Geq,
  LooseEq,
  StrictEq,
  NotLooseEq,
  NotStrictEq,
  And,
  Or,
  BitAnd,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum UnaryOp {
  Neg,
  Plus,
}
