/// Whether the node currently being lowered sits in full-statement position
/// or is nested inside an expression.
///
/// Carried explicitly through every recursive step; children always receive
/// a context derived from the parent's, never a mutated one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Context {
  is_statement: bool,
}

impl Context {
  pub const fn new(is_statement: bool) -> Self {
    Self { is_statement }
  }

  pub const fn with_statement_mode(self) -> Self {
    Self { is_statement: true }
  }

  pub const fn with_expression_mode(self) -> Self {
    Self {
      is_statement: false,
    }
  }

  pub const fn is_statement(self) -> bool {
    self.is_statement
  }
}
