use serde::Serialize;

/// Kind of a synthetic leading comment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum CommentKind {
  Line,
  Block,
}

/// A synthetic leading comment attached to an output node.
///
/// The text is carried verbatim, without delimiters; the downstream printer
/// renders `//` or `/* */` from the kind. A line comment never contains a
/// line break.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Comment {
  pub kind: CommentKind,
  pub text: String,
  pub trailing_newline: bool,
}

impl Comment {
  pub fn line(text: impl Into<String>, trailing_newline: bool) -> Self {
    Self {
      kind: CommentKind::Line,
      text: text.into(),
      trailing_newline,
    }
  }

  pub fn block(text: impl Into<String>, trailing_newline: bool) -> Self {
    Self {
      kind: CommentKind::Block,
      text: text.into(),
      trailing_newline,
    }
  }
}
