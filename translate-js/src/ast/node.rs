use crate::ast::trivia::Comment;
use crate::source::SourceMapping;
use derive_visitor::{Drive, DriveMut};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Debug, Formatter};

/// One output syntax node: the syntax itself plus provenance (an optional
/// mapping into an original source file) and leading comment trivia.
#[derive(Clone, Drive, DriveMut)]
pub struct Node<S: Drive + DriveMut> {
  // A mapping is optional; lowered nodes frequently have no original-source
  // counterpart, and synthetic files (empty URL) cannot be mapped at all.
  #[drive(skip)]
  pub mapping: Option<SourceMapping>,
  #[drive(skip)]
  pub trivia: Vec<Comment>,
  pub stx: Box<S>,
}

impl<S: Drive + DriveMut> Node<S> {
  pub fn new(stx: S) -> Node<S> {
    Node {
      mapping: None,
      trivia: Vec::new(),
      stx: Box::new(stx),
    }
  }
}

impl<S: Debug + Drive + DriveMut> Debug for Node<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.stx.fmt(f)
  }
}

impl<S: Serialize + Drive + DriveMut> Serialize for Node<S> {
  fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
    self.stx.serialize(serializer)
  }
}
