use ahash::HashMap;
use serde::Serialize;
use std::sync::Arc;

/// A half-open byte range within a single source file.
///
/// Offsets are UTF-8 byte offsets into the file's full text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct TextRange {
  pub start: u32,
  pub end: u32,
}

impl TextRange {
  pub const fn new(start: u32, end: u32) -> Self {
    Self { start, end }
  }

  pub fn len(&self) -> u32 {
    self.end.saturating_sub(self.start)
  }

  pub fn is_empty(&self) -> bool {
    self.start >= self.end
  }

  pub fn contains(&self, offset: u32) -> bool {
    offset >= self.start && offset < self.end
  }
}

/// An original source file referenced by IR spans: URL plus full text.
///
/// Produced and owned by the IR producer; shared into spans via `Arc` so
/// cloning a span never copies file contents. A file with an empty URL is
/// synthetic and cannot be mapped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFile {
  pub url: String,
  pub text: String,
}

impl SourceFile {
  pub fn new(url: impl Into<String>, text: impl Into<String>) -> Arc<Self> {
    Arc::new(Self {
      url: url.into(),
      text: text.into(),
    })
  }
}

/// Provenance carried by an IR node: the file it came from and the byte
/// range it occupied there.
#[derive(Debug, Clone)]
pub struct SourceSpan {
  pub file: Arc<SourceFile>,
  pub range: TextRange,
}

impl SourceSpan {
  pub fn new(file: Arc<SourceFile>, start: u32, end: u32) -> Self {
    Self {
      file,
      range: TextRange::new(start, end),
    }
  }
}

/// The per-run handle for one referenced source file. Exactly one descriptor
/// exists per distinct URL per translation run; every output mapping into
/// that file shares it.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceDescriptor {
  pub url: String,
  pub text: String,
}

/// Provenance attached to an output node: a byte range tied to a cached
/// descriptor.
#[derive(Debug, Clone)]
pub struct SourceMapping {
  pub source: Arc<SourceDescriptor>,
  pub range: TextRange,
}

/// Lazily builds descriptors keyed by file URL, reusing them for every
/// subsequent span into the same file. Owned by one translator instance and
/// discarded with it; never evicted before the run ends.
#[derive(Default)]
pub struct SourceCache {
  by_url: HashMap<String, Arc<SourceDescriptor>>,
}

impl SourceCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Mapping for a span, or `None` when the span's file has no URL.
  pub fn mapping(&mut self, span: &SourceSpan) -> Option<SourceMapping> {
    if span.file.url.is_empty() {
      return None;
    }
    let source = self
      .by_url
      .entry(span.file.url.clone())
      .or_insert_with(|| {
        Arc::new(SourceDescriptor {
          url: span.file.url.clone(),
          text: span.file.text.clone(),
        })
      })
      .clone();
    Some(SourceMapping {
      source,
      range: span.range,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reuses_one_descriptor_per_url() {
    let file = SourceFile::new("a.ts", "const a = 1;");
    let mut cache = SourceCache::new();
    let first = cache.mapping(&SourceSpan::new(file.clone(), 0, 5)).unwrap();
    let second = cache.mapping(&SourceSpan::new(file, 6, 7)).unwrap();
    assert!(Arc::ptr_eq(&first.source, &second.source));
    assert_eq!(first.range, TextRange::new(0, 5));
    assert_eq!(second.range, TextRange::new(6, 7));
  }

  #[test]
  fn distinct_urls_get_distinct_descriptors() {
    let mut cache = SourceCache::new();
    let a = cache
      .mapping(&SourceSpan::new(SourceFile::new("a.ts", "a"), 0, 1))
      .unwrap();
    let b = cache
      .mapping(&SourceSpan::new(SourceFile::new("b.ts", "b"), 0, 1))
      .unwrap();
    assert!(!Arc::ptr_eq(&a.source, &b.source));
  }

  #[test]
  fn empty_url_is_unmappable() {
    let mut cache = SourceCache::new();
    let span = SourceSpan::new(SourceFile::new("", "synthetic"), 0, 3);
    assert!(cache.mapping(&span).is_none());
  }

  #[test]
  fn range_accessors() {
    let range = TextRange::new(4, 10);
    assert_eq!(range.len(), 6);
    assert!(!range.is_empty());
    assert!(range.contains(4));
    assert!(!range.contains(10));
    assert!(TextRange::new(3, 3).is_empty());
  }
}
