//! Collaborator interfaces for symbol import resolution.
//!
//! Both collaborators are injected per translation call as narrow
//! capabilities, which keeps the engine testable with recording fakes.

/// Result of resolving a (module, symbol) pair against the surrounding
/// module's import bookkeeping.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedImport {
  /// Local alias for the imported module. `None` when the symbol turned out
  /// to be ambient in the output environment despite naming a module.
  pub module_alias: Option<String>,
  /// The symbol under the name it is actually reachable as (the resolver
  /// may rename to avoid collisions).
  pub symbol: String,
}

/// The import bookkeeping engine owned by the surrounding toolchain.
/// Invoked synchronously in traversal order.
pub trait ImportResolver {
  fn named_import(&mut self, module: &str, symbol: &str) -> ResolvedImport;
}

/// Tracker notified whenever an identifier from prebuilt syntax is spliced
/// into the output, so default imports referenced only there survive
/// elision.
pub trait UsageRecorder {
  fn record_used_identifier(&mut self, name: &str);
}

/// Tag identifier for localized messages.
pub const LOCALIZE_TAG: &str = "$localize";

/// Runtime support library queried for template helpers below ES2015.
pub const RUNTIME_MODULE: &str = "tslib";

/// Well-known helper reconstructing a tagged-template object at runtime.
pub const MAKE_TEMPLATE_OBJECT: &str = "__makeTemplateObject";
