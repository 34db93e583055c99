//! Prompt composer: a pure mapping from an answer set to a Markdown document.
//!
//! The document is rebuilt from scratch on every call. Sections appear in the
//! fixed order of the section table, each only when at least one of its fields
//! resolves to something non-blank. The closing instruction is appended only to
//! a non-empty document.

mod fragment;
pub(crate) mod sections;

pub use fragment::Fragment;
pub use sections::SectionId;

use crate::domain::answers::{AnswerSet, non_blank};
use crate::domain::catalog::Catalog;

/// Heading level of top-level sections (`##`).
const SECTION_LEVEL: usize = 2;

/// Build the fragment tree for an answer set, empty sections already pruned.
pub fn build_document(answers: &AnswerSet, catalog: &Catalog) -> Vec<Fragment> {
    sections::section_table()
        .iter()
        .filter_map(|section| section.build(answers, catalog, SECTION_LEVEL))
        .collect()
}

/// Compose the prompt document.
///
/// Total and deterministic: identical inputs always give byte-identical
/// output, and an answer set with nothing meaningful gives `""`.
pub fn compose(answers: &AnswerSet, catalog: &Catalog) -> String {
    let fragments = build_document(answers, catalog);
    if fragments.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    fragment::render(&fragments, &mut out);
    if let Some(closing) = non_blank(&catalog.labels.closing_instruction) {
        out.push_str(closing);
        out.push('\n');
    }
    out
}
