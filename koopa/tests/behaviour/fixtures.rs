//! Shared fixtures for the translation scenarios.

use koopa::{L10nResult, Translator};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::catalog::CatalogTree;

/// Scenario state shared between translation steps.
#[derive(Debug, Default, ScenarioState)]
pub struct TranslationContext {
    /// Temporary translation root populated by `Given` steps.
    pub tree: Slot<CatalogTree>,
    /// Translator built over the tree, or a custom root.
    pub translator: Slot<Translator>,
    /// Outcome of the last lookup or construction attempt.
    pub outcome: Slot<L10nResult<String>>,
}

/// Creates an empty context for each scenario.
#[fixture]
pub fn translation_context() -> TranslationContext {
    TranslationContext::default()
}
