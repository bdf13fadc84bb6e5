//! Binds the translation feature files to the step registry.

use crate::fixtures::{TranslationContext, translation_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/translation.feature",
    fixtures = [translation_context: TranslationContext]
);
scenarios!(
    "tests/features/fallback.feature",
    fixtures = [translation_context: TranslationContext]
);
