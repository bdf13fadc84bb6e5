//! Step definitions for translation lookups.

use crate::fixtures::TranslationContext;
use anyhow::{Result, anyhow, ensure};
use koopa::{L10nError, Translator};
use rstest_bdd_macros::{given, then, when};
use test_helpers::catalog::CatalogTree;

fn with_translator<T>(
    translation_context: &TranslationContext,
    f: impl FnOnce(&Translator) -> T,
) -> Result<T> {
    if translation_context.translator.is_empty() {
        let root = translation_context
            .tree
            .with_ref(|tree| tree.root().to_path_buf())
            .ok_or_else(|| anyhow!("a translation tree must be set up first"))?;
        let translator =
            Translator::new(root).map_err(|err| anyhow!("build translator: {err}"))?;
        translation_context.translator.set(translator);
    }
    translation_context
        .translator
        .with_ref(f)
        .ok_or_else(|| anyhow!("translator must be initialised"))
}

fn take_error(translation_context: &TranslationContext) -> Result<L10nError> {
    match translation_context.outcome.take() {
        Some(Err(err)) => Ok(err),
        Some(Ok(value)) => Err(anyhow!("expected a failure, got translation {value:?}")),
        None => Err(anyhow!("no lookup was attempted")),
    }
}

#[given("an empty translation tree")]
fn empty_tree(translation_context: &TranslationContext) -> Result<()> {
    translation_context.tree.set(CatalogTree::new()?);
    Ok(())
}

#[given("the catalogue {file} maps {key} to {value}")]
fn catalogue_entry(
    translation_context: &TranslationContext,
    file: String,
    key: String,
    value: String,
) -> Result<()> {
    translation_context
        .tree
        .with_ref(|tree| tree.write(&file, &[(key.as_str(), value.as_str())]))
        .ok_or_else(|| anyhow!("a translation tree must be set up first"))??;
    Ok(())
}

#[when("I translate {key_path} for {locale}")]
fn translate_for(
    translation_context: &TranslationContext,
    key_path: String,
    locale: String,
) -> Result<()> {
    let outcome = with_translator(translation_context, |translator| {
        translator.translate(&key_path, &locale)
    })?;
    translation_context.outcome.set(outcome);
    Ok(())
}

#[when("I translate {key_path} without a locale")]
fn translate_base(translation_context: &TranslationContext, key_path: String) -> Result<()> {
    let outcome = with_translator(translation_context, |translator| {
        translator.translate_base(&key_path)
    })?;
    translation_context.outcome.set(outcome);
    Ok(())
}

#[when("I create a translator rooted at {relative} inside the tree")]
fn create_translator(translation_context: &TranslationContext, relative: String) -> Result<()> {
    let root = translation_context
        .tree
        .with_ref(|tree| tree.root().join(&relative))
        .ok_or_else(|| anyhow!("a translation tree must be set up first"))?;
    let outcome = Translator::new(root).map(|translator| translator.base_path().to_string());
    translation_context.outcome.set(outcome);
    Ok(())
}

#[then("the translation is {expected}")]
fn assert_translation(translation_context: &TranslationContext, expected: String) -> Result<()> {
    let actual = translation_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no lookup was attempted"))?
        .map_err(|err| anyhow!("lookup should succeed: {err}"))?;
    ensure!(actual == expected, "translated {actual:?}; expected {expected:?}");
    Ok(())
}

#[then("the lookup fails because key {key} is missing")]
fn assert_missing_key(translation_context: &TranslationContext, key: String) -> Result<()> {
    let err = take_error(translation_context)?;
    ensure!(
        matches!(&err, L10nError::KeyNotFound { key: missing } if *missing == key),
        "expected KeyNotFound for {key:?}, got {err:?}"
    );
    Ok(())
}

#[then("the lookup fails because catalogue {relative} is missing")]
fn assert_missing_file(translation_context: &TranslationContext, relative: String) -> Result<()> {
    let expected = translation_context
        .tree
        .with_ref(|tree| format!("{}/{relative}", tree.root()))
        .ok_or_else(|| anyhow!("a translation tree must be set up first"))?;
    let err = take_error(translation_context)?;
    ensure!(
        matches!(&err, L10nError::FileNotFound { path } if path.as_str() == expected),
        "expected FileNotFound for {expected:?}, got {err:?}"
    );
    Ok(())
}

#[then("construction fails because {relative} is not a directory")]
fn assert_missing_directory(
    translation_context: &TranslationContext,
    relative: String,
) -> Result<()> {
    let expected = translation_context
        .tree
        .with_ref(|tree| tree.root().join(&relative))
        .ok_or_else(|| anyhow!("a translation tree must be set up first"))?;
    let err = take_error(translation_context)?;
    ensure!(
        matches!(&err, L10nError::DirectoryNotFound { path } if *path == expected),
        "expected DirectoryNotFound for {expected}, got {err:?}"
    );
    Ok(())
}
