//! `merge` writes `<stem>_translated.jar` with the translation inside

use anyhow::Result;
use modtrans_lib::application::cli::Commands;
use modtrans_lib::application::commands::execute_command_with_session;
use modtrans_lib::archive::test_utils::{build_jar, entry_names, entry_text, forge_jar};
use modtrans_tests::TestEnvironment;

fn merge(jar: std::path::PathBuf, translation: std::path::PathBuf) -> Commands {
    Commands::Merge {
        jar,
        translation,
        output: None,
    }
}

#[tokio::test]
async fn merges_translation_into_forge_jar() -> Result<()> {
    let env = TestEnvironment::new().await?;
    let jar = env.write_work_file("create-0.5.1.jar", forge_jar("create"))?;
    let json = env.write_work_file("uk_ua.json", "{\"block.create.cog\":\"Шестерня\"}")?;

    execute_command_with_session(merge(jar.clone(), json), &env.session()?).await?;

    let output = env.read_work_file("create-0.5.1_translated.jar")?;
    assert_eq!(
        entry_text(&output, "assets/create/lang/uk_ua.json").as_deref(),
        Some("{\"block.create.cog\":\"Шестерня\"}")
    );
    assert_eq!(std::fs::read(&jar)?, forge_jar("create"));
    Ok(())
}

#[tokio::test]
async fn replaces_existing_translation_entry() -> Result<()> {
    let env = TestEnvironment::new().await?;
    let original = build_jar(&[
        ("fabric.mod.json", r#"{"id":"sodium","version":"0.5"}"#),
        ("assets/sodium/lang/uk_ua.json", "{\"old\":\"1\"}"),
        ("assets/sodium/lang/en_us.json", "{}"),
    ]);
    let jar = env.write_work_file("sodium.jar", &original)?;
    let json = env.write_work_file("uk_ua.json", "{\"new\":\"2\"}")?;

    execute_command_with_session(merge(jar, json), &env.session()?).await?;

    let output = env.read_work_file("sodium_translated.jar")?;
    assert_eq!(entry_names(&output).len(), 3);
    assert_eq!(
        entry_text(&output, "assets/sodium/lang/uk_ua.json").as_deref(),
        Some("{\"new\":\"2\"}")
    );
    Ok(())
}

#[tokio::test]
async fn jar_without_metadata_is_rejected() -> Result<()> {
    let env = TestEnvironment::new().await?;
    let jar = env.write_work_file("plain.jar", build_jar(&[("readme.txt", "hi")]))?;
    let json = env.write_work_file("uk_ua.json", "{}")?;

    let result = execute_command_with_session(merge(jar, json), &env.session()?).await;

    assert!(result.is_err());
    assert!(env.read_work_file("plain_translated.jar").is_err());
    Ok(())
}
