//! `get` downloads the mod jar and its translation from the catalog links

use anyhow::Result;
use modtrans_lib::application::cli::{Commands, FilterArgs};
use modtrans_lib::application::commands::execute_command_with_session;
use modtrans_lib::application::session_mocks::MockInteractiveProvider;
use modtrans_lib::catalog::test_utils::{lang_file, mod_with};
use modtrans_lib::catalog::{Mod, VersionEntry};
use modtrans_tests::TestEnvironment;

fn entry(env: &TestEnvironment, version: &str, loader: &str, author: &str) -> VersionEntry {
    VersionEntry {
        version: version.to_string(),
        loader: loader.to_string(),
        author: author.to_string(),
        link: env.url(&format!("/files/{author}/create-{version}.jar")),
    }
}

fn catalog(env: &TestEnvironment) -> Vec<Mod> {
    vec![mod_with(
        "Create",
        vec![
            entry(env, "1.20.1", "Forge", "Kozak"),
            entry(env, "1.18.2", "Forge", "Mriya"),
        ],
        vec![
            lang_file("Kozak", &env.url("/lang/kozak/uk_ua.json")),
            lang_file("Mriya", &env.url("/lang/mriya/uk_ua.json")),
        ],
    )]
}

fn get(filters: FilterArgs, pick: Option<usize>, env: &TestEnvironment) -> Commands {
    Commands::Get {
        name: "create".to_string(),
        filters,
        pick,
        output: Some(env.work_path.clone()),
    }
}

#[tokio::test]
async fn single_match_saves_both_files() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let mods = catalog(&env);
    env.serve_catalog(&mods).await?;
    let jar = env
        .serve_file("/files/Kozak/create-1.20.1.jar", b"jar-bytes".to_vec())
        .await;
    let json = env
        .serve_file("/lang/kozak/uk_ua.json", b"{\"a\":\"b\"}".to_vec())
        .await;

    let filters = FilterArgs {
        game_version: Some("1.20.1".to_string()),
        ..FilterArgs::default()
    };
    execute_command_with_session(get(filters, None, &env), &env.session()?).await?;

    jar.assert_async().await;
    json.assert_async().await;
    assert_eq!(env.read_work_file("create-1.20.1.jar")?, b"jar-bytes");
    assert_eq!(env.read_work_file("uk_ua.json")?, b"{\"a\":\"b\"}");
    Ok(())
}

#[tokio::test]
async fn several_matches_honor_pick() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let mods = catalog(&env);
    env.serve_catalog(&mods).await?;
    env.serve_file("/files/Mriya/create-1.18.2.jar", b"old".to_vec())
        .await;
    env.serve_file("/lang/mriya/uk_ua.json", b"{}".to_vec()).await;

    execute_command_with_session(get(FilterArgs::default(), Some(2), &env), &env.session()?)
        .await?;

    assert_eq!(env.read_work_file("create-1.18.2.jar")?, b"old");
    Ok(())
}

#[tokio::test]
async fn several_matches_without_pick_fail_in_yes_mode() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let mods = catalog(&env);
    env.serve_catalog(&mods).await?;

    let result =
        execute_command_with_session(get(FilterArgs::default(), None, &env), &env.session()?)
            .await;

    assert!(result.is_err());
    assert!(env.read_work_file("uk_ua.json").is_err());
    Ok(())
}

#[tokio::test]
async fn interactive_choice_selects_translation() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let mods = catalog(&env);
    env.serve_catalog(&mods).await?;
    env.serve_file("/files/Mriya/create-1.18.2.jar", b"old".to_vec())
        .await;
    env.serve_file("/lang/mriya/uk_ua.json", b"{}".to_vec()).await;

    let session = env.session_with(MockInteractiveProvider::new().with_select(Some(1)))?;
    execute_command_with_session(get(FilterArgs::default(), None, &env), &session).await?;

    assert_eq!(env.read_work_file("create-1.18.2.jar")?, b"old");
    Ok(())
}

#[tokio::test]
async fn missing_translation_keeps_downloaded_jar() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let mods = catalog(&env);
    env.serve_catalog(&mods).await?;
    env.serve_file("/files/Kozak/create-1.20.1.jar", b"jar".to_vec())
        .await;

    let filters = FilterArgs {
        author: Some("kozak".to_string()),
        ..FilterArgs::default()
    };
    let result = execute_command_with_session(get(filters, None, &env), &env.session()?).await;

    assert!(result.is_err());
    assert_eq!(env.read_work_file("create-1.20.1.jar")?, b"jar");
    Ok(())
}
