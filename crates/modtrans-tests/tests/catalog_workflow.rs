//! Catalog commands against a mock catalog host

use anyhow::Result;
use modtrans_lib::application::cli::{Commands, FilterArgs};
use modtrans_lib::application::commands::execute_command_with_session;
use modtrans_lib::catalog::test_utils::sample_catalog;
use modtrans_tests::TestEnvironment;

fn list() -> Commands {
    Commands::List {
        search: None,
        filters: FilterArgs::default(),
    }
}

#[tokio::test]
async fn second_command_is_served_from_cache() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let catalog = env.serve_catalog_times(&sample_catalog(), 1).await?;

    execute_command_with_session(list(), &env.session()?).await?;
    execute_command_with_session(Commands::Filters, &env.session()?).await?;

    catalog.assert_async().await;
    let store = env.store_contents().expect("store written");
    assert!(store.get("catalog.snapshot").is_some());
    assert!(store.get("catalog.timestamp").is_some());
    Ok(())
}

#[tokio::test]
async fn refresh_forces_a_new_fetch() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let catalog = env.serve_catalog_times(&sample_catalog(), 2).await?;

    execute_command_with_session(list(), &env.session()?).await?;
    execute_command_with_session(Commands::Refresh, &env.session()?).await?;
    execute_command_with_session(list(), &env.session()?).await?;

    catalog.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn failed_fetch_does_not_fall_back_to_stale_cache() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let catalog = env.serve_catalog(&sample_catalog()).await?;
    execute_command_with_session(list(), &env.session()?).await?;
    catalog.remove_async().await;

    let _failing = env.fail_catalog(503).await;
    let result = execute_command_with_session(Commands::Refresh, &env.session()?).await;

    assert!(result.is_err(), "refresh should fail, got {result:?}");
    let store = env.store_contents().expect("store written");
    assert!(store.get("catalog.snapshot").is_none());

    let result = execute_command_with_session(list(), &env.session()?).await;
    assert!(result.is_err(), "list should not use stale data");
    Ok(())
}

#[tokio::test]
async fn show_and_list_with_filters_succeed() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.serve_catalog(&sample_catalog()).await?;
    let session = env.session()?;

    execute_command_with_session(
        Commands::List {
            search: Some("cre".to_string()),
            filters: FilterArgs {
                game_version: Some("1.18.2".to_string()),
                ..FilterArgs::default()
            },
        },
        &session,
    )
    .await?;

    execute_command_with_session(
        Commands::Show {
            name: "Sodium".to_string(),
            filters: FilterArgs {
                author: Some("b".to_string()),
                ..FilterArgs::default()
            },
        },
        &session,
    )
    .await?;
    Ok(())
}

#[tokio::test]
async fn theme_is_persisted_next_to_the_cache() -> Result<()> {
    let env = TestEnvironment::new().await?;

    execute_command_with_session(
        Commands::Theme {
            choice: Some(modtrans_lib::application::ThemeChoice::Dark),
        },
        &env.session()?,
    )
    .await?;

    let store = env.store_contents().expect("store written");
    assert_eq!(store["theme"], "dark");
    Ok(())
}
