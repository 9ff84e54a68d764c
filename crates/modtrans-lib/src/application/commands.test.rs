use super::*;
use crate::application::config::AppConfig;
use crate::application::session_mocks::{
    MockCommandSession, MockConfigProvider, MockFileSystemProvider, MockInteractiveProvider,
    MockNetworkProvider,
};
use crate::archive::test_utils::{entry_text, forge_jar};
use crate::catalog::test_utils::sample_catalog_json;
use crate::catalog::{CacheEntry, now_millis};
use crate::display::DisplayCall;
use crate::storage::{MemoryStore, keys};

const CATALOG_URL: &str = "https://halitflyn.github.io/ua/data.json";
const CREATE_JSON: &str = "https://cdn.example.org/create/uk_ua.json";
const CREATE_OLD_JSON: &str = "https://cdn.example.org/create-old/uk_ua.json";

fn config() -> MockConfigProvider {
    MockConfigProvider::new(AppConfig {
        download_delay_ms: 0,
        ..AppConfig::default()
    })
}

fn catalog_network() -> MockNetworkProvider {
    MockNetworkProvider::new().with_text(CATALOG_URL, &sample_catalog_json())
}

fn session_with(network: MockNetworkProvider) -> MockCommandSession {
    MockCommandSession::new()
        .with_config(config())
        .with_network(network)
}

fn list(search: Option<&str>, filters: FilterArgs) -> Commands {
    Commands::List {
        search: search.map(str::to_string),
        filters,
    }
}

fn get(name: &str, filters: FilterArgs, pick: Option<usize>) -> Commands {
    Commands::Get {
        name: name.to_string(),
        filters,
        pick,
        output: None,
    }
}

#[tokio::test]
async fn test_list_shows_every_card() {
    let session = session_with(catalog_network());

    execute_command_with_session(list(None, FilterArgs::default()), &session)
        .await
        .unwrap();

    let display = session.display_mock();
    assert_eq!(display.count_calls("status_emphasis"), 3);
    assert!(display.has_call(&DisplayCall::StatusSubtle {
        text: "3 of 3 mods shown".to_string()
    }));
    assert!(display.output_contains("https://modrinth.com/mod/sodium"));
    assert_eq!(session.network_mock().requests().len(), 1);
}

#[tokio::test]
async fn test_list_card_actions_and_author() {
    let session = session_with(catalog_network());
    let filters = FilterArgs {
        loader: Some("neoforge".to_string()),
        ..FilterArgs::default()
    };

    execute_command_with_session(list(Some("create"), filters), &session)
        .await
        .unwrap();

    let display = session.display_mock();
    let properties: Vec<Vec<(String, String)>> = display
        .get_calls()
        .into_iter()
        .filter_map(|call| match call {
            DisplayCall::StructuredProperties { pairs } => Some(pairs),
            _ => None,
        })
        .collect();

    assert_eq!(properties.len(), 1);
    let card = &properties[0];
    assert!(card.contains(&("Versions".to_string(), "1.18.2 - 1.20.1".to_string())));
    assert!(card.contains(&("Loaders".to_string(), "Forge - NeoForge".to_string())));
    assert!(card.contains(&("Translation by".to_string(), "Kozak".to_string())));
    assert!(card.contains(&("Action".to_string(), "download".to_string())));
}

#[tokio::test]
async fn test_list_reports_no_matches() {
    let session = session_with(catalog_network());

    execute_command_with_session(list(Some("zzz"), FilterArgs::default()), &session)
        .await
        .unwrap();

    assert!(session.display_mock().has_call(&DisplayCall::StatusInfo {
        message: "No mods match the current filters".to_string()
    }));
    assert_eq!(session.display_mock().count_calls("status_emphasis"), 0);
}

#[tokio::test]
async fn test_list_empty_catalog_has_its_own_message() {
    let session = session_with(MockNetworkProvider::new().with_text(CATALOG_URL, "[]"));

    execute_command_with_session(list(None, FilterArgs::default()), &session)
        .await
        .unwrap();

    assert!(session.display_mock().output_contains("The catalog is empty"));
    assert!(!session.display_mock().output_contains("No mods match"));
}

#[tokio::test]
async fn test_list_uses_fresh_cache() {
    let store = MemoryStore::new();
    CacheEntry::write(&store, &sample_catalog_json(), now_millis()).unwrap();
    let session = session_with(MockNetworkProvider::new()).with_storage(store);

    execute_command_with_session(list(None, FilterArgs::default()), &session)
        .await
        .unwrap();

    assert!(session.network_mock().requests().is_empty());
    assert!(session.display_mock().output_contains("(cached)"));
}

#[tokio::test]
async fn test_list_network_failure_is_an_error() {
    let session = session_with(MockNetworkProvider::new().with_status(CATALOG_URL, 500));

    let err = execute_command_with_session(list(None, FilterArgs::default()), &session)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to load catalog"));
    assert_eq!(session.display_mock().count_calls("status_error"), 1);
    assert_eq!(session.display_mock().count_calls("progress_abandon"), 1);
}

#[tokio::test]
async fn test_show_lists_matching_translations() {
    let session = session_with(catalog_network());
    let command = Commands::Show {
        name: "create".to_string(),
        filters: FilterArgs::default(),
    };

    execute_command_with_session(command, &session).await.unwrap();

    let table = session
        .display_mock()
        .get_calls()
        .into_iter()
        .find_map(|call| match call {
            DisplayCall::StructuredTable { rows, .. } => Some(rows),
            _ => None,
        })
        .unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table[2], vec!["3", "1.18.2", "Forge", "Mriya"]);
}

#[tokio::test]
async fn test_show_without_translations_links_issues() {
    let session = session_with(catalog_network());
    let command = Commands::Show {
        name: "Create Crafts & Additions".to_string(),
        filters: FilterArgs::default(),
    };

    execute_command_with_session(command, &session).await.unwrap();

    let display = session.display_mock();
    assert!(display.has_call(&DisplayCall::StatusWarning {
        message: "No translations available".to_string()
    }));
    assert!(display.output_contains(CONTRIBUTE_URL));
}

#[tokio::test]
async fn test_show_mentions_selected_filters() {
    let session = session_with(catalog_network());
    let command = Commands::Show {
        name: "Create".to_string(),
        filters: FilterArgs {
            game_version: Some("1.12.2".to_string()),
            ..FilterArgs::default()
        },
    };

    execute_command_with_session(command, &session).await.unwrap();

    assert!(session.display_mock().has_call(&DisplayCall::StatusWarning {
        message: "No translations available for the selected filters".to_string()
    }));
}

#[tokio::test]
async fn test_show_unknown_and_ambiguous_names() {
    let session = session_with(catalog_network());

    let err = execute_command_with_session(
        Commands::Show {
            name: "Botania".to_string(),
            filters: FilterArgs::default(),
        },
        &session,
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("Unknown mod"));

    let err = execute_command_with_session(
        Commands::Show {
            name: "crea".to_string(),
            filters: FilterArgs::default(),
        },
        &session,
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("Ambiguous"));
    assert!(session.display_mock().has_call(&DisplayCall::StatusList {
        items: vec![
            "Create".to_string(),
            "Create Crafts & Additions".to_string()
        ]
    }));
}

#[tokio::test]
async fn test_get_single_translation_downloads_pair() {
    let network = catalog_network()
        .with_bytes(
            "https://cdn.example.org/kozak/neoforge/1.20.1/mod.jar",
            b"jar".to_vec(),
        )
        .with_text(CREATE_JSON, "{}");
    let filesystem = MockFileSystemProvider::new();
    let session = session_with(network).with_filesystem(filesystem.clone());
    let filters = FilterArgs {
        loader: Some("NeoForge".to_string()),
        ..FilterArgs::default()
    };

    execute_command_with_session(get("Create", filters, None), &session)
        .await
        .unwrap();

    assert_eq!(
        filesystem.file(Path::new("/test/workdir/mod.jar")),
        Some(b"jar".to_vec())
    );
    assert_eq!(
        filesystem.file(Path::new("/test/workdir/uk_ua.json")),
        Some(b"{}".to_vec())
    );
    assert!(session.interactive_mock().get_select_calls().is_empty());
}

#[tokio::test]
async fn test_get_with_pick_and_output_dir() {
    let network = catalog_network()
        .with_bytes(
            "https://cdn.example.org/mriya/forge/1.18.2/mod.jar",
            b"old".to_vec(),
        )
        .with_text(CREATE_OLD_JSON, "{\"a\":\"b\"}");
    let filesystem = MockFileSystemProvider::new();
    let session = session_with(network).with_filesystem(filesystem.clone());
    let command = Commands::Get {
        name: "create".to_string(),
        filters: FilterArgs::default(),
        pick: Some(3),
        output: Some(PathBuf::from("/downloads")),
    };

    execute_command_with_session(command, &session).await.unwrap();

    assert_eq!(
        filesystem.file(Path::new("/downloads/mod.jar")),
        Some(b"old".to_vec())
    );
    assert!(filesystem.file(Path::new("/downloads/uk_ua.json")).is_some());
}

#[tokio::test]
async fn test_get_uses_interactive_selection() {
    let network = catalog_network()
        .with_bytes(
            "https://cdn.example.org/kozak/forge/1.20.1/mod.jar",
            b"jar".to_vec(),
        )
        .with_text(CREATE_JSON, "{}");
    let filesystem = MockFileSystemProvider::new();
    let session = session_with(network)
        .with_filesystem(filesystem.clone())
        .with_interactive(MockInteractiveProvider::new().with_select(Some(0)));

    execute_command_with_session(get("Create", FilterArgs::default(), None), &session)
        .await
        .unwrap();

    let calls = session.interactive_mock().get_select_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1[0], "1.20.1 Forge (Kozak)");
    assert!(filesystem.file(Path::new("/test/workdir/mod.jar")).is_some());
}

#[tokio::test]
async fn test_get_several_without_choice_asks_for_pick() {
    let session = session_with(catalog_network())
        .with_interactive(MockInteractiveProvider::new().with_yes_mode(true));

    let err = execute_command_with_session(get("Sodium", FilterArgs::default(), None), &session)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("--pick"));
    assert_eq!(session.display_mock().count_calls("structured_table"), 1);
    assert_eq!(session.network_mock().requests().len(), 1);
}

#[tokio::test]
async fn test_get_pick_out_of_range() {
    let session = session_with(catalog_network());

    let err = execute_command_with_session(get("Sodium", FilterArgs::default(), Some(5)), &session)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("out of range (1-2)"));
}

#[tokio::test]
async fn test_get_without_translations_fails() {
    let session = session_with(catalog_network());

    let err = execute_command_with_session(
        get("Create Crafts & Additions", FilterArgs::default(), None),
        &session,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("No translations available"));
    assert!(session.display_mock().output_contains(CONTRIBUTE_URL));
}

#[tokio::test]
async fn test_get_reports_failed_download() {
    let session = session_with(catalog_network());
    let filters = FilterArgs {
        loader: Some("NeoForge".to_string()),
        ..FilterArgs::default()
    };

    let err = execute_command_with_session(get("Create", filters, None), &session)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to download Create"));
    assert_eq!(session.display_mock().count_calls("progress_abandon"), 1);
}

#[tokio::test]
async fn test_filters_prints_choice_lists() {
    let session = session_with(catalog_network());

    execute_command_with_session(Commands::Filters, &session)
        .await
        .unwrap();

    let display = session.display_mock();
    assert_eq!(display.count_calls("status_section"), 3);
    assert!(display.has_call(&DisplayCall::StructuredList {
        items: vec![
            "Fabric".to_string(),
            "Forge".to_string(),
            "NeoForge".to_string()
        ]
    }));
}

#[tokio::test]
async fn test_refresh_bypasses_fresh_cache() {
    let store = MemoryStore::new();
    CacheEntry::write(&store, "[]", now_millis()).unwrap();
    let session = session_with(catalog_network()).with_storage(store);

    execute_command_with_session(Commands::Refresh, &session)
        .await
        .unwrap();

    assert_eq!(session.network_mock().requests().len(), 1);
    assert!(session.display_mock().has_call(&DisplayCall::StatusSuccess {
        item: "catalog".to_string(),
        details: "3 mods loaded".to_string()
    }));
    assert!(session.storage().get(keys::CATALOG_SNAPSHOT).unwrap().is_some());
}

fn merge_filesystem() -> MockFileSystemProvider {
    MockFileSystemProvider::new()
        .with_file(PathBuf::from("/work/create-1.0.jar"), forge_jar("create"))
        .with_file(PathBuf::from("/work/uk_ua.json"), "{\"k\":\"v\"}")
}

fn merge_command(translation: &str) -> Commands {
    Commands::Merge {
        jar: PathBuf::from("/work/create-1.0.jar"),
        translation: PathBuf::from(translation),
        output: None,
    }
}

#[tokio::test]
async fn test_merge_writes_translated_jar() {
    let filesystem = merge_filesystem();
    let session = MockCommandSession::new().with_filesystem(filesystem.clone());

    execute_command_with_session(merge_command("/work/uk_ua.json"), &session)
        .await
        .unwrap();

    let output = filesystem
        .file(Path::new("/work/create-1.0_translated.jar"))
        .unwrap();
    assert_eq!(
        entry_text(&output, "assets/create/lang/uk_ua.json").as_deref(),
        Some("{\"k\":\"v\"}")
    );
    assert_eq!(session.interactive_mock().get_confirm_calls().len(), 1);
}

#[tokio::test]
async fn test_merge_declined_writes_nothing() {
    let filesystem = merge_filesystem();
    let session = MockCommandSession::new()
        .with_filesystem(filesystem.clone())
        .with_interactive(MockInteractiveProvider::new().with_confirm(false));

    execute_command_with_session(merge_command("/work/uk_ua.json"), &session)
        .await
        .unwrap();

    assert!(
        filesystem
            .file(Path::new("/work/create-1.0_translated.jar"))
            .is_none()
    );
    assert!(session.display_mock().output_contains("Merge cancelled"));
}

#[tokio::test]
async fn test_merge_rejects_wrong_translation_type() {
    let filesystem = merge_filesystem().with_file(PathBuf::from("/work/uk_ua.txt"), "{}");
    let session = MockCommandSession::new().with_filesystem(filesystem.clone());

    let err = execute_command_with_session(merge_command("/work/uk_ua.txt"), &session)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to merge translation"));
    assert_eq!(session.display_mock().count_calls("status_error"), 1);
    assert!(session.interactive_mock().get_confirm_calls().is_empty());
    assert_eq!(filesystem.paths().len(), 3);
}

#[tokio::test]
async fn test_theme_set_toggle_and_show() {
    let session = MockCommandSession::new();

    execute_command_with_session(Commands::Theme { choice: None }, &session)
        .await
        .unwrap();
    assert!(session.display_mock().output_contains("not set"));

    execute_command_with_session(
        Commands::Theme {
            choice: Some(ThemeChoice::Dark),
        },
        &session,
    )
    .await
    .unwrap();
    assert_eq!(
        session.storage().get(keys::THEME).unwrap(),
        Some("dark".to_string())
    );

    execute_command_with_session(
        Commands::Theme {
            choice: Some(ThemeChoice::Toggle),
        },
        &session,
    )
    .await
    .unwrap();
    assert_eq!(
        session.storage().get(keys::THEME).unwrap(),
        Some("light".to_string())
    );
}

#[tokio::test]
async fn test_theme_toggle_follows_dark_terminal_when_unset() {
    let session = MockCommandSession::new().with_config(config().with_prefers_dark(true));

    execute_command_with_session(
        Commands::Theme {
            choice: Some(ThemeChoice::Toggle),
        },
        &session,
    )
    .await
    .unwrap();

    assert_eq!(
        session.storage().get(keys::THEME).unwrap(),
        Some("light".to_string())
    );
}

#[tokio::test]
async fn test_theme_toggle_prefers_stored_theme_over_terminal() {
    let session = MockCommandSession::new()
        .with_config(config().with_prefers_dark(true))
        .with_storage(MemoryStore::new().with_entry(keys::THEME, "light"));

    execute_command_with_session(
        Commands::Theme {
            choice: Some(ThemeChoice::Toggle),
        },
        &session,
    )
    .await
    .unwrap();

    assert_eq!(
        session.storage().get(keys::THEME).unwrap(),
        Some("dark".to_string())
    );
}

#[tokio::test]
async fn test_version_shows_catalog_url() {
    let session = MockCommandSession::new();

    execute_command_with_session(Commands::Version, &session)
        .await
        .unwrap();

    let display = session.display_mock();
    assert!(display.output_contains(&format!("modtrans {}", env!("CARGO_PKG_VERSION"))));
    assert!(display.output_contains(CATALOG_URL));
}

#[test]
fn test_no_translations_message_variants() {
    assert_eq!(no_translations_message(false), "No translations available");
    assert_eq!(
        no_translations_message(true),
        "No translations available for the selected filters"
    );
}
