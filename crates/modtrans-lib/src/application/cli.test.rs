use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("modtrans").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_list_with_filters() {
    let cli = parse(&["list", "--search", "sod", "--version", "1.20.1", "-l", "Fabric"]);

    match cli.command {
        Some(Commands::List { search, filters }) => {
            assert_eq!(search.as_deref(), Some("sod"));
            assert_eq!(filters.game_version.as_deref(), Some("1.20.1"));
            assert_eq!(filters.loader.as_deref(), Some("Fabric"));
            assert_eq!(filters.author, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_get_with_pick_and_output() {
    let cli = parse(&["get", "Create", "--pick", "2", "-o", "/tmp/out", "--yes"]);

    assert!(cli.config.yes);
    assert_eq!(
        cli.command,
        Some(Commands::Get {
            name: "Create".to_string(),
            filters: FilterArgs::default(),
            pick: Some(2),
            output: Some(PathBuf::from("/tmp/out")),
        })
    );
}

#[test]
fn test_theme_choice() {
    let cli = parse(&["theme", "toggle"]);
    assert_eq!(
        cli.command,
        Some(Commands::Theme {
            choice: Some(ThemeChoice::Toggle)
        })
    );
    assert_eq!(parse(&["theme"]).command, Some(Commands::Theme { choice: None }));
}

#[test]
fn test_merge_arguments() {
    let cli = parse(&["merge", "mod.jar", "uk_ua.json"]);
    assert_eq!(
        cli.command,
        Some(Commands::Merge {
            jar: PathBuf::from("mod.jar"),
            translation: PathBuf::from("uk_ua.json"),
            output: None,
        })
    );
}

#[test]
fn test_no_command() {
    assert_eq!(parse(&[]).command, None);
}

#[test]
fn test_filter_args_to_state() {
    let args = FilterArgs {
        game_version: Some("1.20.1".to_string()),
        loader: None,
        author: Some("  ".to_string()),
    };

    let state = args.to_filter_state(Some("Create"));
    assert_eq!(state.search, "Create");
    assert_eq!(state.version.as_deref(), Some("1.20.1"));
    assert_eq!(state.loader, None);
    assert_eq!(state.author, None);
    assert!(state.has_choice());
}
