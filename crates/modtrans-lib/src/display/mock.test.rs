use super::*;

#[test]
fn test_status_calls_are_recorded_in_order() {
    let mock = MockDisplayProvider::new();
    mock.status().info("Loading mods from cache");
    mock.status().error("Sodium", "no translations");

    assert_eq!(
        mock.get_calls(),
        vec![
            DisplayCall::StatusInfo {
                message: "Loading mods from cache".to_string()
            },
            DisplayCall::StatusError {
                item: "Sodium".to_string(),
                details: "no translations".to_string()
            },
        ]
    );
}

#[test]
fn test_progress_tracker_shares_the_log() {
    let mock = MockDisplayProvider::new();
    let spinner = mock.progress().spinner("Fetching catalog");
    spinner.finish("done");

    assert_eq!(mock.count_calls("progress_spinner"), 1);
    assert!(mock.has_call(&DisplayCall::ProgressFinish {
        message: "done".to_string()
    }));
}

#[test]
fn test_output_contains_searches_tables() {
    let mock = MockDisplayProvider::new();
    mock.table()
        .table(&["Version", "Loader"], &[vec!["1.20.1", "Fabric"]]);

    assert!(mock.output_contains("Fabric"));
    assert!(!mock.output_contains("Forge "));
}

#[test]
fn test_clones_share_calls() {
    let mock = MockDisplayProvider::new();
    let clone = mock.clone();
    clone.status().message("hello");

    assert_eq!(mock.get_calls().len(), 1);
    mock.clear_calls();
    assert!(clone.get_calls().is_empty());
}
