//! Home layout tests: search bar, block list, transaction list

use super::*;
use ethex::app::{Focus, Listing};

#[test]
fn test_home_shows_search_bar() {
    let app = create_test_app();
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Search"));
    assert!(buffer_contains(
        &buffer,
        "Block number / Tx hash / Block hash / Address"
    ));
}

#[test]
fn test_home_shows_typed_query() {
    let mut app = create_test_app();
    app.search_input = tui_input::Input::new("0xdeadbeef".to_string());
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "0xdeadbeef"));
    assert!(!buffer_contains(&buffer, "Block number / Tx hash"));
}

#[test]
fn test_home_shows_latest_blocks() {
    let app = create_test_app();
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Latest Blocks"));
    assert!(buffer_contains(&buffer, "#19000000"));
    assert!(buffer_contains(&buffer, "#18999998"));
    assert!(buffer_contains(&buffer, "0xababababab...ababab"));
    assert!(buffer_contains(&buffer, "150 tx"));
    assert!(buffer_contains(&buffer, "24s ago"));
}

#[test]
fn test_home_shows_recent_transactions() {
    let app = create_test_app();
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Recent Transactions"));
    assert!(buffer_contains(&buffer, "0xaaaaaaaaaa...aaaaaa"));
    assert!(buffer_contains(&buffer, "0xbbbbbbbbbb...bbbbbb"));
    assert!(buffer_contains(&buffer, "contract"));
}

#[test]
fn test_home_shows_welcome_and_rpc() {
    let app = create_test_app();
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "████"));
    assert!(buffer_contains(&buffer, "Search by block number, transaction hash or address"));
    assert!(buffer_contains(&buffer, "http://localhost:8545"));
}

#[test]
fn test_lists_loading() {
    let app = App::new(mock_config());
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Loading..."));
    assert!(!buffer_contains(&buffer, "#19000000"));
}

#[test]
fn test_list_failure_is_shown() {
    let mut app = create_test_app();
    app.set_blocks(Err("transport error: connection refused".to_string()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Failed to load"));
    assert!(buffer_contains(&buffer, "connection refused"));
    // The other list is unaffected
    assert!(buffer_contains(&buffer, "0xaaaaaaaaaa...aaaaaa"));
}

#[test]
fn test_empty_lists() {
    let mut app = App::new(mock_config());
    app.set_blocks(Ok(vec![]));
    app.set_transactions(Ok(vec![]));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "No blocks"));
    assert!(buffer_contains(&buffer, "No recent transactions"));
    assert!(matches!(app.blocks, Listing::Ready(_)));
}

#[test]
fn test_help_follows_focus() {
    let mut app = create_test_app();
    let buffer = render_to_buffer(&app, 120, 40);
    assert!(buffer_contains(&buffer, "Enter search"));

    app.focus = Focus::Blocks;
    let buffer = render_to_buffer(&app, 120, 40);
    assert!(buffer_contains(&buffer, "b back"));
    assert!(buffer_contains(&buffer, "t theme"));
}
