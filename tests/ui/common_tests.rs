//! Common UI tests - error, loading, theme, and layout

use super::*;
use ethex::app::Focus;
use ethex::ui::Palette;
use ratatui::style::Color;

// ==================== Error Panel Tests ====================

#[test]
fn test_error_panel_shows_message_and_endpoint() {
    let mut app = create_test_app();
    app.panel = Panel::Error(
        "RPC error -32000: header not found\n\nRPC: http://localhost:8545".to_string(),
    );
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Error"));
    assert!(buffer_contains(&buffer, "header not found"));
    assert!(buffer_contains(&buffer, "RPC: http://localhost:8545"));
    // Lists stay visible next to the error
    assert!(buffer_contains(&buffer, "#19000000"));
}

#[test]
fn test_error_panel_from_failed_request() {
    let mut app = create_test_app();
    let ticket = app.begin_request("Loading Block: 5...");
    app.finish_request(ticket, Err("Block #5 not found".to_string()), NOW);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Block #5 not found"));
}

// ==================== Loading Panel Tests ====================

#[test]
fn test_loading_panel_shows_message() {
    let mut app = create_test_app();
    app.begin_request("Loading Block: 19000000...");
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Loading"));
    assert!(buffer_contains(&buffer, "Loading Block: 19000000..."));
}

// ==================== Theme Tests ====================

#[test]
fn test_light_theme_fills_background() {
    let mut app = create_test_app();
    app.toggle_theme();
    let buffer = render_to_buffer(&app, 80, 24);

    let light = Palette::for_theme(app.theme());
    assert_eq!(light.bg, Color::White);
    assert_eq!(buffer[(0, 0)].bg, Color::White);
    assert_eq!(buffer[(79, 23)].bg, Color::White);
}

#[test]
fn test_focused_pane_uses_accent_border() {
    let mut app = create_test_app();
    app.focus = Focus::Blocks;
    let palette = Palette::for_theme(app.theme());
    let buffer = render_to_buffer(&app, 120, 40);

    // Top-left corner of the block list sits right under the search bar
    assert_eq!(buffer[(0, 3)].fg, palette.accent);
    // The search bar is no longer focused
    assert_eq!(buffer[(0, 0)].fg, palette.muted);
}

// ==================== Layout Tests ====================

#[test]
fn test_small_terminal_renders_without_panic() {
    let mut app = create_test_app();
    let _ = render_to_buffer(&app, 20, 6);

    show_entity(&mut app, &Entity::Address(mock_address()));
    app.focus = Focus::Detail;
    let _ = render_to_buffer(&app, 40, 10);

    app.begin_request("Loading...");
    let _ = render_to_buffer(&app, 10, 4);

    app.panel = Panel::Error("Error".to_string());
    let _ = render_to_buffer(&app, 40, 10);
}

#[test]
fn test_long_block_scrolls_to_selection() {
    let txs: Vec<Transaction> = (0..40u8).map(|i| mock_tx(i, None)).collect();
    let mut app = create_test_app();
    show_entity(
        &mut app,
        &Entity::Block(mock_block(19_000_000, BlockTransactions::Full(txs))),
    );
    app.focus = Focus::Detail;

    // Miner, then 40 transaction rows; go to the last one
    for _ in 0..40 {
        app.select_next();
    }
    let buffer = render_to_buffer(&app, 120, 30);

    assert!(buffer_contains(&buffer, "0x2727272727...272727"));
}

#[test]
fn test_large_terminal_renders_without_panic() {
    let app = create_test_app();
    let _ = render_to_buffer(&app, 250, 100);
}
