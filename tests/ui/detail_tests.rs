//! Detail panel tests: block, transaction and address views

use super::*;
use ethex::app::Focus;
use ethex::ui::Palette;

/// Cell coordinates of the first occurrence of `needle`
fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    (0..buffer.area.height).find_map(|y| {
        let line = buffer_line(buffer, y);
        line.find(needle)
            .map(|byte| (buffer.area.x + line[..byte].chars().count() as u16, y))
    })
}

fn block_entity() -> Entity {
    Entity::Block(mock_block(
        19_000_000,
        BlockTransactions::Full(mock_transactions()),
    ))
}

// ==================== Block detail ====================

#[test]
fn test_block_detail_shows_fields() {
    let mut app = create_test_app();
    show_entity(&mut app, &block_entity());
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Block #19000000"));
    assert!(buffer_contains(&buffer, "Hash: 0xabababab"));
    assert!(buffer_contains(
        &buffer,
        "Miner: 0x9595959595959595959595959595959595959595"
    ));
    assert!(buffer_contains(&buffer, "Txs: 2"));
    assert!(buffer_contains(&buffer, "Gas Used: 15000000"));
    assert!(buffer_contains(&buffer, "Gas Limit: 30000000"));
    assert!(buffer_contains(&buffer, "Time: 24s ago"));
}

#[test]
fn test_block_detail_lists_transactions() {
    let mut app = create_test_app();
    app.set_transactions(Ok(vec![]));
    show_entity(&mut app, &block_entity());
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Transactions (2)"));
    assert!(buffer_contains(&buffer, "0xaaaaaaaaaa...aaaaaa"));
    assert!(buffer_contains(&buffer, "0xbbbbbbbbbb...bbbbbb"));
}

#[test]
fn test_selected_link_is_highlighted() {
    let mut app = create_test_app();
    show_entity(&mut app, &block_entity());
    app.focus = Focus::Detail;
    let palette = Palette::for_theme(app.theme());

    let buffer = render_to_buffer(&app, 120, 40);
    let (x, y) = find(&buffer, "0x95959595").unwrap();
    assert_eq!(buffer[(x, y)].bg, palette.selected_bg);

    // Moving down selects the first transaction row instead
    app.select_next();
    let buffer = render_to_buffer(&app, 120, 40);
    let (x, y) = find(&buffer, "0x95959595").unwrap();
    assert_ne!(buffer[(x, y)].bg, palette.selected_bg);
}

// ==================== Transaction detail ====================

#[test]
fn test_tx_detail_success() {
    let mut app = create_test_app();
    let entity = Entity::Transaction {
        tx: mock_tx(0xcc, Some(Address::repeat_byte(0x22))),
        receipt: Some(mock_receipt(1)),
    };
    show_entity(&mut app, &entity);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Tx 0xcccccccccc...cccccc"));
    assert!(buffer_contains(&buffer, "Block: 19000000"));
    assert!(buffer_contains(
        &buffer,
        "From: 0x1111111111111111111111111111111111111111"
    ));
    assert!(buffer_contains(
        &buffer,
        "To: 0x2222222222222222222222222222222222222222"
    ));
    assert!(buffer_contains(&buffer, "Value: 2 ETH"));
    assert!(buffer_contains(&buffer, "Nonce: 7"));
    assert!(buffer_contains(&buffer, "Gas Used: 21000"));
    assert!(buffer_contains(&buffer, "Status: Success"));
}

#[test]
fn test_tx_detail_failed() {
    let mut app = create_test_app();
    let entity = Entity::Transaction {
        tx: mock_tx(0xcc, Some(Address::repeat_byte(0x22))),
        receipt: Some(mock_receipt(0)),
    };
    show_entity(&mut app, &entity);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Status: Fail"));
}

#[test]
fn test_tx_detail_pending_contract_creation() {
    let mut app = create_test_app();
    let mut tx = mock_tx(0xcc, None);
    tx.block_number = None;
    show_entity(&mut app, &Entity::Transaction { tx, receipt: None });
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Block: pending"));
    assert!(buffer_contains(&buffer, "To: contract"));
    assert!(buffer_contains(&buffer, "Status: Pending"));
    assert!(!buffer_contains(&buffer, "Gas Used"));
}

// ==================== Address detail ====================

#[test]
fn test_address_detail() {
    let mut app = create_test_app();
    show_entity(&mut app, &Entity::Address(mock_address()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Address 0x3333333333...333333"));
    assert!(buffer_contains(
        &buffer,
        "Address: 0x3333333333333333333333333333333333333333"
    ));
    assert!(buffer_contains(&buffer, "Balance: 5 ETH"));
    assert!(buffer_contains(&buffer, "Tx Count: 150"));
}
