//! UI rendering tests for ethex
//!
//! These tests render the app into a `TestBackend` and search the buffer.
//! Run with: cargo test --test ui_tests

pub mod common_tests;
pub mod detail_tests;
pub mod home_tests;

use ethex::app::{App, DetailPanel, Panel};
use ethex::config::{Config, Theme};
use ethex::rpc::{AddressSummary, Block, BlockTransactions, Receipt, Transaction};
use ethex::ui::draw_at;
use ethex::view::{self, Entity};

use alloy::primitives::{Address, B256, U256};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

pub const NOW: u64 = 1_700_000_000;

// ==================== Test Data Builders ====================

pub fn mock_config() -> Config {
    Config {
        rpc_url: "http://localhost:8545".to_string(),
        theme: Theme::Dark,
    }
}

pub fn mock_tx(byte: u8, to: Option<Address>) -> Transaction {
    Transaction {
        hash: B256::repeat_byte(byte),
        from: Address::repeat_byte(0x11),
        to,
        value: U256::from(2_000_000_000_000_000_000u128), // 2 ETH
        block_number: Some(19_000_000),
        nonce: 7,
        gas: 21_000,
    }
}

pub fn mock_block(number: u64, txs: BlockTransactions) -> Block {
    Block {
        number,
        hash: B256::repeat_byte(0xab),
        timestamp: NOW - 24,
        gas_used: 15_000_000,
        gas_limit: 30_000_000,
        miner: Address::repeat_byte(0x95),
        transactions: txs,
    }
}

pub fn mock_blocks() -> Vec<Block> {
    (0..3)
        .map(|i| {
            mock_block(
                19_000_000 - i,
                BlockTransactions::Hashes(vec![B256::ZERO; 150]),
            )
        })
        .collect()
}

pub fn mock_transactions() -> Vec<Transaction> {
    vec![
        mock_tx(0xaa, Some(Address::repeat_byte(0x22))),
        mock_tx(0xbb, None),
    ]
}

pub fn mock_receipt(status: u64) -> Receipt {
    Receipt {
        transaction_hash: B256::repeat_byte(0xaa),
        status: Some(status),
        gas_used: 21_000,
    }
}

pub fn mock_address() -> AddressSummary {
    AddressSummary {
        address: Address::repeat_byte(0x33),
        balance: U256::from(5_500_000_000_000_000_000u128),
        tx_count: 150,
    }
}

/// App with both lists loaded and the welcome panel
pub fn create_test_app() -> App {
    let mut app = App::new(mock_config());
    app.set_blocks(Ok(mock_blocks()));
    app.set_transactions(Ok(mock_transactions()));
    app
}

pub fn show_entity(app: &mut App, entity: &Entity) {
    app.panel = Panel::Detail(DetailPanel {
        view: view::detail(entity, NOW),
        selected: 0,
    });
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw_at(frame, app, NOW);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        content.push_str(&buffer_line(buffer, y));
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
