use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::config::{Config, Theme};
use crate::rpc::{Block, Transaction};
use crate::search::SearchQuery;
use crate::view::{self, DetailView, Entity, NavLink};

/// Pane receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Blocks,
    Transactions,
    Detail,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Blocks,
            Focus::Blocks => Focus::Transactions,
            Focus::Transactions => Focus::Detail,
            Focus::Detail => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Detail,
            Focus::Blocks => Focus::Search,
            Focus::Transactions => Focus::Blocks,
            Focus::Detail => Focus::Transactions,
        }
    }
}

/// Contents of one of the two home lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Listing::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Listing::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub view: DetailView,
    /// Index into `view.links()`
    pub selected: usize,
}

/// State of the detail pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Welcome,
    Loading(String),
    Detail(DetailPanel),
    Error(String),
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Search(SearchQuery),
    Open(NavLink),
    Refresh,
    /// The theme has already been switched; persist it
    SaveTheme(Theme),
    Quit,
}

pub struct App {
    pub config: Config,
    /// Endpoint in use, which may differ from the persisted one
    pub rpc_url: String,
    pub focus: Focus,
    pub search_input: Input,
    pub blocks: Listing<Block>,
    pub block_selected: usize,
    pub transactions: Listing<Transaction>,
    pub tx_selected: usize,
    pub panel: Panel,
    pub history: Vec<Panel>,
    pub should_quit: bool,
    latest_ticket: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        let rpc_url = config.rpc_url.clone();
        Self::with_rpc_url(config, rpc_url)
    }

    pub fn with_rpc_url(config: Config, rpc_url: String) -> Self {
        Self {
            config,
            rpc_url,
            focus: Focus::Search,
            search_input: Input::default(),
            blocks: Listing::Loading,
            block_selected: 0,
            transactions: Listing::Loading,
            tx_selected: 0,
            panel: Panel::Welcome,
            history: Vec::new(),
            should_quit: false,
            latest_ticket: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    /// Flip the theme in memory. The caller persists it.
    pub fn toggle_theme(&mut self) -> Theme {
        self.config.theme = self.config.theme.toggle();
        self.config.theme
    }

    // ==================== Lists ====================

    /// Mark both lists as loading. Returns false while a load is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.blocks.is_loading() || self.transactions.is_loading() {
            return false;
        }
        self.blocks = Listing::Loading;
        self.transactions = Listing::Loading;
        true
    }

    pub fn set_blocks(&mut self, result: Result<Vec<Block>, String>) {
        self.blocks = match result {
            Ok(blocks) => Listing::Ready(blocks),
            Err(e) => Listing::Failed(e),
        };
        self.block_selected = clamp(self.block_selected, self.blocks.items().len());
    }

    pub fn set_transactions(&mut self, result: Result<Vec<Transaction>, String>) {
        self.transactions = match result {
            Ok(txs) => Listing::Ready(txs),
            Err(e) => Listing::Failed(e),
        };
        self.tx_selected = clamp(self.tx_selected, self.transactions.items().len());
    }

    // ==================== Detail requests ====================

    /// Start a detail fetch and hand out its ticket. Any earlier request still
    /// in flight becomes stale.
    pub fn begin_request(&mut self, label: impl Into<String>) -> u64 {
        self.latest_ticket += 1;
        self.push_history();
        self.panel = Panel::Loading(label.into());
        self.latest_ticket
    }

    /// Apply a detail result. Results for anything but the latest ticket are
    /// dropped so a slow early lookup cannot overwrite a later one.
    pub fn finish_request(&mut self, ticket: u64, result: Result<Entity, String>, now: u64) -> bool {
        if ticket != self.latest_ticket {
            debug!(ticket, latest = self.latest_ticket, "dropping stale detail result");
            return false;
        }

        self.panel = match result {
            Ok(entity) => Panel::Detail(DetailPanel {
                view: view::detail(&entity, now),
                selected: 0,
            }),
            Err(msg) => Panel::Error(msg),
        };
        true
    }

    fn push_history(&mut self) {
        if matches!(self.panel, Panel::Detail(_)) {
            self.history.push(self.panel.clone());
        }
    }

    /// Return to the previous detail view, or the welcome panel when there is none.
    /// A request still in flight is abandoned.
    pub fn go_back(&mut self) {
        self.latest_ticket += 1;
        self.panel = self.history.pop().unwrap_or(Panel::Welcome);
    }

    // ==================== Search ====================

    /// Take the search text. Blank input yields nothing.
    pub fn submit_search(&mut self) -> Option<SearchQuery> {
        let query = SearchQuery::parse(self.search_input.value());
        if query == SearchQuery::Empty {
            return None;
        }
        self.search_input.reset();
        Some(query)
    }

    // ==================== Selection ====================

    pub fn select_prev(&mut self) {
        match self.focus {
            Focus::Blocks => self.block_selected = self.block_selected.saturating_sub(1),
            Focus::Transactions => self.tx_selected = self.tx_selected.saturating_sub(1),
            Focus::Detail => {
                if let Panel::Detail(panel) = &mut self.panel {
                    panel.selected = panel.selected.saturating_sub(1);
                }
            }
            Focus::Search => {}
        }
    }

    pub fn select_next(&mut self) {
        match self.focus {
            Focus::Blocks => {
                self.block_selected = clamp(self.block_selected + 1, self.blocks.items().len())
            }
            Focus::Transactions => {
                self.tx_selected = clamp(self.tx_selected + 1, self.transactions.items().len())
            }
            Focus::Detail => {
                if let Panel::Detail(panel) = &mut self.panel {
                    panel.selected = clamp(panel.selected + 1, panel.view.links().len());
                }
            }
            Focus::Search => {}
        }
    }

    /// Target under the cursor of the focused pane
    pub fn selected_link(&self) -> Option<NavLink> {
        match self.focus {
            Focus::Blocks => self
                .blocks
                .items()
                .get(self.block_selected)
                .map(|b| NavLink::Block(b.number)),
            Focus::Transactions => self
                .transactions
                .items()
                .get(self.tx_selected)
                .map(|tx| NavLink::Transaction(tx.hash)),
            Focus::Detail => match &self.panel {
                Panel::Detail(panel) => panel.view.links().get(panel.selected).copied(),
                _ => None,
            },
            Focus::Search => None,
        }
    }

    // ==================== Keys ====================

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Action::Quit;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return Action::Quit;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Action::None;
            }
            _ => {}
        }

        if self.focus == Focus::Search {
            if key.code == KeyCode::Enter {
                return self.submit_search().map_or(Action::None, Action::Search);
            }
            self.search_input.handle_event(&Event::Key(key));
            return Action::None;
        }

        match key.code {
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => {
                if let Some(link) = self.selected_link() {
                    return Action::Open(link);
                }
            }
            KeyCode::Backspace | KeyCode::Char('b') => self.go_back(),
            KeyCode::Char('t') => return Action::SaveTheme(self.toggle_theme()),
            KeyCode::Char('r') => {
                if self.begin_refresh() {
                    return Action::Refresh;
                }
            }
            _ => {}
        }

        Action::None
    }
}

/// Keep `index` inside a list of `len` items
fn clamp(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
