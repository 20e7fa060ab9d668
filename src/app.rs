use std::time::{Duration, Instant};

use crate::core::Action;
use crate::domain::error::EMPTY_INPUT_MESSAGE;
use crate::domain::{shorten_address, LookupError, TokenSpec, WalletInfo};
use crate::infrastructure::RuntimeEvent;

const SUBMIT_LABEL: &str = "Check";
const SUBMIT_LABEL_BUSY: &str = "Checking...";
/// Info and warn messages clear after this long; errors stay until replaced
const STATUS_TTL: Duration = Duration::from_secs(3);

/// What the result area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success(WalletInfo),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    level: StatusLevel,
    since: Instant,
}

/// A lookup the UI wants the runtime to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: u64,
    pub query: String,
}

pub struct App {
    pub input: String,
    pub phase: Phase,
    /// Bumped on every accepted submit; results from older generations are dropped
    pub generation: u64,
    pub tokens: Vec<TokenSpec>,
    pub endpoint: String,
    pub should_quit: bool,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(endpoint: impl Into<String>, tokens: Vec<TokenSpec>) -> Self {
        Self {
            input: String::new(),
            phase: Phase::Idle,
            generation: 0,
            tokens,
            endpoint: endpoint.into(),
            should_quit: false,
            status: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Input and submit control are both disabled while a lookup runs
    pub fn input_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn wallet(&self) -> Option<&WalletInfo> {
        match &self.phase {
            Phase::Success(wallet) => Some(wallet),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Apply a key action. Returns the lookup to start, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<LookupRequest> {
        match action {
            Action::None => None,
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Insert(c) => {
                self.insert_char(c);
                None
            }
            Action::Backspace => {
                self.backspace();
                None
            }
            Action::ClearInput => {
                self.clear_input();
                None
            }
            Action::Submit => self.submit(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.input_enabled() {
            return;
        }
        self.input.push(c);
        self.reset_result();
    }

    pub fn backspace(&mut self) {
        if !self.input_enabled() {
            return;
        }
        self.input.pop();
        self.reset_result();
    }

    pub fn clear_input(&mut self) {
        if !self.input_enabled() {
            return;
        }
        self.input.clear();
        self.reset_result();
    }

    /// Editing drops any previous result or error
    fn reset_result(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn submit(&mut self) -> Option<LookupRequest> {
        if self.is_loading() {
            return None;
        }

        let query = self.input.trim();
        if query.is_empty() {
            self.phase = Phase::Error(EMPTY_INPUT_MESSAGE.to_string());
            return None;
        }

        let query = query.to_string();
        self.status = None;
        self.generation += 1;
        self.phase = Phase::Loading;
        Some(LookupRequest {
            generation: self.generation,
            query,
        })
    }

    /// Settle the lookup for `generation`. Results for any other generation
    /// are stale and ignored.
    pub fn apply_lookup(&mut self, generation: u64, result: Result<WalletInfo, LookupError>) {
        if generation != self.generation || !self.is_loading() {
            return;
        }
        self.phase = match result {
            Ok(wallet) => {
                match wallet.failed_tokens() {
                    0 => self.set_status(
                        format!("Loaded {}", shorten_address(&wallet.checksum_address())),
                        StatusLevel::Info,
                    ),
                    1 => self.set_status("1 token balance unavailable", StatusLevel::Warn),
                    n => self.set_status(
                        format!("{n} token balances unavailable"),
                        StatusLevel::Warn,
                    ),
                }
                Phase::Success(wallet)
            }
            Err(err) => Phase::Error(err.user_message()),
        };
    }

    /// End a pending lookup that will never report back
    pub fn fail_pending(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.is_loading() {
            self.phase = Phase::Error(message.clone());
        }
        self.set_status(message, StatusLevel::Error);
    }

    pub fn apply_runtime_event(&mut self, event: RuntimeEvent) {
        match event {
            RuntimeEvent::LookupFinished { generation, result } => {
                self.apply_lookup(generation, result)
            }
            RuntimeEvent::Error { message } => self.fail_pending(message),
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.level != StatusLevel::Error && status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }
}
