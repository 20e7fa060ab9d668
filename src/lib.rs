//! walletlens: look up an Ethereum address or ENS name and show its ETH and
//! ERC-20 balances.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod services;
pub mod ui;
