pub mod action;

pub use action::{action_for_key, Action};
