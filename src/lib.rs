//! # Connect Four
//!
//! A two-player Connect Four rules engine with a terminal front end built
//! with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, move application, win and tie detection
//! - [`setup`]: Player name and colour validation before a game starts
//! - [`ui`]: Terminal UI: input handling and board rendering
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod setup;
pub mod ui;
