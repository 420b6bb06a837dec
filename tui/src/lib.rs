//! # Ember
//!
//! Interactive terminal session for comparing text by embedding similarity.
//!
//! Type a text, and Ember embeds it and shows its cosine similarity to each
//! text in the comparison set. The comparison set starts with two built-in
//! examples and can be reconfigured from the session.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Ember Session                                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  crossterm keys ──┐                                             │
//! │  spinner ticks ───┼──► AppEvent ──► App ──► Command             │
//! │  finished jobs ───┘                  │          │               │
//! │        ▲                             ▼          ▼               │
//! │        └──────────────────────── ui::render  tokio task         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod event;
pub mod logging;
pub mod runtime;
pub mod seed;
pub mod text_buffer;
pub mod ui;

pub use app::{App, Screen, ScreenKind};
pub use config::EmberConfig;
pub use event::{AppEvent, Command};
