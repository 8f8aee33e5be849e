//! # decode-core
//!
//! Game engine for Signal Decode. Provides pattern generation, the round
//! state machine driver, timing, configuration and the session log,
//! independent of any UI.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use decode_core::config::Config;
//! use decode_core::engine::GameEngine;
//!
//! let config = Config::load();
//! let mut engine = GameEngine::from_config(&config);
//!
//! engine.start_game();
//! engine.play_signal();
//! // Drive time from a real clock...
//! let result = engine.advance_to(start.elapsed());
//! // ...and route result.sounds to the audio layer.
//! ```
//!
//! ## Module Overview
//!
//! - [`engine`] — `GameEngine`, the local dispatcher that owns `GameState`
//! - [`pattern`] — seeded pattern generator with best-effort anti-repetition
//! - [`scheduler`] — epoch-stamped timed steps
//! - [`config`] — TOML configuration (embedded defaults + user override)
//! - [`session_log`] — JSONL action log

pub mod config;
pub mod engine;
pub mod pattern;
pub mod scheduler;
pub mod session_log;

pub use decode_types as types;
