//! # Core Application Logic
//!
//! This module contains Reel's business logic. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   OMDb     │
//!             │  Adapter   │          │  Client    │
//!             │ (ratatui)  │          │ (reqwest)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct - all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`favorites`]: The session-local favorites collection
//! - [`config`]: Settings resolution (file, env vars, CLI flags)

pub mod action;
pub mod config;
pub mod favorites;
pub mod state;
