//! # Core Application Logic
//!
//! Propview's business logic. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌──────────────────────────────┐
//!                    │            CORE              │
//!                    │                              │
//!                    │  • search     (lifecycle)    │
//!                    │  • categorize (buckets)      │
//!                    │  • selection  (tab/detail)   │
//!                    │  • map_focus  (camera)       │
//!                    │  • controller (composes them)│
//!                    │  • update()   (reducer)      │
//!                    │                              │
//!                    │  No I/O. No UI. Pure.        │
//!                    └──────────────┬───────────────┘
//!                                   │
//!                                   ▼
//!                            ┌────────────┐
//!                            │    TUI     │
//!                            │  Adapter   │
//!                            │ (ratatui)  │
//!                            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update` reducer
//! - [`controller`]: Keeps tabs, detail panel, and map focus in step
//! - [`config`]: Layered settings (defaults, file, env, CLI)

pub mod action;
pub mod categorize;
pub mod config;
pub mod controller;
pub mod map_focus;
pub mod search;
pub mod selection;
pub mod state;
