//! # Bread Board Core
//!
//! Core library for Bread Board - a dashboard for running a freelance business:
//! money, work, clients, compliance, insights and a marketplace.
//!
//! This crate provides the data model, the synthetic dataset and the derived
//! aggregates, independent of any interface that renders them.
//!
//! ## Architecture
//!
//! - **model**: Immutable entity records (clients, invoices, transactions, ...)
//! - **dataset**: Deterministic dataset builder anchored on a reference time
//! - **services**: Read-only aggregates and list projections per business area
//! - **api**: Mock API surface with simulated latency
//! - **store**: State containers with refresh/mutate semantics
//! - **widgets**: Dashboard widget catalog (compact and full renderers)
//! - **layout**: Dashboard layout state and its reducer
//! - **fs**: Atomic file helpers for persisted preferences

pub mod api;
pub mod dataset;
pub mod error;
pub mod fs;
pub mod layout;
pub mod model;
pub mod services;
pub mod store;
pub mod widgets;

pub use api::{DashboardApi, MockApi};
pub use dataset::{build, Dataset};
pub use error::{BreadboardError, Result};
pub use layout::{Layout, LayoutAction};
pub use store::{Store, StoreStatus};
pub use widgets::{Density, Panel, WidgetKind};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
