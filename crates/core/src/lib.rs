//! Psyche Core - Catalog & Entitlement Reconciliation Engine
//!
//! This crate provides the decision logic behind the Psyche storefront:
//! - Catalog loading with an embedded degraded-mode fallback
//! - Entitlement reconciliation against the user's purchase record
//! - Access resolution and bundle pricing for the view model
//! - Entitlement-gated content fetches and checkout link construction
//!
//! The server is the entitlement authority. When it is unreachable the
//! engine degrades to showing content availability, never to inventing
//! ownership.

pub mod access;
pub mod api;
pub mod bundle;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod content;
pub mod engine;
pub mod entitlement;
pub mod error;
pub mod session;

pub use access::Access;
pub use api::{ApiClient, PurchaseReceipt, Suggestion};
pub use bundle::{Bundle, BundleQuote};
pub use catalog::{CatalogItem, CatalogStore, ItemStatus};
pub use checkout::checkout_url;
pub use config::StorefrontConfig;
pub use content::{ContentRequest, ContentView};
pub use engine::{assemble_view, BundleView, ItemView, Storefront, StorefrontView};
pub use entitlement::EntitlementStore;
pub use error::{EngineError, FetchError, SubmitError};
pub use session::{AuthResponse, Session, User};

/// Psyche version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
