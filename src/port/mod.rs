//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where the catalog core meets the outside world.
//! Each port has one production adapter and one fake in [`crate::testkit`].
//!
//! ```text
//!              ┌──────────────────────────────┐
//!              │         Application          │
//!              │  CatalogSync / ItemsService  │
//!              └──────────────────────────────┘
//!                 │                        │
//!                 ▼                        ▼
//!         ┌──────────────┐         ┌──────────────┐
//!         │ PriceSource  │         │   TtlStore   │
//!         │  (Skinport)  │         │ (in-memory)  │
//!         └──────────────┘         └──────────────┘
//! ```

pub mod outbound;

pub use outbound::price_source::PriceSource;
pub use outbound::store::TtlStore;
