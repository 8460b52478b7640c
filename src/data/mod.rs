//! Data layer: catalog layout, loading, quality selection and derived columns.
//!
//! Architecture:
//! ```text
//!  catalog.dat  (23 whitespace-separated fields per star)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse lines → Catalog (columns per schema)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  drop unmeasured B/Rc/V, add pmMag, drop pmMag ≥ cutoff
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  derive   │  B−Rc, B−V, −B alongside pmMag
//!   └──────────┘
//! ```

pub mod derive;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
