//! Asset Cache - build/merge lifecycle and the read-only query API
//!
//! ```text
//! NotReady ──build──▶ Built ──merge──▶ Ready
//!                                       │
//!                   build/merge again ◀─┘ (queries keep answering)
//! ```
//!
//! ## Architecture
//! - Domain: `CacheState`, `MergedIndex` (indices derived once per merge)
//! - Application: `AssetCache` (typed façade), `AssetCacheUseCase` (type-erased host contract)

pub mod application;
pub mod domain;

pub use application::{AssetCache, AssetCacheUseCase};
pub use domain::{CacheState, MergedIndex};
