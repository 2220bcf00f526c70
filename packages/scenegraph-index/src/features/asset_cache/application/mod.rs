// Asset Cache Application Layer

pub mod asset_cache;
pub mod cache_usecase;

pub use asset_cache::AssetCache;
pub use cache_usecase::AssetCacheUseCase;
