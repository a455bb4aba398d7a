mod collection;
mod data_cache;
mod memo;
mod ready;

pub use collection::{CachedCollection, CollectionState, ErrorInfo};
pub use data_cache::DataCache;
pub use memo::{AnalysisMemo, MemoCounters};
pub use ready::ReadyFlag;
