// Profile pipeline: upstream sources, the normalizer, the TTL cache, and
// the fetch endpoint. Normalization is written once; the active source is
// chosen at startup and injected as a trait object.

pub mod cache;
pub mod handlers;
pub mod normalize;
pub mod service;
pub mod source;
