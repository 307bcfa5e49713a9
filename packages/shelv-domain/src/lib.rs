mod link;
mod smallhash;

pub use link::Link;
pub use smallhash::small_hash;
