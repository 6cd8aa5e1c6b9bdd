pub mod pool;
pub mod store;

#[cfg(test)]
pub mod memory;

pub use pool::create_pool;
pub use store::{EntryStore, PgEntryStore};
