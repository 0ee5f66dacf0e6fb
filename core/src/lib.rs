pub mod config;
pub mod error;
pub mod handler;
pub mod page;
pub mod request;
pub mod response;
pub mod storage;
pub mod transport;

pub use handler::FormHandler;
pub use page::{Mode, Page};
pub use storage::KeyValueStore;
pub use transport::{Reply, Transport};

#[cfg(test)]
pub mod testing;
