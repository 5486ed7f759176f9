// Adapters layer: concrete implementations of domain ports for external systems.

pub mod notion;

pub use notion::NotionClient;
