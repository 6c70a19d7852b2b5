//! Type-safe wrappers around [`ResourceClient`](store_actor::ResourceClient).

pub mod product_client;

pub use product_client::*;
