//! Common test utilities and infrastructure

pub mod world;

pub use world::GimWorld;
