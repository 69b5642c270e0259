// src/storage/mod.rs

// In-memory user store standing in for the product's account database
pub mod memory;

pub use memory::MemoryUserStore;
