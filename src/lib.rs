#![doc = include_str!("RUSTDOC.md")]

pub mod logger;
pub mod monitor;
pub mod provider;
pub mod registry;

#[cfg(test)]
pub mod test_support;
