pub mod conf;
pub mod core;
pub mod discovery;
pub mod gqi;
pub mod table;

#[cfg(feature = "testutil")]
pub mod testutil;
