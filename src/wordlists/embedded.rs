//! Embedded word lists
//!
//! Tier word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/tiers.rs"));
