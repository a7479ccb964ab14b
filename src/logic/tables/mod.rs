//! Canonical read-only rule tables. Each classifier reads exactly one of these.

pub mod crops;
pub mod fertilizer;
pub mod markets;
pub mod pests;
