//! Proof module: canonical hashing for determinism audits.
//!
//! Depends on `path`. Nothing in the kernel depends on `proof`.

pub mod hash;
pub mod hash_domain;
