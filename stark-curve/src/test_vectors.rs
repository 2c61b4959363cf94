//! Test vectors.

pub mod ecdsa;
pub mod field;
pub mod group;
pub mod pedersen;
