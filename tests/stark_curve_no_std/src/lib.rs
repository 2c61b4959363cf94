//! Builds `stark-curve` without the standard library.

#![no_std]

pub use stark_curve;
