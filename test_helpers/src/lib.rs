//! Test helpers shared across crates.
//!
//! [`catalog`] builds throwaway translation trees and [`jail`] wraps
//! `figment::Jail` for settings tests.

pub mod catalog;
pub mod jail;
