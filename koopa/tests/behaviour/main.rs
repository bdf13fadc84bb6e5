//! Behavioural test harness for `koopa` using `rstest-bdd`.
//!
//! Step implementations live under [`steps`], while [`scenarios`] binds the
//! `.feature` files to the shared fixtures.

mod fixtures;
mod scenarios;
mod steps;
