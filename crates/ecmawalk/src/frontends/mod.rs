//! Frontends for ecmawalk
//!
//! Implementations of the `Frontend` trait.

pub mod estree;

pub use estree::EstreeFrontend;
