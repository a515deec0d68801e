//! HTTP middleware for Parley

pub mod xhr;
