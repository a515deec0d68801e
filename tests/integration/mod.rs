//! Integration tests for the Parley chat relay
//!
//! These verify the complete request/response flow through the real router,
//! with wiremock standing in for the completion provider.

mod auth;
mod health;
