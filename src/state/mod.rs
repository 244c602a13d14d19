//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `storage` owns the durable token store; `session` owns the in-memory
//! state machine derived from it. No other module writes storage directly
//! (the gateway's forced sign-out goes through the session's clear path).

pub mod session;
pub mod storage;
