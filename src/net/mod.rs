//! Network layer: gateway, endpoint wrappers, errors, wire DTOs.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
