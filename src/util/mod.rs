//! Cross-cutting helpers (guard decisions, theme persistence).

pub mod guard;
pub mod theme;
