//! Flutter-facing bindings for the recipe core.

pub mod api;
