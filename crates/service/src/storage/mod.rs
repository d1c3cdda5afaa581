//! Storage abstractions for service layer
//!
//! Contains reusable file-backed stores so services persisting small
//! collections as JSON share one load/save implementation.

pub mod json_list_store;
