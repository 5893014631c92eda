//! Blockfall (workspace facade crate).
//!
//! The rules engine lives in `blockfall-core`, input dispatch in
//! `blockfall-input` and the shared vocabulary in `blockfall-types`. This
//! package re-exports them under one name and adds the headless session
//! [`driver`] and config-file discovery used by the `blockfall` binary.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub mod driver;
pub mod settings;
