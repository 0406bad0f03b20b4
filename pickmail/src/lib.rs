//! Pick a random handful of email addresses out of a CSV export.
//!
//! The crate is a straight pipeline:
//! - **Loader**: read the export, drop the header line, keep the first column.
//! - **Selector**: shuffle the addresses and keep the first `count`.
//! - **Masker**: derive a redacted form of each address for display.
//! - **Writer**: persist the unmasked selection, one address per line.
//!
//! [`pipeline::run`] composes the four stages and returns a [`PickReport`]
//! holding only masked addresses, so nothing printed or logged by the binary
//! reveals a full address. The output file is the only place raw addresses
//! are written.
//!
//! What this crate does not do:
//! - validate address syntax (whatever sits in the first column passes through)
//! - parse quoted CSV fields

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod address;
pub mod config;
mod error;
pub mod loader;
pub mod logging;
pub mod masking;
pub mod pipeline;
mod report;
pub mod selector;
pub mod slog;
pub mod writer;

// Re-exports
pub use address::{EmailAddress, MaskedAddress};
pub use config::{Cli, PickConfig, DEFAULT_OUTPUT_FILE, DEFAULT_PICK_COUNT};
pub use error::PickError;
pub use loader::{load_addresses, parse_addresses};
pub use masking::{EmailMaskPolicy, DEFAULT_MASK_CHAR, REDACTED_PLACEHOLDER};
pub use report::PickReport;
pub use selector::{pick, shuffle, take, Selector};
pub use writer::write_addresses;
