//! Fetches the canonical model catalog over HTTP.
//!
//! The client only downloads and checks the payload shape; loading it into
//! an editor session is up to the caller.

pub mod client;

pub use client::{dataset_url, DatasetClient, SyncError, DEFAULT_BRANCH};
