//! Experiment tracking for fitlog pipelines.
//!
//! The crate has two halves. The client half records training runs with a
//! tracking service: [`TrackingClient`] wraps a [`store::TrackingStore`]
//! backend, either the JSON-over-HTTP [`rest::RestStore`] selected through
//! [`TrackingConfig`] or the in-process [`memory::InMemoryStore`] used by
//! tests and offline runs. The pipeline half ([`pipeline`]) is the demo
//! sequence itself: train an elastic net on iris and record the run, its
//! model and its metrics.
//!
//! The `fitlog-tracking` binary executes the pipeline against the configured
//! server and prints the logged model's id with its parameter and metric
//! mappings.

pub mod client;
pub mod config;
pub mod entities;
pub mod error;
pub mod memory;
pub mod pipeline;
pub mod rest;
pub mod store;

pub use client::TrackingClient;
pub use config::TrackingConfig;
pub use entities::{LoggedModel, Run, RunStatus, TrackedDataset};
pub use error::{Result, TrackingError};
