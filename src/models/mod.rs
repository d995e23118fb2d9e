//! Data models for the iconforge pipeline.
//!
//! This module contains the core data structures used throughout the tool:
//! - [`ConversionConfig`]: The list of conversions loaded from `iconforge.yaml`
//! - [`ConversionOptions`]: All knobs for a single conversion run
//! - [`IconDefinition`]: One icon as produced by the definition provider
//! - [`ConversionSummary`]: What a completed run generated and how long it took
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: Config structs derive `Serialize`/`Deserialize` for YAML persistence
//! - **Immutable**: Options never change once a pipeline run has started; icon
//!   definitions never change after discovery

pub mod icon;
pub mod options;

pub use icon::{ConversionSummary, IconDefinition};
pub use options::{ConversionConfig, ConversionOptions};
