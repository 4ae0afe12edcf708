//! Format-agnostic access to acquisition metadata.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        get_acquisition_metadata         │
//! │   (classifies by name, opens reader)    │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │         Metadata (closed union)         │
//! │   implements AcquisitionMetadata        │
//! └────────────────────┬────────────────────┘
//!                      │
//!        ┌─────────────┼──────────────┐
//!        ▼             ▼              ▼
//! ┌────────────┐ ┌────────────┐ ┌────────────┐
//! │ Cellfinder │ │ BakingTray │ │  MesoSpim  │
//! │   (.ini)   │ │   (.yml)   │ │   (.txt)   │
//! └────────────┘ └────────────┘ └────────────┘
//! ```
//!
//! Readers are built once and queried any number of times. Each accessor
//! recomputes its value from the parsed document; nothing is cached and the
//! file is not read again.

mod loader;
mod manual;
mod reader;

pub use loader::{get_acquisition_metadata, open_source, Metadata};
pub use manual::{resolve_voxel_size, ManualMetadata};
pub use reader::{AcquisitionMetadata, VoxelSize};
