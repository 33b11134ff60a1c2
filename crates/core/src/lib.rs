//! dynfuel-core: parser and validator for Dynamic Fuel System parameter files.
//!
//! Reads the line-oriented parameter file (fuel coefficients, fuel types,
//! optional ecoregion memberships, disturbance conversions and map-name
//! templates) into an [`InputParameters`] value, resolving species and
//! ecoregion names against host-provided registries.
//!
//! # Public API
//!
//! - [`parse()`] -- parse parameter text
//! - [`load_parameters()`] / [`load_parameters_with_provider()`] -- read and
//!   parse a file
//! - [`ParseError`] -- the single error type
//! - [`ParseOptions`] -- parser configuration
//! - [`Lookup`], [`Registry`], [`Species`], [`Ecoregion`] -- registry access
//! - Model types: [`InputParameters`], [`FuelType`], [`BaseFuelType`],
//!   [`DisturbanceType`]

pub mod error;
pub mod lines;
pub mod load;
pub mod map_names;
pub mod model;
pub mod options;
pub mod parser;
pub mod registry;
pub mod source;

// ── Convenience re-exports: key types ────────────────────────────────

pub use error::ParseError;
pub use model::{BaseFuelType, DisturbanceType, FuelType, InputParameters};
pub use options::{ParseOptions, EXTENSION_NAME};
pub use registry::{Ecoregion, Lookup, Registry, Species};
pub use source::{FileSystemProvider, InMemoryProvider, SourceProvider};

// ── Convenience re-exports: entry points ─────────────────────────────

pub use load::{load_parameters, load_parameters_with_provider};
pub use parser::parse;
