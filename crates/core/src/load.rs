//! Entry points that read a parameter file through a [`SourceProvider`].

use crate::error::ParseError;
use crate::model::InputParameters;
use crate::options::ParseOptions;
use crate::parser;
use crate::registry::{Ecoregion, Lookup, Species};
use crate::source::{FileSystemProvider, SourceProvider};
use std::path::Path;
use tracing::info;

/// Read and parse the parameter file at `path` from the filesystem.
pub fn load_parameters(
    path: &Path,
    species: &dyn Lookup<Species>,
    ecoregions: &dyn Lookup<Ecoregion>,
    options: &ParseOptions,
) -> Result<InputParameters, ParseError> {
    load_parameters_with_provider(path, &FileSystemProvider, species, ecoregions, options)
}

/// Read and parse the parameter file at `path` using `provider` for I/O.
pub fn load_parameters_with_provider(
    path: &Path,
    provider: &dyn SourceProvider,
    species: &dyn Lookup<Species>,
    ecoregions: &dyn Lookup<Ecoregion>,
    options: &ParseOptions,
) -> Result<InputParameters, ParseError> {
    let file = path.to_string_lossy();
    let src = provider
        .read_source(path)
        .map_err(|e| ParseError::new(&file, 0, format!("cannot open file: {}", e)))?;
    info!("Loading parameters from file \"{}\" ...", file);
    parser::parse(&src, &file, species, ecoregions, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::{ecoregions, species, VALID};
    use crate::source::InMemoryProvider;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn loads_through_provider() {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("/params/fuels.txt"), VALID.to_string());
        let provider = InMemoryProvider::new(files);
        let params = load_parameters_with_provider(
            Path::new("/params/fuels.txt"),
            &provider,
            &species(),
            &ecoregions(),
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(params.timestep, 10);
    }

    #[test]
    fn missing_file_is_line_zero_error() {
        let provider = InMemoryProvider::new(HashMap::new());
        let err = load_parameters_with_provider(
            Path::new("/params/none.txt"),
            &provider,
            &species(),
            &ecoregions(),
            &ParseOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.line, 0);
        assert_eq!(err.file, "/params/none.txt");
        assert!(err.message.starts_with("cannot open file:"));
    }

    #[test]
    fn errors_are_labelled_with_the_path() {
        let mut files = HashMap::new();
        files.insert(
            PathBuf::from("/params/bad.txt"),
            VALID.replace("Timestep  10", "Timestep  ten"),
        );
        let provider = InMemoryProvider::new(files);
        let err = load_parameters_with_provider(
            Path::new("/params/bad.txt"),
            &provider,
            &species(),
            &ecoregions(),
            &ParseOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "/params/bad.txt:3: Timestep: \"ten\" is not a valid integer");
    }
}
