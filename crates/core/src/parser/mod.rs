//! Parameter-file parser.
//!
//! A single forward pass over the significant lines of the file. Each table
//! runs until the header keyword of the next section appears; the header is
//! only consumed by the section that owns it. The first error aborts the
//! parse.

use crate::error::ParseError;
use crate::lines::{self, Line};
use crate::model::InputParameters;
use crate::options::ParseOptions;
use crate::registry::{Ecoregion, Lookup, Species};
use tracing::info;

mod coefficients;
mod disturbances;
mod fields;
mod fuel_types;
mod guard;
mod resolve;
mod scalars;

use fields::Fields;

// Section keywords, in file order.
pub const LANDIS_DATA: &str = "LandisData";
pub const TIMESTEP: &str = "Timestep";
pub const HARDWOOD_MAXIMUM: &str = "HardwoodMaximum";
pub const DEAD_FIR_MAX_AGE: &str = "DeadFirMaxAge";
pub const FUEL_TYPES: &str = "FuelTypes";
pub const ECOREGION_TABLE: &str = "EcoregionTable";
pub const DISTURBANCE_CONVERSION_TABLE: &str = "DisturbanceConversionTable";
pub const MAP_FILE_NAMES: &str = "MapFileNames";
pub const PCT_CONIFER_FILE_NAME: &str = "PctConiferFileName";
pub const PCT_DEAD_FIR_FILE_NAME: &str = "PctDeadFirFileName";

/// Where an error is reported: input label and 1-based line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Loc<'a> {
    file: &'a str,
    line: u32,
}

impl Loc<'_> {
    fn err(self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.file, self.line, message)
    }
}

// ──────────────────────────────────────────────
// Cursor
// ──────────────────────────────────────────────

struct Parser<'a> {
    lines: &'a [Line],
    pos: usize,
    filename: &'a str,
    /// Reported for errors at end of input.
    end_line: u32,
    species: &'a dyn Lookup<Species>,
    ecoregions: &'a dyn Lookup<Ecoregion>,
}

impl<'a> Parser<'a> {
    fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    fn cur(&self) -> Option<&'a Line> {
        self.lines.get(self.pos)
    }

    fn cur_line(&self) -> u32 {
        self.cur().map_or(self.end_line, |l| l.number)
    }

    fn loc(&self) -> Loc<'a> {
        Loc {
            file: self.filename,
            line: self.cur_line(),
        }
    }

    fn err(&self, message: impl Into<String>) -> ParseError {
        self.loc().err(message)
    }

    fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// First word of the current line.
    fn current_name(&self) -> Option<&'a str> {
        self.cur()
            .and_then(|l| l.text.split_whitespace().next())
    }

    fn at_name(&self, name: &str) -> bool {
        self.current_name() == Some(name)
    }

    /// Field reader over the current line.
    fn fields(&self) -> Result<Fields<'a>, ParseError> {
        match self.cur() {
            Some(line) => Ok(Fields::new(self.loc(), &line.text)),
            None => Err(self.err("Unexpected end of input")),
        }
    }

    /// Field reader positioned after `name`, which must lead the current line.
    fn fields_after_name(&self, name: &str) -> Result<Fields<'a>, ParseError> {
        if self.at_end() {
            return Err(self.err(format!(
                "Expected the name \"{}\" but reached end of input",
                name
            )));
        }
        let mut f = self.fields()?;
        let found = f.read_word();
        if found != name {
            return Err(self
                .err(format!("Expected the name \"{}\" but found \"{}\"", name, found))
                .with_text(found));
        }
        Ok(f)
    }

    /// Consume a header line that holds only `name`.
    fn expect_header(&mut self, name: &str) -> Result<(), ParseError> {
        let mut f = self.fields_after_name(name)?;
        f.check_no_data_after(&format!("the name \"{}\"", name))?;
        self.advance();
        Ok(())
    }

    /// Consume the header line `name` if it is next.
    fn optional_header(&mut self, name: &str) -> Result<bool, ParseError> {
        if !self.at_name(name) {
            return Ok(false);
        }
        self.expect_header(name)?;
        Ok(true)
    }

    /// Read the record `<name> <value>` with `read` and consume the line.
    fn read_var<T>(
        &mut self,
        name: &str,
        read: impl FnOnce(&mut Fields<'a>) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let mut f = self.fields_after_name(name)?;
        let value = read(&mut f)?;
        f.check_no_data_after(&format!("the {} parameter", name))?;
        self.advance();
        Ok(value)
    }

    /// Fail if any line remains.
    fn expect_end_of_input(&self, after: &str) -> Result<(), ParseError> {
        match self.cur() {
            None => Ok(()),
            Some(line) => Err(self
                .err(format!("Found extra data after {}: \"{}\"", after, line.text))
                .with_text(line.text.as_str())),
        }
    }

    fn parse_parameters(&mut self, options: &ParseOptions) -> Result<InputParameters, ParseError> {
        if let Some(expected) = &options.landis_data {
            self.parse_landis_data(expected)?;
        }

        let mut params = InputParameters::new(self.species.count());
        params.timestep = self.read_var(TIMESTEP, |f| f.read_positive(TIMESTEP))?;

        self.parse_fuel_coefficients(&mut params)?;

        params.hardwood_max = self.parse_hardwood_max()?;
        params.dead_fir_max_age =
            self.read_var(DEAD_FIR_MAX_AGE, |f| f.read_non_negative(DEAD_FIR_MAX_AGE))?;

        info!("   Reading in the Fuel Assignment table...");
        self.expect_header(FUEL_TYPES)?;
        self.parse_fuel_types(&mut params)?;

        if self.optional_header(ECOREGION_TABLE)? {
            info!("   Loading Ecoregion data...");
            self.parse_ecoregion_table(&mut params)?;
        }

        info!("   Reading in the Disturbance Type table...");
        self.expect_header(DISTURBANCE_CONVERSION_TABLE)?;
        self.parse_disturbance_types(&mut params)?;

        info!("   Reading in map names...");
        params.map_file_names = self.read_map_template(MAP_FILE_NAMES)?;
        params.pct_conifer_file_name = self.read_map_template(PCT_CONIFER_FILE_NAME)?;
        params.pct_dead_fir_file_name = self.read_map_template(PCT_DEAD_FIR_FILE_NAME)?;

        self.expect_end_of_input(&format!("the {} parameter", PCT_DEAD_FIR_FILE_NAME))?;
        Ok(params)
    }
}

/// Parse parameter text. `filename` labels errors.
pub fn parse(
    src: &str,
    filename: &str,
    species: &dyn Lookup<Species>,
    ecoregions: &dyn Lookup<Ecoregion>,
    options: &ParseOptions,
) -> Result<InputParameters, ParseError> {
    let significant = lines::split_lines(src);
    let mut p = Parser {
        lines: &significant,
        pos: 0,
        filename,
        end_line: lines::end_line(src),
        species,
        ecoregions,
    };
    p.parse_parameters(options)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
