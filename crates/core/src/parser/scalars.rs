use super::{Parser, HARDWOOD_MAXIMUM, LANDIS_DATA};
use crate::error::ParseError;
use crate::map_names;

impl<'a> Parser<'a> {
    pub(super) fn parse_landis_data(&mut self, expected: &str) -> Result<(), ParseError> {
        self.read_var(LANDIS_DATA, |f| {
            let found = f.read_string(LANDIS_DATA)?;
            if found != expected {
                return Err(f
                    .loc()
                    .err(format!("Found \"{}\" but expected \"{}\"", found, expected))
                    .with_text(found));
            }
            Ok(())
        })
    }

    /// Percentage, 0 to 100.
    pub(super) fn parse_hardwood_max(&mut self) -> Result<u32, ParseError> {
        self.read_var(HARDWOOD_MAXIMUM, |f| {
            let value = f.read_non_negative(HARDWOOD_MAXIMUM)?;
            if value > 100 {
                return Err(f
                    .loc()
                    .err(format!(
                        "{}: {} is not valid; value must be between 0 and 100",
                        HARDWOOD_MAXIMUM, value
                    ))
                    .with_text(value.to_string()));
            }
            Ok(value)
        })
    }

    pub(super) fn read_map_template(&mut self, name: &str) -> Result<String, ParseError> {
        self.read_var(name, |f| {
            let template = f.read_string(name)?;
            map_names::check_template(&template).map_err(|e| {
                f.loc()
                    .err(format!("{}: {}", name, e))
                    .with_text(template.as_str())
            })?;
            Ok(template)
        })
    }
}
