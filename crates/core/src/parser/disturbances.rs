use super::guard::DuplicateGuard;
use super::{Parser, MAP_FILE_NAMES};
use crate::error::ParseError;
use crate::model::{DisturbanceType, InputParameters};
use tracing::debug;

impl<'a> Parser<'a> {
    /// Rows of `<fuel index> <max age> <prescription>...` up to `MapFileNames`.
    ///
    /// The fuel index is kept as a raw key: disturbance conversions may name
    /// fuel indices that the fuel-type table does not define.
    pub(super) fn parse_disturbance_types(
        &mut self,
        params: &mut InputParameters,
    ) -> Result<(), ParseError> {
        let mut seen = DuplicateGuard::new("disturbance type");
        while !self.at_end() && !self.at_name(MAP_FILE_NAMES) {
            let mut f = self.fields()?;
            let fuel_index = f.read_int("Fuel Index")?;
            seen.check(fuel_index, f.loc())?;
            let max_age = f.read_non_negative("Max Age")?;

            let mut prescription_names = Vec::new();
            while !f.at_end() {
                prescription_names.push(f.read_string("Prescription")?);
            }
            if prescription_names.is_empty() {
                return Err(f.loc().err("At least one prescription is required."));
            }

            debug!(fuel_index, max_age, ?prescription_names, "disturbance type");
            params.disturbance_types.push(DisturbanceType {
                fuel_index,
                max_age,
                prescription_names,
            });
            self.advance();
        }
        Ok(())
    }
}
