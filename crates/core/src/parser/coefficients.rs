use super::guard::DuplicateGuard;
use super::{resolve, Parser, HARDWOOD_MAXIMUM};
use crate::error::ParseError;
use crate::model::InputParameters;
use tracing::debug;

const SPECIES_FIELD: &str = "Species";
const COEFFICIENT_FIELD: &str = "Fuel Coefficient";

impl<'a> Parser<'a> {
    /// Rows of `<species> <coefficient>` up to `HardwoodMaximum`.
    pub(super) fn parse_fuel_coefficients(
        &mut self,
        params: &mut InputParameters,
    ) -> Result<(), ParseError> {
        let mut seen = DuplicateGuard::new("species");
        while !self.at_end() && !self.at_name(HARDWOOD_MAXIMUM) {
            let mut f = self.fields()?;
            let name = f.read_string(SPECIES_FIELD)?;
            let species = resolve::species(self.species, &name, f.loc())?;
            seen.check(name, f.loc())?;

            let coefficient = f.read_double(COEFFICIENT_FIELD)?;
            params.fuel_coefficients[species.index] = coefficient;
            f.check_no_data_after(&format!("the {} column", COEFFICIENT_FIELD))?;

            debug!(species = %species.name, coefficient, "fuel coefficient");
            self.advance();
        }
        Ok(())
    }
}
