use super::guard::DuplicateGuard;
use super::{resolve, Parser, DISTURBANCE_CONVERSION_TABLE, ECOREGION_TABLE};
use crate::error::ParseError;
use crate::model::{BaseFuelType, FuelType, InputParameters};
use std::collections::HashSet;
use tracing::debug;

impl<'a> Parser<'a> {
    /// Rows of `<index> <base> <min> to <max> <species>...`, up to
    /// `EcoregionTable` or `DisturbanceConversionTable`.
    pub(super) fn parse_fuel_types(&mut self, params: &mut InputParameters) -> Result<(), ParseError> {
        let mut seen = DuplicateGuard::new("fuel type");
        while !self.at_end()
            && !self.at_name(DISTURBANCE_CONVERSION_TABLE)
            && !self.at_name(ECOREGION_TABLE)
        {
            let mut f = self.fields()?;
            let index = f.read_int("Fuel Index")?;
            seen.check(index, f.loc())?;

            let base_fuel = f.read_parsed::<BaseFuelType>("Base Fuel Type")?;
            let min_age = f.read_non_negative("Min Age")?;
            let word = f.read_word();
            if word != "to" {
                let mut message = format!("Expected \"to\" after the minimum age ({})", min_age);
                if !word.is_empty() {
                    message.push_str(&format!(", but found \"{}\" instead", word));
                }
                return Err(f.loc().err(message).with_text(word));
            }
            let max_age = f.read_non_negative("Max Age")?;

            let mut fuel_type = FuelType::new(
                index,
                base_fuel,
                min_age,
                max_age,
                self.species.count(),
                self.ecoregions.count(),
            );

            let mut listed = HashSet::new();
            while !f.at_end() {
                let token = f.read_string("Species")?;
                let (negative, name) = match token.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, token.as_str()),
                };
                if negative && name.is_empty() {
                    return Err(f
                        .loc()
                        .err("No species name after \"-\"")
                        .with_text(token.as_str()));
                }
                let species = resolve::species(self.species, name, f.loc())?;
                if !listed.insert(species.index) {
                    return Err(f
                        .loc()
                        .err(format!("The species {} appears more than once.", species.name))
                        .with_text(token.as_str()));
                }
                fuel_type.species_multipliers[species.index] = if negative { -1 } else { 1 };
            }
            if listed.is_empty() {
                return Err(f.loc().err("At least one species is required."));
            }

            debug!(index, %base_fuel, min_age, max_age, "fuel type");
            params.fuel_types.push(fuel_type);
            self.advance();
        }
        Ok(())
    }

    /// Rows of `<fuel index> <ecoregion>...` up to `DisturbanceConversionTable`.
    /// Each fuel index must already be listed in the fuel-type table.
    pub(super) fn parse_ecoregion_table(
        &mut self,
        params: &mut InputParameters,
    ) -> Result<(), ParseError> {
        let mut seen = DuplicateGuard::new("fuel type");
        while !self.at_end() && !self.at_name(DISTURBANCE_CONVERSION_TABLE) {
            let mut f = self.fields()?;
            let index = f.read_int("Fuel Index (Ecoregion Table)")?;
            let position = resolve::fuel_type_position(&params.fuel_types, index, f.loc())?;
            seen.check(index, f.loc())?;

            let mut ecoregions = vec![false; self.ecoregions.count()];
            while !f.at_end() {
                let name = f.read_string("Ecoregion Name")?;
                let ecoregion = resolve::ecoregion(self.ecoregions, &name, f.loc())?;
                if ecoregions[ecoregion.index] {
                    return Err(f
                        .loc()
                        .err(format!(
                            "The ecoregion {} appears more than once.",
                            ecoregion.name
                        ))
                        .with_text(name));
                }
                ecoregions[ecoregion.index] = true;
            }

            debug!(index, "fuel type ecoregions");
            params.fuel_types[position].ecoregions = ecoregions;
            self.advance();
        }
        Ok(())
    }
}
