//! Name and index resolution against the registries and the fuel types
//! parsed so far.

use super::Loc;
use crate::error::ParseError;
use crate::model::FuelType;
use crate::registry::{Ecoregion, Lookup, Species};

pub(super) fn species<'r>(
    registry: &'r dyn Lookup<Species>,
    name: &str,
    loc: Loc<'_>,
) -> Result<&'r Species, ParseError> {
    let species = registry
        .by_name(name)
        .ok_or_else(|| loc.err(format!("{} is not a species name.", name)).with_text(name))?;
    if species.index >= registry.count() {
        return Err(loc
            .err(format!(
                "Species {} has index {} outside the species registry",
                name, species.index
            ))
            .with_text(name));
    }
    Ok(species)
}

pub(super) fn ecoregion<'r>(
    registry: &'r dyn Lookup<Ecoregion>,
    name: &str,
    loc: Loc<'_>,
) -> Result<&'r Ecoregion, ParseError> {
    let ecoregion = registry
        .by_name(name)
        .ok_or_else(|| loc.err(format!("{} is not an ecoregion name.", name)).with_text(name))?;
    if ecoregion.index >= registry.count() {
        return Err(loc
            .err(format!(
                "Ecoregion {} has index {} outside the ecoregion registry",
                name, ecoregion.index
            ))
            .with_text(name));
    }
    Ok(ecoregion)
}

/// Position in `fuel_types` of the fuel type declared with `index`.
pub(super) fn fuel_type_position(
    fuel_types: &[FuelType],
    index: i32,
    loc: Loc<'_>,
) -> Result<usize, ParseError> {
    fuel_types
        .iter()
        .position(|ft| ft.index == index)
        .ok_or_else(|| {
            loc.err(format!("The fuel type {} was not previously listed", index))
                .with_text(index.to_string())
        })
}
