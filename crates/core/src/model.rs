//! Output model: the validated parameter set handed to the simulation.
//!
//! Produced by the parser in one pass and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ──────────────────────────────────────────────
// Base fuel type
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseFuelType {
    Conifer,
    ConiferPlantation,
    Deciduous,
    Open,
    NoFuel,
    Slash,
}

impl BaseFuelType {
    pub const ALL: [BaseFuelType; 6] = [
        BaseFuelType::Conifer,
        BaseFuelType::ConiferPlantation,
        BaseFuelType::Deciduous,
        BaseFuelType::Open,
        BaseFuelType::NoFuel,
        BaseFuelType::Slash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BaseFuelType::Conifer => "Conifer",
            BaseFuelType::ConiferPlantation => "ConiferPlantation",
            BaseFuelType::Deciduous => "Deciduous",
            BaseFuelType::Open => "Open",
            BaseFuelType::NoFuel => "NoFuel",
            BaseFuelType::Slash => "Slash",
        }
    }
}

impl fmt::Display for BaseFuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word that is not one of the base fuel types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Valid Fuel Types: Conifer, ConiferPlantation, Deciduous, Open, NoFuel, Slash.")]
pub struct UnknownBaseFuelType(pub String);

impl FromStr for BaseFuelType {
    type Err = UnknownBaseFuelType;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        BaseFuelType::ALL
            .into_iter()
            .find(|b| b.as_str() == word)
            .ok_or_else(|| UnknownBaseFuelType(word.to_owned()))
    }
}

// ──────────────────────────────────────────────
// Fuel types
// ──────────────────────────────────────────────

/// A fuel classification rule: age range plus weighted species composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelType {
    pub index: i32,
    pub base_fuel: BaseFuelType,
    /// Inclusive.
    pub min_age: u32,
    /// Inclusive.
    pub max_age: u32,
    /// One slot per species: +1 listed, -1 listed with `-`, 0 not listed.
    pub species_multipliers: Vec<i8>,
    /// One slot per ecoregion; all false unless an ecoregion table row
    /// names this fuel type.
    pub ecoregions: Vec<bool>,
}

impl FuelType {
    pub fn new(
        index: i32,
        base_fuel: BaseFuelType,
        min_age: u32,
        max_age: u32,
        species_count: usize,
        ecoregion_count: usize,
    ) -> Self {
        FuelType {
            index,
            base_fuel,
            min_age,
            max_age,
            species_multipliers: vec![0; species_count],
            ecoregions: vec![false; ecoregion_count],
        }
    }

    pub fn multiplier(&self, species_index: usize) -> i8 {
        self.species_multipliers
            .get(species_index)
            .copied()
            .unwrap_or(0)
    }

    pub fn in_ecoregion(&self, ecoregion_index: usize) -> bool {
        self.ecoregions
            .get(ecoregion_index)
            .copied()
            .unwrap_or(false)
    }

    pub fn covers_age(&self, age: u32) -> bool {
        self.min_age <= age && age <= self.max_age
    }
}

// ──────────────────────────────────────────────
// Disturbance types
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisturbanceType {
    /// Raw fuel index key; not resolved against the fuel-type table.
    pub fuel_index: i32,
    pub max_age: u32,
    /// Never empty.
    pub prescription_names: Vec<String>,
}

// ──────────────────────────────────────────────
// Aggregate
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    pub timestep: u32,
    /// Indexed by species; species absent from the coefficient table are 0.
    pub fuel_coefficients: Vec<f64>,
    pub hardwood_max: u32,
    pub dead_fir_max_age: u32,
    pub fuel_types: Vec<FuelType>,
    pub disturbance_types: Vec<DisturbanceType>,
    pub map_file_names: String,
    pub pct_conifer_file_name: String,
    pub pct_dead_fir_file_name: String,
}

impl InputParameters {
    /// Empty parameter set with the coefficient array sized to the species
    /// registry.
    pub fn new(species_count: usize) -> Self {
        InputParameters {
            timestep: 0,
            fuel_coefficients: vec![0.0; species_count],
            hardwood_max: 0,
            dead_fir_max_age: 0,
            fuel_types: Vec::new(),
            disturbance_types: Vec::new(),
            map_file_names: String::new(),
            pct_conifer_file_name: String::new(),
            pct_dead_fir_file_name: String::new(),
        }
    }

    /// Fuel type declared with the given index.
    pub fn fuel_type(&self, index: i32) -> Option<&FuelType> {
        self.fuel_types.iter().find(|ft| ft.index == index)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_fuel_type_parses_every_word() {
        for b in BaseFuelType::ALL {
            assert_eq!(b.as_str().parse::<BaseFuelType>(), Ok(b));
        }
    }

    #[test]
    fn base_fuel_type_rejects_unknown_and_case_mismatch() {
        let err = "conifer".parse::<BaseFuelType>().unwrap_err();
        assert_eq!(err.0, "conifer");
        assert!(err.to_string().starts_with("Valid Fuel Types:"));
        assert!("Grass".parse::<BaseFuelType>().is_err());
    }

    #[test]
    fn new_fuel_type_has_zeroed_arrays() {
        let ft = FuelType::new(1, BaseFuelType::Open, 0, 20, 3, 2);
        assert_eq!(ft.species_multipliers, vec![0, 0, 0]);
        assert_eq!(ft.ecoregions, vec![false, false]);
        assert_eq!(ft.multiplier(7), 0);
        assert!(!ft.in_ecoregion(7));
        assert!(ft.covers_age(20));
        assert!(!ft.covers_age(21));
    }

    #[test]
    fn json_uses_word_form_for_base_fuel() {
        let mut params = InputParameters::new(1);
        params
            .fuel_types
            .push(FuelType::new(4, BaseFuelType::ConiferPlantation, 0, 40, 1, 0));
        let v = params.to_json_value();
        assert_eq!(v["fuel_types"][0]["base_fuel"], "ConiferPlantation");
        assert_eq!(v["fuel_coefficients"][0], 0.0);
        assert_eq!(params.fuel_type(4).map(|ft| ft.max_age), Some(40));
        assert!(params.fuel_type(5).is_none());
    }
}
