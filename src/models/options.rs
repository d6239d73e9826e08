use std::fmt;

use serde::{Deserialize, Serialize};

/// Countries a reservation can be placed in. The set is fixed, matching the
/// regions table below.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Country {
    #[serde(rename = "United States")]
    UnitedStates,
    Canada,
    Mexico,
    Spain,
    France,
    Italy,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::UnitedStates,
        Country::Canada,
        Country::Mexico,
        Country::Spain,
        Country::France,
        Country::Italy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::Canada => "Canada",
            Country::Mexico => "Mexico",
            Country::Spain => "Spain",
            Country::France => "France",
            Country::Italy => "Italy",
        }
    }

    /// Regions reservations are offered in, keyed by country.
    pub fn regions(&self) -> &'static [&'static str] {
        match self {
            Country::UnitedStates => {
                &["New York", "California", "Texas", "Florida", "Illinois"]
            }
            Country::Canada => &["Ontario", "British Columbia", "Quebec", "Alberta"],
            Country::Mexico => &["Mexico City", "Jalisco", "Nuevo León", "Quintana Roo"],
            Country::Spain => &["Madrid", "Barcelona", "Valencia", "Seville"],
            Country::France => &["Paris", "Lyon", "Marseille", "Bordeaux"],
            Country::Italy => &["Rome", "Milan", "Florence", "Venice"],
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum CuisineType {
    Italian,
    Japanese,
    Mexican,
    American,
    French,
    Indian,
    Chinese,
    Spanish,
}

impl CuisineType {
    pub const ALL: [CuisineType; 8] = [
        CuisineType::Italian,
        CuisineType::Japanese,
        CuisineType::Mexican,
        CuisineType::American,
        CuisineType::French,
        CuisineType::Indian,
        CuisineType::Chinese,
        CuisineType::Spanish,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CuisineType::Italian => "Italian",
            CuisineType::Japanese => "Japanese",
            CuisineType::Mexican => "Mexican",
            CuisineType::American => "American",
            CuisineType::French => "French",
            CuisineType::Indian => "Indian",
            CuisineType::Chinese => "Chinese",
            CuisineType::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
