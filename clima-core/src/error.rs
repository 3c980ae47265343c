use thiserror::Error;

/// Failures while turning user input into a place to look up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Por favor ingresa una ciudad")]
    EmptyQuery,

    #[error("No se encontró la ciudad: {city}")]
    CityNotFound { city: String },

    #[error("No se encontró {city} en {country}")]
    CityNotInCountry { city: String, country: String },
}
