#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    /// Network failure, non-success HTTP status or an unparseable body
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Invalid Pokémon ID: {0}")]
    InvalidId(String),
}

impl From<pokedex_core::pokemon::ParseIdError> for Error {
    fn from(err: pokedex_core::pokemon::ParseIdError) -> Self {
        Error::InvalidId(err.to_string())
    }
}
