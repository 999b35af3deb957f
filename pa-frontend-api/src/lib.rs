use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The request never completed or came back with an error status.
    #[error("{0}")]
    Fetch(String),

    /// The server answered with a well-formed envelope that flags failure.
    #[error("the server rejected the {0} request")]
    Rejected(&'static str),

    /// The body could not be decoded as the expected envelope.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Self::Malformed(err.to_string()),
            err => Self::Fetch(format!("{err}")),
        }
    }
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(Error::Fetch(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )))
    }
}
