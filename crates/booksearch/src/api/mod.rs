use log::debug;
use serde::de::DeserializeOwned;

pub(crate) mod google_books;

use crate::{Error, ErrorKind};

/// The status and body text of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl Response {
    /// Creates a new [`Response`].
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The transport used to send requests to the API.
///
/// A new client is created with [`Default`] for every search.
pub trait Client
where
    Self: Default,
{
    /// Sends a GET request to `url`.
    ///
    /// # Errors
    ///
    /// An [`Err`] of [`ErrorKind::IO`] is returned when the request cannot be sent or the body
    /// cannot be read. A response with any status is an [`Ok`].
    fn get_response(&self, url: &str) -> Result<Response, Error>;

    /// Sends a GET request to `url` and deserializes the JSON body.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the request fails, when the status is anything other than
    /// `200 OK` or when the body is not valid JSON for `T`.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let Response { status, body } = self.get_response(url)?;
        debug!("Response status {status}");

        if status != 200 {
            return Err(Error::new(
                ErrorKind::Status(status),
                "the request was not successful",
            ));
        }

        serde_json::from_str(&body).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }
}

impl Client for reqwest::blocking::Client {
    fn get_response(&self, url: &str) -> Result<Response, Error> {
        let resp = self
            .get(url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::IO, e))?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| Error::wrap(ErrorKind::IO, e))?;

        Ok(Response { status, body })
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_no_request, assert_url, impl_response_producer, MockClient, NetworkErrorProducer,
    NotFoundProducer, Producer, URL_SINK,
};
