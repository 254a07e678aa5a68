use crate::http::Error;
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

#[derive(Debug)]
pub struct Inner {
    pub status: u16,
    pub payload: String,
}

/// A remote reply split on its status class; the body is read eagerly.
#[derive(Debug)]
pub enum Response {
    Success(Inner),
    Error(ErrorResponse),
}

impl Response {
    pub fn new(status: u16, payload: String) -> Self {
        if (200..300).contains(&status) {
            Response::Success(Inner { status, payload })
        } else {
            Response::Error(ErrorResponse {
                status,
                message: payload,
            })
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Response::Success(inner) => inner.status,
            Response::Error(inner) => inner.status,
        }
    }

    pub fn collect<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let payload = self.into_payload()?;
        serde_json::from_str::<T>(&payload).map_err(|cause| Error::ParseResponse { cause })
    }

    /// Like [`Response::collect`], but a 404 becomes `None`.
    pub fn collect_optional<T>(self) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
    {
        match self.collect() {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn discard(self) -> Result<(), Error> {
        self.into_payload().map(|_| ())
    }

    fn into_payload(self) -> Result<String, Error> {
        match self {
            Response::Success(response) => Ok(response.payload),
            Response::Error(response) => Err(Error::from_status(response.status, response.message)),
        }
    }
}
