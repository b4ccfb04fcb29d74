use std::fmt;

#[derive(Debug)]
pub enum Error {
    Http(hyper::Error),         // exchange or body I/O failure
    Request(hyper::http::Error) // request or URI could not be built
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "http error: {}", err),
            Error::Request(err) => write!(f, "invalid request: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Request(err) => Some(err),
        }
    }
}

impl From<hyper::Error> for Error {
    fn from(err: hyper::Error) -> Self {
        Error::Http(err)
    }
}

impl From<hyper::http::Error> for Error {
    fn from(err: hyper::http::Error) -> Self {
        Error::Request(err)
    }
}
