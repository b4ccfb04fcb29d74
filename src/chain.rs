use hyper::{Body, Request, Response, Uri};
use dyn_clone::{clone_trait_object, DynClone};
use std::fmt::Debug;
use async_trait::async_trait;
use crate::error::Error;

/// Last stage of a call: performs the actual network exchange
#[async_trait]
pub trait Transport: Send + Sync {
    /// Makes a relative URI absolute, if this transport knows where to send it
    fn resolve(&self, uri: Uri) -> Result<Uri, Error> {
        Ok(uri)
    }

    fn connection(&self) -> String;

    async fn send(&self, req: Request<Body>) -> Result<Response<Body>, Error>;
}

/// Wraps the rest of the call: inspects or rewrites the request, hands it to `next`,
/// then inspects or rewrites the response
#[async_trait]
pub trait Interceptor: Send + Debug + Sync + DynClone {
    async fn intercept(&self, req: Request<Body>, next: Next<'_>) -> Result<Response<Body>, Error>;
}

clone_trait_object!(Interceptor);

/// The remainder of a call, as seen from one interceptor
#[derive(Clone, Copy)]
pub struct Next<'a> {
    id: u32,
    interceptors: &'a [Box<dyn Interceptor>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    pub fn new(id: u32, interceptors: &'a [Box<dyn Interceptor>], transport: &'a dyn Transport) -> Self {
        Next { id, interceptors, transport }
    }

    /// Identifies the call, shared by every interceptor along the chain
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn connection(&self) -> String {
        self.transport.connection()
    }

    pub async fn proceed(self, req: Request<Body>) -> Result<Response<Body>, Error> {
        match self.interceptors.split_first() {
            Some((interceptor, rest)) => {
                let next = Next { interceptors: rest, ..self };
                interceptor.intercept(req, next).await
            },
            None => self.transport.send(req).await
        }
    }
}
