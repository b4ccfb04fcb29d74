use hyper::{Body, Request, Response};
use crate::chain::{Interceptor, Next, Transport};
use crate::conf::endpoint::HttpEndpoint;
use crate::error::Error;

/// HTTP client running every call through its interceptors before handing it to the transport
#[derive(Debug, Clone)]
pub struct RestClient<T = HttpEndpoint> {
    transport: T,
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl RestClient<HttpEndpoint> {
    pub fn http(host: &str, port: u16) -> Self {
        RestClient::new(HttpEndpoint::http(host, port))
    }

    pub fn https(address: &str) -> Self {
        RestClient::new(HttpEndpoint::https(address))
    }
}

impl<T: Transport> RestClient<T> {
    pub fn new(transport: T) -> Self {
        RestClient { transport, interceptors: Vec::new() }
    }

    pub fn add_interceptor(&mut self, interceptor: Box<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    pub fn with_interceptor(mut self, interceptor: Box<dyn Interceptor>) -> Self {
        self.add_interceptor(interceptor);
        self
    }

    pub async fn request(&self, req: Request<Body>) -> Result<Response<Body>, Error> {
        let (mut parts, body) = req.into_parts();
        parts.uri = self.transport.resolve(parts.uri)?;
        let next = Next::new(rand::random(), &self.interceptors, &self.transport);
        next.proceed(Request::from_parts(parts, body)).await
    }

    pub async fn get(&self, path: &str) -> Result<Response<Body>, Error> {
        let req = Request::get(path).body(Body::empty())?;
        self.request(req).await
    }
}
