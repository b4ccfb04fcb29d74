use hyper::client::HttpConnector;
use hyper::{Body, Client, Request, Response, Uri};
use hyper_tls::HttpsConnector;
use async_trait::async_trait;
use crate::chain::Transport;
use crate::error::Error;


#[derive(Debug, Clone)]
pub enum HttpEndpoint {
    Plain(Endpoint<HttpConnector>),
    Ssl(Endpoint<HttpsConnector<HttpConnector>>)
}

#[derive(Debug, Clone)]
pub struct Endpoint<T> {
    pub address: String,
    pub client: Client<T>,
}

impl HttpEndpoint {

    pub fn http(host: &str, port: u16) -> Self {
        HttpEndpoint::Plain(Endpoint {
            address: format!("{}:{}", host, port),
            client: Client::builder()
                .build_http(),
        })
    }

    pub fn https(address: &str) -> Self {
        let connector = HttpsConnector::new();
        let client = Client::builder()
            .build(connector);
        HttpEndpoint::Ssl(Endpoint {
            address: address.to_string(),
            client,
        })
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            HttpEndpoint::Plain(_) => "http",
            HttpEndpoint::Ssl(_) => "https",
        }
    }

    pub fn address(&self) -> &str {
        match self {
            HttpEndpoint::Plain(endpoint) => endpoint.address.as_str(),
            HttpEndpoint::Ssl(endpoint) => endpoint.address.as_str(),
        }
    }

}

#[async_trait]
impl Transport for HttpEndpoint {
    fn resolve(&self, uri: Uri) -> Result<Uri, Error> {
        if uri.authority().is_some() {
            return Ok(uri);
        }
        let path = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");
        let resolved = Uri::builder()
            .scheme(self.scheme())
            .authority(self.address())
            .path_and_query(path)
            .build()?;
        Ok(resolved)
    }

    fn connection(&self) -> String {
        match self {
            HttpEndpoint::Plain(endpoint) => format!("http://{} (plain)", endpoint.address),
            HttpEndpoint::Ssl(endpoint) => format!("https://{} (tls)", endpoint.address),
        }
    }

    async fn send(&self, req: Request<Body>) -> Result<Response<Body>, Error> {
        let res = match self {
            HttpEndpoint::Plain(endpoint) => endpoint.client.request(req).await?,
            HttpEndpoint::Ssl(endpoint) => endpoint.client.request(req).await?,
        };
        Ok(res)
    }
}
