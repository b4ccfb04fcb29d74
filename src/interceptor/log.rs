use hyper::{Body, Request, Response};
use hyper::client::connect::HttpInfo;
use hyper::ext::ReasonPhrase;
use hyper::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING};
use hyper::body::HttpBody;
use async_trait::async_trait;
use crate::chain::{Interceptor, Next};
use crate::conf::{CaptureFailure, WireLogConf};
use crate::error::Error;
use crate::interceptor::body;
use crate::interceptor::sink::{LogSink, WireSink};

const SEND_PREFIX: &str = " >> ";
const RECEIVE_PREFIX: &str = " << ";

/// Logs request line, headers, status and (with `log_wire`) full bodies of every call
/// going through the chain.
///
/// Bodies read for logging are handed on as fresh in-memory bodies, so neither the
/// transport nor the caller notice they were consumed. With `log_wire` on, the request
/// also gets an empty `Accept-Encoding` so logged responses are never compressed.
#[derive(Debug, Clone)]
pub struct WireLogger {
    conf: WireLogConf,
    sink: Box<dyn WireSink>,
}

impl WireLogger {
    pub fn new(log_wire: bool) -> Self {
        WireLogger::with_conf(WireLogConf::new(log_wire))
    }

    pub fn with_conf(conf: WireLogConf) -> Self {
        let sink = Box::new(LogSink::from(&conf));
        WireLogger::with_sink(conf, sink)
    }

    pub fn with_sink(conf: WireLogConf, sink: Box<dyn WireSink>) -> Self {
        sink.line(&format!("wire logging started: log_wire={}", conf.log_wire));
        WireLogger { conf, sink }
    }

    fn log(&self, prefix: &str, message: &str) {
        self.sink.line(&format!("{}{}", prefix, message))
    }

    fn log_headers(&self, prefix: &str, headers: &HeaderMap) {
        for name in headers.keys() {
            for value in headers.get_all(name) {
                self.log(prefix, &format!("{}: {}", name, String::from_utf8_lossy(value.as_bytes())));
            }
        }
    }

    /// Drains `content`, logs it, and returns a body yielding the very same bytes
    async fn capture(&self, prefix: &str, content: Body) -> Result<Body, Error> {
        let body::Captured { bytes, failure } = body::capture(content).await;
        let failure = match failure {
            Some(err) if self.conf.on_capture_failure == CaptureFailure::Propagate => return Err(err.into()),
            failure => failure,
        };
        self.log(prefix, &body::render(&bytes));
        if let Some(err) = &failure {
            self.log(prefix, &format!("body capture failed: {}", err));
        }
        Ok(body::replay(bytes, failure))
    }
}

#[async_trait]
impl Interceptor for WireLogger {
    async fn intercept(&self, mut req: Request<Body>, next: Next<'_>) -> Result<Response<Body>, Error> {
        let tag = format!("{:x}", next.id());
        let send_prefix = format!("{}{}", tag, SEND_PREFIX);
        let receive_prefix = format!("{}{}", tag, RECEIVE_PREFIX);

        if self.conf.log_wire && !req.body().is_end_stream() {
            let (mut parts, req_body) = req.into_parts();
            self.log(&send_prefix, &format!("request: {}", body::describe(&req_body)));
            let req_body = self.capture(&send_prefix, req_body).await?;
            parts.headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(""));
            req = Request::from_parts(parts, req_body);
        }

        self.log(&send_prefix, &format!("{} {}", req.method(), req.uri()));
        self.log(&send_prefix, &format!("on {}", next.connection()));
        self.log_headers(&send_prefix, req.headers());

        let res = next.proceed(req).await?;
        let status = res.status();
        // hyper only keeps the phrase sent by the server when it differs from the canonical one
        let reason = match res.extensions().get::<ReasonPhrase>() {
            Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
            None => status.canonical_reason().unwrap_or("").to_string(),
        };
        let status_line = format!("{:?} {} {}", res.version(), status.as_u16(), reason);
        self.log(&receive_prefix, status_line.trim_end());
        if let Some(info) = res.extensions().get::<HttpInfo>() {
            self.log(&receive_prefix, &format!("from {}", info.remote_addr()));
        }
        self.log_headers(&receive_prefix, res.headers());

        if !self.conf.log_wire {
            return Ok(res);
        }
        let (parts, res_body) = res.into_parts();
        let res_body = self.capture(&receive_prefix, res_body).await?;
        Ok(Response::from_parts(parts, res_body))
    }
}
