use hyper::Body;
use hyper::body::{Bytes, HttpBody};
use futures::stream;

/// Bodies at least this large are assumed to be binary and only their size is logged
pub const BODY_LOG_LIMIT: usize = 10_240;

/// What could be drained out of a read-once body
pub(crate) struct Captured {
    pub(crate) bytes: Bytes,
    pub(crate) failure: Option<hyper::Error>,
}

/// Drains `body` into memory, keeping whatever was read before a failure
pub(crate) async fn capture(mut body: Body) -> Captured {
    let mut buf: Vec<u8> = Vec::new();
    while let Some(chunk) = body.data().await {
        match chunk {
            Ok(chunk) => buf.extend_from_slice(&chunk),
            Err(err) => return Captured { bytes: buf.into(), failure: Some(err) },
        }
    }
    Captured { bytes: buf.into(), failure: None }
}

/// A fresh body yielding `bytes`, then `failure` if there was one
pub(crate) fn replay(bytes: Bytes, failure: Option<hyper::Error>) -> Body {
    match failure {
        None => Body::from(bytes),
        Some(err) => {
            let mut chunks: Vec<Result<Bytes, hyper::Error>> = Vec::with_capacity(2);
            if !bytes.is_empty() {
                chunks.push(Ok(bytes));
            }
            chunks.push(Err(err));
            Body::wrap_stream(stream::iter(chunks))
        }
    }
}

pub(crate) fn describe(body: &Body) -> String {
    match body.size_hint().exact() {
        Some(len) => format!("Body({} bytes)", len),
        None => "Body(streaming)".to_string(),
    }
}

pub(crate) fn render(bytes: &[u8]) -> String {
    if bytes.len() < BODY_LOG_LIMIT {
        String::from_utf8_lossy(bytes).into_owned()
    } else {
        format!("[{} bytes]", bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::interceptor::body::{capture, replay, describe, render, BODY_LOG_LIMIT};
    use crate::tests::failing_body;
    use hyper::Body;
    use hyper::body::{Bytes, HttpBody};

    #[test]
    fn small_payloads_are_rendered_as_text() {
        assert_eq!("", render(b""));
        assert_eq!("{\"name\":\"disk\"}", render(b"{\"name\":\"disk\"}"));
        let just_below = vec![b'a'; BODY_LOG_LIMIT - 1];
        assert_eq!(String::from_utf8(just_below.clone()).unwrap(), render(&just_below));
    }

    #[test]
    fn large_payloads_are_rendered_as_a_size() {
        assert_eq!("[10240 bytes]", render(&vec![b'a'; BODY_LOG_LIMIT]));
        assert_eq!("[50000 bytes]", render(&vec![0u8; 50_000]));
    }

    #[test]
    fn describes_known_and_unknown_sizes() {
        assert_eq!("Body(20 bytes)", describe(&Body::from("0123456789abcdefghij")));
        assert_eq!("Body(streaming)", describe(&failing_body("partial", "reset")));
    }

    #[tokio::test]
    async fn captured_bytes_replay_identically() {
        let captured = capture(Body::from("some payload")).await;
        assert!(captured.failure.is_none());
        assert_eq!(Bytes::from("some payload"), captured.bytes);
        let again = hyper::body::to_bytes(replay(captured.bytes.clone(), None)).await.unwrap();
        assert_eq!(captured.bytes, again);
    }

    #[tokio::test]
    async fn failure_keeps_the_prefix_and_replays_the_error() {
        let captured = capture(failing_body("partial", "reset")).await;
        assert_eq!(Bytes::from("partial"), captured.bytes);
        assert!(captured.failure.is_some());

        let mut replayed = replay(captured.bytes, captured.failure);
        assert_eq!(Bytes::from("partial"), replayed.data().await.unwrap().unwrap());
        assert!(replayed.data().await.unwrap().is_err());
    }

}
