//! Test doubles for the integration suite: a recording mock of the facility
//! API and a recording navigator. Only ever linked into tests, so liberal
//! `unwrap()` is fine here.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use careconnect_api::{Navigator, Route};
use careconnect_config::Config;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::http::request;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// In-process stand-in for the external facility API: records every request
/// and answers with a canned status/body.
pub struct MockApi {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
    response: Arc<Mutex<(StatusCode, String)>>,
}

impl MockApi {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests: Arc<Mutex<Vec<Recorded>>> = Arc::default();
        let response = Arc::new(Mutex::new((StatusCode::CREATED, "{}".to_owned())));

        let accept_requests = Arc::clone(&requests);
        let accept_response = Arc::clone(&response);
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                let requests = Arc::clone(&accept_requests);
                let response = Arc::clone(&accept_response);
                tokio::spawn(async move {
                    let service = service_fn(move |request: Request<Incoming>| {
                        let requests = Arc::clone(&requests);
                        let response = Arc::clone(&response);
                        async move { handle(request, &requests, &response).await }
                    });
                    let _served = hyper::server::conn::http1::Builder::new()
                        .serve_connection(TokioIo::new(socket), service)
                        .await;
                });
            }
        });

        Self {
            addr,
            requests,
            response,
        }
    }

    /// A config pointing the client at this mock.
    #[must_use]
    pub fn config(&self, token: &str) -> Config {
        Config {
            api_url: format!("http://{}/", self.addr),
            api_token: token.to_owned(),
        }
    }

    pub fn respond_with(&self, status: StatusCode, body: &str) {
        *self.response.lock().unwrap() = (status, body.to_owned());
    }

    #[must_use]
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(
    request: Request<Incoming>,
    requests: &Mutex<Vec<Recorded>>,
    response: &Mutex<(StatusCode, String)>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let (parts, body) = request.into_parts();
    let bytes = body.collect().await?.to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    requests.lock().unwrap().push(Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_owned(),
        authorization: header(&parts, hyper::header::AUTHORIZATION),
        content_type: header(&parts, hyper::header::CONTENT_TYPE),
        body,
    });

    let (status, body) = response.lock().unwrap().clone();
    Ok(Response::builder()
        .status(status)
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap())
}

fn header(parts: &request::Parts, name: hyper::header::HeaderName) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Records the invalidate/navigate signals a successful submission emits.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn invalidate(&self, route: Route) {
        self.events
            .lock()
            .unwrap()
            .push(format!("invalidate {}", route.page()));
    }

    fn navigate(&self, route: Route) {
        self.events
            .lock()
            .unwrap()
            .push(format!("navigate {}", route.page()));
    }
}
