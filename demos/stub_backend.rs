//! demos/stub_backend.rs
//! Stand-in for the job tracker backend.
//! Run: cargo run --example stub_backend -- [port]
//!
//! HEALTH_MODE=ok|unavailable|garbage picks the /api/health/ answer,
//! DELAY_MS delays it.

use hyper::{
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server, StatusCode,
};
use std::{convert::Infallible, net::SocketAddr, time::Duration};
use tokio::time::sleep;

#[derive(Clone, Copy, Debug)]
enum HealthMode {
    Ok,
    Unavailable,
    Garbage,
}

impl HealthMode {
    fn from_env() -> Self {
        match std::env::var("HEALTH_MODE").as_deref() {
            Ok("unavailable") => HealthMode::Unavailable,
            Ok("garbage") => HealthMode::Garbage,
            _ => HealthMode::Ok,
        }
    }
}

#[derive(Clone, Copy)]
struct StubState {
    mode: HealthMode,
    delay: Duration,
}

fn json(status: StatusCode, body: &'static str) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("application/json"),
    );
    response
}

async fn handle(req: Request<Body>, state: StubState) -> Result<Response<Body>, Infallible> {
    let response = match req.uri().path() {
        "/" => json(
            StatusCode::OK,
            r#"{"message":"Welcome to Job Tracker API","endpoints":{"api":"/api/","admin":"/admin/","swagger":"/swagger/","redoc":"/redoc/"}}"#,
        ),
        "/api/health/" => {
            if !state.delay.is_zero() {
                sleep(state.delay).await;
            }
            match state.mode {
                HealthMode::Ok => json(
                    StatusCode::OK,
                    r#"{"status":"healthy","message":"Django REST API is running!"}"#,
                ),
                HealthMode::Unavailable => json(
                    StatusCode::SERVICE_UNAVAILABLE,
                    r#"{"detail":"Service unavailable"}"#,
                ),
                HealthMode::Garbage => {
                    let mut response = Response::new(Body::from("<html>It works!</html>"));
                    response.headers_mut().insert(
                        hyper::header::CONTENT_TYPE,
                        hyper::header::HeaderValue::from_static("text/html"),
                    );
                    response
                }
            }
        }
        _ => json(StatusCode::NOT_FOUND, r#"{"detail":"Not found."}"#),
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port: u16 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "8000".into())
        .parse()?;
    let delay_ms: u64 = std::env::var("DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let state = StubState {
        mode: HealthMode::from_env(),
        delay: Duration::from_millis(delay_ms),
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let make_svc = make_service_fn(move |_conn| async move {
        Ok::<_, Infallible>(service_fn(move |req| handle(req, state)))
    });

    println!(
        "Stub backend on http://{}  [mode={:?} delay={}ms]",
        addr, state.mode, delay_ms
    );

    Server::bind(&addr).serve(make_svc).await?;
    Ok(())
}
