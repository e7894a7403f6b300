//! Integration tests for server startup and shutdown over a real socket

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use authflow_app::{serve, serve_with_shutdown, AppContext};
use authflow_domain::Config;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use tokio::sync::oneshot;

fn context_on(bind_address: String) -> Arc<AppContext> {
    let mut config = Config::default();
    config.client.client_id = "Iv1.server".to_string();
    config.server.bind_address = bind_address;
    config.server.open_browser = false;
    Arc::new(AppContext::new(config).expect("failed to build app context"))
}

fn free_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to reserve a port");
    listener.local_addr().expect("no local address").to_string()
}

/// Validates that a port already in use aborts startup with an error naming
/// the address.
#[tokio::test]
async fn occupied_port_fails_to_bind() {
    let held = TcpListener::bind("127.0.0.1:0").expect("failed to hold a port");
    let address = held.local_addr().expect("no local address").to_string();

    let err = serve(context_on(address.clone())).await.unwrap_err();

    assert!(err.to_string().contains(&format!("failed to bind {address}")), "got {err:#}");
}

/// Validates that the server answers requests and returns cleanly once the
/// shutdown future completes.
///
/// # Test Steps
/// 1. Serve on a free port with a oneshot channel as the shutdown signal
/// 2. Poll `/login` until the server answers with a redirect
/// 3. Fire the signal and verify `serve_with_shutdown` returns `Ok`
#[tokio::test]
async fn shutdown_signal_stops_the_server() {
    let address = free_address();
    let (stop, stopped) = oneshot::channel::<()>();
    let server = tokio::spawn(serve_with_shutdown(context_on(address.clone()), async move {
        let _ = stopped.await;
    }));

    let client = reqwest::Client::builder().redirect(Policy::none()).build().unwrap();
    let login = format!("http://{address}/login");
    let mut status = None;
    for _ in 0..50 {
        if let Ok(response) = client.get(&login).send().await {
            status = Some(response.status());
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(status, Some(StatusCode::FOUND));
    drop(client);

    stop.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop")
        .expect("server task panicked");
    assert!(result.is_ok(), "got {result:?}");
}
