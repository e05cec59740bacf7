//! Integration tests for the catalog client
//!
//! Runs real requests against a local HTTP server and checks the full
//! fetch, accumulate and decode path.

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use tiny_http::{Header, Response, Server, StatusCode};

    use crate::config::{NetworkConfig, ServerConfig};
    use crate::error::CatalogError;
    use crate::net::{CatalogClient, INITIAL_CAPACITY, fetch_platforms, fetch_platforms_blocking};

    // ============================================================================
    // Stub Server
    // ============================================================================

    /// What the server saw for one request.
    #[derive(Debug)]
    struct Seen {
        url: String,
        authorization: Option<String>,
    }

    enum Reply {
        Body(u16, Vec<u8>),
        Chunked(Vec<u8>),
    }

    /// Serves `replies` in order, one per request, then stops.
    fn serve(replies: Vec<Reply>) -> (String, mpsc::Receiver<Seen>) {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for reply in replies {
                let Ok(request) = server.recv() else {
                    return;
                };
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());
                let _ = tx.send(Seen {
                    url: request.url().to_string(),
                    authorization,
                });

                let json = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .unwrap();
                let _ = match reply {
                    Reply::Body(status, body) => request.respond(
                        Response::from_data(body)
                            .with_status_code(status)
                            .with_header(json),
                    ),
                    Reply::Chunked(body) => request.respond(Response::new(
                        StatusCode(200),
                        vec![json],
                        Cursor::new(body),
                        None,
                        None,
                    )),
                };
            }
        });

        (format!("http://{}", addr), rx)
    }

    fn server_config(url: &str) -> ServerConfig {
        ServerConfig {
            url: url.to_string(),
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        }
    }

    fn recv(rx: &mpsc::Receiver<Seen>) -> Seen {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    const NES_DOC: &[u8] = br#"{"platforms":[{"id":1,"slug":"nes","fs_slug":"nes","name":"Nintendo Entertainment System","rom_count":42,"igdb_id":18,"firmware":[]}]}"#;

    // ============================================================================
    // Platform Fetch Tests
    // ============================================================================

    #[tokio::test]
    async fn test_fetch_platforms_end_to_end() {
        let (url, rx) = serve(vec![Reply::Body(200, NES_DOC.to_vec())]);

        let platforms = fetch_platforms(&url, "admin", "hunter2")
            .await
            .unwrap()
            .into_items();

        assert_eq!(platforms.len(), 1);
        let nes = &platforms[0];
        assert_eq!(nes.id, 1);
        assert_eq!(nes.slug, "nes");
        assert_eq!(nes.name, "Nintendo Entertainment System");
        assert_eq!(nes.rom_count, 42);
        assert_eq!(nes.igdb_id, Some(18));
        assert_eq!(nes.sgdb_id, None);
        assert!(nes.firmware.is_empty());

        let seen = recv(&rx);
        assert_eq!(seen.url, "/api/platforms");
        // base64("admin:hunter2")
        assert_eq!(
            seen.authorization.as_deref(),
            Some("Basic YWRtaW46aHVudGVyMg==")
        );
    }

    #[tokio::test]
    async fn test_unauthorized_is_http_status() {
        let (url, _rx) = serve(vec![Reply::Body(
            401,
            br#"{"detail":"Invalid credentials"}"#.to_vec(),
        )]);

        let err = fetch_platforms(&url, "admin", "wrong").await.unwrap_err();
        assert!(matches!(err, CatalogError::HttpStatus { status: 401 }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_server_error_is_http_status() {
        let (url, _rx) = serve(vec![Reply::Body(500, NES_DOC.to_vec())]);

        let err = fetch_platforms(&url, "admin", "hunter2").await.unwrap_err();
        assert!(matches!(err, CatalogError::HttpStatus { status: 500 }));
    }

    #[tokio::test]
    async fn test_bare_array_document() {
        let (url, _rx) = serve(vec![Reply::Body(
            200,
            br#"[{"id":4,"slug":"snes","name":"Super Nintendo"},{"id":5,"slug":"gba"}]"#.to_vec(),
        )]);

        let platforms = fetch_platforms(&url, "admin", "hunter2")
            .await
            .unwrap()
            .into_items();
        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[1].slug, "gba");
        assert!(platforms[1].name.is_empty());
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let (url, _rx) = serve(vec![Reply::Body(200, b"not json".to_vec())]);

        let err = fetch_platforms(&url, "admin", "hunter2").await.unwrap_err();
        assert!(matches!(err, CatalogError::MalformedDocument(_)));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn test_empty_platform_list() {
        let (url, _rx) = serve(vec![Reply::Body(200, br#"{"platforms":[]}"#.to_vec())]);

        let platforms = fetch_platforms(&url, "admin", "hunter2")
            .await
            .unwrap()
            .into_items();
        assert!(platforms.is_empty());
    }

    #[tokio::test]
    async fn test_large_chunked_body_is_accumulated() {
        let entries: Vec<String> = (0..400)
            .map(|i| {
                format!(
                    r#"{{"id":{i},"slug":"platform-{i}","fs_slug":"platform-{i}","name":"Platform number {i}","rom_count":{i}}}"#
                )
            })
            .collect();
        let body = format!(r#"{{"platforms":[{}]}}"#, entries.join(","));
        assert!(body.len() > INITIAL_CAPACITY * 4);

        let (url, _rx) = serve(vec![Reply::Chunked(body.into_bytes())]);

        let platforms = fetch_platforms(&url, "admin", "hunter2")
            .await
            .unwrap()
            .into_items();
        assert_eq!(platforms.len(), 400);
        assert_eq!(platforms[399].id, 399);
        assert_eq!(platforms[399].name, "Platform number 399");
    }

    #[test]
    fn test_blocking_fetch() {
        let (url, rx) = serve(vec![Reply::Body(200, NES_DOC.to_vec())]);

        let platforms = fetch_platforms_blocking(&url, "admin", "hunter2")
            .unwrap()
            .into_items();
        assert_eq!(platforms[0].fs_slug, "nes");
        assert_eq!(recv(&rx).url, "/api/platforms");
    }

    #[test]
    fn test_connection_refused_is_transport() {
        // Bind then drop to get a port nobody listens on.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let err = fetch_platforms_blocking(&format!("http://{}", addr), "a", "b").unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }

    // ============================================================================
    // Client Tests
    // ============================================================================

    #[tokio::test]
    async fn test_client_reuses_credentials_across_calls() {
        let roms = br#"{"items":[{"id":10,"platform_id":1,"file_name":"Super Mario Bros. (World).nes","file_size_bytes":40976,"name":"Super Mario Bros."}],"total":1}"#;
        let (url, rx) = serve(vec![
            Reply::Body(200, NES_DOC.to_vec()),
            Reply::Body(200, roms.to_vec()),
        ]);

        let client =
            CatalogClient::new(&server_config(&format!("{}/", url)), &NetworkConfig::default())
                .unwrap();

        let platforms = client.fetch_platforms().await.unwrap().into_items();
        let roms = client.fetch_roms(platforms[0].id).await.unwrap().into_items();

        assert_eq!(roms.len(), 1);
        assert_eq!(roms[0].id, 10);
        assert_eq!(roms[0].platform_id, 1);
        assert_eq!(roms[0].name, "Super Mario Bros.");
        assert_eq!(roms[0].file_size_bytes, 40976);

        let first = recv(&rx);
        let second = recv(&rx);
        assert_eq!(first.url, "/api/platforms");
        assert_eq!(second.url, "/api/roms?platform_id=1");
        assert_eq!(first.authorization, second.authorization);
    }

    #[tokio::test]
    async fn test_client_request_timeout() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        // Accept the request but never answer it.
        let holder = thread::spawn(move || {
            let request = server.recv_timeout(Duration::from_secs(5));
            thread::sleep(Duration::from_secs(3));
            drop(request);
        });

        let network = NetworkConfig {
            connect_timeout_secs: 1,
            request_timeout_secs: 1,
        };
        let client = CatalogClient::new(&server_config(&format!("http://{}", addr)), &network)
            .unwrap();

        let err = client.fetch_platforms().await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(ref e) if e.is_timeout()));
        let _ = holder.join();
    }
}
