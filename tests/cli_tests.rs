//! The `skinprice` binary against a local HTTP stub.

use std::io::Write;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::process::Command;

const ROWS: &str = r#"[{
    "market_hash_name": "AK-47",
    "currency": "EUR",
    "suggested_price": 12.0,
    "item_page": "",
    "market_page": "",
    "min_price": 10.5,
    "max_price": null,
    "mean_price": null,
    "median_price": null,
    "quantity": 1,
    "created_at": 0,
    "updated_at": 0
}]"#;

/// Answer every request with `ROWS`.
async fn serve_rows() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{ROWS}",
                    ROWS.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}/v1")
}

#[tokio::test]
async fn items_json_keeps_logs_off_stdout() {
    let api_url = serve_rows().await;
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    write!(
        config,
        "[skinport]\napi_url = \"{api_url}\"\n\n[logging]\nlevel = \"info\"\n"
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_skinprice"))
        .arg("--json")
        .arg("--config")
        .arg(config.path())
        .arg("items")
        .env_remove("RUST_LOG")
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "exit status {}", output.status);

    let document: serde_json::Value = serde_json::from_slice(&output.stdout)
        .unwrap_or_else(|e| {
            panic!(
                "stdout is not one JSON document ({e}): {}",
                String::from_utf8_lossy(&output.stdout)
            )
        });
    assert_eq!(document["command"], "items");
    assert_eq!(document["total"], 1);
    assert_eq!(document["items"][0]["market_hash_name"], "AK-47");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Items cache refreshed"),
        "expected logs on stderr, got: {stderr}"
    );
}
