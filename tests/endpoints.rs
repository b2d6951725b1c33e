use base64::{engine::general_purpose, Engine as _};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::net::TcpListener;

use delcom_starter::server::{build_router, AppState};

/// Start the router on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(Arc::new(AppState::default()), true);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Base64-encode and make the result safe for a query string.
fn encode_param(text: &str) -> String {
    general_purpose::STANDARD
        .encode(text)
        .replace('+', "%2B")
        .replace('/', "%2F")
        .replace('=', "%3D")
}

async fn get(url: &str) -> (StatusCode, String) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_informasi_nim() {
    let base = spawn_server().await;

    let (status, body) = get(&format!("{}/informasi-nim?nim=11S23001", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "Informasi NIM 11S23001:\n>> Program Studi: Sarjana Informatika\n>> Angkatan: 2023\n>> Urutan: 1"
    );

    let (status, body) = get(&format!("{}/informasi-nim?nim=123", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("minimal 8 karakter"));

    let (status, body) = get(&format!("{}/informasi-nim", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("minimal 8 karakter"));
}

#[tokio::test]
async fn test_informasi_nim_bad_sequence_is_server_error() {
    let base = spawn_server().await;

    let (status, _) = get(&format!("{}/informasi-nim?nim=11S23abc", base)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_perolehan_nilai() {
    let base = spawn_server().await;
    let param = encode_param("UAS|85|40\nUTS|75|30\nPA|90|20\nK|100|10");

    let (status, body) = get(&format!("{}/perolehan-nilai?strBase64={}", base, param)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Nilai Akhir: 84.50 (Total Bobot: 100%)\nGrade: B");
}

#[tokio::test]
async fn test_perbedaan_l() {
    let base = spawn_server().await;

    let (status, body) = get(&format!("{}/perbedaan-l?strBase64={}", base, encode_param("UULL"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("(-2, 2)"));
    assert!(body.contains("(2, -2)"));
    assert!(body.ends_with("Perbedaan Jarak: 8"));
}

#[tokio::test]
async fn test_paling_ter() {
    let base = spawn_server().await;

    let param = encode_param("terbaik terbaik termahal");
    let (status, body) = get(&format!("{}/paling-ter?strBase64={}", base, param)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("'terbaik' (muncul 2 kali)"));

    let param = encode_param("hello world");
    let (_, body) = get(&format!("{}/paling-ter?strBase64={}", base, param)).await;
    assert_eq!(body, "Tidak ditemukan kata yang berawalan 'ter'.");
}

#[tokio::test]
async fn test_invalid_base64_is_never_masked() {
    let base = spawn_server().await;

    for endpoint in ["perolehan-nilai", "perbedaan-l", "paling-ter"] {
        let (status, body) = get(&format!("{}/{}?strBase64=%21%40%23", base, endpoint)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", endpoint);
        assert_eq!(body, "Input Base64 tidak valid.");
    }
}

#[tokio::test]
async fn test_missing_required_parameter() {
    let base = spawn_server().await;

    let (status, _) = get(&format!("{}/perolehan-nilai", base)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_counts_requests() {
    let base = spawn_server().await;

    get(&format!("{}/perbedaan-l?strBase64={}", base, encode_param("R"))).await;
    get(&format!("{}/paling-ter?strBase64=%21", base)).await;

    let (status, body) = get(&format!("{}/api/health", base)).await;
    assert_eq!(status, StatusCode::OK);

    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["service"], "delcom-starter");
    assert_eq!(health["requests"]["total"], 2);
    assert_eq!(health["requests"]["successful"], 1);
    assert_eq!(health["requests"]["failed"], 1);
}
