use std::fs;
use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use obj_viewer::server::{asset_router, resolve_port, DEFAULT_PORT};

fn temp_asset_root(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "obj-viewer-server-{}-{}",
        tag,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("assets")).unwrap();
    fs::write(
        dir.join("index.html"),
        "<html><body>model viewer</body></html>",
    )
    .unwrap();
    fs::write(dir.join("assets/r2-d2.obj"), "v 0 0 0\n").unwrap();
    dir
}

#[cfg(test)]
mod port_tests {
    use super::*;

    // PORT manipulation is process-global, so all the cases live in one test.
    #[test]
    fn test_port_resolution_order() {
        std::env::remove_var("PORT");
        assert_eq!(resolve_port(None), DEFAULT_PORT);
        assert_eq!(resolve_port(Some(9000)), 9000);

        std::env::set_var("PORT", "3000");
        assert_eq!(resolve_port(None), 3000);
        assert_eq!(resolve_port(Some(9000)), 9000, "flag beats the environment");

        std::env::set_var("PORT", "not-a-port");
        assert_eq!(resolve_port(None), DEFAULT_PORT, "garbage PORT falls back");

        std::env::remove_var("PORT");
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;

    async fn get(root: &PathBuf, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = asset_router(root)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_root_serves_the_html_entry_point() {
        let root = temp_asset_root("root");
        let (status, body) = get(&root, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("model viewer"));
    }

    #[tokio::test]
    async fn test_nested_asset_is_served_verbatim() {
        let root = temp_asset_root("nested");
        let (status, body) = get(&root, "/assets/r2-d2.obj").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"v 0 0 0\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let root = temp_asset_root("missing");
        let (status, _) = get(&root, "/assets/x-wing.obj").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
