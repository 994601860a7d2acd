#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::routes;
    use crate::state::AppState;
    use crate::tests::{setup_test_pool, FailingStore};

    async fn setup_test_app() -> Router {
        let pool = setup_test_pool().await;
        routes::app(AppState::new(pool, AppConfig::default()))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_healthz_endpoint() {
        let (status, body) = get_body(setup_test_app().await, "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_healthz_does_not_need_storage() {
        let app = routes::app(AppState::with_store(Arc::new(FailingStore::Closed), AppConfig::default()));

        let (status, _) = get_body(app, "/healthz").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readyz_endpoint_ok() {
        let (status, body) = get_body(setup_test_app().await, "/readyz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"ready");
    }

    #[tokio::test]
    async fn test_readyz_endpoint_db_error() {
        let pool = setup_test_pool().await;
        pool.close().await;
        let app = routes::app(AppState::new(pool, AppConfig::default()));

        let (status, body) = get_body(app, "/readyz").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(String::from_utf8_lossy(&body).contains("not ready"));
    }

    #[tokio::test]
    async fn test_version_endpoint() {
        let (status, body) = get_body(setup_test_app().await, "/version").await;

        assert_eq!(status, StatusCode::OK);
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["name"], "albums");
        assert!(!v["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let (status, body) = get_body(setup_test_app().await, "/metrics").await;

        assert_eq!(status, StatusCode::OK);
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["albums_listed"], 0);
        assert_eq!(v["albums_created"], 0);
        assert_eq!(v["storage_errors"], 0);
        assert!(v["uptime_seconds"].is_u64());
    }
}
