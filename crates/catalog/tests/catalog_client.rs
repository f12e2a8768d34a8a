//! Drives the real client against an ephemeral local server serving a
//! canned catalog payload.

use anyhow::Result;
use axum::Router;
use axum::http::header;
use axum::routing::get;

use shopkit_catalog::{CatalogClient, CatalogError};

const PLANETS_PAGE: &str = r#"{
    "count": 2,
    "next": null,
    "previous": null,
    "results": [
        {
            "name": "Tatooine",
            "rotation_period": "23",
            "orbital_period": "304",
            "diameter": "10465",
            "climate": "arid",
            "gravity": "1 standard",
            "terrain": "desert",
            "surface_water": "1",
            "population": "200000",
            "residents": [
                "https://swapi.dev/api/people/1/",
                "https://swapi.dev/api/people/2/"
            ],
            "films": ["https://swapi.dev/api/films/1/"],
            "created": "2014-12-09T13:50:49.641000Z",
            "edited": "2014-12-20T20:58:18.411000Z",
            "url": "https://swapi.dev/api/planets/1/"
        },
        {
            "name": "Alderaan",
            "rotation_period": "24",
            "orbital_period": "364",
            "diameter": "12500",
            "climate": "temperate",
            "gravity": "1 standard",
            "terrain": "grasslands, mountains",
            "surface_water": "40",
            "population": "2000000000",
            "residents": ["https://swapi.dev/api/people/5/"],
            "films": [
                "https://swapi.dev/api/films/1/",
                "https://swapi.dev/api/films/6/"
            ],
            "created": "2014-12-10T11:35:48.479000Z",
            "edited": "2014-12-20T20:58:18.420000Z",
            "url": "https://swapi.dev/api/planets/2/"
        }
    ]
}"#;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Bind an ephemeral port and serve `app` from a background task.
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn planets_app() -> Router {
    Router::new().route(
        "/api/planets",
        get(|| async {
            (
                [(header::CONTENT_TYPE, "application/json")],
                PLANETS_PAGE,
            )
        }),
    )
}

#[tokio::test]
async fn planets_round_trip_through_http() -> Result<()> {
    shopkit_observability::init();

    let server = TestServer::spawn(planets_app()).await;
    let client = CatalogClient::with_base_url(format!("{}/api/planets", server.base_url));

    let page = client.planets().await?;

    assert_eq!(page.count, Some(2));
    assert_eq!(page.results.len(), 2);

    let tatooine = &page.results[0];
    assert_eq!(tatooine.name, "Tatooine");
    assert_eq!(tatooine.climate, "arid");
    assert_eq!(tatooine.residents.len(), 2);
    assert_eq!(tatooine.films, ["https://swapi.dev/api/films/1/"]);

    assert_eq!(page.results[1].name, "Alderaan");

    Ok(())
}

#[tokio::test]
async fn error_status_surfaces_to_the_caller() {
    let server = TestServer::spawn(planets_app()).await;
    let client = CatalogClient::with_base_url(format!("{}/api/missing", server.base_url));

    let err = client.planets().await.unwrap_err();
    match err {
        CatalogError::Http(e) => assert!(e.is_status()),
    }
}

#[tokio::test]
async fn malformed_payload_surfaces_as_a_decode_error() {
    let app = Router::new().route(
        "/api/planets",
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], "{") }),
    );
    let server = TestServer::spawn(app).await;
    let client = CatalogClient::with_base_url(format!("{}/api/planets", server.base_url));

    let err = client.planets().await.unwrap_err();
    match err {
        CatalogError::Http(e) => assert!(e.is_decode()),
    }
}
