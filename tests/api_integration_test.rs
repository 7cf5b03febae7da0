use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use cinematheque::{db, server};
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a router over a fresh in-memory database
async fn setup_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    server::build_router(db)
}

// Helper to send a request and decode the JSON body (Null when empty)
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().uri(uri).method(method);
    let body = match body {
        Some(payload) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&payload).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, json)
}

async fn create(app: &Router, collection: &str, payload: Value) -> i64 {
    let (status, _, body) = send(app, "POST", collection, Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let key = collection.trim_matches('/').trim_end_matches('s');
    body[key]["id"].as_i64().expect("created id")
}

#[tokio::test]
async fn test_director_and_movie_lifecycle() {
    let app = setup_app().await;

    let (status, headers, body) = send(
        &app,
        "POST",
        "/directors/",
        Some(json!({"name": "A. Hitchcock"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[header::LOCATION], "/directors/1");
    assert_eq!(body["message"], "Director created");

    let (status, _, body) = send(&app, "GET", "/directors/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "A. Hitchcock"}));

    let (status, headers, _) = send(
        &app,
        "POST",
        "/movies/",
        Some(json!({"title": "Psycho", "year": 1960, "rating": 8.5, "director_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[header::LOCATION], "/movies/1");

    let (status, _, body) = send(&app, "GET", "/movies/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "title": "Psycho",
            "description": null,
            "trailer": null,
            "year": 1960,
            "rating": 8.5,
            "genre_id": null,
            "director_id": 1
        })
    );

    let (status, _, body) = send(&app, "DELETE", "/movies/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _, body) = send(&app, "GET", "/movies/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Movie 1 not found");
}

#[tokio::test]
async fn test_create_then_fetch_returns_input_fields() {
    let app = setup_app().await;
    let genre_id = create(&app, "/genres/", json!({"name": "Thriller"})).await;

    let payload = json!({
        "title": "Rear Window",
        "description": "A photographer watches his neighbours",
        "trailer": "https://example.com/rear-window",
        "year": 1954,
        "rating": 8.4,
        "genre_id": genre_id,
        "director_id": null
    });
    let id = create(&app, "/movies/", payload.clone()).await;

    let (status, _, body) = send(&app, "GET", &format!("/movies/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    for (field, value) in payload.as_object().unwrap() {
        assert_eq!(&body[field], value, "field {}", field);
    }

    let (status, _, body) = send(&app, "GET", &format!("/genres/{}", genre_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Thriller");
}

#[tokio::test]
async fn test_collections_list_with_ok_status() {
    let app = setup_app().await;

    for uri in ["/movies/", "/directors/", "/genres/", "/directors"] {
        let (status, _, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([]));
    }

    create(&app, "/directors/", json!({"name": "Agnès Varda"})).await;
    create(&app, "/directors/", json!({"name": "Akira Kurosawa"})).await;

    let (status, _, body) = send(&app, "GET", "/directors/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Agnès Varda"},
            {"id": 2, "name": "Akira Kurosawa"}
        ])
    );
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let app = setup_app().await;

    for collection in ["/movies/", "/directors/", "/genres/"] {
        let payload = if collection == "/movies/" {
            json!({"title": "Ephemeral"})
        } else {
            json!({"name": "Ephemeral"})
        };
        let id = create(&app, collection, payload).await;
        let uri = format!("{}{}", collection, id);

        let (status, _, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}

#[tokio::test]
async fn test_update_director_name() {
    let app = setup_app().await;
    let id = create(&app, "/directors/", json!({"name": "Hitchcok"})).await;
    let uri = format!("/directors/{}", id);

    let (status, _, body) = send(&app, "PUT", &uri, Some(json!({"name": "Hitchcock"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, _, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["name"], "Hitchcock");

    // No `name` in the body: nothing changes, still a success
    let (status, _, _) = send(&app, "PUT", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, _, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["name"], "Hitchcock");
}

#[tokio::test]
async fn test_update_genre_name_persists() {
    let app = setup_app().await;
    let drama = create(&app, "/genres/", json!({"name": "Drama"})).await;
    let comedy = create(&app, "/genres/", json!({"name": "Comedy"})).await;

    let (status, _, _) = send(
        &app,
        "PUT",
        &format!("/genres/{}", drama),
        Some(json!({"name": "Melodrama"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, _, body) = send(&app, "GET", &format!("/genres/{}", drama), None).await;
    assert_eq!(body["name"], "Melodrama");

    // Only the targeted row changes
    let (_, _, body) = send(&app, "GET", &format!("/genres/{}", comedy), None).await;
    assert_eq!(body["name"], "Comedy");
}

#[tokio::test]
async fn test_update_missing_rows_is_not_found() {
    let app = setup_app().await;

    for uri in ["/directors/999", "/genres/999"] {
        let (status, _, body) = send(&app, "PUT", uri, Some(json!({"name": "Nobody"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["error"], "not_found");
    }

    let (status, _, _) = send(&app, "PUT", "/movies/999", Some(json!({"year": 2000}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_movies_filters() {
    let app = setup_app().await;

    let movies = [
        ("Psycho", 5, 1),
        ("Vertigo", 5, 2),
        ("Alien", 6, 1),
        ("Orphan", 7, 1),
    ];
    for (title, director_id, genre_id) in movies {
        create(
            &app,
            "/movies/",
            json!({"title": title, "director_id": director_id, "genre_id": genre_id}),
        )
        .await;
    }

    let titles = |body: &Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|m| m["title"].as_str().unwrap().to_string())
            .collect()
    };

    let (status, _, body) = send(&app, "GET", "/movies/?director_id=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Psycho", "Vertigo"]);
    assert!(
        body.as_array()
            .unwrap()
            .iter()
            .all(|m| m["director_id"] == 5)
    );

    // genre_id filters on the genre column
    let (_, _, body) = send(&app, "GET", "/movies/?genre_id=1", None).await;
    assert_eq!(titles(&body), vec!["Psycho", "Alien", "Orphan"]);

    let (_, _, body) = send(&app, "GET", "/movies/?director_id=5&genre_id=2", None).await;
    assert_eq!(titles(&body), vec!["Vertigo"]);

    let (_, _, body) = send(&app, "GET", "/movies/?director_id=42", None).await;
    assert_eq!(body, json!([]));

    let (_, _, body) = send(&app, "GET", "/movies", None).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_dangling_foreign_keys_are_accepted() {
    let app = setup_app().await;

    let id = create(
        &app,
        "/movies/",
        json!({"title": "Lost Reel", "director_id": 999, "genre_id": 888}),
    )
    .await;
    let (_, _, body) = send(&app, "GET", &format!("/movies/{}", id), None).await;
    assert_eq!(body["director_id"], 999);
    assert_eq!(body["genre_id"], 888);

    // Deleting a referenced director leaves the movie pointing at the old id
    let director = create(&app, "/directors/", json!({"name": "Ed Wood"})).await;
    let movie = create(
        &app,
        "/movies/",
        json!({"title": "Plan 9 from Outer Space", "director_id": director}),
    )
    .await;

    let (status, _, _) = send(&app, "DELETE", &format!("/directors/{}", director), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, body) = send(&app, "GET", &format!("/movies/{}", movie), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["director_id"], director);
}

#[tokio::test]
async fn test_partial_movie_update() {
    let app = setup_app().await;
    let id = create(
        &app,
        "/movies/",
        json!({"title": "The Birds", "year": 1962, "rating": 7.6, "genre_id": 3}),
    )
    .await;
    let uri = format!("/movies/{}", id);

    let (status, _, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"year": 1963, "genre_id": null})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, _, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["title"], "The Birds");
    assert_eq!(body["year"], 1963);
    assert_eq!(body["rating"], 7.6);
    assert_eq!(body["genre_id"], Value::Null);
}

#[tokio::test]
async fn test_invalid_movie_updates_are_rejected() {
    let app = setup_app().await;
    let id = create(&app, "/movies/", json!({"title": "Rope"})).await;
    let uri = format!("/movies/{}", id);

    let cases = [
        json!({}),
        json!({"title": null}),
        json!({"studio": "Warner"}),
        json!({"id": 7}),
        json!({"year": "nineteen forty-eight"}),
    ];
    for payload in cases {
        let (status, _, body) = send(&app, "PUT", &uri, Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body["error"], "validation_failure");
    }

    let (_, _, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Rope");
}

#[tokio::test]
async fn test_malformed_requests_are_validation_failures() {
    let app = setup_app().await;

    // Missing required field
    let (status, _, body) = send(&app, "POST", "/movies/", Some(json!({"year": 1960}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_failure");

    // Unknown field
    let (status, _, _) = send(
        &app,
        "POST",
        "/directors/",
        Some(json!({"name": "Fritz Lang", "born": 1890})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Invalid JSON
    let req = Request::builder()
        .uri("/genres/")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Valid JSON without a content type
    let req = Request::builder()
        .uri("/directors/")
        .method("POST")
        .body(Body::from(r#"{"name": "Fritz Lang"}"#))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "validation_failure");

    // Explicit null for a non-nullable column
    let (status, _, body) = send(&app, "POST", "/movies/", Some(json!({"title": null}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_failure");

    // Non-integer path and query values
    let (status, _, body) = send(&app, "GET", "/movies/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_failure");

    let (status, _, _) = send(&app, "GET", "/movies/?director_id=five", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was written
    let (_, _, body) = send(&app, "GET", "/movies/", None).await;
    assert_eq!(body, json!([]));
    let (_, _, body) = send(&app, "GET", "/directors/", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_health_and_openapi() {
    let app = setup_app().await;

    let (status, _, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/movies/{id}"].is_object());
    assert!(body["components"]["schemas"]["Movie"].is_object());
}
