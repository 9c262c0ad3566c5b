//! Integration Tests for API Endpoints
//!
//! Drives the full router, middleware included, through request/response
//! cycles and checks what ends up in the shared response cache.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use storefront::{cache::TtlCache, catalog::CatalogStore, create_router, AppState};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (Router, AppState) {
    let state = AppState::new(TtlCache::default(), CatalogStore::new());
    (create_router(state.clone()), state)
}

async fn body_to_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn create_category(app: &Router, name: &str) -> String {
    let response = send_json(
        app,
        "POST",
        "/api/v1/category/create-category",
        json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_to_json(response).await["category"]["_id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_product(app: &Router, name: &str, price: f64, category: &str) -> Value {
    let response = send_json(
        app,
        "POST",
        "/api/v1/product/create-product",
        json!({
            "name": name,
            "description": format!("{name} description"),
            "price": price,
            "category": category,
            "quantity": 10,
            "photo": "https://img.example/p.png",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_to_json(response).await["product"].clone()
}

async fn stats(app: &Router) -> Value {
    body_to_json(get(app, "/cache-stats").await).await["stats"].clone()
}

// == Health and Stats ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = create_test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Server is running");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_cache_stats_initially_empty() {
    let (app, _) = create_test_app();

    let stats = stats(&app).await;
    assert_eq!(stats["hits"], 0);
    assert_eq!(stats["misses"], 0);
    assert_eq!(stats["totalRequests"], 0);
    assert_eq!(stats["hitRate"], 0.0);
    assert_eq!(stats["keys"], json!([]));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (app, _) = create_test_app();

    let response = get(&app, "/api/v2/nothing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_to_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Route not found");
    assert_eq!(json["path"], "/api/v2/nothing");
}

// == Response Cache ==

#[tokio::test]
async fn test_second_get_served_from_cache() {
    let (app, state) = create_test_app();
    let cid = create_category(&app, "Shirts").await;
    let product = create_product(&app, "Oxford", 30.0, &cid).await;

    let first = body_to_json(get(&app, "/api/v1/product/product-count").await).await;
    assert_eq!(first["total"], 1);

    // Bypasses the invalidation middleware, so the cached body goes stale.
    state
        .catalog
        .write()
        .await
        .delete_product(product["_id"].as_str().unwrap().parse().unwrap())
        .unwrap();

    let second = body_to_json(get(&app, "/api/v1/product/product-count").await).await;
    assert_eq!(second, first);

    let stats = stats(&app).await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["hitRate"], 50.0);
    assert_eq!(stats["keys"], json!(["cache:/api/v1/product/product-count"]));
}

#[tokio::test]
async fn test_query_string_is_part_of_key() {
    let (app, state) = create_test_app();

    get(&app, "/api/v1/category/get-category?a=1").await;
    get(&app, "/api/v1/category/get-category?a=2").await;

    let cache = state.cache.read().await;
    assert_eq!(cache.len(), 2);
    assert!(cache.contains_key("cache:/api/v1/category/get-category?a=1"));
    assert!(cache.contains_key("cache:/api/v1/category/get-category?a=2"));
}

#[tokio::test]
async fn test_error_responses_are_not_cached() {
    let (app, state) = create_test_app();

    let response = get(&app, "/api/v1/category/single-category/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert!(state.cache.read().await.is_empty());
}

#[tokio::test]
async fn test_category_ttl_expiry() {
    let state = AppState {
        category_cache_ttl_ms: 150,
        ..AppState::new(TtlCache::default(), CatalogStore::new())
    };
    let app = create_router(state.clone());

    get(&app, "/api/v1/category/get-category").await;
    get(&app, "/api/v1/category/get-category").await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    get(&app, "/api/v1/category/get-category").await;

    let stats = state.cache.read().await.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.sets, 2);
}

// == Invalidation ==

#[tokio::test]
async fn test_product_write_invalidates_product_keys_only() {
    let (app, state) = create_test_app();
    let cid = create_category(&app, "Shoes").await;

    get(&app, "/api/v1/product/get-product").await;
    get(&app, "/api/v1/category/get-category").await;
    assert_eq!(state.cache.read().await.len(), 2);

    create_product(&app, "Runner", 80.0, &cid).await;

    let cache = state.cache.read().await;
    assert!(!cache.contains_key("cache:/api/v1/product/get-product"));
    assert!(cache.contains_key("cache:/api/v1/category/get-category"));

    drop(cache);
    let listed = body_to_json(get(&app, "/api/v1/product/get-product").await).await;
    assert_eq!(listed["counTotal"], 1);
    assert_eq!(listed["products"][0]["name"], "Runner");
}

#[tokio::test]
async fn test_failed_write_still_invalidates() {
    let (app, state) = create_test_app();
    get(&app, "/api/v1/category/get-category").await;

    let response = send_json(
        &app,
        "PUT",
        "/api/v1/category/update-category/not-a-uuid",
        json!({ "name": "x" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(state.cache.read().await.is_empty());
}

#[tokio::test]
async fn test_delete_product_invalidates_listing() {
    let (app, _) = create_test_app();
    let cid = create_category(&app, "Bags").await;
    let product = create_product(&app, "Tote", 15.0, &cid).await;

    let before = body_to_json(get(&app, "/api/v1/product/product-count").await).await;
    assert_eq!(before["total"], 1);

    let uri = format!(
        "/api/v1/product/delete-product/{}",
        product["_id"].as_str().unwrap()
    );
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let after = body_to_json(get(&app, "/api/v1/product/product-count").await).await;
    assert_eq!(after["total"], 0);
}

// == Catalog ==

#[tokio::test]
async fn test_review_flow() {
    let (app, _) = create_test_app();
    let cid = create_category(&app, "Hats").await;
    let product = create_product(&app, "Beanie", 12.0, &cid).await;
    let pid = product["_id"].as_str().unwrap();
    let reviews_uri = format!("/api/v1/product/reviews/{pid}");
    let review_uri = format!("/api/v1/product/review/{pid}");

    let empty = body_to_json(get(&app, &reviews_uri).await).await;
    assert_eq!(empty["totalReviews"], 0);

    for (user, rating) in [("ann", 5), ("bob", 2)] {
        let response = send_json(
            &app,
            "POST",
            &review_uri,
            json!({ "user": user, "rating": rating, "comment": "ok" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let duplicate = send_json(
        &app,
        "POST",
        &review_uri,
        json!({ "user": "ann", "rating": 4, "comment": "again" }),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(duplicate).await;
    assert_eq!(json["message"], "You have already reviewed this product");

    let out_of_range = send_json(
        &app,
        "POST",
        &review_uri,
        json!({ "user": "cy", "rating": 6, "comment": "wow" }),
    )
    .await;
    assert_eq!(out_of_range.status(), StatusCode::BAD_REQUEST);

    let reviews = body_to_json(get(&app, &reviews_uri).await).await;
    assert_eq!(reviews["totalReviews"], 2);
    assert_eq!(reviews["averageRating"], 3.5);
}

#[tokio::test]
async fn test_search_and_suggestions() {
    let (app, _) = create_test_app();
    let cid = create_category(&app, "Outerwear").await;
    create_product(&app, "Rain Jacket", 90.0, &cid).await;
    create_product(&app, "Denim Jacket", 70.0, &cid).await;
    create_product(&app, "Wool Scarf", 20.0, &cid).await;

    let found = body_to_json(get(&app, "/api/v1/product/search/jacket").await).await;
    assert_eq!(found.as_array().unwrap().len(), 2);

    let suggestions =
        body_to_json(get(&app, "/api/v1/product/search-suggestions/scarf").await).await;
    assert_eq!(suggestions, json!([{ "name": "Wool Scarf", "slug": "wool-scarf" }]));

    let short = body_to_json(get(&app, "/api/v1/product/search-suggestions/s").await).await;
    assert_eq!(short, json!([]));
}

#[tokio::test]
async fn test_filters_with_price_and_sort() {
    let (app, _) = create_test_app();
    let shirts = create_category(&app, "Shirts").await;
    let pants = create_category(&app, "Pants").await;
    create_product(&app, "Tee", 10.0, &shirts).await;
    create_product(&app, "Polo", 25.0, &shirts).await;
    create_product(&app, "Chino", 40.0, &pants).await;

    let response = send_json(
        &app,
        "POST",
        "/api/v1/product/product-filters",
        json!({ "checked": [shirts], "radio": [0, 30], "sort": "price-high" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response).await;
    let names: Vec<&str> = json["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Polo", "Tee"]);
}

#[tokio::test]
async fn test_category_products_and_related() {
    let (app, _) = create_test_app();
    let cid = create_category(&app, "Socks").await;
    let first = create_product(&app, "Ankle Socks", 5.0, &cid).await;
    create_product(&app, "Crew Socks", 6.0, &cid).await;

    let listed = body_to_json(get(&app, "/api/v1/product/product-category/socks").await).await;
    assert_eq!(listed["category"]["name"], "Socks");
    assert_eq!(listed["products"].as_array().unwrap().len(), 2);

    let related_uri = format!(
        "/api/v1/product/related-product/{}/{}",
        first["_id"].as_str().unwrap(),
        cid
    );
    let related = body_to_json(get(&app, &related_uri).await).await;
    let products = related["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Crew Socks");
}

// == End to End ==

#[tokio::test]
async fn test_served_over_tcp() {
    let (app, _) = create_test_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let url = format!("http://{addr}/api/v1/category/get-category");
    for _ in 0..2 {
        let response = client.get(&url).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }

    let stats: Value = client
        .get(format!("http://{addr}/cache-stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["stats"]["hits"], 1);
    assert_eq!(stats["stats"]["misses"], 1);

    server.abort();
}
