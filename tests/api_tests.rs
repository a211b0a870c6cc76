//! API integration tests.
//!
//! These run against a live server with a migrated database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

async fn create_author(client: &Client, first: &str, last: &str) -> Value {
    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({ "first_name": first, "last_name": last }))
        .send()
        .await
        .expect("Failed to create author");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse author")
}

async fn create_genre(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/genres", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create genre");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse genre");
    body["id"].as_i64().expect("No genre ID")
}

async fn create_book(client: &Client, title: &str, author_id: Option<i64>, genre_ids: &[i64]) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "summary": "Integration test record",
            "isbn": "9780000000000",
            "author_id": author_id,
            "genre_ids": genre_ids
        }))
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse book")
}

async fn create_instance(client: &Client, book_id: i64, body: Value) -> Value {
    let response = client
        .post(format!("{}/books/{}/instances", BASE_URL, book_id))
        .json(&body)
        .send()
        .await
        .expect("Failed to create instance");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse instance")
}

async fn delete_resource(client: &Client, path: &str) {
    let _ = client
        .delete(format!("{}/{}", BASE_URL, path))
        .send()
        .await;
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_genre_crud() {
    let client = Client::new();

    let id = create_genre(&client, "Science Fiction").await;

    let response = client
        .get(format!("{}/genres/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .put(format!("{}/genres/{}", BASE_URL, id))
        .json(&json!({ "name": "Speculative Fiction" }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Speculative Fiction");

    let response = client
        .delete(format!("{}/genres/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_book_list_caps_display_genre_at_three() {
    let client = Client::new();

    let mut genre_ids = Vec::new();
    for name in ["IG-One", "IG-Two", "IG-Three", "IG-Four", "IG-Five"] {
        genre_ids.push(create_genre(&client, name).await);
    }

    let book = create_book(&client, "Genre Heavy Book", None, &genre_ids).await;
    let book_id = book["id"].as_i64().expect("No book ID");

    let response = client
        .get(format!("{}/books?title=Genre+Heavy+Book", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");

    let row = body["items"]
        .as_array()
        .and_then(|items| items.iter().find(|i| i["id"].as_i64() == Some(book_id)))
        .expect("Book missing from list");
    assert_eq!(row["display_genre"], "IG-One, IG-Two, IG-Three");

    delete_resource(&client, &format!("books/{}", book_id)).await;
    for id in genre_ids {
        delete_resource(&client, &format!("genres/{}", id)).await;
    }
}

#[tokio::test]
#[ignore]
async fn test_deleting_author_keeps_books_with_null_author() {
    let client = Client::new();

    let author = create_author(&client, "Ephemeral", "Zz-Writer").await;
    let author_id = author["id"].as_i64().expect("No author ID");

    let book = create_book(&client, "Orphaned Book", Some(author_id), &[]).await;
    let book_id = book["id"].as_i64().expect("No book ID");
    assert_eq!(book["author_id"].as_i64(), Some(author_id));

    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Book survives with the author reference nulled
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["author_id"].is_null());
    assert!(body["author"].is_null());

    delete_resource(&client, &format!("books/{}", book_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_deleting_book_keeps_instances_with_null_book() {
    let client = Client::new();

    let book = create_book(&client, "Doomed Book", None, &[]).await;
    let book_id = book["id"].as_i64().expect("No book ID");

    let instance = create_instance(&client, book_id, json!({ "imprint": "First printing" })).await;
    let instance_id = instance["id"].as_str().expect("No instance ID").to_string();

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Instance survives with the book reference nulled
    let response = client
        .get(format!("{}/instances/{}", BASE_URL, instance_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["book_id"].is_null());

    delete_resource(&client, &format!("instances/{}", instance_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_authors_are_ordered_by_last_name() {
    let client = Client::new();

    let a = create_author(&client, "First", "Zzz-Order-B").await;
    let b = create_author(&client, "Second", "Zzz-Order-A").await;

    let response = client
        .get(format!("{}/authors?last_name=Zzz-Order&per_page=10", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");

    let last_names: Vec<&str> = body["items"]
        .as_array()
        .expect("No items")
        .iter()
        .map(|i| i["last_name"].as_str().unwrap())
        .collect();
    assert_eq!(last_names, ["Zzz-Order-A", "Zzz-Order-B"]);

    for author in [&a, &b] {
        delete_resource(&client, &format!("authors/{}", author["id"])).await;
    }
}

#[tokio::test]
#[ignore]
async fn test_instances_sort_by_due_date_with_unset_first() {
    let client = Client::new();

    let book = create_book(&client, "Ordering Fixture", None, &[]).await;
    let book_id = book["id"].as_i64().expect("No book ID");

    let late = create_instance(
        &client,
        book_id,
        json!({ "imprint": "late", "due_back": "2031-06-01", "status": "OnLoan" }),
    )
    .await;
    let unset = create_instance(&client, book_id, json!({ "imprint": "unset" })).await;
    let early = create_instance(
        &client,
        book_id,
        json!({ "imprint": "early", "due_back": "2031-01-01", "status": "OnLoan" }),
    )
    .await;

    let response = client
        .get(format!("{}/books/{}/instances", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");

    let imprints: Vec<&str> = body
        .as_array()
        .expect("No instance list")
        .iter()
        .map(|i| i["imprint"].as_str().unwrap())
        .collect();
    assert_eq!(imprints, ["unset", "early", "late"]);

    for inst in [&late, &unset, &early] {
        delete_resource(&client, &format!("instances/{}", inst["id"].as_str().unwrap())).await;
    }
    delete_resource(&client, &format!("books/{}", book_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_new_instance_defaults_to_maintenance() {
    let client = Client::new();

    let book = create_book(&client, "Default Status Fixture", None, &[]).await;
    let book_id = book["id"].as_i64().expect("No book ID");

    let instance = create_instance(&client, book_id, json!({ "imprint": "fresh copy" })).await;
    assert_eq!(instance["status"].as_i64(), Some(0)); // Maintenance

    delete_resource(&client, &format!("instances/{}", instance["id"].as_str().unwrap())).await;
    delete_resource(&client, &format!("books/{}", book_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_return_transition_requires_on_loan() {
    let client = Client::new();

    let book = create_book(&client, "Return Fixture", None, &[]).await;
    let book_id = book["id"].as_i64().expect("No book ID");

    // Fresh copy is in maintenance, returning it is rejected
    let instance = create_instance(&client, book_id, json!({ "imprint": "shelf copy" })).await;
    let instance_id = instance["id"].as_str().expect("No instance ID").to_string();

    let response = client
        .post(format!("{}/instances/{}/return", BASE_URL, instance_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // Put it on loan, then return it
    let response = client
        .put(format!("{}/instances/{}", BASE_URL, instance_id))
        .json(&json!({ "status": "OnLoan", "due_back": "2031-03-01" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/instances/{}/return", BASE_URL, instance_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"].as_i64(), Some(2)); // Available
    assert!(body["due_back"].is_null());
    assert!(body["borrower_id"].is_null());

    delete_resource(&client, &format!("instances/{}", instance_id)).await;
    delete_resource(&client, &format!("books/{}", book_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_update_with_null_clears_book_author() {
    let client = Client::new();

    let author = create_author(&client, "Detach", "Zz-Clearable").await;
    let author_id = author["id"].as_i64().expect("No author ID");
    let book = create_book(&client, "Detachable Book", Some(author_id), &[]).await;
    let book_id = book["id"].as_i64().expect("No book ID");

    // Absent field leaves the author untouched
    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .json(&json!({ "title": "Detachable Book (rev)" }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["author_id"].as_i64(), Some(author_id));

    // Explicit null detaches the author
    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .json(&json!({ "author_id": null }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["author_id"].is_null());

    delete_resource(&client, &format!("books/{}", book_id)).await;
    delete_resource(&client, &format!("authors/{}", author_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_update_with_null_clears_instance_due_date() {
    let client = Client::new();

    let book = create_book(&client, "Due Date Fixture", None, &[]).await;
    let book_id = book["id"].as_i64().expect("No book ID");
    let instance = create_instance(
        &client,
        book_id,
        json!({ "imprint": "dated copy", "due_back": "2031-09-01" }),
    )
    .await;
    let instance_id = instance["id"].as_str().expect("No instance ID").to_string();

    // Absent field leaves the due date untouched
    let response = client
        .put(format!("{}/instances/{}", BASE_URL, instance_id))
        .json(&json!({ "imprint": "relabeled copy" }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["due_back"], "2031-09-01");

    // Explicit null clears it
    let response = client
        .put(format!("{}/instances/{}", BASE_URL, instance_id))
        .json(&json!({ "due_back": null }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["due_back"].is_null());

    delete_resource(&client, &format!("instances/{}", instance_id)).await;
    delete_resource(&client, &format!("books/{}", book_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_update_with_null_clears_author_dates() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({
            "first_name": "Dated",
            "last_name": "Zz-Lifespan",
            "date_of_birth": "1900-01-01",
            "date_of_death": "1980-01-01"
        }))
        .send()
        .await
        .expect("Failed to create author");
    assert_eq!(response.status(), 201);
    let author: Value = response.json().await.expect("Failed to parse author");
    let author_id = author["id"].as_i64().expect("No author ID");

    // Absent fields leave both dates untouched
    let response = client
        .put(format!("{}/authors/{}", BASE_URL, author_id))
        .json(&json!({ "first_name": "Redated" }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["date_of_birth"], "1900-01-01");
    assert_eq!(body["date_of_death"], "1980-01-01");

    // Explicit null clears only the named date
    let response = client
        .put(format!("{}/authors/{}", BASE_URL, author_id))
        .json(&json!({ "date_of_death": null }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["date_of_birth"], "1900-01-01");
    assert!(body["date_of_death"].is_null());

    delete_resource(&client, &format!("authors/{}", author_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_out_of_range_pages_are_clamped() {
    let client = Client::new();

    for query in ["page=0", "page=-1&per_page=0"] {
        let response = client
            .get(format!("{}/authors?{}", BASE_URL, query))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success(), "rejected ?{}", query);
    }
}

#[tokio::test]
#[ignore]
async fn test_isbn_length_is_enforced() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Bad ISBN",
            "summary": "Should be rejected",
            "isbn": "12345"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_admin_config_declares_all_record_types() {
    let client = Client::new();

    let response = client
        .get(format!("{}/admin/config", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let models: Vec<&str> = body
        .as_array()
        .expect("No admin config array")
        .iter()
        .map(|m| m["model"].as_str().unwrap())
        .collect();
    assert_eq!(
        models,
        ["genre", "language", "author", "book", "book_instance"]
    );

    let book_admin = &body[3];
    assert_eq!(
        book_admin["list_display"],
        json!(["title", "author", "display_genre"])
    );
    assert_eq!(book_admin["inlines"][0]["model"], "book_instance");
    assert_eq!(book_admin["inlines"][0]["extra"], 0);
}
