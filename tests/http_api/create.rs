use serde_json::{json, Value};

use crate::support::{book_body, start_server};

#[tokio::test]
async fn create_returns_201_with_book_id() {
    let server = start_server().await;

    let resp = server
        .post_book(&json!({
            "name": "A",
            "year": 2020,
            "author": "X",
            "summary": "s",
            "publisher": "P",
            "pageCount": 100,
            "readPage": 100,
            "reading": false,
        }))
        .await;
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil ditambahkan");
    let id = body["data"]["bookId"].as_str().unwrap();
    assert_eq!(id.len(), 16);

    let book = server.catalog.get(id).unwrap();
    assert!(book.finished);
}

#[tokio::test]
async fn create_without_name_is_400() {
    let server = start_server().await;

    let mut body = book_body("", 10, 0, false);
    body.as_object_mut().unwrap().remove("name");
    let resp = server.post_book(&body).await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "Gagal menambahkan buku. Mohon isi nama buku" })
    );
    assert!(server.catalog.is_empty().unwrap());
}

#[tokio::test]
async fn create_with_read_page_past_page_count_is_400() {
    let server = start_server().await;

    let resp = server.post_book(&book_body("B", 100, 150, true)).await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
    );
    assert!(server.catalog.is_empty().unwrap());
}

#[tokio::test]
async fn malformed_body_is_400_fail_envelope() {
    let server = start_server().await;

    let resp = server
        .client
        .post(server.url("/books"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Gagal menambahkan buku."));

    let mut negative = book_body("Negative", 0, 0, false);
    negative["pageCount"] = json!(-5);
    let resp = server.post_book(&negative).await;
    assert_eq!(resp.status(), 400);
    assert!(server.catalog.is_empty().unwrap());
}

