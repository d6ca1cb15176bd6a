use serde_json::{json, Value};

use crate::support::{book_body, start_server};

#[tokio::test]
async fn get_returns_full_record() {
    let server = start_server().await;
    let id = server.create(book_body("Dicoding Academy", 100, 25, true)).await;

    let (status, body) = server.get_json(&format!("/books/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "success");

    let book = &body["data"]["book"];
    assert_eq!(book["id"], id.as_str());
    assert_eq!(book["name"], "Dicoding Academy");
    assert_eq!(book["year"], 2010);
    assert_eq!(book["author"], "John Doe");
    assert_eq!(book["summary"], "Lorem ipsum dolor sit amet");
    assert_eq!(book["publisher"], "Dicoding Indonesia");
    assert_eq!(book["pageCount"], 100);
    assert_eq!(book["readPage"], 25);
    assert_eq!(book["finished"], false);
    assert_eq!(book["reading"], true);
    assert_eq!(book["insertedAt"], book["updatedAt"]);
}

#[tokio::test]
async fn get_unknown_is_404() {
    let server = start_server().await;
    let (status, body) = server.get_json("/books/xxxxx").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "status": "fail", "message": "Buku tidak ditemukan" }));
}

#[tokio::test]
async fn update_existing_book() {
    let server = start_server().await;
    let id = server.create(book_body("Old", 100, 25, true)).await;
    let before = server.catalog.get(&id).unwrap();

    let resp = server
        .client
        .put(server.url(&format!("/books/{id}")))
        .json(&book_body("New", 100, 100, false))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status": "success", "message": "Buku berhasil diperbarui" }));

    let after = server.catalog.get(&id).unwrap();
    assert_eq!(after.name, "New");
    assert!(after.finished);
    assert_eq!(after.inserted_at, before.inserted_at);
}

#[tokio::test]
async fn update_failures() {
    let server = start_server().await;
    let id = server.create(book_body("Kept", 100, 25, true)).await;

    let put = |path: String, body: Value| {
        let request = server.client.put(server.url(&path)).json(&body);
        async move {
            let resp = request.send().await.unwrap();
            let status = resp.status().as_u16();
            let body: Value = resp.json().await.unwrap();
            (status, body["message"].as_str().unwrap().to_string())
        }
    };

    let mut nameless = book_body("", 100, 25, true);
    nameless.as_object_mut().unwrap().remove("name");
    assert_eq!(
        put(format!("/books/{id}"), nameless).await,
        (400, "Gagal memperbarui buku. Mohon isi nama buku".to_string())
    );

    assert_eq!(
        put(format!("/books/{id}"), book_body("Kept", 100, 101, true)).await,
        (
            400,
            "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount".to_string()
        )
    );

    assert_eq!(
        put("/books/xxxxx".to_string(), book_body("Other", 1, 0, false)).await,
        (404, "Gagal memperbarui buku. Id tidak ditemukan".to_string())
    );

    // validation runs before the id lookup
    assert_eq!(put("/books/xxxxx".to_string(), book_body("Other", 1, 2, false)).await.0, 400);

    assert_eq!(server.catalog.get(&id).unwrap().name, "Kept");
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let server = start_server().await;
    let id = server.create(book_body("Doomed", 1, 0, false)).await;
    let kept = server.create(book_body("Kept", 1, 0, false)).await;

    let resp = server
        .client
        .delete(server.url(&format!("/books/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status": "success", "message": "Buku berhasil dihapus" }));

    let (status, _) = server.get_json(&format!("/books/{id}")).await;
    assert_eq!(status, 404);

    let resp = server
        .client
        .delete(server.url(&format!("/books/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Buku gagal dihapus. Id tidak ditemukan");

    assert_eq!(server.catalog.len().unwrap(), 1);
    assert!(server.catalog.get(&kept).is_ok());
}
