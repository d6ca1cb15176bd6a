//! HTTP transport for the catalog.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /books` - create a book from the JSON body.
//! - `GET /books` - list `{id, name, publisher}` of books matching the query.
//! - `GET /books/:book_id` - the full record.
//! - `PUT /books/:book_id` - replace a book's fields from the JSON body.
//! - `DELETE /books/:book_id` - remove a book.
//! - `GET /health` - `{ status: "success", data: { books: <count> } }`.
//!
//! Every response is an [`Envelope`]: `{ status, message?, data? }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use bookshelf::{http, Catalog, InMemoryBookStore};
//!
//! let catalog = Arc::new(Catalog::new(InMemoryBookStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(catalog.clone());
//!
//! // Or serve directly
//! http::serve(catalog, "localhost:9000").await?;
//! ```

mod envelope;
mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::store::BookStore;

pub use envelope::{BookDetail, BookList, CreatedBook, Envelope, Health, Status};
pub use error::{ApiError, ApiResult};

/// Build an axum `Router` serving the catalog.
pub fn router<S: BookStore + 'static>(catalog: Arc<Catalog<S>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::<S>))
        .route(
            "/books",
            get(handlers::list_books::<S>).post(handlers::create_book::<S>),
        )
        .route(
            "/books/:book_id",
            get(handlers::get_book::<S>)
                .put(handlers::update_book::<S>)
                .delete(handlers::delete_book::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

/// Serve the catalog over HTTP at `addr` (e.g. `"localhost:9000"`) until
/// Ctrl-C is received.
pub async fn serve<S: BookStore + 'static>(
    catalog: Arc<Catalog<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(catalog, listener).await
}

/// Serve the catalog on an already bound listener until Ctrl-C is received.
pub async fn serve_on<S: BookStore + 'static>(
    catalog: Arc<Catalog<S>>,
    listener: TcpListener,
) -> Result<(), std::io::Error> {
    let app = router(catalog);
    info!(addr = %listener.local_addr()?, "server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
