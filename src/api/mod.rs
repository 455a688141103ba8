//! API Module
//!
//! HTTP handlers and routing for the code share REST API.
//!
//! # Endpoints
//! - `POST /drops` - Store a text and receive its code
//! - `GET /drops/:code` - Read a text (repeatable until expiry)
//! - `DELETE /drops/:code` - Read a text and remove it (single use)
//! - `GET /stats` - Get store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
