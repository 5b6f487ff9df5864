//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM over SQLite for persistence and
//! tower-sessions for cookie based logins.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transactions
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Validation** (`validation/`) - Field and cross-field rules for every parameter type
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, password hasher)
//! - **Startup** (`startup`) - Database, session and CORS setup
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Cron job moving hackathons and events through their statuses
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session and checks permissions
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** validates, applies business rules inside a transaction
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
