//! # Repository Module
//!
//! One repository per back office table.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Call, One Statement                              │
//! │                                                                         │
//! │  BackOffice / web handler                                              │
//! │       │                                                                 │
//! │       │  db.customers().find_by_cpf("123.456.789-09")                  │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                    │
//! │  ├── pool.acquire()        ← scoped connection                         │
//! │  ├── one parameterized SQL statement                                   │
//! │  ├── map rows → Customer (FromRow)                                     │
//! │  └── connection dropped    ← released on every exit path               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every repository exposes the same five operations:
//!
//! | Operation | Returns | Missing id |
//! |-----------|---------|------------|
//! | `create`  | new `i64` id | n/a |
//! | `list`    | `Vec<T>` ordered by name | n/a |
//! | `get`     | `Option<T>` | `None` |
//! | `update`  | `bool` | `false` |
//! | `delete`  | `bool` | `false` |
//!
//! Repositories do no validation. They write whatever they receive.
//!
//! ## Available Repositories
//!
//! - [`CategoryRepository`](category::CategoryRepository)
//! - [`ProductRepository`](product::ProductRepository)
//! - [`CustomerRepository`](customer::CustomerRepository) - plus `find_by_cpf`

pub mod category;
pub mod customer;
pub mod product;
