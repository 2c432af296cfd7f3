pub mod core;
pub mod model;
pub mod query;
pub mod store;
pub mod text;

/*
┌──────────────────────────────────────────────────────────────────────┐
│                         BLOGHUB LAYERING                             │
└──────────────────────────────────────────────────────────────────────┘

  core::platform::Platform        facade wiring the stores together:
                                  cross-store invariants, moderation,
                                  dashboard aggregation
        │
  store::{posts, comments,        in-memory repositories behind
          users, categories}      parking_lot::RwLock, snapshot reads
        │
  query::{descriptor, engine,     stateless list-query engine:
          results}                search → filters → stable sort → page
        │
  core::types                     FieldValue + the Record trait
                                  (enumerated typed field accessors)

  model::{post, comment,          domain records implementing Record
          user, category}
  text::{slug, format, validate}  slugs, excerpts, reading time,
                                  input validation
*/
