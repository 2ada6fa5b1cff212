//! Entity ↔ model mappers

mod post;
mod reaction;
mod user;
