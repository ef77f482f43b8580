#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate async_trait;

pub mod aggregates;
pub mod impls;
pub mod newtypes;
#[rustfmt::skip]
pub mod schema;
pub mod schema_setup;
pub mod source;
pub mod traits;
pub mod utils;
