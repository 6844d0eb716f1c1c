#[cfg(feature = "full")]
#[macro_use]
extern crate diesel;
#[cfg(feature = "full")]
#[macro_use]
extern crate diesel_derive_newtype;

use cfg_if::cfg_if;

pub mod aggregates;
pub mod newtypes;
pub mod source;
pub mod views;

cfg_if! {
  if #[cfg(feature = "full")] {
    pub mod impls;
    pub mod schema;
    pub mod schema_setup;
    pub mod traits;
    pub mod utils;
  }
}
