use cfg_if::cfg_if;

pub mod error;

cfg_if! {
  if #[cfg(feature = "full")] {
    pub mod claims;
    pub mod response;
    pub mod settings;
    pub mod utils;
  }
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
