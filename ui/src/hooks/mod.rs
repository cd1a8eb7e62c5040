pub mod media_query;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod window_media;

pub use media_query::use_media_query;
