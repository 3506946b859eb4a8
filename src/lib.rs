pub mod contact;
pub mod logging;
pub mod motion;
pub mod preferences;
pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
