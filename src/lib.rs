// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement one annotation round trip.
//
// Module responsibilities:
// - `config`: Runtime settings (image directory, credential path, API
//   endpoint) resolved from the environment with fixed defaults.
// - `error`: The typed error kinds a run can die with, one variant per
//   failure stage.
// - `feature`: The analysis feature table and menu-code mapping.
// - `images`: Directory listing and base64 image payloads.
// - `vision`: Wire types for the annotate endpoint and the response
//   renderer.
// - `auth`: Service-account key loading and the bearer-token exchange.
// - `api`: The authenticated HTTP client that sends the annotate request.
// - `ui`: The interactive console flow tying the above together.
//
// Keeping this separation makes it easier to test each stage in
// isolation without touching the console or the network.
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod feature;
pub mod images;
pub mod ui;
pub mod vision;

#[cfg(test)]
pub(crate) mod test_support;
