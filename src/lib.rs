//! Static asset server for the DASH classroom front-end.
//!
//! Maps request paths onto files under the served root, answers CORS
//! preflights, disables client caching so regenerated manifests and
//! segments are always re-fetched, and prints a LAN-reachable URL at
//! startup so the pages can be opened from phones on the same network.
//! Playback and calls are handled by the pages themselves.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod netinfo;
pub mod server;
