pub mod config;
pub mod download_client;
pub mod layout;
pub mod logging;
pub mod manifest;
pub mod pipeline;
pub mod platform;
pub mod todesktop;
pub mod urls;

#[cfg(test)]
pub mod test_helpers;
