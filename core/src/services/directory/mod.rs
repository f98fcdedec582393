//! Account creation and lookup

mod service;

#[cfg(test)]
mod tests;

pub use service::UserDirectory;
