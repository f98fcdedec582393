//! Order lifecycle operations gated by the access policy

mod ledger;

#[cfg(test)]
mod tests;

pub use ledger::OrderLedger;
