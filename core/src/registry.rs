//! Process-wide dealer record.
//!
//! Created on first access and kept for the lifetime of the process. There is
//! no reset or teardown path.

use std::sync::OnceLock;

use tracing::debug;

pub const DEALER_NAME: &str = "Sapphire Vehicle Dealer";

static INSTANCE: OnceLock<Registry> = OnceLock::new();

#[derive(Debug)]
pub struct Registry {
    dealer_name: String,
}

impl Registry {
    /// Retrieves or initializes the dealer record.
    pub fn instance() -> &'static Registry {
        INSTANCE.get_or_init(|| {
            debug!("creating dealer registry");
            Registry {
                dealer_name: DEALER_NAME.to_string(),
            }
        })
    }

    pub fn dealer_name(&self) -> &str {
        &self.dealer_name
    }

    pub fn display_dealer_name(&self) -> String {
        format!("Dealer Name: {}", self.dealer_name)
    }
}
