//! Widget errors.

use clothshop_commerce::CommerceError;
use clothshop_data::FetchError;

/// Error type for widget operations.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error("page element missing: #{0}")]
    Dom(String),
}
