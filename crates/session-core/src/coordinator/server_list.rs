//! Search-result presentation.

use crate::api::types::ServerListing;
use crate::provider::SessionSearchResult;

/// Shown when a result advertises no server name and carries no usable id.
const NAME_FALLBACK: &str = "Could not find name.";

/// Transform raw search results into the UI-facing server list.
pub(crate) fn build_listings(results: Vec<SessionSearchResult>) -> Vec<ServerListing> {
    results.into_iter().map(listing_from).collect()
}

/// Display name preference: the advertised server name, then the
/// backend-assigned id, then a placeholder.
fn listing_from(result: SessionSearchResult) -> ServerListing {
    let SessionSearchResult {
        session_id,
        host_user_name,
        max_public_slots,
        open_public_slots,
        advertised_name,
        provider_ref,
    } = result;

    let display_name = advertised_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| {
            if session_id.is_empty() {
                NAME_FALLBACK.to_string()
            } else {
                session_id
            }
        });

    ServerListing {
        display_name,
        host_user_name,
        current_participants: max_public_slots.saturating_sub(open_public_slots),
        max_participants: max_public_slots,
        provider_ref,
    }
}
