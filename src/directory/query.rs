use tracing::debug;

use crate::models::{CategoryFilter, ServiceProvider, SortKey};

/// Filter and order the provider directory.
///
/// Filter logic:
/// - Text: empty text keeps everything; otherwise a case-insensitive substring match on the
///   name, description, service type label or any specialty
/// - Category: `All` keeps everything; otherwise exact service type match
/// - Both must hold
///
/// Ordering is a stable sort (ascending distance or descending rating), so ties keep the
/// input order. The input slice is not modified.
pub fn query_providers(
    providers: &[ServiceProvider],
    search_text: &str,
    category: CategoryFilter,
    sort_key: SortKey,
) -> Vec<ServiceProvider> {
    let needle = search_text.to_lowercase();

    let mut matched: Vec<ServiceProvider> = providers
        .iter()
        .filter(|provider| match_text(provider, &needle) && category.matches(provider.service_type))
        .cloned()
        .collect();

    sort_providers(&mut matched, sort_key);

    debug!(
        search_text,
        category = %category,
        sort = %sort_key,
        matched = matched.len(),
        "provider query"
    );
    matched
}

/// Stable in-place sort by the given key
pub fn sort_providers(providers: &mut [ServiceProvider], sort_key: SortKey) {
    match sort_key {
        SortKey::Distance => providers.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
        SortKey::Rating => providers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// `needle` must already be lower-cased
fn match_text(provider: &ServiceProvider, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    provider.name.to_lowercase().contains(needle)
        || provider.description.to_lowercase().contains(needle)
        || provider.service_type.label().to_lowercase().contains(needle)
        || provider.specialties.iter().any(|s| s.to_lowercase().contains(needle))
}

/// Look up a provider by id
pub fn find_provider<'a>(providers: &'a [ServiceProvider], id: &str) -> Option<&'a ServiceProvider> {
    providers.iter().find(|p| p.id == id)
}
