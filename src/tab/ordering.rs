//! Tab ordering policies.
//!
//! [`apply_ordering`] runs after every mutation that can change membership
//! or flags. [`sort_by_group`] is the user-invoked bulk sort.

use super::Tab;
use super::metadata::TabMetadataResolver;

/// Stable sort: home first, then pinned, then grouped, otherwise keep the
/// existing relative order. Idempotent.
pub fn apply_ordering(tabs: &mut [Tab], home_path: &str) {
    tabs.sort_by_key(|tab| (!tab.is_home(home_path), !tab.pinned, !tab.grouped));
}

/// Reorder tabs by configured module, group and sequence.
///
/// Order of tiers: home, pinned, module (in `module_order`, unknown modules
/// last), group name (tabs without a group last), sequence (unnumbered
/// last), then title case-insensitively. Home stays first so the result
/// already satisfies [`apply_ordering`].
pub fn sort_by_group(
    tabs: &mut [Tab],
    resolver: &dyn TabMetadataResolver,
    module_order: &[String],
    home_path: &str,
) {
    tabs.sort_by_cached_key(|tab| {
        let meta = resolver.resolve(&tab.path);
        let module_rank = meta
            .module
            .as_ref()
            .and_then(|m| module_order.iter().position(|o| o == m))
            .unwrap_or(usize::MAX);
        (
            !tab.is_home(home_path),
            !tab.pinned,
            module_rank,
            meta.group.is_none(),
            meta.group,
            meta.sequence.is_none(),
            meta.sequence,
            tab.title.to_lowercase(),
        )
    });
}
