//! Ordering policy properties checked over many flag combinations.

use tabdeck::tab::ordering::apply_ordering;
use tabdeck::{Tab, TabId};

/// Every pinned/grouped assignment for `n` tabs, with home at `home_at`.
fn lists(n: usize, home_at: usize) -> impl Iterator<Item = Vec<Tab>> {
    (0..(1u32 << (2 * n))).map(move |mask| {
        (0..n)
            .map(|i| {
                let path = if i == home_at {
                    "/".to_string()
                } else {
                    format!("/t{i}")
                };
                let mut tab = Tab::new(path, format!("T{i}"));
                tab.id = TabId::from(format!("t{i}"));
                tab.pinned = mask & (1 << (2 * i)) != 0;
                tab.grouped = mask & (1 << (2 * i + 1)) != 0;
                tab
            })
            .collect()
    })
}

#[test]
fn ordering_is_idempotent() {
    for home_at in 0..4 {
        for mut tabs in lists(4, home_at) {
            apply_ordering(&mut tabs, "/");
            let once = tabs.clone();
            apply_ordering(&mut tabs, "/");
            assert_eq!(tabs, once);
        }
    }
}

#[test]
fn home_always_first() {
    for home_at in 0..4 {
        for mut tabs in lists(4, home_at) {
            apply_ordering(&mut tabs, "/");
            assert_eq!(tabs[0].path, "/");
        }
    }
}

#[test]
fn pinned_then_grouped_partitions() {
    for mut tabs in lists(4, usize::MAX) {
        apply_ordering(&mut tabs, "/");
        let ranks: Vec<(bool, bool)> = tabs.iter().map(|t| (!t.pinned, !t.grouped)).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{ranks:?}");
    }
}

#[test]
fn equal_ranks_keep_relative_order() {
    for mut tabs in lists(4, usize::MAX) {
        let original: Vec<TabId> = tabs.iter().map(|t| t.id.clone()).collect();
        apply_ordering(&mut tabs, "/");
        for pair in tabs.windows(2) {
            let same_rank = pair[0].pinned == pair[1].pinned && pair[0].grouped == pair[1].grouped;
            if same_rank {
                let a = original.iter().position(|id| id == &pair[0].id);
                let b = original.iter().position(|id| id == &pair[1].id);
                assert!(a < b);
            }
        }
    }
}
