use crate::tests::{customer, roster};
use crate::{
    DEFAULT_PAGE_SIZE, Directory, PAGE_SIZE_OPTIONS, SortDirection, SortKey, paginate, search,
};

use googletest::assert_that;
use googletest::prelude::{elements_are, eq, len};

fn ids(items: &[&crate::Customer]) -> Vec<String> {
    items.iter().map(|c| c.id.clone()).collect()
}

// =========================================================================
// Search
// =========================================================================

#[test]
fn given_empty_term_when_search_then_returns_full_list() {
    let customers = roster();

    let result = search(&customers, "");

    assert_that!(result, len(eq(customers.len())));
}

#[test]
fn given_lowercase_term_when_search_then_matches_name_case_insensitively() {
    let customers = roster();

    let result = search(&customers, "ada");

    assert_that!(ids(&result), elements_are![eq("c01")]);
}

#[test]
fn given_phone_fragment_when_search_then_matches_phone() {
    let customers = roster();

    let result = search(&customers, "12345678");

    assert_that!(ids(&result), elements_are![eq("c01"), eq("c07")]);
}

#[test]
fn given_any_term_when_search_then_result_is_exactly_matching_subset() {
    let customers = roster();

    for term in ["a", "AR", "+46", "zz", "4", "Karla"] {
        let needle = term.to_lowercase();
        let expected: Vec<String> = customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.phone_number.to_lowercase().contains(&needle)
            })
            .map(|c| c.id.clone())
            .collect();

        assert_eq!(ids(&search(&customers, term)), expected, "term {term:?}");
    }
}

#[test]
fn given_search_on_later_page_when_term_changes_then_page_resets() {
    let mut directory = Directory::with_page_size(roster(), 5).unwrap();
    directory.set_page(2);
    assert_eq!(directory.page(), 2);

    directory.set_search("a");

    assert_eq!(directory.page(), 0);
}

// =========================================================================
// Sort
// =========================================================================

#[test]
fn given_same_key_twice_when_toggle_sort_then_direction_flips() {
    let mut directory = Directory::new(roster());

    directory.toggle_sort(SortKey::Name);
    assert_eq!(
        directory.sort().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );

    directory.toggle_sort(SortKey::Name);
    assert_eq!(
        directory.sort().map(|s| s.direction),
        Some(SortDirection::Descending)
    );
}

#[test]
fn given_descending_key_when_new_key_selected_then_ascending() {
    let mut directory = Directory::new(roster());
    directory.toggle_sort(SortKey::Name);
    directory.toggle_sort(SortKey::Name);

    directory.toggle_sort(SortKey::CutsRemaining);

    let sort = directory.sort().unwrap();
    assert_eq!(sort.key, SortKey::CutsRemaining);
    assert_eq!(sort.direction, SortDirection::Ascending);
}

#[test]
fn given_cuts_key_when_sorted_ascending_then_numeric_not_lexicographic() {
    let customers = vec![
        customer("a", "A", "1", 10),
        customer("b", "B", "2", 9),
        customer("c", "C", "3", 100),
    ];
    let mut directory = Directory::new(customers);

    directory.toggle_sort(SortKey::CutsRemaining);

    let balances: Vec<i64> = directory
        .filtered()
        .iter()
        .map(|c| c.cuts_remaining)
        .collect();
    assert_eq!(balances, vec![9, 10, 100]);
}

#[test]
fn given_mixed_case_names_when_sorted_by_name_then_case_is_ignored() {
    let mut directory = Directory::new(roster());

    directory.toggle_sort(SortKey::Name);

    let names: Vec<&str> = directory
        .filtered()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Ada", "bob", "Carla", "dave", "Eve", "Frank", "Gina", "hans", "Ida", "Jonas",
            "Karla", "Lars"
        ]
    );
}

#[test]
fn given_equal_balances_when_sorted_either_direction_then_ties_keep_list_order() {
    let mut directory = Directory::new(roster());

    directory.toggle_sort(SortKey::CutsRemaining);
    let ascending = ids(&directory.filtered());
    let pos = |v: &[String], id: &str| v.iter().position(|x| x == id).unwrap();
    assert!(pos(&ascending, "c02") < pos(&ascending, "c05"));

    directory.toggle_sort(SortKey::CutsRemaining);
    let descending = ids(&directory.filtered());
    assert!(pos(&descending, "c02") < pos(&descending, "c05"));
    assert_eq!(descending.first().map(String::as_str), Some("c10"));
}

// =========================================================================
// Pagination
// =========================================================================

#[test]
fn given_defaults_when_created_then_first_page_default_size() {
    let directory = Directory::new(roster());

    assert_eq!(directory.page(), 0);
    assert_eq!(directory.page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(directory.page_count(), 2);
}

#[test]
fn given_unsupported_page_size_when_set_then_error() {
    let mut directory = Directory::new(roster());

    let result = directory.set_page_size(7);

    assert!(result.is_err());
    assert_eq!(directory.page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn given_page_size_change_when_on_later_page_then_page_resets() {
    let mut directory = Directory::with_page_size(roster(), 5).unwrap();
    directory.set_page(1);

    directory.set_page_size(10).unwrap();

    assert_eq!(directory.page(), 0);
}

#[test]
fn given_page_past_end_when_set_page_then_clamped_to_last() {
    let mut directory = Directory::with_page_size(roster(), 5).unwrap();

    directory.set_page(99);

    assert_eq!(directory.page(), 2);
    assert_that!(directory.page_items(), len(eq(2)));
}

#[test]
fn given_every_page_size_when_pages_concatenated_then_filtered_list_reproduced() {
    for page_size in PAGE_SIZE_OPTIONS {
        let mut directory = Directory::with_page_size(roster(), page_size).unwrap();
        directory.set_search("a");
        directory.toggle_sort(SortKey::Phone);

        let filtered = ids(&directory.filtered());
        let mut concatenated = Vec::new();
        for page in 0..directory.page_count() {
            let slice = paginate(&filtered, page, page_size);
            assert!(slice.len() <= page_size);
            concatenated.extend_from_slice(slice);
        }

        assert_eq!(concatenated, filtered, "page size {page_size}");
    }
}

#[test]
fn given_zero_page_size_when_paginate_then_empty() {
    let items = [1, 2, 3];
    assert!(paginate(&items, 0, 0).is_empty());
    assert!(paginate(&items, 5, 2).is_empty());
}

#[test]
fn given_page_view_then_reports_totals() {
    let mut directory = Directory::with_page_size(roster(), 5).unwrap();
    directory.set_search("a");
    directory.set_page(1);

    let view = directory.page_view();

    assert_eq!(view.total, directory.filtered().len());
    assert_eq!(view.page, 1);
    assert_eq!(view.page_size, 5);
    assert_eq!(view.search, "a");
    assert!(view.items.len() <= 5);
}

// =========================================================================
// Balance reconciliation
// =========================================================================

#[test]
fn given_deduction_result_when_applied_then_every_view_reflects_balance() {
    let mut directory = Directory::new(roster());
    directory.set_search("ada");
    directory.toggle_sort(SortKey::CutsRemaining);

    let updated = directory.apply_balance("c01", 2).cloned();

    assert_eq!(updated.map(|c| c.cuts_remaining), Some(2));
    assert_eq!(directory.get("c01").unwrap().cuts_remaining, 2);
    assert_eq!(directory.filtered()[0].cuts_remaining, 2);
    assert_eq!(directory.page_items()[0].cuts_remaining, 2);
    assert_eq!(directory.page_view().items[0].cuts_remaining, 2);
}

#[test]
fn given_unknown_customer_when_apply_balance_then_none() {
    let mut directory = Directory::new(roster());

    assert!(directory.apply_balance("missing", 5).is_none());
}

#[test]
fn given_replace_all_then_page_resets_and_list_swapped() {
    let mut directory = Directory::with_page_size(roster(), 5).unwrap();
    directory.set_page(2);

    directory.replace_all(vec![customer("n1", "New", "+1", 1)]);

    assert_eq!(directory.page(), 0);
    assert_eq!(directory.len(), 1);
}
