/// Integration tests for the tabular query engine over the demo users
use admin_console::application::services::user_service::user_engine;
use admin_console::domain::entities::User;
use admin_console::domain::table::{
    page_window, PageItem, PaginationInfo, SortDirection, TableEngine, TableQuery,
};
use admin_console::infrastructure::persistence::seed::demo_users;

/// Engine with no default sort, so unsorted queries keep input order.
fn plain_engine() -> TableEngine<User> {
    TableEngine::new()
        .field("name", |u: &User| u.name.as_str().into())
        .field("email", |u: &User| u.email.as_str().into())
        .field("status", |u: &User| u.status.as_str().into())
        .searchable(&["name", "email"])
        .filterable("status", admin_console::domain::table::FilterMode::Exact)
}

fn names(rows: &[User]) -> Vec<&str> {
    rows.iter().map(|u| u.name.as_str()).collect()
}

#[test]
fn test_status_filter_keeps_input_order() {
    let users = demo_users();
    let page = plain_engine().query(&users, &TableQuery::new().with_filter("status", "active"));

    assert_eq!(names(&page.rows), vec!["John Doe", "Jane Smith"]);
    assert_eq!(
        page.pagination,
        PaginationInfo {
            page: 1,
            limit: 25,
            total: 2,
            total_pages: 1,
        }
    );
}

#[test]
fn test_search_and_filter_compose() {
    let users = demo_users();
    let query = TableQuery::new()
        .with_search("jane")
        .with_filter("status", "active");
    let page = plain_engine().query(&users, &query);

    assert_eq!(names(&page.rows), vec!["Jane Smith"]);

    let query = TableQuery::new()
        .with_search("jane")
        .with_filter("status", "inactive");
    let page = plain_engine().query(&users, &query);
    assert!(page.rows.is_empty());
    assert_eq!(page.pagination.total, 0);
    assert_eq!(page.pagination.total_pages, 0);
}

#[test]
fn test_search_matches_any_field_case_insensitively() {
    let users = demo_users();

    let page = plain_engine().query(&users, &TableQuery::new().with_search("JOHN"));
    assert_eq!(names(&page.rows), vec!["John Doe", "Mike Johnson"]);

    // Matches the email column only
    let page = plain_engine().query(&users, &TableQuery::new().with_search("wilson@"));
    assert_eq!(names(&page.rows), vec!["Sarah Wilson"]);
}

#[test]
fn test_all_and_empty_filters_do_not_constrain() {
    let users = demo_users();
    let engine = plain_engine();

    let all = engine.query(&users, &TableQuery::new().with_filter("status", "all"));
    let empty = engine.query(&users, &TableQuery::new().with_filter("status", ""));
    let undeclared = engine.query(&users, &TableQuery::new().with_filter("roleId", "admin"));

    assert_eq!(all.pagination.total, 4);
    assert_eq!(empty.pagination.total, 4);
    assert_eq!(undeclared.pagination.total, 4);
}

#[test]
fn test_default_sort_is_name_ascending() {
    let users = demo_users();
    let page = user_engine().query(&users, &TableQuery::new());

    assert_eq!(
        names(&page.rows),
        vec!["Jane Smith", "John Doe", "Mike Johnson", "Sarah Wilson"]
    );
}

#[test]
fn test_sort_descending_reverses_order() {
    let users = demo_users();
    let query = TableQuery::new().sorted_by("name", SortDirection::Desc);
    let page = user_engine().query(&users, &query);

    assert_eq!(
        names(&page.rows),
        vec!["Sarah Wilson", "Mike Johnson", "John Doe", "Jane Smith"]
    );
}

#[test]
fn test_name_sort_folds_accents() {
    let mut users = demo_users();
    for (user, name) in users
        .iter_mut()
        .zip(["Zoe Park", "Émile Roux", "Ångström Lee", "Eva Holm"])
    {
        user.name = name.to_string();
    }

    let page = user_engine().query(&users, &TableQuery::new());
    assert_eq!(
        names(&page.rows),
        vec!["Ångström Lee", "Émile Roux", "Eva Holm", "Zoe Park"]
    );
}

#[test]
fn test_updated_at_sort_mixes_whole_and_fractional_seconds() {
    let mut users = demo_users();
    let base = time::macros::datetime!(2024-01-19 08:00:00 UTC);
    for (user, millis) in users.iter_mut().zip([550, 0, 500, 999]) {
        user.meta.updated_at = base + time::Duration::milliseconds(millis);
    }

    let query = TableQuery::new().sorted_by("meta.updatedAt", SortDirection::Asc);
    let page = user_engine().query(&users, &query);
    assert_eq!(
        names(&page.rows),
        vec!["Jane Smith", "Mike Johnson", "John Doe", "Sarah Wilson"]
    );
}

#[test]
fn test_whitespace_only_search_is_not_ignored() {
    let users = demo_users();
    let engine = plain_engine();

    let spaces = engine.query(&users, &TableQuery::new().with_search("   "));
    assert!(spaces.rows.is_empty());
    assert_eq!(spaces.pagination.total, 0);

    // Every demo name has a single space between first and last name
    let single = engine.query(&users, &TableQuery::new().with_search(" "));
    assert_eq!(single.pagination.total, 4);
}

#[test]
fn test_unknown_sort_key_keeps_input_order() {
    let users = demo_users();
    let query = TableQuery::new().sorted_by("favouriteColour", SortDirection::Desc);
    let page = user_engine().query(&users, &query);

    assert_eq!(
        names(&page.rows),
        vec!["John Doe", "Jane Smith", "Mike Johnson", "Sarah Wilson"]
    );
}

#[test]
fn test_pagination_slices_and_clamps() {
    let users = demo_users();
    let engine = user_engine();

    let page = engine.query(&users, &TableQuery::new().with_limit(3).with_page(2));
    assert_eq!(names(&page.rows), vec!["Sarah Wilson"]);
    assert_eq!(page.pagination.total_pages, 2);
    assert!(page.pagination.has_previous());
    assert!(!page.pagination.has_next());
    assert_eq!(page.pagination.showing(), Some((4, 4)));

    // Past the end
    let page = engine.query(&users, &TableQuery::new().with_limit(3).with_page(9));
    assert!(page.rows.is_empty());
    assert_eq!(page.pagination.total, 4);

    // Oversized limit is clamped to the engine maximum
    let page = engine
        .clone()
        .max_page_size(2)
        .query(&users, &TableQuery::new().with_limit(500));
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.pagination.limit, 2);
}

#[test]
fn test_query_is_idempotent_and_leaves_input_untouched() {
    let users = demo_users();
    let snapshot = users.clone();
    let query = TableQuery::new()
        .with_search("o")
        .sorted_by("email", SortDirection::Desc)
        .with_limit(2);

    let first = user_engine().query(&users, &query);
    let second = user_engine().query(&users, &query);

    assert_eq!(first, second);
    assert_eq!(users, snapshot);
}

#[test]
fn test_page_window_for_ten_pages() {
    let first = page_window(1, 10);
    assert_eq!(first.pages, vec![1, 2, 3, 4, 5]);
    assert!(!first.first_page_link);
    assert!(!first.leading_ellipsis);
    assert!(first.trailing_ellipsis);
    assert!(first.last_page_link);

    let last = page_window(10, 10);
    assert_eq!(last.pages, vec![6, 7, 8, 9, 10]);
    assert!(last.first_page_link);
    assert!(last.leading_ellipsis);
    assert!(!last.trailing_ellipsis);
    assert!(!last.last_page_link);

    let middle = page_window(5, 10);
    assert_eq!(middle.pages, vec![3, 4, 5, 6, 7]);
    assert_eq!(middle.items().first(), Some(&PageItem::Page { number: 1, current: false }));
    assert_eq!(middle.items().last(), Some(&PageItem::Page { number: 10, current: false }));
}
