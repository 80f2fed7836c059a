use super::*;
use crate::test_support::{disable_foreign_keys, rng, small_library};
use shelfmark_db::{insert_author, insert_book, open_memory};

#[test]
fn test_views_are_pure_assembly() {
    let author = author_view(
        AuthorRow {
            id: 1,
            name: "Le Guin".to_string(),
        },
        vec![],
    );
    let book = book_view(
        BookRow {
            id: 2,
            name: "The Dispossessed".to_string(),
            author_id: Some(1),
        },
        author.clone(),
    );
    assert_eq!(book.author, author);
    assert_eq!(book.borrower, None);

    let user = user_view(
        UserRow {
            id: 3,
            name: "Ada".to_string(),
        },
        vec![book.clone()],
    );
    assert_eq!(user.rented_books, vec![book]);
    assert!(user.borrowed_books.is_empty());
}

#[test]
fn test_list_authors_expands_two_levels() {
    let fx = small_library();
    let authors = list_authors(&fx.conn).unwrap();
    assert_eq!(authors.len(), 2);

    let herbert = &authors[0];
    assert_eq!(herbert.name, "Frank Herbert");
    assert_eq!(herbert.books.len(), 2);
    for book in &herbert.books {
        assert_eq!(book.author.id, herbert.id);
        assert_eq!(book.author.name, "Frank Herbert");
        // Innermost author stops the recursion.
        assert!(book.author.books.is_empty());
    }

    let jemisin = &authors[1];
    assert_eq!(jemisin.books.len(), 1);
    assert_eq!(jemisin.books[0].name, "The Fifth Season");
}

#[test]
fn test_list_authors_on_empty_store() {
    let conn = open_memory().unwrap();
    assert!(list_authors(&conn).unwrap().is_empty());
}

#[test]
fn test_author_without_books_has_empty_list() {
    let conn = open_memory().unwrap();
    insert_author(&conn, "Unpublished").unwrap();
    let authors = list_authors(&conn).unwrap();
    assert_eq!(authors.len(), 1);
    assert!(authors[0].books.is_empty());
}

#[test]
fn test_get_author_by_id_matches_list_entry() {
    let fx = small_library();
    let listed = list_authors(&fx.conn).unwrap();
    let fetched = get_author_by_id(&fx.conn, fx.authors[0]).unwrap();
    assert_eq!(fetched, listed[0]);
}

#[test]
fn test_get_author_by_missing_id_is_not_found() {
    let fx = small_library();
    assert!(matches!(
        get_author_by_id(&fx.conn, 404).unwrap_err(),
        LibraryError::NotFound { entity: "author", id: 404 }
    ));
}

#[test]
fn test_get_book_by_id_resolves_author_name() {
    let fx = small_library();
    let book = get_book_by_id(&fx.conn, fx.books[2]).unwrap();
    assert_eq!(book.name, "The Fifth Season");
    assert_eq!(book.author.id, fx.authors[1]);
    assert_eq!(book.author.name, "N. K. Jemisin");
    assert!(book.author.books.is_empty());
}

#[test]
fn test_get_book_without_author_yields_sentinel() {
    let conn = open_memory().unwrap();
    let id = insert_book(&conn, "Orphan", None).unwrap();
    let book = get_book_by_id(&conn, id).unwrap();
    assert!(book.author.is_unassigned());
}

#[test]
fn test_get_book_by_missing_id_is_not_found() {
    let fx = small_library();
    let err = get_book_by_id(&fx.conn, 404).unwrap_err();
    assert!(matches!(err, LibraryError::NotFound { entity: "book", id: 404 }));
}

#[test]
fn test_dangling_author_reference_is_not_found() {
    let conn = open_memory().unwrap();
    disable_foreign_keys(&conn);
    let id = insert_book(&conn, "Ghost Written", Some(77)).unwrap();

    let err = get_book_by_id(&conn, id).unwrap_err();
    assert!(matches!(err, LibraryError::NotFound { entity: "author", id: 77 }));
}

#[test]
fn test_list_books_by_author_resolves_author_only() {
    let fx = small_library();
    let books = list_books_by_author(&fx.conn, fx.authors[0]).unwrap();
    assert_eq!(books.len(), 2);
    for book in &books {
        assert_eq!(book.author.id, fx.authors[0]);
        assert_eq!(book.author.name, "Frank Herbert");
        assert!(book.author.books.is_empty());
    }
}

/// Entity hops below an author: each expanded book and each resolved
/// author counts as one.
fn author_hops(author: &Author) -> usize {
    author
        .books
        .iter()
        .map(|b| 1 + book_hops(b))
        .max()
        .unwrap_or(0)
}

fn book_hops(book: &Book) -> usize {
    if book.author.is_unassigned() {
        0
    } else {
        1 + author_hops(&book.author)
    }
}

#[test]
fn test_no_entry_point_nests_past_the_cap() {
    let fx = small_library();

    let authors = list_authors(&fx.conn).unwrap();
    assert!(authors.iter().all(|a| author_hops(a) <= MAX_NESTING_DEPTH));
    assert_eq!(author_hops(&authors[0]), MAX_NESTING_DEPTH);

    let author = get_author_by_id(&fx.conn, fx.authors[0]).unwrap();
    assert!(author_hops(&author) <= MAX_NESTING_DEPTH);

    let books = list_books_by_author(&fx.conn, fx.authors[0]).unwrap();
    assert!(books.iter().all(|b| book_hops(b) <= MAX_NESTING_DEPTH));

    let book = get_book_by_id(&fx.conn, fx.books[0]).unwrap();
    assert!(book_hops(&book) <= MAX_NESTING_DEPTH);
}

#[test]
fn test_list_users_with_rentals() {
    let fx = small_library();
    let mut rng = rng(21);
    let users = list_users_with_rentals(&mut rng, &fx.conn, &fx.books).unwrap();

    assert_eq!(users.len(), 2);
    for user in &users {
        assert!((1..=3).contains(&user.rented_books.len()));
        assert!(user.rented_books.iter().all(|b| fx.books.contains(&b.id)));
        assert!(user.borrowed_books.is_empty());
    }
}

#[test]
fn test_list_users_without_books_rent_nothing() {
    let fx = small_library();
    let mut rng = rng(21);
    let users = list_users_with_rentals(&mut rng, &fx.conn, &[]).unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.rented_books.is_empty()));
}

#[test]
fn test_mutating_a_view_does_not_touch_the_store() {
    let fx = small_library();
    let mut authors = list_authors(&fx.conn).unwrap();
    authors[0].name = "Someone Else".to_string();
    authors[0].books.clear();

    let fresh = list_authors(&fx.conn).unwrap();
    assert_eq!(fresh[0].name, "Frank Herbert");
    assert_eq!(fresh[0].books.len(), 2);
}
