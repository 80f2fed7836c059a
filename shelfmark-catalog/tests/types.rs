use shelfmark_catalog::*;

#[test]
fn unassigned_author_has_no_foreign_key() {
    let author = Author::unassigned();
    assert!(author.is_unassigned());
    assert_eq!(author.id, UNASSIGNED_AUTHOR_ID);
    assert_eq!(author.foreign_key(), None);
    assert!(author.books.is_empty());
}

#[test]
fn real_author_foreign_key_is_its_id() {
    let author = Author::from_row(AuthorRow {
        id: 7,
        name: "Ursula Vernon".to_string(),
    });
    assert!(!author.is_unassigned());
    assert_eq!(author.foreign_key(), Some(7));
}

#[test]
fn table_names_match_schema() {
    assert_eq!(Table::Authors.as_str(), "authors");
    assert_eq!(Table::Books.to_string(), "books");
    assert_eq!(Table::Users.as_str(), "users");
}

#[test]
fn tables_are_checked_users_books_authors() {
    assert_eq!(Table::ALL, [Table::Users, Table::Books, Table::Authors]);
}

#[test]
fn user_serializes_with_snake_case_fields() {
    let user = User {
        id: 3,
        name: "Ada".to_string(),
        rented_books: vec![Book {
            id: 11,
            name: "Cold Harbor".to_string(),
            author: Author {
                id: 2,
                name: "Lin".to_string(),
                books: vec![],
            },
            borrower: None,
        }],
        borrowed_books: vec![],
    };

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["rented_books"][0]["id"], 11);
    assert_eq!(json["rented_books"][0]["author"]["name"], "Lin");
    assert!(json["rented_books"][0]["borrower_id"].is_null());
    assert_eq!(json["borrowed_books"].as_array().unwrap().len(), 0);
}
