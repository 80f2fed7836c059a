use shelfmark_lib::{Author, Book, User};

use super::*;

fn book(id: i64, name: &str) -> Book {
    Book {
        id,
        name: name.to_string(),
        author: Author::unassigned(),
        borrower: None,
    }
}

#[test]
fn report_lists_each_user_and_rental() {
    let users = vec![
        User {
            id: 1,
            name: "Ada".to_string(),
            rented_books: vec![book(3, "Dune"), book(7, "Kindred")],
            borrowed_books: Vec::new(),
        },
        User {
            id: 2,
            name: "Grace".to_string(),
            rented_books: Vec::new(),
            borrowed_books: Vec::new(),
        },
    ];

    let lines = user_report_lines(&users);
    assert_eq!(
        lines,
        vec![
            "ID: 1, Name: Ada",
            "Rented books:",
            "  ID: 3, Title: Dune",
            "  ID: 7, Title: Kindred",
            "---------------",
            "ID: 2, Name: Grace",
            "Rented books:",
            "---------------",
        ]
    );
}

#[test]
fn report_for_no_users_is_empty() {
    assert!(user_report_lines(&[]).is_empty());
}
