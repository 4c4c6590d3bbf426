//! Response bodies of the book routes.

use serde::{Deserialize, Serialize};

use crate::model::Book;

pub const WELCOME_TITLE: &str = "Welcome to Books Store";
pub const BOOK_ADDED: &str = "New Book Added";
pub const BOOK_DELETED: &str = "Book is successfully Deleted";

pub const GET_NOT_FOUND: &str = "The Book is not Found";
pub const UPDATE_NOT_FOUND: &str = "The Book Is not Available";
pub const DELETE_NOT_FOUND: &str = "Book is not found";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Welcome {
    pub title: String,
}

/// Answer to `POST /books`: the whole collection after the insert.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BookAdded {
    pub message: String,
    pub data: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BookUpdated {
    pub message: String,
    pub data: Book,
}

/// Answer to `DELETE /delete/:book_id`. The removed book is wrapped in a list.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BookDeleted {
    pub message: String,
    #[serde(rename = "bookDeleted")]
    pub book_deleted: Vec<Book>,
}
