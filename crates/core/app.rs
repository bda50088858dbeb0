use booksearch::Book;
use clap::ArgEnum;
use eyre::{eyre, Context, Result};
use log::info;

use crate::interact::user_select;

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty printed JSON array of book records
    Json,
    /// One numbered line per book
    List,
}

pub fn render(books: &[Book], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(books).wrap_err("Cannot serialize books to JSON")
        }
        OutputFormat::List => Ok(render_list(books)),
    }
}

fn render_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found".to_owned();
    }

    books
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let line = format!("{:>2}. {}", i + 1, book.summary());
            match &book.link {
                Some(link) => format!("{line}\n    {link}"),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn select_book(mut books: Vec<Book>) -> Result<Option<Book>> {
    if books.is_empty() {
        info!("No books to choose from");
        return Ok(None);
    }

    let items = books.iter().map(Book::summary).collect::<Vec<_>>();
    let selection = user_select("Choose a book", &items)?;

    if selection < books.len() {
        Ok(Some(books.remove(selection)))
    } else {
        Err(eyre!(
            "Internal error: user selection should be valid and not cause an out of index error"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<Book> {
        vec![
            Book {
                id: Some("QnghAQAAIAAJ".to_owned()),
                title: Some("Code Complete".to_owned()),
                authors: Some(vec!["Steve McConnell".to_owned()]),
                published_date: Some("2004".to_owned()),
                link: Some("http://books.google.com/books?id=QnghAQAAIAAJ".to_owned()),
                ..Book::default()
            },
            Book {
                id: Some("5hUHAAAAQAAJ".to_owned()),
                ..Book::default()
            },
        ]
    }

    #[test]
    fn list_numbers_each_book() {
        let out = render(&books(), OutputFormat::List).unwrap();

        assert_eq!(
            " 1. Code Complete by Steve McConnell (2004)\n    \
             http://books.google.com/books?id=QnghAQAAIAAJ\n 2. No title",
            out
        );
    }

    #[test]
    fn list_of_nothing() {
        assert_eq!("No books found", render(&[], OutputFormat::List).unwrap());
    }

    #[test]
    fn json_leaves_out_absent_fields() {
        let out = render(&books()[1..], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(serde_json::json!([{ "id": "5hUHAAAAQAAJ" }]), value);
    }

    #[test]
    fn selecting_from_nothing_is_none() {
        assert!(select_book(vec![]).unwrap().is_none());
    }
}
