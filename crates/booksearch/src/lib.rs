#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # booksearch
//!
//! booksearch searches the Google Books API and normalizes each volume found into a simplified
//! [`Book`] record. Only the values present on a volume are set on its record, and records keep
//! the order in which the API returned them.
//!
//! ```no_run
//! use booksearch::{Field, SearchOptions};
//!
//! let options = SearchOptions::default().with_field(Field::Author).with_limit(5);
//! for book in booksearch::search("Tolkien", &options)? {
//!     println!("{}", book.summary());
//! }
//! # Ok::<(), booksearch::Error>(())
//! ```

mod api;
mod book;
mod error;
pub mod options;

pub use api::{Client, Response};
pub use book::Book;
pub use error::{Error, ErrorKind};
pub use options::{Field, SearchOptions};

use log::trace;

type DefaultClient = reqwest::blocking::Client;

/// Search the Google Books API for volumes matching `query`.
///
/// The query and options are validated before any request is sent. When [`SearchOptions::field`]
/// is set its keyword is prepended to the query, e.g. searching for `Tolkien` with
/// [`Field::Author`] sends the query `inauthor:Tolkien`.
///
/// A successful response without any items produces an empty [`Vec`]. Use [`Result::ok`] when
/// the reason for a failed search does not matter.
///
/// # Errors
///
/// An `Err` is returned when the query is empty, the offset is negative or the limit is not
/// within `1..=40`; no request is sent in these cases.
/// An `Err` is returned when the request fails or the API responds with any status other than
/// `200 OK`.
/// An `Err` is returned when the response body is not valid JSON.
#[inline]
pub fn search(query: &str, options: &SearchOptions) -> Result<Vec<Book>, Error> {
    search_with::<DefaultClient>(query, options)
}

/// Search the Google Books API for volumes matching `query` using the [`Client`] `C`.
///
/// See [`search`] for the details of the search.
///
/// # Errors
///
/// The same errors as [`search`], with transport errors coming from `C`.
#[inline]
pub fn search_with<C: Client>(query: &str, options: &SearchOptions) -> Result<Vec<Book>, Error> {
    trace!("Search books with a query of '{query}'");
    api::google_books::search::<C>(query, options)
}
