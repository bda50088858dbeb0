//! Options accepted by [`search`](crate::search).

use std::{fmt, str::FromStr};

use crate::{Error, ErrorKind};

/// The largest number of results the API returns for a single request.
pub const MAX_LIMIT: i64 = 40;

/// A metadata field that a search can be restricted to.
///
/// Each field maps to one of the special keywords understood by the Google Books query
/// syntax, which is prepended to the query string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    /// `intitle:`
    Title,
    /// `inauthor:`
    Author,
    /// `inpublisher:`
    Publisher,
    /// `subject:`
    Subject,
    /// `isbn:`
    Isbn,
}

impl Field {
    /// All searchable fields.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Author,
        Self::Publisher,
        Self::Subject,
        Self::Isbn,
    ];

    /// The keyword prepended to a query to search within this field.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Title => "intitle:",
            Self::Author => "inauthor:",
            Self::Publisher => "inpublisher:",
            Self::Subject => "subject:",
            Self::Isbn => "isbn:",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Publisher => "publisher",
            Self::Subject => "subject",
            Self::Isbn => "isbn",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidField,
                    format!(
                        "'{s}' is not one of title, author, publisher, subject or isbn"
                    ),
                )
            })
    }
}

/// Options for a single search request.
///
/// Every call to [`SearchOptions::default`] produces a fresh value, so options for one search
/// never leak into another. Override only the values you need:
///
/// ```
/// use booksearch::{Field, SearchOptions};
///
/// let options = SearchOptions {
///     field: Some(Field::Author),
///     limit: 20,
///     ..SearchOptions::default()
/// };
///
/// assert_eq!(0, options.offset);
/// assert_eq!("en", options.lang);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Google API key, sent as `key` when present.
    pub key: Option<String>,
    /// Restrict the search to a single metadata field.
    pub field: Option<Field>,
    /// The position in the collection at which to start the list of results (`startIndex`).
    pub offset: i64,
    /// The maximum number of results to return, between 1 and [`MAX_LIMIT`] (`maxResults`).
    pub limit: i64,
    /// Restrict results to books, magazines or both (`printType`).
    pub print_type: String,
    /// Order results by relevance or newest (`orderBy`).
    pub order: String,
    /// Restrict results to a two-letter ISO-639-1 language code (`langRestrict`).
    pub lang: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            key: None,
            field: None,
            offset: 0,
            limit: 10,
            print_type: "all".to_owned(),
            order: "relevance".to_owned(),
            lang: "en".to_owned(),
        }
    }
}

impl SearchOptions {
    /// Sets the API key.
    #[must_use]
    pub fn with_key<S: Into<String>>(mut self, key: S) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Restricts the search to `field`.
    #[must_use]
    pub const fn with_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    /// Sets the offset of the first result.
    #[must_use]
    pub const fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the maximum number of results.
    #[must_use]
    pub const fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the print type restriction.
    #[must_use]
    pub fn with_print_type<S: Into<String>>(mut self, print_type: S) -> Self {
        self.print_type = print_type.into();
        self
    }

    /// Sets the result ordering.
    #[must_use]
    pub fn with_order<S: Into<String>>(mut self, order: S) -> Self {
        self.order = order.into();
        self
    }

    /// Sets the language restriction.
    #[must_use]
    pub fn with_lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.lang = lang.into();
        self
    }

    /// Checks the query and options before anything is sent.
    pub(crate) fn validate(&self, query: &str) -> Result<(), Error> {
        if query.is_empty() {
            return Err(Error::new(ErrorKind::InvalidQuery, "query cannot be empty"));
        }

        if self.offset < 0 {
            return Err(Error::new(
                ErrorKind::InvalidOffset,
                format!("offset of {} cannot be negative", self.offset),
            ));
        }

        if !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(Error::new(
                ErrorKind::InvalidLimit,
                format!("limit of {} is not within 1..={MAX_LIMIT}", self.limit),
            ));
        }

        Ok(())
    }

    /// Request parameters in the order they are sent.
    pub(crate) fn params(&self, query: &str) -> Vec<(&'static str, String)> {
        let q = match self.field {
            Some(field) => format!("{}{query}", field.prefix()),
            None => query.to_owned(),
        };

        let mut params = vec![
            ("q", q),
            ("startIndex", self.offset.to_string()),
            ("maxResults", self.limit.to_string()),
            ("printType", self.print_type.clone()),
            ("orderBy", self.order.clone()),
            ("langRestrict", self.lang.clone()),
        ];

        if let Some(key) = self.key.as_deref().filter(|k| !k.is_empty()) {
            params.push(("key", key.to_owned()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field, field.to_string().parse::<Field>().unwrap());
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "genre".parse::<Field>().unwrap_err();
        assert_eq!(ErrorKind::InvalidField, err.kind());
    }

    #[test]
    fn field_is_prefixed_without_separator() {
        let options = SearchOptions::default().with_field(Field::Author);
        let params = options.params("Tolkien");

        assert_eq!(("q", "inauthor:Tolkien".to_owned()), params[0]);
    }

    #[test]
    fn params_are_in_request_order() {
        let names: Vec<_> = SearchOptions::default()
            .with_key("secret")
            .params("dune")
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(
            vec![
                "q",
                "startIndex",
                "maxResults",
                "printType",
                "orderBy",
                "langRestrict",
                "key"
            ],
            names
        );
    }

    #[test]
    fn key_is_omitted_when_not_set() {
        let params = SearchOptions::default().params("dune");
        assert!(params.iter().all(|(name, _)| *name != "key"));
    }

    #[test]
    fn empty_key_is_omitted() {
        let params = SearchOptions::default().with_key("").params("dune");
        assert!(params.iter().all(|(name, _)| *name != "key"));
    }

    #[test]
    fn empty_query_is_invalid() {
        let err = SearchOptions::default().validate("").unwrap_err();
        assert_eq!(ErrorKind::InvalidQuery, err.kind());
    }

    #[test]
    fn negative_offset_is_invalid() {
        let err = SearchOptions::default()
            .with_offset(-1)
            .validate("dune")
            .unwrap_err();
        assert_eq!(ErrorKind::InvalidOffset, err.kind());
    }

    #[test]
    fn limit_bounds_are_inclusive() {
        for limit in [1, 10, MAX_LIMIT] {
            assert!(SearchOptions::default()
                .with_limit(limit)
                .validate("dune")
                .is_ok());
        }

        for limit in [i64::MIN, -1, 0, MAX_LIMIT + 1, 100] {
            let err = SearchOptions::default()
                .with_limit(limit)
                .validate("dune")
                .unwrap_err();
            assert_eq!(ErrorKind::InvalidLimit, err.kind(), "limit of {limit}");
        }
    }

    #[test]
    fn partial_options_do_not_change_defaults() {
        let first = SearchOptions {
            limit: 40,
            lang: "fr".to_owned(),
            ..SearchOptions::default()
        };
        let second = SearchOptions {
            offset: 5,
            ..SearchOptions::default()
        };

        assert_eq!(40, first.limit);
        assert_eq!(10, second.limit);
        assert_eq!("en", second.lang);
        assert_eq!(SearchOptions::default(), SearchOptions::default().with_offset(0));
    }
}
