use serde::Serialize;

/// A simplified book record built from a single Google Books volume.
///
/// Only the values present on the source volume are set. When serialized the record uses the
/// camelCase names of the API (`publishedDate`, `pageCount`, `printType`) and leaves out every
/// field that is [`None`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Volume id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Volume title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Authors in the order given by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    /// Publisher name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Date of publication, as formatted by the API (`2004`, `2004-06`, `2004-06-09`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Number of pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// `BOOK` or `MAGAZINE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_type: Option<String>,
    /// Subject categories in the order given by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// URL of the thumbnail cover image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Language code of the volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// URL of the volume's page on Google Books.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Book {
    /// A one line description of the book, used when listing results.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = self.title.clone().unwrap_or_else(|| "No title".to_owned());

        if let Some(authors) = self.authors.as_ref().filter(|a| !a.is_empty()) {
            summary.push_str(" by ");
            summary.push_str(&authors.join(", "));
        }

        if let Some(date) = &self.published_date {
            summary.push_str(" (");
            summary.push_str(date);
            summary.push(')');
        }

        summary
    }
}
