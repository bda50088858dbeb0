use log::{info, trace};
use reqwest::Url;
use serde::Deserialize;

use crate::{Book, Error, ErrorKind, SearchOptions};

use super::Client;

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

pub(crate) fn search<C: Client>(query: &str, options: &SearchOptions) -> Result<Vec<Book>, Error> {
    options.validate(query)?;

    info!("Searching for '{query}' using Google Books API");
    let url = volumes_url(query, options)?;
    trace!(
        "Sending request to {GOOGLE_BOOKS_URL} (offset {}, limit {}, api key set: {})",
        options.offset,
        options.limit,
        options.key.is_some()
    );

    let client = C::default();
    let VolumeList { items } = client.get_json(url.as_str())?;

    trace!("Request was successful");

    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Book::from)
        .collect())
}

fn volumes_url(query: &str, options: &SearchOptions) -> Result<Url, Error> {
    Url::parse_with_params(GOOGLE_BOOKS_URL, options.params(query))
        .map_err(|e| Error::wrap(ErrorKind::InvalidUrl, e))
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct VolumeList {
    items: Option<Vec<Item>>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Item {
    id: Option<String>,
    #[serde(rename = "volumeInfo")]
    volume_info: Option<VolumeInfo>,
}

/// Volume information from the Google Book API
#[derive(Default, Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    published_date: Option<String>,
    page_count: Option<u32>,
    print_type: Option<String>,
    categories: Option<Vec<String>>,
    image_links: Option<ImageLinks>,
    language: Option<String>,
    info_link: Option<String>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct ImageLinks {
    thumbnail: Option<String>,
}

// The API sends empty strings and a zero page count for unknown values.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<Item> for Book {
    fn from(item: Item) -> Self {
        // Deconstruct item to take ownership of fields (avoids cloning).
        let Item { id, volume_info } = item;
        let VolumeInfo {
            title,
            authors,
            publisher,
            published_date,
            page_count,
            print_type,
            categories,
            image_links,
            language,
            info_link,
        } = volume_info.unwrap_or_default();

        Self {
            id: present(id),
            title: present(title),
            authors,
            publisher: present(publisher),
            published_date: present(published_date),
            page_count: page_count.filter(|&n| n != 0),
            print_type: present(print_type),
            categories,
            thumbnail: present(image_links.and_then(|links| links.thumbnail)),
            language: present(language),
            link: present(info_link),
        }
    }
}
