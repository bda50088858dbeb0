#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{path::PathBuf, process};

mod app;
mod file;
mod interact;

use app::OutputFormat;
use booksearch::{Field, SearchOptions};

use clap::{Args, Parser};
use eyre::{eyre, Context, Result};
use log::{info, trace};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let Cli {
        query,
        search_opts,
        format,
        interact,
        output,
        verbosity,
        quiet,
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let options = search_opts.into_options();
    let mut books = booksearch::search(&query, &options)
        .wrap_err_with(|| eyre!("Search for '{query}' failed"))?;

    info!("{} books found", books.len());

    if interact {
        trace!("Interact mode enabled");
        books = app::select_book(books)?.into_iter().collect();
    }

    let rendered = app::render(&books, format)?;

    if let Some(path) = output {
        file::write_new_file(&path, &rendered)?;
        info!("Results written to '{}'", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "booksearch")]
#[clap(about = "Search for books using the Google Books API")]
#[clap(version, author)]
struct Cli {
    /// The text to search for
    query: String,

    #[clap(flatten)]
    search_opts: SearchOpts,

    /// How the results are printed
    #[clap(long, arg_enum, default_value = "list")]
    format: OutputFormat,

    /// Choose a single book from the results before it is printed
    #[clap(short, long)]
    interact: bool,

    /// Write the results to a new file instead of stdout
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only errors will be printed to stderr.
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Debug, Args)]
struct SearchOpts {
    /// Google API key
    #[clap(short, long, env = "GOOGLE_BOOKS_API_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Search within a single field: title, author, publisher, subject or isbn
    #[clap(long)]
    field: Option<Field>,

    /// The position of the first result [default: 0]
    #[clap(long, allow_hyphen_values = true)]
    offset: Option<i64>,

    /// The maximum number of results, between 1 and 40 [default: 10]
    #[clap(short, long, allow_hyphen_values = true)]
    limit: Option<i64>,

    /// Restrict results to books, magazines or all [default: all]
    #[clap(short = 't', long = "type")]
    print_type: Option<String>,

    /// Order results by relevance or newest [default: relevance]
    #[clap(long)]
    order: Option<String>,

    /// Restrict results to a two-letter ISO-639-1 language code [default: en]
    #[clap(long)]
    lang: Option<String>,
}

impl SearchOpts {
    /// Options given on the command line override the library defaults.
    fn into_options(self) -> SearchOptions {
        let Self {
            key,
            field,
            offset,
            limit,
            print_type,
            order,
            lang,
        } = self;
        let defaults = SearchOptions::default();

        SearchOptions {
            key: key.filter(|k| !k.is_empty()),
            field,
            offset: offset.unwrap_or(defaults.offset),
            limit: limit.unwrap_or(defaults.limit),
            print_type: print_type.unwrap_or(defaults.print_type),
            order: order.unwrap_or(defaults.order),
            lang: lang.unwrap_or(defaults.lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_options_fall_back_to_defaults() {
        let cli = Cli::parse_from(["booksearch", "dune"]);
        let options = cli.search_opts.into_options();

        // the key may still come from the environment
        let expected = SearchOptions {
            key: options.key.clone(),
            ..SearchOptions::default()
        };
        assert_eq!(expected, options);
    }

    #[test]
    fn set_options_override_defaults() {
        let cli = Cli::parse_from([
            "booksearch",
            "Tolkien",
            "--field",
            "author",
            "--offset",
            "10",
            "--limit",
            "40",
            "--type",
            "books",
            "--lang",
            "fr",
        ]);
        let options = cli.search_opts.into_options();

        assert_eq!(Some(Field::Author), options.field);
        assert_eq!(10, options.offset);
        assert_eq!(40, options.limit);
        assert_eq!("books", options.print_type);
        assert_eq!("relevance", options.order);
        assert_eq!("fr", options.lang);
    }

    #[test]
    fn negative_offset_reaches_validation() {
        let cli = Cli::parse_from(["booksearch", "dune", "--offset", "-5"]);
        assert_eq!(-5, cli.search_opts.into_options().offset);
    }

    #[test]
    fn unknown_field_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["booksearch", "dune", "--field", "genre"]).is_err());
    }
}
