//! # Shell
//!
//! A line-oriented front end: one command per input line, one JSON document
//! per output line. It plays the role a UI plays in the browser version of
//! the store, so it contains no business logic of its own.
//!
//! ## Line Protocol
//! ```text
//! > products -c Fashion shoes
//! {"ok":[{"id":3,"name":"Running Shoes","price":1799,"category":"Fashion","inCart":0}]}
//! > add 3
//! {"ok":{"items":[...],"totals":{"lineCount":1,"totalItems":1,"totalAmount":1799}}}
//! > add 99
//! {"error":{"code":"NOT_FOUND","message":"Product not found: 99"}}
//! > quit
//! ```
//!
//! Words are separated by whitespace; a word starting with `"` runs to the
//! next `"`, so `products -c "Home Decor" lamp` selects a category with a
//! space in it. The search term keeps its inner spacing as typed.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::{ColorChoice, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use storefront_core::ALL_CATEGORIES;
use tracing::{debug, info};

use crate::commands;
use crate::error::{ApiError, AppError};
use crate::state::{CartState, CatalogState, ConfigState};

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    no_binary_name = true,
    color = ColorChoice::Never,
    disable_help_flag = true,
    after_help = "Examples:\n  products -c Electronics\n  products running shoes\n  products -c \"Home Decor\" lamp\n  add 3\n  checkout"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    #[command(about = "List the category selector options")]
    Categories,
    #[command(about = "List products matching a search term and category")]
    Products {
        #[arg(short, long, default_value = ALL_CATEGORIES, help = "Category, or \"All\"")]
        category: String,
        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "Search term (case-insensitive)"
        )]
        search: Vec<String>,
    },
    #[command(about = "Show one product")]
    Product { id: u32 },
    #[command(about = "Add one unit of a product to the cart")]
    Add { id: u32 },
    #[command(about = "Remove one unit of a product from the cart")]
    Decrease { id: u32 },
    #[command(about = "Remove a product from the cart entirely")]
    Remove { id: u32 },
    #[command(about = "Show the cart")]
    Cart,
    #[command(about = "Place a demo order")]
    Checkout,
    #[command(about = "Show the configuration")]
    Config,
    #[command(about = "Leave the shell", visible_alias = "exit")]
    Quit,
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Response {
    Ok(Value),
    Error(ApiError),
}

/// What the shell does after handling a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Respond(Response),
    Skip,
    Quit,
}

/// The storefront shell and the state it drives.
#[derive(Debug, Clone)]
pub struct Shell {
    catalog: CatalogState,
    cart: CartState,
    config: ConfigState,
}

impl Shell {
    /// Creates a shell with an empty cart over `catalog`.
    pub fn new(catalog: CatalogState, config: ConfigState) -> Self {
        let cart = CartState::new(catalog.shared());
        Shell {
            catalog,
            cart,
            config,
        }
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Handles a single input line.
    pub fn execute(&self, line: &str) -> Outcome {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(err) => return Outcome::Respond(Response::Error(err)),
        };
        if words.is_empty() {
            return Outcome::Skip;
        }

        let args = words.iter().map(|w| w.text.as_str());
        let mut parsed = match ShellLine::try_parse_from(args) {
            Ok(parsed) => parsed,
            Err(err) => {
                let text = err.to_string().trim_end().to_string();
                return Outcome::Respond(match err.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                    | ErrorKind::DisplayVersion => Response::Ok(Value::String(text)),
                    _ => Response::Error(ApiError::invalid_command(text)),
                });
            }
        };

        if matches!(parsed.command, ShellCommand::Quit) {
            return Outcome::Quit;
        }

        if let ShellCommand::Products { search, .. } = &mut parsed.command {
            let term = search_term(line, &words, search.len());
            *search = vec![term];
        }

        Outcome::Respond(match self.dispatch(parsed.command) {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Error(err),
        })
    }

    /// Reads lines from `input` until EOF or `quit`, writing one JSON line
    /// per response to `output`.
    pub fn run<R, W>(&self, input: R, mut output: W) -> Result<(), AppError>
    where
        R: BufRead,
        W: Write,
    {
        info!(store = %self.config.store_name, "Shell ready");

        for line in input.lines() {
            match self.execute(&line?) {
                Outcome::Respond(response) => {
                    serde_json::to_writer(&mut output, &response)?;
                    writeln!(output)?;
                    output.flush()?;
                }
                Outcome::Skip => {}
                Outcome::Quit => break,
            }
        }

        info!("Shell closed");
        Ok(())
    }

    fn dispatch(&self, command: ShellCommand) -> Result<Value, ApiError> {
        debug!(?command, "Dispatching shell command");

        match command {
            ShellCommand::Categories => encode(commands::product::list_categories(&self.catalog)),
            ShellCommand::Products { category, search } => encode(
                commands::product::search_products(
                    &self.catalog,
                    &self.cart,
                    &search.join(" "),
                    &category,
                ),
            ),
            ShellCommand::Product { id } => encode(commands::product::get_product_by_id(
                &self.catalog,
                &self.cart,
                id,
            )?),
            ShellCommand::Add { id } => encode(commands::cart::add_to_cart(&self.cart, id)?),
            ShellCommand::Decrease { id } => {
                encode(commands::cart::decrease_cart_item(&self.cart, id))
            }
            ShellCommand::Remove { id } => encode(commands::cart::remove_from_cart(&self.cart, id)),
            ShellCommand::Cart => encode(commands::cart::get_cart(&self.cart)),
            ShellCommand::Checkout => {
                encode(commands::checkout::checkout(&self.cart, &self.config)?)
            }
            ShellCommand::Config => encode(commands::config::get_config(&self.config)),
            ShellCommand::Quit => Ok(Value::Null),
        }
    }
}

/// A word of a shell line and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Word {
    text: String,
    start: usize,
}

/// Splits a line into words. A word starting with `"` runs to the next `"`
/// and may contain whitespace; the quotes are not part of the text.
fn split_words(line: &str) -> Result<Vec<Word>, ApiError> {
    let mut words = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut text = String::new();
        if c == '"' {
            chars.next();
            loop {
                match chars.next() {
                    Some((_, '"')) => break,
                    Some((_, ch)) => text.push(ch),
                    None => return Err(ApiError::invalid_command("Unterminated quote")),
                }
            }
        } else {
            while let Some(&(_, ch)) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                text.push(ch);
                chars.next();
            }
        }

        words.push(Word { text, start });
    }

    Ok(words)
}

/// The search term made of the last `count` words.
///
/// A single word is taken as parsed (quotes removed). Several words are
/// taken verbatim from the line so the spacing between them is kept.
fn search_term(line: &str, words: &[Word], count: usize) -> String {
    let first = words
        .len()
        .checked_sub(count)
        .and_then(|index| words.get(index));

    match first {
        None => String::new(),
        Some(word) if count == 1 => word.text.clone(),
        Some(word) => line[word.start..].trim_end().to_string(),
    }
}

fn encode<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_core::{Catalog, Product, ProductId};

    fn shell() -> Shell {
        Shell::new(CatalogState::default(), ConfigState::default())
    }

    fn ok(outcome: Outcome) -> Value {
        match outcome {
            Outcome::Respond(Response::Ok(value)) => value,
            other => panic!("expected ok response, got {:?}", other),
        }
    }

    fn error(outcome: Outcome) -> ApiError {
        match outcome {
            Outcome::Respond(Response::Error(err)) => err,
            other => panic!("expected error response, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(shell().execute("   "), Outcome::Skip);
    }

    #[test]
    fn test_quit_and_exit() {
        assert_eq!(shell().execute("quit"), Outcome::Quit);
        assert_eq!(shell().execute("exit"), Outcome::Quit);
    }

    #[test]
    fn test_products_with_category_and_multi_word_search() {
        let shell = shell();

        let value = ok(shell.execute("products -c Fashion running shoes"));
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["name"], "Running Shoes");

        let value = ok(shell.execute("products"));
        assert_eq!(value.as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn test_search_keeps_inner_spacing() {
        let shell = shell();

        let value = ok(shell.execute("products running  shoes"));
        assert_eq!(value, Value::Array(Vec::new()));

        let value = ok(shell.execute("products   running shoes  "));
        assert_eq!(value.as_array().map(Vec::len), Some(1));

        let value = ok(shell.execute("products \"coffee mug\""));
        assert_eq!(value[0]["id"], 5);
    }

    #[test]
    fn test_quoted_category_with_space() {
        let catalog = Catalog::new(vec![
            Product::new(1, "Desk Lamp", 1599, "Home Decor"),
            Product::new(2, "Lamp Oil", 399, "Home"),
        ])
        .unwrap();
        let shell = Shell::new(CatalogState::new(catalog), ConfigState::default());

        let value = ok(shell.execute("products -c \"Home Decor\" lamp"));
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["name"], "Desk Lamp");

        assert_eq!(
            error(shell.execute("products -c \"Home Decor lamp")).code,
            ErrorCode::InvalidCommand
        );
    }

    #[test]
    fn test_split_words_offsets() {
        let words = split_words(r#"  add "a b"  c"#).unwrap();
        let view: Vec<(&str, usize)> = words
            .iter()
            .map(|w| (w.text.as_str(), w.start))
            .collect();
        assert_eq!(view, vec![("add", 2), ("a b", 6), ("c", 13)]);
    }

    #[test]
    fn test_cart_commands_mutate_shared_cart() {
        let shell = shell();

        ok(shell.execute("add 1"));
        ok(shell.execute("add 1"));
        let value = ok(shell.execute("decrease 1"));
        assert_eq!(value["totals"]["totalItems"], 1);

        assert_eq!(shell.cart().with_cart(|c| c.quantity_of(ProductId::new(1))), 1);

        let value = ok(shell.execute("remove 1"));
        assert_eq!(value["items"], Value::Array(Vec::new()));
    }

    #[test]
    fn test_errors_are_reported_not_fatal() {
        let shell = shell();

        assert_eq!(error(shell.execute("add 99")).code, ErrorCode::NotFound);
        assert_eq!(error(shell.execute("checkout")).code, ErrorCode::EmptyCart);
        assert_eq!(error(shell.execute("add banana")).code, ErrorCode::InvalidCommand);
        assert_eq!(error(shell.execute("fly")).code, ErrorCode::InvalidCommand);
    }

    #[test]
    fn test_checkout_message() {
        let shell = shell();
        ok(shell.execute("add 6"));

        let value = ok(shell.execute("checkout"));
        assert_eq!(value["message"], "Order placed! Items: 1, Total: ₹149. (Demo only)");
    }

    #[test]
    fn test_help_is_a_normal_response() {
        let value = ok(shell().execute("help"));
        assert!(value.as_str().is_some_and(|text| text.contains("checkout")));
    }

    #[test]
    fn test_run_writes_one_json_line_per_response() {
        let shell = shell();
        let input = b"categories\n\nadd 2\ncheckout\nquit\ncart\n";
        let mut output = Vec::new();

        shell.run(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["ok"][0], "All");
        assert_eq!(lines[1]["ok"]["totals"]["totalAmount"], 2499);
        assert_eq!(lines[2]["ok"]["itemCount"], 1);
    }
}
