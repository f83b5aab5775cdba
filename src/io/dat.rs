//! Reader for the `.dat` instance format.
//!
//! ```text
//! <number of cities>
//! 0 <x> <y>
//! 1 <x> <y>
//! ...
//! ```
//!
//! Tokens are whitespace separated; line breaks carry no meaning beyond
//! error reporting. Tokens after the last city are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::distance::{CityDistanceModel, ModelConfig, MIN_CITIES};
use crate::error::{TspError, TspResult};
use crate::models::City;

/// Parses an instance with the default model configuration.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_str;
///
/// let model = parse_str("3\n0 0 0\n1 3 4\n2 6 0\n").unwrap();
/// assert_eq!(model.num_cities(), 3);
/// assert_eq!(model.distance(0, 1).unwrap(), 5);
/// ```
pub fn parse_str(input: &str) -> TspResult<CityDistanceModel> {
    parse_str_with_config(input, &ModelConfig::default())
}

/// Parses an instance and builds the model with `config`.
pub fn parse_str_with_config(input: &str, config: &ModelConfig) -> TspResult<CityDistanceModel> {
    let cities = parse_cities(input)?;
    CityDistanceModel::with_config(cities, config)
}

/// Reads an instance from a buffered reader.
pub fn from_reader<R: BufRead>(mut reader: R) -> TspResult<CityDistanceModel> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_str(&input)
}

/// Reads an instance from a file.
pub fn from_file(path: impl AsRef<Path>) -> TspResult<CityDistanceModel> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// Whitespace tokens paired with their 1-based line number.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let inner = input
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
        Self {
            inner: Box::new(inner),
            line: 0,
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let (line, tok) = self.inner.next()?;
        self.line = line;
        Some(tok)
    }

    /// Next token as a non-negative integer, or `None` at end of input.
    fn next_value<T: FromStr>(&mut self, what: &str) -> TspResult<Option<T>> {
        let Some(tok) = self.next_token() else {
            return Ok(None);
        };
        tok.parse().map(Some).map_err(|_| {
            TspError::parse(
                self.line,
                format!("{what} should be a non-negative integer, read '{tok}'"),
            )
        })
    }
}

fn parse_cities(input: &str) -> TspResult<Vec<City>> {
    let mut tokens = Tokens::new(input);

    let n: usize = tokens
        .next_value("number of cities")?
        .ok_or_else(|| TspError::parse(0, "empty data"))?;
    if n < MIN_CITIES {
        return Err(TspError::parse(
            tokens.line,
            format!("number of cities should be at least {MIN_CITIES}, read {n}"),
        ));
    }

    let mut cities = Vec::new();
    for expected in 0..n {
        let incomplete = |line| {
            TspError::parse(
                line,
                format!("incomplete data for city {expected}: expected \"<city number> <x> <y>\""),
            )
        };

        let number: usize = tokens
            .next_value("city number")?
            .ok_or_else(|| incomplete(tokens.line))?;
        if number != expected {
            return Err(TspError::parse(
                tokens.line,
                format!("invalid city number: {expected} expected, {number} read"),
            ));
        }
        let x: u32 = tokens
            .next_value("x coordinate")?
            .ok_or_else(|| incomplete(tokens.line))?;
        let y: u32 = tokens
            .next_value("y coordinate")?
            .ok_or_else(|| incomplete(tokens.line))?;
        cities.push(City::new(x, y));
    }
    Ok(cities)
}
