use serde::{Deserialize, Serialize};

use super::book::Book;

/// Tri-state boolean criterion parsed from a query-string value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flag {
    /// Parameter not supplied; matches everything.
    #[default]
    Absent,
    True,
    False,
}

impl Flag {
    /// `"1"` is true, any other supplied value (including `""`) is false.
    pub fn from_digit(raw: Option<&str>) -> Self {
        match raw {
            None => Flag::Absent,
            Some("1") => Flag::True,
            Some(_) => Flag::False,
        }
    }

    /// `"true"` is true, any other supplied value is false.
    pub fn from_word(raw: Option<&str>) -> Self {
        match raw {
            None => Flag::Absent,
            Some("true") => Flag::True,
            Some(_) => Flag::False,
        }
    }

    pub fn matches(self, value: bool) -> bool {
        match self {
            Flag::Absent => true,
            Flag::True => value,
            Flag::False => !value,
        }
    }
}

/// Exact-match criterion for an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFilter {
    Exact(i64),
    /// The supplied value had no leading integer; nothing matches it.
    Unparseable,
}

impl NumberFilter {
    /// Read the leading integer of `raw` and ignore whatever follows it:
    /// leading whitespace and one sign are allowed, so `" 42"`, `"2010abc"`
    /// and `"2010.5"` all parse. No leading digits, or a value too large
    /// for `i64`, gives [`NumberFilter::Unparseable`].
    pub fn parse(raw: &str) -> Self {
        let rest = raw.trim_start();
        let (negative, rest) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return NumberFilter::Unparseable;
        }
        match rest[..digits].parse::<i64>() {
            Ok(value) if negative => NumberFilter::Exact(-value),
            Ok(value) => NumberFilter::Exact(value),
            Err(_) => NumberFilter::Unparseable,
        }
    }

    fn matches(self, value: Option<i64>) -> bool {
        match (self, value) {
            (NumberFilter::Exact(want), Some(have)) => want == have,
            _ => false,
        }
    }
}

/// Raw listing query: every book field, as the client spelled it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookQuery {
    pub id: Option<String>,
    pub name: Option<String>,
    pub year: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<String>,
    pub read_page: Option<String>,
    pub finished: Option<String>,
    pub reading: Option<String>,
    pub inserted_at: Option<String>,
    pub updated_at: Option<String>,
}

impl BookQuery {
    /// Collect query-string pairs. Unknown keys are ignored and a repeated
    /// key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = BookQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "id" => &mut query.id,
                "name" => &mut query.name,
                "year" => &mut query.year,
                "author" => &mut query.author,
                "summary" => &mut query.summary,
                "publisher" => &mut query.publisher,
                "pageCount" => &mut query.page_count,
                "readPage" => &mut query.read_page,
                "finished" => &mut query.finished,
                "reading" => &mut query.reading,
                "insertedAt" => &mut query.inserted_at,
                "updatedAt" => &mut query.updated_at,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        query
    }
}

/// Conjunctive criteria for listing books. `None`/[`Flag::Absent`] fields
/// are not applied; the default filter matches every book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub year: Option<NumberFilter>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<NumberFilter>,
    pub read_page: Option<NumberFilter>,
    pub finished: Flag,
    pub reading: Flag,
    pub inserted_at: Option<String>,
    pub updated_at: Option<String>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        self.id.as_deref().map_or(true, |id| book.id == id)
            && text_matches(&self.name, Some(book.name.as_str()))
            && number_matches(self.year, book.year)
            && text_matches(&self.author, book.author.as_deref())
            && text_matches(&self.summary, book.summary.as_deref())
            && text_matches(&self.publisher, book.publisher.as_deref())
            && number_matches(self.page_count, Some(i64::from(book.page_count)))
            && number_matches(self.read_page, Some(i64::from(book.read_page)))
            && self.finished.matches(book.finished)
            && self.reading.matches(book.reading)
            && text_matches(&self.inserted_at, Some(book.inserted_at.as_str()))
            && text_matches(&self.updated_at, Some(book.updated_at.as_str()))
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == BookFilter::default()
    }
}

// Empty text and number parameters are treated as not supplied; the two
// flags apply whenever the parameter is present.
impl From<BookQuery> for BookFilter {
    fn from(query: BookQuery) -> Self {
        let number = |raw: Option<String>| non_empty(raw).map(|s| NumberFilter::parse(&s));
        BookFilter {
            finished: Flag::from_digit(query.finished.as_deref()),
            reading: Flag::from_word(query.reading.as_deref()),
            id: non_empty(query.id),
            name: non_empty(query.name),
            year: number(query.year),
            author: non_empty(query.author),
            summary: non_empty(query.summary),
            publisher: non_empty(query.publisher),
            page_count: number(query.page_count),
            read_page: number(query.read_page),
            inserted_at: non_empty(query.inserted_at),
            updated_at: non_empty(query.updated_at),
        }
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

fn text_matches(needle: &Option<String>, haystack: Option<&str>) -> bool {
    match (needle, haystack) {
        (None, _) => true,
        (Some(needle), Some(haystack)) => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        (Some(_), None) => false,
    }
}

fn number_matches(filter: Option<NumberFilter>, value: Option<i64>) -> bool {
    filter.map_or(true, |f| f.matches(value))
}
