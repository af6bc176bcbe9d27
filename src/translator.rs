//! Translation of the listing pages' search parameters into backend queries.
//!
//! The UI keeps its filter state in URL search parameters named after the
//! facets it shows (`nationalities`, `artists`, `storeTypes`, `pageIndex`,
//! ...). The REST backend expects its own vocabulary (`countryCode`,
//! `artistName`, `metadatas`, `offset`, `take`). [`translate_outbound`] maps
//! one onto the other; it is pure and never rejects its input.

use crate::domain::filter::SearchFilter;
use crate::domain::types::ListingStatus;

/// Page size assumed when the parameters carry no `pageSize`.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Ordered `(key, value)` pairs taken from the UI's search parameters.
///
/// Keys may repeat; multi-select facets send one pair per selected value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes every pair stored under `key`, returning their values in order.
    pub fn take_all(&mut self, key: &str) -> Vec<String> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pairs)
            .into_iter()
            .partition(|(k, _)| k == key);
        self.pairs = kept;
        taken.into_iter().map(|(_, v)| v).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<Vec<(String, String)>> for SearchParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Query pairs in the backend's vocabulary, ready to be sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendQuery {
    pairs: Vec<(String, String)>,
}

impl BackendQuery {
    fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// All values stored under `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.pairs.iter().any(|(k, v)| k == key && v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the pairs as an `application/x-www-form-urlencoded` string.
    pub fn to_query_string(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(&self.pairs)
    }
}

/// Maps the UI's search parameters onto the backend's query vocabulary.
///
/// `status`, when given, is emitted ahead of every translated pair. Each
/// input pair produces exactly one output pair, in input order. `pageIndex`
/// becomes an absolute `offset` using the first `pageSize` of the same set,
/// or [`DEFAULT_PAGE_SIZE`] when there is none.
pub fn translate_outbound(params: &SearchParams, status: Option<ListingStatus>) -> BackendQuery {
    let mut query = BackendQuery::default();

    if let Some(status) = status {
        query.push("status", status.as_str());
    }

    let page_size = params
        .get("pageSize")
        .map_or(f64::from(DEFAULT_PAGE_SIZE), coerce_number);

    for (key, value) in params.iter() {
        match SearchFilter::classify(key, value) {
            SearchFilter::Nationality(value) => query.push("countryCode", value),
            SearchFilter::Artist(value) => query.push("artistName", value),
            SearchFilter::Metadata(kind, value) => query.push("metadatas", kind.fragment(&value)),
            SearchFilter::PageIndex(value) => {
                let offset = coerce_number(&value) * page_size;
                query.push("offset", format_number(offset));
            }
            SearchFilter::PageSize(value) => query.push("take", value),
            SearchFilter::Passthrough { key, value } => query.push(key, value),
        }
    }

    log::debug!("translated {} search parameters into {:?}", params.len(), query.pairs());

    query
}

/// Lenient numeric conversion used for pagination parameters.
///
/// Mirrors `+value || 0` in the browser: anything that is not a numeric
/// literal, as well as `NaN` and `-0`, yields `0`.
pub fn coerce_number(value: &str) -> f64 {
    let parsed = parse_numeric_literal(value.trim()).unwrap_or(0.0);
    if parsed.is_nan() || parsed == 0.0 {
        0.0
    } else {
        parsed
    }
}

fn parse_numeric_literal(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix_literal = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .map(|digits| (digits, 16))
        .or_else(|| {
            s.strip_prefix("0o")
                .or_else(|| s.strip_prefix("0O"))
                .map(|digits| (digits, 8))
        })
        .or_else(|| {
            s.strip_prefix("0b")
                .or_else(|| s.strip_prefix("0B"))
                .map(|digits| (digits, 2))
        });
    if let Some((digits, radix)) = radix_literal {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return Some(digits.chars().fold(0.0, |acc, c| {
            acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
        }));
    }

    // `f64::from_str` also accepts "inf" and "nan", which are not numbers here.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Renders a number the way the browser stringifies it into a URL.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> SearchParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn nationalities_become_country_code() {
        let query = translate_outbound(&params(&[("nationalities", "JPN")]), None);
        assert_eq!(query.pairs(), &[("countryCode".to_string(), "JPN".to_string())]);
    }

    #[test]
    fn status_comes_first() {
        let query = translate_outbound(
            &params(&[("artists", "Monet")]),
            Some(ListingStatus::Draft),
        );
        assert_eq!(
            query.pairs(),
            &[
                ("status".to_string(), "Draft".to_string()),
                ("artistName".to_string(), "Monet".to_string()),
            ]
        );
    }

    #[test]
    fn offset_uses_page_size_listed_after_page_index() {
        let query = translate_outbound(&params(&[("pageIndex", "2"), ("pageSize", "25")]), None);
        assert!(query.contains("offset", "50"));
        assert!(query.contains("take", "25"));
    }

    #[test]
    fn offset_falls_back_to_default_page_size() {
        let query = translate_outbound(&params(&[("pageIndex", "3")]), None);
        assert!(query.contains("offset", "150"));
        assert_eq!(query.get_all("take").count(), 0);
    }

    #[test]
    fn malformed_page_values_coerce_to_zero() {
        let query = translate_outbound(&params(&[("pageIndex", "abc")]), None);
        assert!(query.contains("offset", "0"));

        let query = translate_outbound(&params(&[("pageIndex", "4"), ("pageSize", "ten")]), None);
        assert!(query.contains("offset", "0"));
        assert!(query.contains("take", "ten"));
    }

    #[test]
    fn fractional_offsets_keep_their_decimal_form() {
        let query = translate_outbound(&params(&[("pageIndex", "0.5"), ("pageSize", "5")]), None);
        assert!(query.contains("offset", "2.5"));
    }

    #[test]
    fn coerce_number_follows_unary_plus() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("  12 "), 12.0);
        assert_eq!(coerce_number("1e2"), 100.0);
        assert_eq!(coerce_number("0x1A"), 26.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("-0"), 0.0);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("nan"), 0.0);
        assert_eq!(coerce_number("1_000"), 0.0);
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
    }

    #[test]
    fn format_number_matches_browser_output() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn infinite_page_index_times_zero_page_size_is_nan() {
        let query = translate_outbound(
            &params(&[("pageIndex", "Infinity"), ("pageSize", "0")]),
            None,
        );
        assert!(query.contains("offset", "NaN"));
    }

    #[test]
    fn take_all_removes_matching_pairs() {
        let mut set = params(&[("status", "Enabled"), ("artists", "Monet"), ("status", "Draft")]);
        assert_eq!(set.take_all("status"), vec!["Enabled", "Draft"]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("artists"), Some("Monet"));
    }

    #[test]
    fn query_string_is_form_encoded() {
        let query = translate_outbound(&params(&[("storeTypes", "Warehouse A")]), None);
        assert_eq!(
            query.to_query_string().unwrap(),
            "metadatas=%7B%22storeType%22%3A%22Warehouse+A%22%7D"
        );
    }
}
