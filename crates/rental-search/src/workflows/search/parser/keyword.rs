use crate::workflows::catalog::Catalog;

use super::{FilterCriteria, QueryParseError, QueryParser};

const BED_WORDS: [&str; 9] = [
    "bed", "beds", "bedroom", "bedrooms", "br", "bd", "bdr", "bdrm", "bdrms",
];

const COUNT_WORDS: [(&str, u8); 6] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
];

const PROPERTY_TYPES: [(&str, &str); 13] = [
    ("studio", "Studio"),
    ("studios", "Studio"),
    ("apartment", "Apartment"),
    ("apartments", "Apartment"),
    ("apt", "Apartment"),
    ("house", "House"),
    ("houses", "House"),
    ("condo", "Condo"),
    ("condos", "Condo"),
    ("townhome", "Townhome"),
    ("townhomes", "Townhome"),
    ("townhouse", "Townhome"),
    ("loft", "Loft"),
];

const TRANSIT_WORDS: [&str; 8] = [
    "transit", "bart", "subway", "metro", "train", "muni", "caltrain", "station",
];

const PET_WORDS: [&str; 6] = ["pet", "pets", "dog", "dogs", "cat", "cats"];

const NEGATIONS: [&str; 4] = ["no", "not", "without", "non"];

/// Words that may sit between a negation and the flag it negates ("not near transit").
const NEGATION_FILLER: [&str; 10] = [
    "near", "close", "to", "from", "by", "a", "the", "any", "public", "walking",
];

/// Trailing refusals that negate a pet mention ("pets not allowed").
const REFUSALS: [&str; 6] = ["allowed", "ok", "okay", "permitted", "welcome", "accepted"];

/// How far back a negation word still applies to a flag.
const NEGATION_WINDOW: usize = 4;

const CITY_ALIASES: [(&str, &str); 2] = [("sf", "San Francisco"), ("nyc", "New York")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaceKind {
    City,
    Neighborhood,
}

#[derive(Debug, Clone)]
struct KnownPlace {
    needle: String,
    name: String,
    kind: PlaceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceBound {
    Upper,
    Lower,
}

#[derive(Debug, Clone)]
struct Word {
    raw: String,
    lower: String,
}

/// Offline, rule-based parser.
///
/// Recognizes bedroom counts, price bounds, the three listing flags, property
/// categories, and place names. Places come from the catalog when available;
/// otherwise capitalized words after "in" are taken as the city.
#[derive(Debug, Clone, Default)]
pub struct KeywordQueryParser {
    places: Vec<KnownPlace>,
}

impl KeywordQueryParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns city and neighborhood names from the catalog being searched.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let cities = catalog
            .cities()
            .into_iter()
            .map(|name| KnownPlace::new(name, PlaceKind::City));
        let neighborhoods = catalog
            .neighborhoods()
            .into_iter()
            .map(|name| KnownPlace::new(name, PlaceKind::Neighborhood));

        Self {
            places: cities.chain(neighborhoods).collect(),
        }
    }

    fn scan_places(&self, words: &[Word], criteria: &mut FilterCriteria) {
        let haystack = format!(
            " {} ",
            words
                .iter()
                .map(|word| word.lower.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        );
        let mentions = |needle: &str| haystack.contains(&format!(" {needle} "));

        for place in &self.places {
            if !mentions(&place.needle) {
                continue;
            }
            let slot = match place.kind {
                PlaceKind::City => &mut criteria.city,
                PlaceKind::Neighborhood => &mut criteria.neighborhood,
            };
            if slot.is_none() {
                *slot = Some(place.name.clone());
            }
        }

        if criteria.city.is_none() {
            if let Some((_, city)) = CITY_ALIASES.iter().find(|entry| mentions(entry.0)) {
                criteria.city = Some(city.to_string());
            }
        }

        if criteria.city.is_none() && criteria.neighborhood.is_none() {
            criteria.city = capitalized_after_in(words);
        }
    }
}

impl QueryParser for KeywordQueryParser {
    fn parse(&self, query: &str) -> Result<FilterCriteria, QueryParseError> {
        let words = tokenize(query);
        if words.is_empty() {
            return Err(QueryParseError::Empty);
        }

        let mut criteria = FilterCriteria::default();
        scan_counts_and_prices(&words, &mut criteria);
        scan_flags(&words, &mut criteria);
        scan_property_type(&words, &mut criteria);
        self.scan_places(&words, &mut criteria);

        tracing::debug!(query, constraints = ?criteria.describe(), "keyword parse");
        Ok(criteria)
    }
}

impl KnownPlace {
    fn new(name: &str, kind: PlaceKind) -> Self {
        let needle = tokenize(name)
            .into_iter()
            .map(|word| word.lower)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            needle,
            name: name.to_string(),
            kind,
        }
    }
}

fn tokenize(text: &str) -> Vec<Word> {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == '/')
        .map(|token| token.trim_matches(|c: char| ",.;:!?()\"'".contains(c)))
        .filter(|token| !token.is_empty())
        .map(|token| Word {
            raw: token.to_string(),
            lower: token.to_lowercase(),
        })
        .collect()
}

fn scan_counts_and_prices(words: &[Word], criteria: &mut FilterCriteria) {
    let lower_at = |index: usize| words.get(index).map(|word| word.lower.as_str());

    let mut index = 0;
    while index < words.len() {
        let word = words[index].lower.as_str();

        if let Some(count) = compact_bedrooms(word) {
            criteria.bedrooms.get_or_insert(count);
            index += 1;
            continue;
        }

        if let Some(count) = parse_count(word) {
            if lower_at(index + 1).is_some_and(|next| BED_WORDS.contains(&next)) {
                criteria.bedrooms.get_or_insert(count);
                index += 2;
                continue;
            }
        }

        if word == "between" {
            let low = lower_at(index + 1).and_then(parse_amount);
            let high = lower_at(index + 3).and_then(parse_amount);
            if let (Some(low), Some("and"), Some(high)) = (low, lower_at(index + 2), high) {
                criteria.min_price = Some(low.min(high));
                criteria.max_price = Some(low.max(high));
                index += 4;
                continue;
            }
        }

        if let Some(amount) = parse_amount(word) {
            if let Some(high) = range_end(words, index, amount) {
                criteria.min_price = Some(amount);
                criteria.max_price = Some(high);
                index += 2;
                continue;
            }

            match price_bound(&words[..index]) {
                Some(PriceBound::Upper) => criteria.max_price = Some(amount),
                Some(PriceBound::Lower) => criteria.min_price = Some(amount),
                None if is_money(word) => {
                    criteria.max_price.get_or_insert(amount);
                }
                None => {}
            }
        }

        index += 1;
    }
}

fn scan_flags(words: &[Word], criteria: &mut FilterCriteria) {
    for (index, word) in words.iter().enumerate() {
        let negated = negated_before(words, index);
        let word = word.lower.as_str();

        if PET_WORDS.contains(&word) {
            let refused = refused_after(words, index);
            criteria.pet_friendly = Some(!(negated || refused));
        } else if word == "furnished" {
            criteria.furnished = Some(!negated);
        } else if word == "unfurnished" {
            criteria.furnished = Some(false);
        } else if TRANSIT_WORDS.contains(&word) {
            criteria.near_transit = Some(!negated);
        }
    }
}

/// A negation within the window before `index`, with only filler words in between.
fn negated_before(words: &[Word], index: usize) -> bool {
    for word in words[..index].iter().rev().take(NEGATION_WINDOW) {
        let word = word.lower.as_str();
        if NEGATIONS.contains(&word) {
            return true;
        }
        if !NEGATION_FILLER.contains(&word) {
            return false;
        }
    }
    false
}

fn refused_after(words: &[Word], index: usize) -> bool {
    let lower_at = |offset: usize| words.get(index + offset).map(|word| word.lower.as_str());
    match (lower_at(1), lower_at(2)) {
        (Some("not"), Some(next)) => REFUSALS.contains(&next),
        (Some("prohibited" | "banned"), _) => true,
        _ => false,
    }
}

fn scan_property_type(words: &[Word], criteria: &mut FilterCriteria) {
    criteria.property_type = words.iter().find_map(|word| {
        PROPERTY_TYPES
            .iter()
            .find(|(keyword, _)| *keyword == word.lower)
            .map(|(_, kind)| kind.to_string())
    });
}

fn capitalized_after_in(words: &[Word]) -> Option<String> {
    let start = words.iter().position(|word| word.lower == "in")? + 1;
    let name = words[start..]
        .iter()
        .take_while(|word| word.raw.chars().next().is_some_and(char::is_uppercase))
        .map(|word| word.raw.as_str())
        .collect::<Vec<_>>();

    if name.is_empty() {
        None
    } else {
        Some(name.join(" "))
    }
}

/// Upper end of a dash range such as "$2k-$3k" or "$2000-3000", which tokenizes
/// into two adjacent amounts. The first must look like money and the second must
/// either look like money or exceed it, and it must not be a bedroom count.
fn range_end(words: &[Word], index: usize, low: u32) -> Option<u32> {
    let first = words[index].lower.as_str();
    let second = words.get(index + 1)?.lower.as_str();
    if !is_money(first) {
        return None;
    }
    if words
        .get(index + 2)
        .is_some_and(|next| BED_WORDS.contains(&next.lower.as_str()))
    {
        return None;
    }

    let high = parse_amount(second)?;
    (is_money(second) || high > low).then_some(high).filter(|high| *high >= low)
}

fn price_bound(prefix: &[Word]) -> Option<PriceBound> {
    let tail = |n: usize| {
        (prefix.len() >= n).then(|| {
            prefix[prefix.len() - n..]
                .iter()
                .map(|word| word.lower.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
    };

    if matches!(tail(3).as_deref(), Some("no more than" | "not more than")) {
        return Some(PriceBound::Upper);
    }

    match tail(2).as_deref() {
        Some("up to" | "less than" | "at most") => return Some(PriceBound::Upper),
        Some("more than" | "greater than" | "at least") => return Some(PriceBound::Lower),
        _ => {}
    }

    match tail(1).as_deref() {
        Some("under" | "below" | "max" | "maximum" | "budget" | "within" | "<" | "<=") => {
            Some(PriceBound::Upper)
        }
        Some("over" | "above" | "min" | "minimum" | "from" | ">" | ">=") => {
            Some(PriceBound::Lower)
        }
        _ => None,
    }
}

fn compact_bedrooms(word: &str) -> Option<u8> {
    BED_WORDS.iter().find_map(|suffix| {
        word.strip_suffix(suffix)
            .filter(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
    })
}

fn parse_count(word: &str) -> Option<u8> {
    word.parse().ok().or_else(|| {
        COUNT_WORDS
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, count)| *count)
    })
}

fn is_money(word: &str) -> bool {
    word.starts_with('$') || word.ends_with('k')
}

fn parse_amount(word: &str) -> Option<u32> {
    let word = word.trim_start_matches('$');
    let (digits, multiplier) = match word.strip_suffix('k') {
        Some(rest) => (rest, 1000.0),
        None => (word, 1.0),
    };

    let cleaned: String = digits.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let amount = (cleaned.parse::<f64>().ok()? * multiplier).round();
    (0.0..=f64::from(u32::MAX))
        .contains(&amount)
        .then_some(amount as u32)
}
