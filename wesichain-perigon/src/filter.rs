//! Search filters for the Perigon vector endpoint.
//!
//! A [`PerigonFilter`] is a tree: leaves are sets of field predicates, inner
//! nodes are `AND`/`OR`/`NOT` combinators over child filters. On the wire each
//! node is a JSON object; combinators use the upper-case keys the API expects.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single string or a list of strings; the API accepts either for every
/// leaf predicate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::One(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::One(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Many(values)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        FilterValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Geographic circle used by `coordinates` and `sourceCoordinates`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerigonCoordinates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

/// Leaf predicates. Every field is optional and unset fields are left out of
/// the request entirely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPredicates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_group: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations_country: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<PerigonCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_country: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_state: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_county: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_city: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_coordinates: Option<PerigonCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_domain: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_symbol: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_wikidata_id: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<FilterValue>,
}

impl FilterPredicates {
    pub fn is_empty(&self) -> bool {
        *self == FilterPredicates::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PerigonFilter {
    Predicates(FilterPredicates),
    And(Vec<PerigonFilter>),
    Or(Vec<PerigonFilter>),
    /// Negation of the listed children. A single negated filter is a list of one.
    Not(Vec<PerigonFilter>),
}

impl PerigonFilter {
    pub fn and(children: impl IntoIterator<Item = PerigonFilter>) -> Self {
        PerigonFilter::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = PerigonFilter>) -> Self {
        PerigonFilter::Or(children.into_iter().collect())
    }

    pub fn not(children: impl IntoIterator<Item = PerigonFilter>) -> Self {
        PerigonFilter::Not(children.into_iter().collect())
    }
}

impl From<FilterPredicates> for PerigonFilter {
    fn from(predicates: FilterPredicates) -> Self {
        PerigonFilter::Predicates(predicates)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(Box<T>),
}

/// Wire shape of a filter node: predicates and combinators side by side in
/// one object, as the API documents it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct RawFilter {
    #[serde(flatten)]
    predicates: FilterPredicates,
    #[serde(rename = "AND", default, skip_serializing_if = "Option::is_none")]
    and: Option<Vec<RawFilter>>,
    #[serde(rename = "OR", default, skip_serializing_if = "Option::is_none")]
    or: Option<Vec<RawFilter>>,
    #[serde(rename = "NOT", default, skip_serializing_if = "Option::is_none")]
    not: Option<OneOrMany<RawFilter>>,
}

impl RawFilter {
    fn into_filter(self) -> PerigonFilter {
        let convert = |children: Vec<RawFilter>| -> Vec<PerigonFilter> {
            children.into_iter().map(RawFilter::into_filter).collect()
        };

        let mut nodes = Vec::new();
        if !self.predicates.is_empty() {
            nodes.push(PerigonFilter::Predicates(self.predicates));
        }
        if let Some(children) = self.and {
            nodes.push(PerigonFilter::And(convert(children)));
        }
        if let Some(children) = self.or {
            nodes.push(PerigonFilter::Or(convert(children)));
        }
        if let Some(children) = self.not {
            let children = match children {
                OneOrMany::One(child) => vec![*child],
                OneOrMany::Many(children) => children,
            };
            nodes.push(PerigonFilter::Not(convert(children)));
        }

        // Sibling keys in one object are conjunctive upstream.
        match nodes.len() {
            0 => PerigonFilter::Predicates(FilterPredicates::default()),
            1 => nodes.remove(0),
            _ => PerigonFilter::And(nodes),
        }
    }

    fn from_filter(filter: &PerigonFilter) -> Self {
        let convert = |children: &[PerigonFilter]| -> Vec<RawFilter> {
            children.iter().map(RawFilter::from_filter).collect()
        };
        match filter {
            PerigonFilter::Predicates(predicates) => RawFilter {
                predicates: predicates.clone(),
                ..RawFilter::default()
            },
            PerigonFilter::And(children) => RawFilter {
                and: Some(convert(children)),
                ..RawFilter::default()
            },
            PerigonFilter::Or(children) => RawFilter {
                or: Some(convert(children)),
                ..RawFilter::default()
            },
            PerigonFilter::Not(children) => RawFilter {
                not: Some(OneOrMany::Many(convert(children))),
                ..RawFilter::default()
            },
        }
    }
}

impl Serialize for PerigonFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawFilter::from_filter(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PerigonFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawFilter::deserialize(deserializer).map(RawFilter::into_filter)
    }
}
