use serde::{Deserialize, Serialize};

use crate::types::api::ConfigResponse;

/// Raw movie record as returned by the backend. The two providers use
/// different field names for the same concepts, so every field is optional
/// and carries both spellings.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct MovieResource {
    pub title: Option<String>,
    #[serde(rename = "Title")]
    pub omdb_title: Option<String>,
    pub release_date: Option<String>,
    #[serde(rename = "Year")]
    pub omdb_year: Option<String>,
    pub vote_average: Option<f64>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    pub overview: Option<String>,
    #[serde(rename = "Plot")]
    pub omdb_plot: Option<String>,
}

/// Normalized record the result view renders from. Produced once at
/// response-ingestion time, so no provider fallback is left for render time.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MovieItem {
    pub title: String,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub synopsis: Option<String>,
}

impl From<MovieResource> for MovieItem {
    fn from(resource: MovieResource) -> Self {
        let title = resource
            .title
            .filter(|title| !title.is_empty())
            .or(resource.omdb_title)
            .unwrap_or_default();
        // the display year is the first four characters of the date string
        let year = resource
            .release_date
            .filter(|date| !date.is_empty())
            .or(resource.omdb_year)
            .map(|date| date.chars().take(4).collect());
        let rating = resource
            .vote_average
            .map(|rating| rating.to_string())
            .or(resource.imdb_rating);
        let synopsis = resource
            .overview
            .filter(|overview| !overview.is_empty())
            .or(resource.omdb_plot);
        MovieItem {
            title,
            year,
            rating,
            synopsis,
        }
    }
}

/// A single (code, display name) pair of a selectable filter.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct FilterOption {
    pub code: String,
    pub name: String,
}

/// Provider-supplied enumerations used to populate the selectable filters,
/// empty when the active provider ships no such metadata. Order is the one
/// the backend returned.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct OptionSet {
    pub genres: Vec<FilterOption>,
    pub languages: Vec<FilterOption>,
    pub countries: Vec<FilterOption>,
}

impl From<ConfigResponse> for OptionSet {
    fn from(response: ConfigResponse) -> Self {
        OptionSet {
            genres: response
                .genres
                .into_iter()
                .map(|genre| FilterOption {
                    code: genre.id.to_string(),
                    name: genre.name,
                })
                .collect(),
            languages: response
                .languages
                .into_iter()
                .map(|language| FilterOption {
                    code: language.iso_639_1,
                    name: language.english_name,
                })
                .collect(),
            countries: response
                .countries
                .into_iter()
                .map(|country| FilterOption {
                    code: country.iso_3166_1,
                    name: country.english_name,
                })
                .collect(),
        }
    }
}
