use derivative::Derivative;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use url::{form_urlencoded, Url, UrlQuery};

use crate::constants::MOVIES_PATH;

/// One of the two alternate upstream movie-data sources. TMDB is the
/// metadata-rich one; OMDb supports title search and release year only.
#[derive(Derivative, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Debug)]
#[derivative(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiSource {
    #[derivative(Default)]
    #[strum(serialize = "TMDB")]
    Tmdb,
    #[strum(serialize = "OMDB")]
    Omdb,
}

impl ApiSource {
    /// Whether the provider supplies genre/language/country option lists and
    /// supports the advanced discovery filters.
    pub fn metadata_rich(&self) -> bool {
        matches!(self, ApiSource::Tmdb)
    }
}

#[derive(Derivative, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Debug)]
#[derivative(Default)]
pub enum SortBy {
    #[derivative(Default)]
    #[serde(rename = "popularity.desc")]
    #[strum(serialize = "popularity.desc")]
    PopularityDesc,
    #[serde(rename = "popularity.asc")]
    #[strum(serialize = "popularity.asc")]
    PopularityAsc,
    #[serde(rename = "vote_average.desc")]
    #[strum(serialize = "vote_average.desc")]
    RatingDesc,
    #[serde(rename = "vote_average.asc")]
    #[strum(serialize = "vote_average.asc")]
    RatingAsc,
    #[serde(rename = "release_date.desc")]
    #[strum(serialize = "release_date.desc")]
    ReleaseDateDesc,
    #[serde(rename = "release_date.asc")]
    #[strum(serialize = "release_date.asc")]
    ReleaseDateAsc,
}

/// The user-editable query fields, minus the provider choice which lives in
/// [`Ctx`]. Values are passed through to the backend as-is, any range or
/// type validation is delegated to it.
///
/// [`Ctx`]: crate::models::ctx::Ctx
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct SearchFilters {
    pub search_query: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub year: Option<String>,
    pub min_rating: Option<String>,
    pub sort_by: SortBy,
    pub min_runtime: Option<String>,
    pub max_runtime: Option<String>,
    pub with_cast: Option<String>,
}

/// A fully resolved `/api/movies/` request.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MovieQuery {
    pub api_source: ApiSource,
    pub filters: SearchFilters,
}

impl MovieQuery {
    pub fn new(api_source: ApiSource, filters: SearchFilters) -> Self {
        MovieQuery {
            api_source,
            filters,
        }
    }
    /// Builds the outbound URL. Filters only meaningful for the
    /// metadata-rich provider are omitted entirely when the other provider
    /// is active, unset or empty values are never emitted.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.join(MOVIES_PATH).expect("url builder failed");
        {
            let metadata_rich = self.api_source.metadata_rich();
            let filters = &self.filters;
            let mut query = url.query_pairs_mut();
            query.append_pair("api_source", &self.api_source.to_string());
            append_filter(&mut query, "search_query", &filters.search_query);
            if metadata_rich {
                append_filter(&mut query, "genre", &filters.genre);
                append_filter(&mut query, "language", &filters.language);
                append_filter(&mut query, "country", &filters.country);
            }
            append_filter(&mut query, "year", &filters.year);
            if metadata_rich {
                append_filter(&mut query, "min_rating", &filters.min_rating);
                query.append_pair("sort_by", &filters.sort_by.to_string());
                append_filter(&mut query, "min_runtime", &filters.min_runtime);
                append_filter(&mut query, "max_runtime", &filters.max_runtime);
                append_filter(&mut query, "with_cast", &filters.with_cast);
            }
        }
        url
    }
}

fn append_filter(
    query: &mut form_urlencoded::Serializer<UrlQuery>,
    name: &str,
    value: &Option<String>,
) {
    match value {
        Some(value) if !value.is_empty() => {
            query.append_pair(name, value);
        }
        _ => {}
    }
}
