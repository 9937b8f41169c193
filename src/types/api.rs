use http::Request;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::runtime::{ConditionalSend, Env, TryEnvFuture};
use crate::types::resource::MovieResource;

/// Issues a GET against the backend aggregation endpoint.
pub fn fetch_backend<
    E: Env,
    OUT: for<'de> Deserialize<'de> + ConditionalSend + 'static,
>(
    url: &Url,
) -> TryEnvFuture<OUT> {
    let request = Request::get(url.as_str())
        .body(())
        .expect("request builder failed");
    E::fetch::<_, OUT>(request)
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ConfigGenre {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ConfigLanguage {
    pub iso_639_1: String,
    pub english_name: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ConfigCountry {
    pub iso_3166_1: String,
    pub english_name: String,
}

/// Response of `GET /api/config/`, only served for the metadata-rich
/// provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct ConfigResponse {
    pub genres: Vec<ConfigGenre>,
    pub languages: Vec<ConfigLanguage>,
    pub countries: Vec<ConfigCountry>,
}

/// Response of `GET /api/movies/`. Records keep the field names of whichever
/// provider served them.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct MoviesResponse {
    pub movies: Vec<MovieResource>,
}
