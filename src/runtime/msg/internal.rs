use crate::runtime::EnvError;
use crate::types::api::{ConfigResponse, MoviesResponse};
use crate::types::query::ApiSource;

//
// Those messages are meant to be dispatched and handled only inside this crate
//
#[derive(Debug)]
pub enum Internal {
    /// Dispatched when the active provider actually changed.
    ApiSourceChanged,
    /// Result for loading the option lists, tagged with the provider the
    /// request was issued for.
    FilterOptionsResult(ApiSource, Result<ConfigResponse, EnvError>),
    /// Result for loading the movie catalog, tagged with the submission id
    /// the request was issued with. Responses carrying a stale id are
    /// discarded.
    CatalogResult(u64, Result<MoviesResponse, EnvError>),
}
