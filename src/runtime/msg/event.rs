use serde::Serialize;

use crate::types::query::ApiSource;

///
/// Those messages are meant to be dispatched by this crate and handled by its
/// users.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    FilterOptionsLoaded {
        api_source: ApiSource,
    },
    CatalogLoaded {
        count: usize,
    },
    Error {
        error: String,
    },
}
