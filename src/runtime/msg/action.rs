use serde::Deserialize;

use crate::models::catalog_with_filters::Selected as CatalogWithFiltersSelected;
use crate::types::query::ApiSource;

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionCtx {
    /// Switch the active data provider. Models depending on it are notified
    /// through [`Internal::ApiSourceChanged`].
    ///
    /// [`Internal::ApiSourceChanged`]: crate::runtime::msg::Internal::ApiSourceChanged
    SelectApiSource(ApiSource),
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "model", content = "args")]
pub enum ActionLoad {
    /// Submit the query panel with the given filters.
    CatalogWithFilters(CatalogWithFiltersSelected),
    /// Fetch the option lists for the active provider.
    FilterOptions,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Ctx(ActionCtx),
    Load(ActionLoad),
    Unload,
}
