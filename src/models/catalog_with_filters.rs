use std::fmt;

use derivative::Derivative;
use derive_more::From;
use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::constants::BASE_URL;
use crate::models::common::{eq_update, Loadable};
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionLoad, Event, Internal, Msg};
use crate::runtime::{
    Effect, EffectFuture, Effects, Env, EnvError, EnvFutureExt, UpdateWithCtx,
};
use crate::types::api::{fetch_backend, MoviesResponse};
use crate::types::query::{MovieQuery, SearchFilters};
use crate::types::resource::MovieItem;

#[derive(Clone, PartialEq, From, Serialize, Debug)]
#[serde(tag = "type", content = "content")]
pub enum FetchError {
    Env(EnvError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            FetchError::Env(error) => {
                write!(f, "Failed to fetch movies: {}", error.message())
            }
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Selected {
    pub filters: SearchFilters,
}

/// The query panel. Holds the submitted filters and the catalog request
/// lifecycle: `catalog` is `None` until the first submit, then
/// loading/ready/error. The result view is a pure projection of this state.
#[derive(Derivative, Serialize, Clone, Debug)]
#[derivative(Default)]
pub struct CatalogWithFilters {
    pub selected: Option<Selected>,
    pub catalog: Option<Loadable<Vec<MovieItem>, FetchError>>,
    /// Monotonically increasing id tagged onto every outbound request.
    /// A response whose id is not the current one is discarded, so the
    /// last submission always wins regardless of response order.
    #[serde(skip)]
    submission_id: u64,
}

impl<E: Env + 'static> UpdateWithCtx<E> for CatalogWithFilters {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::CatalogWithFilters(selected)))
                if Some(selected) == self.selected.as_ref()
                    && matches!(&self.catalog, Some(catalog) if catalog.is_loading()) =>
            {
                // identical re-submit while the request is still in flight
                Effects::none().unchanged()
            }
            Msg::Action(Action::Load(ActionLoad::CatalogWithFilters(selected))) => {
                self.submission_id += 1;
                let query = MovieQuery::new(ctx.api_source, selected.filters.to_owned());
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                let catalog_effects = eq_update(&mut self.catalog, Some(Loadable::Loading));
                Effects::one(fetch_movies::<E>(&query, self.submission_id))
                    .unchanged()
                    .join(selected_effects)
                    .join(catalog_effects)
            }
            Msg::Action(Action::Unload) => {
                let selected_effects = eq_update(&mut self.selected, None);
                let catalog_effects = eq_update(&mut self.catalog, None);
                selected_effects.join(catalog_effects)
            }
            Msg::Internal(Internal::CatalogResult(submission_id, result))
                if *submission_id == self.submission_id
                    && self
                        .catalog
                        .as_ref()
                        .map(|catalog| catalog.is_loading())
                        .unwrap_or_default() =>
            {
                match result {
                    Ok(response) => {
                        let items = response
                            .movies
                            .iter()
                            .cloned()
                            .map(MovieItem::from)
                            .collect::<Vec<_>>();
                        let count = items.len();
                        eq_update(&mut self.catalog, Some(Loadable::Ready(items))).join(
                            Effects::msg(Msg::Event(Event::CatalogLoaded { count })).unchanged(),
                        )
                    }
                    Err(error) => {
                        let error = FetchError::from(error.to_owned());
                        let event_effects = Effects::msg(Msg::Event(Event::Error {
                            error: error.to_string(),
                        }))
                        .unchanged();
                        eq_update(&mut self.catalog, Some(Loadable::Err(error)))
                            .join(event_effects)
                    }
                }
            }
            Msg::Internal(Internal::CatalogResult(submission_id, _)) => {
                tracing::debug!("discarding stale catalog response {}", submission_id);
                Effects::none().unchanged()
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn fetch_movies<E: Env + 'static>(query: &MovieQuery, submission_id: u64) -> Effect {
    let url = query.url(&BASE_URL);
    EffectFuture::Concurrent(
        fetch_backend::<E, MoviesResponse>(&url)
            .map(move |result| Msg::Internal(Internal::CatalogResult(submission_id, result)))
            .boxed_env(),
    )
    .into()
}
