use std::fmt;

use derivative::Derivative;
use derive_more::From;
use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::constants::{BASE_URL, CONFIG_PATH};
use crate::models::common::eq_update;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionLoad, Event, Internal, Msg};
use crate::runtime::{
    Effect, EffectFuture, Effects, Env, EnvError, EnvFutureExt, UpdateWithCtx,
};
use crate::types::api::{fetch_backend, ConfigResponse};
use crate::types::query::ApiSource;
use crate::types::resource::OptionSet;

#[derive(Clone, PartialEq, From, Serialize, Debug)]
#[serde(tag = "type", content = "content")]
pub enum ConfigLoadError {
    Env(EnvError),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            ConfigLoadError::Env(error) => {
                write!(f, "Failed to load configuration: {}", error.message())
            }
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Selected {
    pub api_source: ApiSource,
}

/// Option lists scoped to the active provider. For the metadata-rich
/// provider they are replaced wholesale from `/api/config/`, for the
/// metadata-poor one they are reset to empty without a request. A failed
/// load sets `error` and leaves previously loaded options untouched, it
/// never blocks the query panel from submitting.
#[derive(Derivative, Serialize, Clone, Debug)]
#[derivative(Default)]
pub struct FilterOptions {
    pub selected: Option<Selected>,
    pub options: OptionSet,
    pub error: Option<ConfigLoadError>,
}

impl FilterOptions {
    pub fn new<E: Env + 'static>(ctx: &Ctx) -> (Self, Effects) {
        let mut model = FilterOptions::default();
        let effects = load_options::<E>(&mut model, ctx.api_source);
        (model, effects.unchanged())
    }
}

impl<E: Env + 'static> UpdateWithCtx<E> for FilterOptions {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::FilterOptions))
            | Msg::Internal(Internal::ApiSourceChanged) => {
                load_options::<E>(self, ctx.api_source)
            }
            Msg::Action(Action::Unload) => {
                let selected_effects = eq_update(&mut self.selected, None);
                let options_effects = eq_update(&mut self.options, OptionSet::default());
                let error_effects = eq_update(&mut self.error, None);
                selected_effects.join(options_effects).join(error_effects)
            }
            Msg::Internal(Internal::FilterOptionsResult(api_source, result))
                if self
                    .selected
                    .as_ref()
                    .map(|selected| selected.api_source)
                    == Some(*api_source) =>
            {
                match result {
                    Ok(response) => {
                        let options_effects =
                            eq_update(&mut self.options, OptionSet::from(response.to_owned()));
                        let error_effects = eq_update(&mut self.error, None);
                        options_effects.join(error_effects).join(
                            Effects::msg(Msg::Event(Event::FilterOptionsLoaded {
                                api_source: *api_source,
                            }))
                            .unchanged(),
                        )
                    }
                    Err(error) => {
                        let error = ConfigLoadError::from(error.to_owned());
                        let event_effects = Effects::msg(Msg::Event(Event::Error {
                            error: error.to_string(),
                        }))
                        .unchanged();
                        eq_update(&mut self.error, Some(error)).join(event_effects)
                    }
                }
            }
            Msg::Internal(Internal::FilterOptionsResult(api_source, _)) => {
                tracing::debug!("discarding stale config response for {}", api_source);
                Effects::none().unchanged()
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn load_options<E: Env + 'static>(model: &mut FilterOptions, api_source: ApiSource) -> Effects {
    let selected_effects = eq_update(&mut model.selected, Some(Selected { api_source }));
    if api_source.metadata_rich() {
        selected_effects.join(Effects::one(fetch_config::<E>(api_source)).unchanged())
    } else {
        // the metadata-poor provider ships no option lists
        let options_effects = eq_update(&mut model.options, OptionSet::default());
        let error_effects = eq_update(&mut model.error, None);
        selected_effects.join(options_effects).join(error_effects)
    }
}

fn fetch_config<E: Env + 'static>(api_source: ApiSource) -> Effect {
    let url = BASE_URL.join(CONFIG_PATH).expect("url builder failed");
    EffectFuture::Concurrent(
        fetch_backend::<E, ConfigResponse>(&url)
            .map(move |result| Msg::Internal(Internal::FilterOptionsResult(api_source, result)))
            .boxed_env(),
    )
    .into()
}
