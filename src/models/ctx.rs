use derivative::Derivative;
use serde::Serialize;

use crate::models::common::eq_update;
use crate::runtime::msg::{Action, ActionCtx, Internal, Msg};
use crate::runtime::{Effects, Env, Update};
use crate::types::query::ApiSource;

/// State shared between the models: the active data provider. Owned by the
/// app model, no process-wide singleton.
#[derive(Derivative, Clone, PartialEq, Eq, Serialize, Debug)]
#[derivative(Default)]
pub struct Ctx {
    pub api_source: ApiSource,
}

impl Ctx {
    pub fn new(api_source: ApiSource) -> Self {
        Ctx { api_source }
    }
}

impl<E: Env + 'static> Update<E> for Ctx {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Ctx(ActionCtx::SelectApiSource(api_source))) => {
                let api_source_effects = eq_update(&mut self.api_source, *api_source);
                if api_source_effects.has_changed {
                    api_source_effects
                        .join(Effects::msg(Msg::Internal(Internal::ApiSourceChanged)).unchanged())
                } else {
                    api_source_effects
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}
