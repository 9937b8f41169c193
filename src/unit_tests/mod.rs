mod env;
pub use env::*;


use futures::channel::mpsc::Receiver;
use serde::{Deserialize, Serialize};

use crate::models::catalog_with_filters::CatalogWithFilters;
use crate::models::ctx::Ctx;
use crate::models::filter_options::FilterOptions;
use crate::runtime::msg::{Event, Msg};
use crate::runtime::{Effect, Model, RuntimeEvent, Update, UpdateWithCtx};

#[derive(Default, Clone, Debug, Serialize)]
pub struct TestModel {
    pub ctx: Ctx,
    pub catalog: CatalogWithFilters,
    pub filter_options: FilterOptions,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum TestModelField {
    Ctx,
    Catalog,
    FilterOptions,
}

impl Model<TestEnv> for TestModel {
    type Field = TestModelField;
    fn update(&mut self, msg: &Msg) -> (Vec<Effect>, Vec<TestModelField>) {
        let ctx_effects = Update::<TestEnv>::update(&mut self.ctx, msg);
        let catalog_effects = UpdateWithCtx::<TestEnv>::update(&mut self.catalog, msg, &self.ctx);
        let filter_options_effects =
            UpdateWithCtx::<TestEnv>::update(&mut self.filter_options, msg, &self.ctx);
        let mut fields = vec![];
        if ctx_effects.has_changed {
            fields.push(TestModelField::Ctx);
        }
        if catalog_effects.has_changed {
            fields.push(TestModelField::Catalog);
        }
        if filter_options_effects.has_changed {
            fields.push(TestModelField::FilterOptions);
        }
        let effects = ctx_effects
            .join(catalog_effects)
            .join(filter_options_effects);
        (effects.into_iter().collect(), fields)
    }
    fn update_field(
        &mut self,
        msg: &Msg,
        field: &TestModelField,
    ) -> (Vec<Effect>, Vec<TestModelField>) {
        let effects = match field {
            TestModelField::Ctx => Update::<TestEnv>::update(&mut self.ctx, msg),
            TestModelField::Catalog => {
                UpdateWithCtx::<TestEnv>::update(&mut self.catalog, msg, &self.ctx)
            }
            TestModelField::FilterOptions => {
                UpdateWithCtx::<TestEnv>::update(&mut self.filter_options, msg, &self.ctx)
            }
        };
        let fields = if effects.has_changed {
            vec![*field]
        } else {
            vec![]
        };
        (effects.into_iter().collect(), fields)
    }
}

/// Drains all events emitted so far and keeps the core ones.
pub fn core_events(rx: &mut Receiver<RuntimeEvent<TestEnv, TestModel>>) -> Vec<Event> {
    let mut events = vec![];
    while let Ok(Some(event)) = rx.try_next() {
        if let RuntimeEvent::CoreEvent(event) = event {
            events.push(event);
        }
    }
    events
}
