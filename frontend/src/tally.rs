use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;
use shared::tally;
use crate::ledger::LedgerClient;

/// Candidate-id → count map derived from the last successful ledger fetch.
/// A failed fetch keeps the previous counts; the board just goes stale.
#[derive(Clone, Default, PartialEq)]
pub struct TallyState {
    pub counts: HashMap<String, u32>,
    pub error: Option<String>,
}

impl Reducible for TallyState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::Counts(counts) => {
                next.counts = counts;
                next.error = None;
            },
            Msg::Error(error) => {
                next.error = Some(error);
            },
        }
        Rc::new(next)
    }
}

pub enum Msg {
    Counts(HashMap<String, u32>),
    Error(String),
}

/// Fetch the ledger on mount and refetch on every insert notification.
/// Counts are always recomputed from the full snapshot.
#[hook]
pub fn use_tally() -> UseReducerHandle<TallyState> {
    let state = use_reducer(TallyState::default);

    use_effect_with_deps({
        let state = state.clone();
        move |_| {
            let refetch = {
                let state = state.clone();
                move || {
                    let state = state.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match LedgerClient::fetch_all().await {
                            Ok(records) => {
                                let counts = tally(records.iter().map(|r| r.candidate_id.as_str()));
                                state.dispatch(Msg::Counts(counts));
                            }
                            Err(error) => state.dispatch(Msg::Error(error)),
                        }
                    });
                }
            };

            refetch();
            let subscription = LedgerClient::subscribe(refetch);
            if let Err(error) = &subscription {
                state.dispatch(Msg::Error(error.clone()));
            }

            move || drop(subscription)
        }
    }, ());

    state
}
