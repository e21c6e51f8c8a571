use yew::prelude::*;
use gloo_timers::callback::Timeout;
use shared::candidates;
use shared::models::{Category, NewVote};
use shared::session::DeviceSession;
use shared::tally::leaderboard;
use crate::candidate_card::CandidateCard;
use crate::ledger::LedgerClient;
use crate::styles::*;
use crate::tally::use_tally;

const MESSAGE_MILLIS: u32 = 2_000;
const ACK_MILLIS: u32 = 1_500;

#[cfg(target_arch = "wasm32")]
type Store = shared::session::LocalStore;
// In-memory stand-in keeps the controller working on non-browser hosts.
#[cfg(not(target_arch = "wasm32"))]
type Store = shared::session::MemoryStore;

#[derive(Clone, PartialEq)]
struct StatusMessage {
    kind: &'static str,
    text: String,
}

fn show_message(handle: &UseStateHandle<Option<StatusMessage>>, kind: &'static str, text: String) {
    handle.set(Some(StatusMessage { kind, text }));
    let handle = handle.clone();
    // Deliberately not cancelled by a newer message: rapid repeat votes can
    // clear the replacement early. Long-standing page behavior.
    Timeout::new(MESSAGE_MILLIS, move || handle.set(None)).forget();
}

#[function_component(Home)]
pub fn home() -> Html {
    let tally = use_tally();
    let session = use_mut_ref(|| DeviceSession::new(Store::default()));
    let last_voted = use_state(|| None::<String>);
    let message = use_state(|| None::<StatusMessage>);

    let on_vote = {
        let session = session.clone();
        let last_voted = last_voted.clone();
        let message = message.clone();
        Callback::from(move |(candidate_id, category): (String, Category)| {
            // Local preconditions reject without touching the ledger.
            if let Err(error) = session.borrow().check(category, &candidate_id) {
                show_message(&message, "warning", format!("⚠️ {}", error.message));
                return;
            }

            let voter_id = match session.borrow_mut().voter_id() {
                Ok(id) => id,
                Err(error) => {
                    show_message(&message, "error", format!("❌ {}", error.message));
                    return;
                }
            };

            let session = session.clone();
            let last_voted = last_voted.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vote = NewVote { candidate_id: candidate_id.clone(), category, voter_id };
                if LedgerClient::insert(&vote).await.is_err() {
                    // Record untouched, so the vote stays retryable.
                    show_message(&message, "error", "❌ Error saving vote".to_string());
                    return;
                }

                // Commit only after the confirmed ledger write.
                if let Err(error) = session.borrow_mut().commit(category, &candidate_id) {
                    show_message(&message, "error", format!("❌ {}", error.message));
                    return;
                }

                last_voted.set(Some(candidate_id));
                {
                    let last_voted = last_voted.clone();
                    Timeout::new(ACK_MILLIS, move || last_voted.set(None)).forget();
                }
                show_message(&message, "success", "✅ Vote saved!".to_string());
            });
        })
    };

    // Cards in live tally order; ties stay in roster order.
    let race = |category: Category, heading: &'static str| -> Html {
        let standings = leaderboard(candidates::ROSTER, &tally.counts, category);
        html! {
            <section class="mb-10">
                <h2 class={HEADING_MD}>{heading}</h2>
                <p class={combine_classes(TEXT_MUTED, "mb-4")}>
                    {format!("Up to {} votes per device in this race.", category.vote_cap())}
                </p>
                <div class={CARD_GRID}>
                    {for standings.iter().map(|standing| {
                        let flipped = last_voted.as_deref() == Some(standing.candidate.id);
                        html! {
                            <CandidateCard
                                candidate={standing.candidate}
                                count={standing.count}
                                {flipped}
                                on_vote={on_vote.clone()}
                            />
                        }
                    })}
                </div>
            </section>
        }
    };

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"Taupō District Election Cards"}</h1>
            <p class={combine_classes(TEXT_MUTED, "text-center mb-6")}>
                {"Pick your champions for the mayoralty and your ward. The tallies update live as votes land."}
            </p>

            {if let Some(message) = &*message {
                html! { <div class={alert_style(message.kind)}>{&message.text}</div> }
            } else { html! {} }}

            {if let Some(error) = &tally.error {
                html! { <div class={alert_style("error")}>{format!("Tallies may be stale: {}", error)}</div> }
            } else { html! {} }}

            {race(Category::Mayor, "Mayor")}
            {race(Category::Councillor, "Ward Councillors")}
        </div>
    }
}
