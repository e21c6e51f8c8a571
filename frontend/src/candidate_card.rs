use yew::prelude::*;
use shared::models::{Candidate, Category};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub candidate: Candidate,
    pub count: u32,
    /// True while this card is acknowledging a just-saved vote; shows the
    /// "Vote Saved!" back face until the controller clears it.
    pub flipped: bool,
    pub on_vote: Callback<(String, Category)>,
}

#[function_component(CandidateCard)]
pub fn candidate_card(props: &Props) -> Html {
    let candidate = props.candidate;

    if props.flipped {
        return html! {
            <div class={CARD_BACK}>
                <div class="text-center">
                    <p class="text-3xl font-bold">{"✅"}</p>
                    <p class="text-md font-semibold mt-2">{"Vote Saved!"}</p>
                </div>
            </div>
        };
    }

    let onclick = {
        let on_vote = props.on_vote.clone();
        Callback::from(move |_| on_vote.emit((candidate.id.to_string(), candidate.category)))
    };

    let quote = if candidate.quote.is_empty() { "Silent type" } else { candidate.quote };
    let totem = if candidate.totem.is_empty() { "—" } else { candidate.totem };

    html! {
        <div class={combine_classes(CARD_SHELL, ward_style(&candidate))}>
            <div>
                <div class="flex justify-between items-center mb-2">
                    <span class="text-sm font-bold">{format!("HP {}", candidate.hp)}</span>
                    <h2 class="text-md font-extrabold text-center flex-1">{candidate.name}</h2>
                    <span class="text-xs font-semibold capitalize">{candidate.category.as_str()}</span>
                </div>

                <div class="flex justify-center mb-3">
                    <img
                        src={candidate.image}
                        alt={candidate.name}
                        class="w-32 h-32 rounded-full border-4 border-white shadow-md object-cover bg-gray-200"
                    />
                </div>

                <div class="text-center mb-3">
                    <p class="text-xs uppercase tracking-wide text-gray-700">
                        {ward_icon(&candidate)}{" "}{candidate.ward}
                    </p>
                    <p class="text-sm italic text-gray-600">{candidate.vibe}</p>
                </div>

                <div class={CARD_QUOTE}>
                    <p class="text-xs italic text-gray-800 text-center">{format!("“{}”", quote)}</p>
                </div>

                <div class={CARD_TOTEM}>
                    <p class="font-bold text-sm mb-1">{"Totem"}</p>
                    <p class="text-sm text-center">{totem}</p>
                </div>
            </div>

            <div class="flex justify-between items-center">
                <span class="text-xs font-semibold text-gray-600">{format!("{} votes", props.count)}</span>
                <button {onclick} class={VOTE_BUTTON}>
                    {"Vote for me!"}
                </button>
            </div>
        </div>
    }
}
