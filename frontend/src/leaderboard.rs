use yew::prelude::*;
use shared::candidates;
use shared::models::Category;
use shared::tally::leaderboard;
use crate::styles::*;
use crate::tally::use_tally;

#[function_component(LeaderboardPage)]
pub fn leaderboard_page() -> Html {
    let tally = use_tally();

    let board = |category: Category, heading: &'static str| -> Html {
        let standings = leaderboard(candidates::ROSTER, &tally.counts, category);
        html! {
            <section class="mb-10">
                <h2 class={HEADING_MD}>{heading}</h2>
                <div class="space-y-3">
                    {for standings.iter().enumerate().map(|(rank, standing)| html! {
                        <div class={BOARD_ROW}>
                            <span class="text-lg font-bold text-gray-300 w-8">{format!("{}.", rank + 1)}</span>
                            <span class="flex-1 text-gray-100 font-medium">
                                {ward_icon(&standing.candidate)}{" "}{standing.candidate.name}
                            </span>
                            <span class={combine_classes(TEXT_MUTED, "px-4")}>{standing.candidate.ward}</span>
                            <span class="text-xl font-bold text-blue-400 w-16 text-right">{standing.count}</span>
                        </div>
                    })}
                </div>
            </section>
        }
    };

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"Leaderboard"}</h1>

            {if let Some(error) = &tally.error {
                html! { <div class={alert_style("error")}>{format!("Tallies may be stale: {}", error)}</div> }
            } else { html! {} }}

            {board(Category::Mayor, "Mayor")}
            {board(Category::Councillor, "Ward Councillors")}
        </div>
    }
}
