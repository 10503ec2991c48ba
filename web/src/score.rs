use quatrito_core as game;
use yew::prelude::*;

use crate::utils::StorageKey;

impl StorageKey for game::ScoreBoard {
    const KEY: &'static str = "quatrito:scores:v1";
}

pub(crate) const fn history_class(result: game::GameResult) -> &'static str {
    use game::GameResult::*;
    match result {
        PlayerOne => "result-p1",
        PlayerTwo => "result-p2",
        Draw => "result-draw",
    }
}

pub(crate) const fn history_label(result: game::GameResult) -> &'static str {
    use game::GameResult::*;
    match result {
        PlayerOne => "Player 1 won",
        PlayerTwo => "Player 2 won",
        Draw => "Draw",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ScorePanelProps {
    pub scores: game::ScoreBoard,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(ScorePanel)]
pub(crate) fn score_panel(props: &ScorePanelProps) -> Html {
    let scores = &props.scores;

    html! {
        <aside class="scoreboard">
            <dl class="score-totals">
                <dt>{"Player 1"}</dt>
                <dd id="wins-p1">{scores.wins(game::Player::One)}</dd>
                <dt>{"Player 2"}</dt>
                <dd id="wins-p2">{scores.wins(game::Player::Two)}</dd>
                <dt>{"Draws"}</dt>
                <dd id="draws-count">{scores.draws()}</dd>
            </dl>
            <ol id="score-history-list">
                {
                    if scores.history().is_empty() {
                        html! { <li class="history-empty">{"No games yet"}</li> }
                    } else {
                        // most recent game first
                        scores.history().iter().rev().map(|&result| html! {
                            <li class={history_class(result)}>{history_label(result)}</li>
                        }).collect::<Html>()
                    }
                }
            </ol>
            <button id="btn-reset-scores" onclick={props.on_reset.clone()}>{"Reset scores"}</button>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_uses_versioned_namespace() {
        assert_eq!(<game::ScoreBoard as StorageKey>::KEY, "quatrito:scores:v1");
    }

    #[test]
    fn history_entries_map_to_result_classes() {
        assert_eq!(history_class(game::GameResult::PlayerOne), "result-p1");
        assert_eq!(history_class(game::GameResult::PlayerTwo), "result-p2");
        assert_eq!(history_class(game::GameResult::Draw), "result-draw");
    }

    #[test]
    fn history_entries_have_readable_labels() {
        assert_eq!(history_label(game::GameResult::PlayerOne), "Player 1 won");
        assert_eq!(history_label(game::GameResult::PlayerTwo), "Player 2 won");
        assert_eq!(history_label(game::GameResult::Draw), "Draw");
    }
}
