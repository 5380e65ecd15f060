use crate::model::{Player, Score};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScorePanelProps {
    pub score: Score,
}

#[function_component]
pub fn ScorePanel(props: &ScorePanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let value_style = "min-width:40px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let row = |player: Player, id: &'static str| {
        html! {
            <div style={row_style}>
                <span style={format!("font-weight:700; color:{};", player.color())}>{ player.glyph() }</span>
                <span style="flex:1;">{ player.to_string() }</span>
                <span {id} style={value_style}>{ props.score.get(player) }</span>
            </div>
        }
    };
    html! {
        <div style="display:flex; gap:24px; font-size:16px;">
            { row(Player::One, "p1-score") }
            { row(Player::Two, "p2-score") }
        </div>
    }
}
