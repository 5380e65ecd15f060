use crate::model::GameStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusLineProps {
    pub status: GameStatus,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    let (text, color) = match props.status {
        GameStatus::InProgress(p) => (format!("{}'s turn ({})", p, p.glyph()), p.color()),
        GameStatus::Won(p) => (format!("{} wins!", p), p.color()),
        GameStatus::Draw => ("Draw".to_string(), "gray"),
    };
    html! {<div style={format!("font-size:18px; font-weight:600; color:{};", color)}>{ text }</div>}
}
