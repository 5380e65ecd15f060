use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::state::{Game, GameAction};

#[derive(Properties, PartialEq, Clone)]
pub struct GameCanvasProps {
    pub game: UseReducerHandle<Game>,
}

#[function_component(GameCanvas)]
pub fn game_canvas(props: &GameCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    // Redraw everything whenever the game changes.
    {
        let canvas_ref = canvas_ref.clone();
        let game = props.game.clone();
        use_effect_with(props.game.version, move |_| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                log::warn!("canvas not mounted yet");
                return;
            };
            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
            match ctx {
                Some(mut ctx) => game.redraw(&mut ctx),
                None => log::error!("2d context unavailable"),
            }
        });
    }

    let onclick = {
        let game = props.game.clone();
        Callback::from(move |e: MouseEvent| {
            game.dispatch(GameAction::Click {
                x: e.offset_x() as f64,
                y: e.offset_y() as f64,
            });
        })
    };

    html! {
        <canvas id="game" ref={canvas_ref} {onclick} style="cursor:pointer; border:1px solid #30363d;" />
    }
}
