use super::{
    game_canvas::GameCanvas, options_panel::OptionsPanel, score_panel::ScorePanel,
    status_line::StatusLine,
};
use crate::config::{BoardOptions, GameConfig};
use crate::state::{Game, GameAction};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: GameConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let game = {
        let config = props.config.clone();
        use_reducer(move || match Game::new(&config) {
            Ok(g) => g,
            Err(e) => {
                log::error!("falling back to the default board: {}", e);
                Game::default()
            }
        })
    };

    let reset = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| game.dispatch(GameAction::Reset))
    };
    let apply_options = {
        let game = game.clone();
        Callback::from(move |opts: BoardOptions| game.dispatch(GameAction::ApplyOptions(opts)))
    };

    let (width, height) = game.dimensions();

    html! {
        <div id="root" style="display:flex; flex-direction:column; align-items:center; gap:12px; padding:16px; font-family:sans-serif;">
            <ScorePanel score={game.score()} />
            <StatusLine status={game.status()} />
            <GameCanvas game={game.clone()} />
            <button id="reset-button" onclick={reset}>{"Reset"}</button>
            <OptionsPanel
                width={width}
                height={height}
                grid_size={game.grid_size()}
                on_apply={apply_options}
            />
        </div>
    }
}
