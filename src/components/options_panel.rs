use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::BoardOptions;

#[derive(Properties, PartialEq, Clone)]
pub struct OptionsPanelProps {
    pub width: f64,
    pub height: f64,
    pub grid_size: usize,
    pub on_apply: Callback<BoardOptions>,
}

#[function_component]
pub fn OptionsPanel(props: &OptionsPanelProps) -> Html {
    let width_ref = use_node_ref();
    let height_ref = use_node_ref();
    let grid_ref = use_node_ref();

    let set_cb = {
        let width_ref = width_ref.clone();
        let height_ref = height_ref.clone();
        let grid_ref = grid_ref.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| {
            let inputs = [&width_ref, &height_ref, &grid_ref]
                .map(|r| r.cast::<HtmlInputElement>());
            let [Some(w), Some(h), Some(g)] = inputs else {
                log::error!("options inputs are not mounted");
                return;
            };
            let opts = BoardOptions::parse(&w.value(), &h.value(), &g.value());
            if opts.is_empty() {
                log::debug!("options form is blank, nothing to apply");
            } else {
                log::debug!("applying options {:?}", opts);
                on_apply.emit(opts);
            }
            for input in [&w, &h, &g] {
                input.set_value("");
            }
        })
    };

    let label_style = "display:flex; flex-direction:column; gap:4px; font-size:12px;";
    html! {<div id="options" style="display:flex; gap:8px; align-items:flex-end; border:1px solid #30363d; border-radius:8px; padding:8px;">
        <label style={label_style}>{"Width"}
            <input id="board-width" type="text" size="5" ref={width_ref} placeholder={props.width.to_string()} />
        </label>
        <label style={label_style}>{"Height"}
            <input id="board-height" type="text" size="5" ref={height_ref} placeholder={props.height.to_string()} />
        </label>
        <label style={label_style}>{"Grid"}
            <input id="board-grid" type="text" size="3" ref={grid_ref} placeholder={props.grid_size.to_string()} />
        </label>
        <button onclick={set_cb}>{"Set"}</button>
    </div>}
}
