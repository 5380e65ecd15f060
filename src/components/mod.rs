pub mod app;
pub mod game_canvas;
pub mod options_panel;
pub mod score_panel;
pub mod status_line;
