use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::model::{Cell, GameState, Player};
use crate::state::BoardGeometry;

const BACKGROUND: &str = "white";
const GRID_COLOR: &str = "black";
const GRID_LINE_WIDTH: f64 = 2.0;

/// The handful of 2D drawing calls the board needs.
pub trait Painter {
    fn resize(&mut self, width: f64, height: f64);
    fn fill_background(&mut self, width: f64, height: f64, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str);
    fn circle(&mut self, center: (f64, f64), radius: f64, color: &str);
}

impl Painter for CanvasRenderingContext2d {
    fn resize(&mut self, width: f64, height: f64) {
        if let Some(canvas) = self.canvas() {
            canvas.set_width(width.max(0.0) as u32);
            canvas.set_height(height.max(0.0) as u32);
        }
    }

    fn fill_background(&mut self, width: f64, height: f64, color: &str) {
        self.set_fill_style_str(color);
        self.fill_rect(0.0, 0.0, width, height);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str) {
        self.begin_path();
        self.set_stroke_style_str(color);
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.stroke();
    }

    fn circle(&mut self, center: (f64, f64), radius: f64, color: &str) {
        self.begin_path();
        if let Err(e) = self.arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU) {
            log::warn!("arc failed: {}", js_error(&e));
            return;
        }
        self.set_stroke_style_str(color);
        self.stroke();
    }
}

fn js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Clears the canvas and draws the empty grid.
pub fn draw_board<P: Painter>(p: &mut P, geometry: &BoardGeometry) {
    p.fill_background(geometry.width, geometry.height, BACKGROUND);
    p.set_line_width(GRID_LINE_WIDTH);
    let cw = geometry.column_width();
    let rh = geometry.row_height();
    for i in 0..geometry.grid_lines() {
        let x = cw * i as f64;
        let y = rh * i as f64;
        p.line((x, 0.0), (x, geometry.height), GRID_COLOR);
        p.line((0.0, y), (geometry.width, y), GRID_COLOR);
    }
}

pub fn draw_move<P: Painter>(p: &mut P, geometry: &BoardGeometry, cell: Cell, player: Player) {
    match player {
        Player::One => {
            for (x0, y0, x1, y1) in geometry.x_strokes(cell) {
                p.line((x0, y0), (x1, y1), player.color());
            }
        }
        Player::Two => {
            let (cx, cy, r) = geometry.o_circle(cell);
            p.circle((cx, cy), r, player.color());
        }
    }
}

/// Full redraw: resize, grid, then every placed mark.
pub fn draw_game<P: Painter>(p: &mut P, geometry: &BoardGeometry, state: &GameState) {
    p.resize(geometry.width, geometry.height);
    draw_board(p, geometry);
    for (cell, value) in state.cells() {
        if let Some(player) = value {
            draw_move(p, geometry, cell, player);
        }
    }
}
