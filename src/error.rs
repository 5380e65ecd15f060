use thiserror::Error;

use crate::model::Cell;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("cell {cell} is outside the {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: usize },
    #[error("cell {0} has already been played")]
    CellOccupied(Cell),
    #[error("grid size {requested} is below the minimum of {min}")]
    GridTooSmall { requested: usize, min: usize },
    #[error("grid size {requested} is above the maximum of {max}")]
    GridTooLarge { requested: usize, max: usize },
    #[error("grid size is already {0}")]
    GridUnchanged(usize),
    #[error("can't set {axis} lower than {min} (got {requested})")]
    DimensionTooSmall {
        axis: &'static str,
        requested: f64,
        min: f64,
    },
    #[error("invalid game config")]
    Config(#[from] serde_json::Error),
    #[error("page element `{0}` is missing")]
    MissingElement(&'static str),
}
