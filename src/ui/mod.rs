//! Terminal UI: the input and presentation side of a game. Key presses
//! become engine moves, engine outcomes become what is drawn.

mod app;
mod game_view;

pub use app::App;
