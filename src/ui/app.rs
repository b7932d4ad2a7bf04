use crate::config::BoardConfig;
use crate::error::GameError;
use crate::game::{GameEngine, IgnoreReason, MoveOutcome, Player, Position};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    last_landing: Option<Position>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(board: BoardConfig, first: Player, second: Player) -> Result<Self, GameError> {
        let engine = GameEngine::new(board.width, board.height, first, second)?;
        Ok(App {
            engine,
            selected_column: board.width / 2, // Start in middle
            last_landing: None,
            should_quit: false,
            message: None,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let result = self.engine.apply_move(self.selected_column);
        if let Some(landing) = result.landing {
            self.last_landing = Some(landing);
        }

        self.message = match result.outcome {
            MoveOutcome::Win(player) => Some(format!("{} won!", player.name())),
            MoveOutcome::Tie => Some("Tie!".to_string()),
            MoveOutcome::Continue(_) => None,
            MoveOutcome::Ignored(IgnoreReason::ColumnFull) => Some("Column is full!".to_string()),
            MoveOutcome::Ignored(IgnoreReason::InvalidColumn) => Some("Invalid column!".to_string()),
            MoveOutcome::Ignored(IgnoreReason::GameOver) => {
                Some("Game is over! Press 'r' to restart.".to_string())
            }
        };
    }

    /// Replace the current game with a fresh one
    fn restart(&mut self) {
        let [first, second] = self.engine.players().clone();
        match GameEngine::new(self.engine.width(), self.engine.height(), first, second) {
            Ok(engine) => {
                info!("game restarted");
                self.engine = engine;
                self.selected_column = self.engine.width() / 2;
                self.last_landing = None;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            self.last_landing,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, PieceColor};
    use ratatui::backend::TestBackend;

    fn new_app() -> App {
        App::new(
            BoardConfig::default(),
            Player::new("Ada", PieceColor::Red),
            Player::new("Grace", PieceColor::Yellow),
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn drop_in(app: &mut App, col: usize) {
        while app.selected_column() > col {
            press(app, KeyCode::Left);
        }
        while app.selected_column() < col {
            press(app, KeyCode::Right);
        }
        press(app, KeyCode::Enter);
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_rejects_small_board() {
        let board = BoardConfig { width: 3, height: 6 };
        let result = App::new(
            board,
            Player::new("Ada", PieceColor::Red),
            Player::new("Grace", PieceColor::Yellow),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = new_app();
        assert_eq!(app.selected_column(), 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_drop_passes_turn() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.engine().active_player().name(), "Grace");
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = new_app();
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column is full!"));
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = new_app();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            drop_in(&mut app, col);
        }
        assert_eq!(app.message(), Some("Ada won!"));
        assert!(app.engine().is_over());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game is over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.message(), Some("New game started!"));
        assert!(!app.engine().is_over());
        assert_eq!(
            app.engine().status(),
            GameStatus::InProgress(Player::new("Ada", PieceColor::Red))
        );
    }

    #[test]
    fn test_restart_keeps_players_and_board_size() {
        let board = BoardConfig { width: 9, height: 5 };
        let ada = Player::new("Ada", PieceColor::Blue);
        let grace = Player::new("Grace", PieceColor::Green);
        let mut app = App::new(board, ada.clone(), grace.clone()).unwrap();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine().players(), &[ada.clone(), grace]);
        assert_eq!(app.engine().active_player(), &ada);
        assert_eq!(app.engine().width(), 9);
        assert_eq!(app.engine().height(), 5);
        assert_eq!(app.selected_column(), 4);
        assert_eq!(app.engine().board().landing_row(4), Some(4));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_header_shows_active_player() {
        let mut app = new_app();
        assert!(screen(&app).contains("Current Player: Ada"));
        press(&mut app, KeyCode::Enter);
        assert!(screen(&app).contains("Current Player: Grace"));
    }

    #[test]
    fn test_header_shows_result() {
        let mut app = new_app();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            drop_in(&mut app, col);
        }
        let text = screen(&app);
        assert!(text.contains("Winner: Ada"));
        assert!(text.contains("Ada won!"));
    }
}
