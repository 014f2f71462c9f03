use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{ConnectFour, GamePhase, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: GameConfig,
    game: ConnectFour,
    current_player: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let game = Self::new_game(&config)?;
        Ok(App {
            game,
            current_player: 0,
            selected_column: config.cols / 2,
            should_quit: false,
            message: None,
            config,
        })
    }

    fn new_game(config: &GameConfig) -> Result<ConnectFour, GameError> {
        let mut game = ConnectFour::new(config.rows, config.cols)?;
        game.set_player_tokens(config.player_one, config.player_two)?;
        Ok(game)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

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
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
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
                if self.selected_column + 1 < self.game.cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    /// Start a fresh game with the same configuration
    fn restart(&mut self) {
        match Self::new_game(&self.config) {
            Ok(game) => {
                self.game = game;
                self.current_player = 0;
                self.selected_column = self.config.cols / 2;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Drop the current player's token in the selected column
    fn drop_token(&mut self) {
        if self.game.phase() == GamePhase::Over {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game.drop_token(self.current_player, self.selected_column) {
            Ok(()) => {
                let token = self.current_token();
                if self.game.is_last_drop_connect_four() {
                    self.message = Some(format!("{} wins!", token.name()));
                } else if self.game.phase() == GamePhase::Over {
                    self.message = Some("It's a draw!".to_string());
                } else {
                    self.current_player = 1 - self.current_player;
                }
            }
            Err(GameError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Token of the player whose turn it is
    fn current_token(&self) -> Token {
        if self.current_player == 0 {
            self.config.player_one
        } else {
            self.config.player_two
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.current_token(),
            self.selected_column,
            &self.message,
        );
    }
}
