use dialoguer::{Confirm, Input, Select};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::{
    CardId, EventLogger, GameEvent, GameEventHandler, GameEventType, GameSession, GameStatus,
    ResolutionKind, SelectOutcome,
};
use crate::theme::{library, ThemeService, DEFAULT_THEME};
use crate::ui::{Display, StyleManager};
use crate::utils::{GameError, GameResult};

const TITLE: &str = "🧠 MindMatch — find the pairs";

pub struct GameInterface {
    session: GameSession,
    service: ThemeService,
    display: Display,
    events: EventLogger,
    config: Config,
}

impl GameInterface {
    pub fn new(config: Config) -> GameResult<Self> {
        info!("Initializing game interface");

        let style_manager = StyleManager::new();
        let mut display = Display::new(style_manager, config.ui.text_width)
            .map_err(|e| GameError::configuration(format!("Failed to create display: {}", e)))?;

        if !display.set_style(&config.ui.style) {
            warn!("Unknown style '{}', using default", config.ui.style);
        }

        let session = GameSession::new(
            config.match_delay(),
            config.mismatch_delay(),
            config.game.shuffle_seed,
        );

        Ok(Self {
            session,
            service: ThemeService::curated(),
            display,
            events: EventLogger::default(),
            config,
        })
    }

    pub async fn run(&mut self) -> GameResult<()> {
        info!("Starting game interface");

        loop {
            match self.show_main_menu().await {
                Ok(should_continue) => {
                    if !should_continue {
                        break;
                    }
                }
                Err(e) => {
                    self.display
                        .show_error(&format!("An error occurred: {}", e))
                        .ok();
                    self.display.wait_for_enter().ok();
                }
            }
        }

        self.display.show_message("Thanks for playing!", "success").ok();
        Ok(())
    }

    pub async fn show_main_menu(&mut self) -> GameResult<bool> {
        self.display.clear_screen().ok();
        self.display.show_title(TITLE)?;

        let choices = vec![
            "🎮 New Game",
            "✨ New Game with Theme",
            "📊 Statistics",
            "🎨 Visual Style",
            "🚪 Exit",
        ];

        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(|e| GameError::interface(format!("Menu selection error: {}", e)))?;

        match selection {
            0 => self.play(None).await?,
            1 => {
                let theme = self.prompt_theme()?;
                self.play(Some(theme)).await?;
            }
            2 => self.statistics_menu()?,
            3 => self.style_menu()?,
            4 => return Ok(false), // Exit
            _ => unreachable!(),
        }

        Ok(true)
    }

    /// Public API for CLI usage: start straight into a themed game.
    pub async fn play_theme(&mut self, theme: &str) -> GameResult<()> {
        self.play(Some(theme.to_string())).await
    }

    fn prompt_theme(&self) -> GameResult<String> {
        let theme: String = Input::new()
            .with_prompt("Enter a theme (e.g. 'Space', 'Ocean')")
            .default(self.default_theme().to_string())
            .interact_text()
            .map_err(|e| GameError::interface(format!("Theme input error: {}", e)))?;

        Ok(theme)
    }

    fn default_theme(&self) -> &str {
        &self.config.provider.default_theme
    }

    /// Tokens for a board. The built-in default theme skips the provider and
    /// uses the fixed default set; everything else goes through the service.
    async fn board_tokens(&self, theme: &str) -> Vec<String> {
        if theme == DEFAULT_THEME {
            return library::default_set();
        }
        self.service.generate(theme).await
    }

    /// One or more games in a row: build a board for the theme, run it to a
    /// win or a quit, offer a rematch on the same theme.
    async fn play(&mut self, theme: Option<String>) -> GameResult<()> {
        let theme = theme.unwrap_or_else(|| self.default_theme().to_string());

        loop {
            if theme != DEFAULT_THEME {
                self.display
                    .show_message(&format!("✨ Generating a \"{}\" board...", theme), "info")?;
            }
            let tokens = self.board_tokens(&theme).await;

            self.session.start_game(&tokens);
            self.events
                .handle_event(&GameEvent::game_started(&theme, self.session.total_pairs()));

            self.game_loop().await?;

            if self.session.status() != GameStatus::Won {
                return Ok(());
            }

            self.events.handle_event(&GameEvent::game_won(
                self.session.move_count(),
                self.session.total_pairs(),
            ));

            let again = Confirm::new()
                .with_prompt("🔄 Play again?")
                .default(true)
                .interact()
                .map_err(|e| GameError::interface(format!("Confirmation error: {}", e)))?;
            if !again {
                return Ok(());
            }
        }
    }

    async fn game_loop(&mut self) -> GameResult<()> {
        while self.session.status() == GameStatus::Playing {
            self.render()?;

            let count = self.session.cards().len();
            let number = self
                .display
                .prompt_number("Flip which card? (0 to quit) ", 0, count)?;

            if number == 0 {
                if self.confirm_quit()? {
                    return Ok(());
                }
                continue;
            }

            let id = self.session.cards()[number - 1].id;
            if !self.handle_selection(id).await? {
                self.display
                    .show_warning("That card can't be flipped right now.")?;
                self.display.wait_for_enter()?;
            }
        }

        if self.session.status() == GameStatus::Won {
            self.render()?;
            self.display
                .show_win_banner(self.session.move_count(), self.session.total_pairs())?;
        }

        Ok(())
    }

    /// Apply one selection. Returns `false` when the session ignored it.
    /// Every accepted flip is logged; committing a move also applies its
    /// resolution after the delay.
    async fn handle_selection(&mut self, id: CardId) -> GameResult<bool> {
        match self.session.select_card(id) {
            SelectOutcome::Ignored => Ok(false),
            SelectOutcome::Flipped => {
                if let Some(card) = self.session.cards().iter().find(|c| c.id == id) {
                    self.events.handle_event(&GameEvent::card_flipped(card));
                }
                Ok(true)
            }
            SelectOutcome::Pending(resolution) => {
                if let Some(card) = self.session.cards().iter().find(|c| c.id == id) {
                    self.events.handle_event(&GameEvent::card_flipped(card));
                }

                // Reveal the second card before the outcome is applied
                self.render()?;

                let first = self.content_of(resolution.first);
                let second = self.content_of(resolution.second);
                let event = match resolution.kind {
                    ResolutionKind::Matched => {
                        self.display
                            .show_success(&format!("It's a match! {} {}", first, second))?;
                        GameEvent::pair_matched(&first, self.session.move_count())
                    }
                    ResolutionKind::Mismatched => {
                        self.display
                            .show_message("Not a match, memorize them...", "info")?;
                        GameEvent::pair_mismatched(&first, &second, self.session.move_count())
                    }
                };

                sleep(resolution.delay).await;
                self.session.resolve(&resolution);
                self.events.handle_event(&event);
                Ok(true)
            }
        }
    }

    fn render(&self) -> GameResult<()> {
        self.display.clear_screen().ok();
        self.display.show_title(TITLE)?;
        self.display.show_hud(&self.session)?;
        self.display
            .show_board(self.session.cards(), self.config.ui.grid_columns)?;
        Ok(())
    }

    fn content_of(&self, id: CardId) -> String {
        self.session
            .cards()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.content.clone())
            .unwrap_or_default()
    }

    fn confirm_quit(&self) -> GameResult<bool> {
        Confirm::new()
            .with_prompt("Abandon this board?")
            .default(false)
            .interact()
            .map_err(|e| GameError::interface(format!("Quit confirmation error: {}", e)))
    }

    fn statistics_menu(&mut self) -> GameResult<()> {
        self.display.clear_screen().ok();
        self.display.show_message("📊 Session Statistics", "title")?;
        self.display.show_separator()?;

        let games = self.events.count_of(&GameEventType::GameStarted);
        let wins = self.events.count_of(&GameEventType::GameWon);
        let matches = self.events.count_of(&GameEventType::PairMatched);
        let mismatches = self.events.count_of(&GameEventType::PairMismatched);

        self.display
            .show_message(&format!("Games started: {}", games), "info")?;
        self.display
            .show_message(&format!("Games won: {}", wins), "info")?;
        self.display
            .show_message(&format!("Pairs matched: {}", matches), "info")?;
        self.display
            .show_message(&format!("Mismatches: {}", mismatches), "info")?;

        self.display.show_separator()?;
        self.display.wait_for_enter()?;
        Ok(())
    }

    fn style_menu(&mut self) -> GameResult<()> {
        let styles = self.display.get_available_styles();

        let selection = Select::new()
            .with_prompt("Choose a visual style")
            .items(&styles)
            .interact()
            .map_err(|e| GameError::interface(format!("Style selection error: {}", e)))?;

        let selected_style = styles[selection].clone();

        if self.display.set_style(&selected_style) {
            self.config.ui.style = selected_style.clone();
            self.display
                .show_success(&format!("Style changed to '{}'", selected_style))?;
        } else {
            self.display
                .show_error(&format!("Failed to set style '{}'", selected_style))?;
        }

        self.display.wait_for_enter()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn instant_interface() -> GameInterface {
        let mut config = Config::default();
        config.game.match_delay_ms = 0;
        config.game.mismatch_delay_ms = 0;
        GameInterface::new(config).unwrap()
    }

    #[test]
    fn test_default_theme_comes_from_config() {
        let mut config = Config::default();
        config.provider.default_theme = "Ocean".to_string();

        let interface = GameInterface::new(config).unwrap();
        assert_eq!(interface.default_theme(), "Ocean");
    }

    #[tokio::test]
    async fn test_board_tokens_honor_configured_theme() {
        let mut config = Config::default();
        config.provider.default_theme = "space".to_string();
        let interface = GameInterface::new(config).unwrap();

        let theme = interface.default_theme().to_string();
        let generated = interface.board_tokens(&theme).await;
        let expected = ThemeService::curated().generate("space").await;
        assert_eq!(generated, expected);
    }

    #[tokio::test]
    async fn test_builtin_default_theme_skips_the_provider() {
        let interface = instant_interface();
        let generated = interface.board_tokens(DEFAULT_THEME).await;
        assert_eq!(generated, library::default_set());
    }

    #[tokio::test]
    async fn test_both_flips_of_a_move_are_logged() {
        let mut interface = instant_interface();
        interface.session.start_game(&tokens(&["a", "b"]));

        let first = interface.session.cards()[0].id;
        let second = interface.session.cards()[1].id;

        assert!(interface.handle_selection(first).await.unwrap());
        // Re-selecting a face-up card is ignored and logs nothing
        assert!(!interface.handle_selection(first).await.unwrap());
        assert!(interface.handle_selection(second).await.unwrap());

        assert_eq!(
            interface.events.count_of(&GameEventType::CardFlipped),
            2
        );
        // The move resolved either way, so the lock is released
        assert!(!interface.session.is_locked());
    }
}
