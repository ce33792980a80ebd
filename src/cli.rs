//! Line-oriented prompt running one game session from a terminal.

use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use tracing::warn;
use uuid::Uuid;

use crate::{
    game::{AlertSink, Game, WriterSink},
    services::session_service::{Session, extract_winner, parse_player_count},
    state::{InvalidTransition, SessionPhase},
};

/// Prompt printed before reading the player count.
pub const PLAYER_PROMPT: &str = "Please enter the number of players: ";
/// Printed when the player count is not an integer.
pub const BAD_PLAYER_INPUT_ERR_MSG: &str =
    "bad value received for number of players, please try again with a number";
/// Printed when the winner line is not `"<name> wins"`.
pub const BAD_WINNER_INPUT_ERR_MSG: &str =
    "bad value received for winner, please try using '%NAME% wins'";

/// Reads the player count and the winner from `input`; prompts and blind alerts go to `out`.
pub struct Cli<R, W> {
    input: R,
    out: Arc<WriterSink<W>>,
    game: Arc<dyn Game>,
}

impl<R, W> Cli<R, W>
where
    R: BufRead,
    W: Write + Send + 'static,
{
    /// Build a prompt reading from `input` and writing to `out`.
    pub fn new(input: R, out: Arc<WriterSink<W>>, game: Arc<dyn Game>) -> Self {
        Self { input, out, game }
    }

    /// Run one session to completion and return the phase it ended in.
    ///
    /// Malformed input prints a fixed message and ends the session; nothing is retried.
    pub async fn play_poker(&mut self) -> Result<SessionPhase, InvalidTransition> {
        self.print(PLAYER_PROMPT);

        let alerts: Arc<dyn AlertSink> = self.out.clone();
        let mut session = Session::begin(Uuid::new_v4(), self.game.clone(), alerts);

        let Some(players) = parse_player_count(&self.read_line()) else {
            self.print(BAD_PLAYER_INPUT_ERR_MSG);
            session.abort()?;
            return Ok(session.phase());
        };
        session.declare_players(players)?;

        let Some(winner) = extract_winner(&self.read_line()) else {
            self.print(BAD_WINNER_INPUT_ERR_MSG);
            session.abort()?;
            return Ok(session.phase());
        };
        session.declare_winner(winner).await?;

        Ok(session.phase())
    }

    fn print(&self, text: &str) {
        if let Err(err) = self.out.write_str(text) {
            warn!(error = %err, "couldn't print to the terminal");
        }
    }

    fn read_line(&mut self) -> String {
        let mut line = String::new();
        if let Err(err) = self.input.read_line(&mut line) {
            warn!(error = %err, "couldn't read from the terminal");
        }
        line.trim_end_matches(['\r', '\n']).to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::test_support::GameSpy;

    struct Run {
        phase: SessionPhase,
        output: String,
        game: Arc<GameSpy>,
    }

    async fn play(lines: &[&str]) -> Run {
        let input = Cursor::new(lines.iter().map(|l| format!("{l}\n")).collect::<String>());
        let out = Arc::new(WriterSink::new(Vec::new()));
        let game = Arc::new(GameSpy::default());

        let phase = Cli::new(input, out.clone(), game.clone())
            .play_poker()
            .await
            .unwrap();

        Run {
            phase,
            output: out.contents(),
            game,
        }
    }

    #[tokio::test]
    async fn start_game_with_3_players_and_finish_with_chris() {
        let run = play(&["3", "Chris wins"]).await;

        assert_eq!(run.output, PLAYER_PROMPT);
        assert_eq!(run.game.started_with(), Some(3));
        assert_eq!(run.game.finished_with(), Some("Chris".to_string()));
        assert_eq!(
            run.phase,
            SessionPhase::Finished {
                winner: "Chris".into()
            }
        );
    }

    #[tokio::test]
    async fn start_game_with_8_players_and_finish_with_cleo() {
        let run = play(&["8", "Cleo wins"]).await;

        assert_eq!(run.game.started_with(), Some(8));
        assert_eq!(run.game.finished_with(), Some("Cleo".to_string()));
    }

    #[tokio::test]
    async fn non_numeric_player_count_does_not_start_the_game() {
        let run = play(&["pies"]).await;

        assert_eq!(run.output, format!("{PLAYER_PROMPT}{BAD_PLAYER_INPUT_ERR_MSG}"));
        assert_eq!(run.game.started_with(), None);
        assert_eq!(run.game.finished_with(), None);
        assert_eq!(run.phase, SessionPhase::Idle);
    }

    #[tokio::test]
    async fn negative_player_count_is_passed_to_the_game() {
        let run = play(&["-3", "Ruth wins"]).await;

        assert_eq!(run.output, PLAYER_PROMPT);
        assert_eq!(run.game.started_with(), Some(-3));
        assert_eq!(run.game.finished_with(), Some("Ruth".to_string()));
    }

    #[tokio::test]
    async fn malformed_winner_does_not_finish_the_game() {
        let run = play(&["7", "Cleo kills"]).await;

        assert_eq!(run.output, format!("{PLAYER_PROMPT}{BAD_WINNER_INPUT_ERR_MSG}"));
        assert_eq!(run.game.started_with(), Some(7));
        assert_eq!(run.game.finished_with(), None);
        assert_eq!(run.phase, SessionPhase::Idle);
    }

    #[tokio::test]
    async fn blind_alerts_share_the_terminal() {
        let input = Cursor::new("5\nRuth wins\n");
        let out = Arc::new(WriterSink::new(Vec::new()));
        let game = Arc::new(GameSpy::with_blind_alert("Blind is now 100\n"));

        Cli::new(input, out.clone(), game).play_poker().await.unwrap();

        assert_eq!(out.contents(), format!("{PLAYER_PROMPT}Blind is now 100\n"));
    }
}
