//! Presentation model
//!
//! A `Screen` is derived from a `GameState` without touching it. The browser
//! renders it as-is: headings, text, the roster inputs, the score table and
//! buttons that send back the `ClientMessage` they carry.

use crate::protocol::ClientMessage;
use crate::state::{GameState, RoleCard};
use crate::types::*;
use serde::{Deserialize, Serialize};

mod text {
    pub const WELCOME: &str = "Välkomna!";
    pub const ENTER_NAMES: &str = "Börja med att skriva in alla spelares namn nedan.";
    pub const NAME: &str = "Namn";
    pub const ADD_PLAYER: &str = "+ Lägg till spelare";
    pub const SHOW_ROLES: &str = "Visa roller och ämne";
    pub const SHOW_MY_ROLE: &str = "Visa min roll";
    pub const YOU_ARE_FAKE: &str = "Du är den falska konstnären";
    pub const YOU_ARE_REAL: &str = "Du är äkta konstnär";
    pub const NO_SUBJECT_FOR_YOU: &str = "Du får inte veta ämnet...";
    pub const SUBJECT_IS: &str = "Ämnet ni ska rita är";
    pub const NEXT_PLAYER: &str = "Nästa spelare";
    pub const START_GAME: &str = "Starta spelet";
    pub const TIME_TO_DRAW: &str = "Dags att rita!";
    pub const DRAW_RULES: &str =
        "Rita 2 omgångar var. När du lyfter pennan är det nästa persons tur";
    pub const WE_ARE_DONE: &str = "Vi är klara!";
    pub const FIND_FAKE: &str = "Kan ni hitta den falska konstnären?";
    pub const COUNT_DOWN: &str = "Räkna gemensamt ner från 3. När ni kommer till 0 pekar alla på den person de tror är den falska konstnären.";
    pub const DID_YOU_GUESS_RIGHT: &str = "Gissade ni rätt?";
    pub const GUESS_SUBJECT: &str = "Vilket ämne det var gruppen ritade.";
    pub const DID_YOU_GUESS_RIGHT_SINGLE: &str = "Gissade du rätt?";
    pub const YES: &str = "Ja";
    pub const NO: &str = "Nej";
    pub const FAKE_WON: &str = "Den falska konstnären vann och fick poäng!";
    pub const REAL_WON: &str = "De äkta konstnärerna vann och fick poäng!";
    pub const NEXT_ROUND: &str = "Nästa omgång";
    pub const NEW_GAME: &str = "Starta nytt spel";
    pub const PLAYER: &str = "Spelare";
    pub const POINTS: &str = "Poäng";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ClientMessage,
    pub enabled: bool,
}

impl Button {
    fn new(label: impl Into<String>, action: ClientMessage) -> Self {
        Self {
            label: label.into(),
            action,
            enabled: true,
        }
    }

    fn enabled_if(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// One text input on the roster screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameField {
    pub index: usize,
    pub name: String,
    pub placeholder: String,
    pub removable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standings {
    pub player_label: String,
    pub points_label: String,
    pub rows: Vec<StandingRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingRow {
    pub name: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Screen {
    /// Session the screen belongs to; changes when the server restarts
    pub id: GameId,
    pub phase: Phase,
    pub version: u64,
    pub heading: String,
    pub lines: Vec<String>,
    /// Large text under the lines (the subject or category)
    pub highlight: Option<String>,
    pub name_fields: Vec<NameField>,
    pub standings: Option<Standings>,
    pub buttons: Vec<Button>,
}

impl Screen {
    fn new(game: &GameState, heading: impl Into<String>) -> Self {
        Self {
            id: game.id.clone(),
            phase: game.phase,
            version: game.version,
            heading: heading.into(),
            lines: Vec::new(),
            highlight: None,
            name_fields: Vec::new(),
            standings: None,
            buttons: Vec::new(),
        }
    }

    fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    fn highlight(mut self, text: impl Into<String>) -> Self {
        self.highlight = Some(text.into());
        self
    }

    fn button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    fn standings(mut self, game: &GameState) -> Self {
        self.standings = Some(Standings {
            player_label: text::PLAYER.to_string(),
            points_label: text::POINTS.to_string(),
            rows: game
                .players
                .iter()
                .map(|p| StandingRow {
                    name: p.name.clone(),
                    points: p.points,
                })
                .collect(),
        });
        self
    }

    pub fn from_state(game: &GameState) -> Self {
        match game.phase {
            Phase::Waiting => Self::roster(game),
            Phase::Preparing => Self::reveal(game),
            Phase::Playing => Self::new(game, text::TIME_TO_DRAW)
                .line(text::DRAW_RULES)
                .highlight(format!(
                    "Kategori: {}",
                    game.subject
                        .as_ref()
                        .map(|s| s.category.as_str())
                        .unwrap_or_default()
                ))
                .button(Button::new(text::WE_ARE_DONE, ClientMessage::FinishDrawing)),
            Phase::Voting => Self::new(game, text::FIND_FAKE)
                .line(text::COUNT_DOWN)
                .line(text::DID_YOU_GUESS_RIGHT)
                .button(Button::new(
                    text::YES,
                    ClientMessage::Vote { identified: true },
                ))
                .button(Button::new(
                    text::NO,
                    ClientMessage::Vote { identified: false },
                )),
            Phase::Guessing => {
                let name = game.fake_artist().map(|p| p.name.as_str()).unwrap_or("");
                Self::new(game, format!("{name}, dags att gissa!"))
                    .line(text::GUESS_SUBJECT)
                    .line(text::DID_YOU_GUESS_RIGHT_SINGLE)
                    .button(Button::new(text::YES, ClientMessage::Guess { correct: true }))
                    .button(Button::new(text::NO, ClientMessage::Guess { correct: false }))
            }
            Phase::Summary => Self::summary(game),
            Phase::Finished => {
                let heading = match game.leader() {
                    Some(leader) => format!("{} är dagens vinnare!", leader.name),
                    None => String::new(),
                };
                Self::new(game, heading)
                    .standings(game)
                    .button(Button::new(text::NEW_GAME, ClientMessage::NewGame))
            }
        }
    }

    fn roster(game: &GameState) -> Self {
        let removable = game.can_remove_player();
        let mut screen = Self::new(game, text::WELCOME)
            .line(text::ENTER_NAMES)
            .button(
                Button::new(text::ADD_PLAYER, ClientMessage::AddPlayer)
                    .enabled_if(game.can_add_player()),
            )
            .button(
                Button::new(text::SHOW_ROLES, ClientMessage::StartGame)
                    .enabled_if(game.validate_roster().is_ok()),
            );

        screen.name_fields = game
            .players
            .iter()
            .enumerate()
            .map(|(index, p)| NameField {
                index,
                name: p.name.clone(),
                placeholder: text::NAME.to_string(),
                removable,
            })
            .collect();
        screen
    }

    fn reveal(game: &GameState) -> Self {
        let index = game.reveal.index;
        let name = game
            .revealing_player()
            .map(|p| p.name.as_str())
            .unwrap_or_default();

        if !game.reveal.role_visible {
            return Self::new(game, format!("Alla utom {name} - blunda!"))
                .line(format!(
                    "När alla blundar trycker {name} på knappen nedan."
                ))
                .button(Button::new(text::SHOW_MY_ROLE, ClientMessage::RevealRole));
        }

        let next_label = if game.is_last_reveal() {
            text::START_GAME
        } else {
            text::NEXT_PLAYER
        };
        let screen = match game.role_card(index) {
            Some(RoleCard::RealArtist { subject }) => Self::new(game, text::YOU_ARE_REAL)
                .line(text::SUBJECT_IS)
                .highlight(subject.subject.clone()),
            _ => Self::new(game, text::YOU_ARE_FAKE).line(text::NO_SUBJECT_FOR_YOU),
        };
        screen.button(Button::new(next_label, ClientMessage::NextPlayer))
    }

    fn summary(game: &GameState) -> Self {
        let outcome = match game.session.current_round_winner {
            Some(Winner::FakeArtist) => text::FAKE_WON,
            _ => text::REAL_WON,
        };
        let mut screen = Self::new(
            game,
            format!(
                "Omgång {}/{} klar!",
                game.session.current_round, game.config.rounds
            ),
        )
        .line(outcome);

        if let (Some(subject), Some(fake)) = (&game.subject, game.fake_artist()) {
            screen = screen.line(format!(
                "Ämnet var {}. Den falska konstnären var {}.",
                subject.subject, fake.name
            ));
        }

        screen
            .standings(game)
            .button(Button::new(text::NEXT_ROUND, ClientMessage::NextRound))
    }
}
