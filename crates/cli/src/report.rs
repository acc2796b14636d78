use bomb_core::{format_cards, Card, CardGroup, Deal, HandType};
use serde::Serialize;
use std::fmt::Write;

/// Result of one command, printed as text or JSON.
#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Report {
    Classify {
        cards: Vec<Card>,
        hand_type: Option<HandType>,
    },
    Accepted {
        play: CardGroup,
    },
    Rejected {
        cards: Vec<Card>,
        reason: String,
    },
    Prompt {
        suggestions: Vec<CardGroup>,
    },
    Deal {
        seed: u64,
        deal: Deal,
    },
}

impl Report {
    pub fn is_rejection(&self) -> bool {
        matches!(self, Report::Rejected { .. })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            Report::Classify { cards, hand_type } => {
                let cards = format_cards(cards);
                match hand_type {
                    Some(hand_type) => {
                        let _ = writeln!(out, "{cards}: {hand_type}");
                    }
                    None => {
                        let _ = writeln!(out, "{cards}: not a hand");
                    }
                }
            }
            Report::Accepted { play } => {
                let _ = writeln!(
                    out,
                    "accepted: {} ({})",
                    play.hand_type,
                    format_cards(&play.cards)
                );
            }
            Report::Rejected { cards, reason } => {
                let _ = writeln!(out, "rejected: {} ({reason})", format_cards(cards));
            }
            Report::Prompt { suggestions } => {
                if suggestions.is_empty() {
                    out.push_str("pass\n");
                }
                for group in suggestions {
                    let _ = writeln!(out, "{}: {}", group.hand_type, format_cards(&group.cards));
                }
            }
            Report::Deal { seed, deal } => {
                let _ = writeln!(out, "seed {seed}");
                for (seat, hand) in deal.hands.iter().enumerate() {
                    let _ = writeln!(out, "seat {}: {}", seat + 1, format_cards(hand));
                }
                let _ = writeln!(out, "kitty: {}", format_cards(&deal.kitty));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomb_core::{deal_seeded, parse_cards, Registry};

    #[test]
    fn empty_prompt_renders_as_pass() {
        let report = Report::Prompt {
            suggestions: Vec::new(),
        };
        assert_eq!(report.render(), "pass\n");
    }

    #[test]
    fn accepted_play_names_its_shape() {
        let cards = parse_cards("7H 7S").expect("parse");
        let play = Registry::default().group(&cards).expect("group");
        let report = Report::Accepted { play };
        assert_eq!(report.render(), "accepted: pair (7S 7H)\n");
    }

    #[test]
    fn unrecognized_cards_render_as_not_a_hand() {
        let report = Report::Classify {
            cards: parse_cards("2S 3H").expect("parse"),
            hand_type: None,
        };
        assert_eq!(report.render(), "2S 3H: not a hand\n");
    }

    #[test]
    fn json_report_is_tagged() {
        let deal = deal_seeded(7, 3).expect("deal");
        let report = Report::Deal { seed: 7, deal };
        let value = serde_json::to_value(&report).expect("json");
        assert_eq!(value["result"], "deal");
        assert_eq!(value["deal"]["hands"].as_array().map(Vec::len), Some(3));
        assert_eq!(report.render().lines().count(), 5);
    }
}
