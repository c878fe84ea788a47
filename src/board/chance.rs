//! Chance cards.
//!
//! Card tables are read as loosely typed [`ChanceCardRecord`]s and converted
//! into the closed [`ChanceCard`] enum on load, so an unknown card type is
//! reported before any game starts.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// A chance card effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChanceCard {
    /// Move to a square of `colour`, taking it for free if one is unowned.
    GotoAndGet { colour: String },
    /// Move to square 0 and collect the Go salary.
    Goto,
    /// Pay `amount`.
    PayIntoPartyBox { amount: i64 },
    /// Keep until needed to leave jail for free.
    GetOutOfJailFree,
}

impl ChanceCard {
    /// The card type as written in card tables.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            ChanceCard::GotoAndGet { .. } => "goto-and-get",
            ChanceCard::Goto => "goto",
            ChanceCard::PayIntoPartyBox { .. } => "pay-into-party-box",
            ChanceCard::GetOutOfJailFree => "get-out-of-jail-free",
        }
    }
}

impl std::fmt::Display for ChanceCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChanceCard::GotoAndGet { colour } => write!(f, "goto-and-get ({colour})"),
            ChanceCard::PayIntoPartyBox { amount } => write!(f, "pay-into-party-box ({amount})"),
            other => f.write_str(other.type_name()),
        }
    }
}

/// A chance card as stored in a card table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChanceCardRecord {
    #[serde(rename = "type")]
    pub card_type: String,

    #[serde(default, alias = "color")]
    pub colour: Option<String>,

    #[serde(default)]
    pub amount: Option<i64>,
}

impl TryFrom<ChanceCardRecord> for ChanceCard {
    type Error = ConfigError;

    fn try_from(record: ChanceCardRecord) -> Result<Self, Self::Error> {
        match record.card_type.as_str() {
            "goto-and-get" => record
                .colour
                .map(|colour| ChanceCard::GotoAndGet { colour })
                .ok_or_else(|| ConfigError::InvalidCard("goto-and-get card without a colour".into())),
            "goto" => Ok(ChanceCard::Goto),
            "pay-into-party-box" => match record.amount {
                Some(amount) if amount >= 0 => Ok(ChanceCard::PayIntoPartyBox { amount }),
                Some(amount) => Err(ConfigError::InvalidCard(format!(
                    "pay-into-party-box card with negative amount {amount}"
                ))),
                None => Err(ConfigError::InvalidCard(
                    "pay-into-party-box card without an amount".into(),
                )),
            },
            "get-out-of-jail-free" => Ok(ChanceCard::GetOutOfJailFree),
            other => Err(ConfigError::InvalidCard(format!(
                "unexpected chance card type: {other}"
            ))),
        }
    }
}

/// Parse a JSON card table.
pub fn parse_chance_cards(json: &str) -> Result<Vec<ChanceCard>, ConfigError> {
    let records: Vec<ChanceCardRecord> = serde_json::from_str(json)?;
    records.into_iter().map(ChanceCard::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(card_type: &str) -> ChanceCardRecord {
        ChanceCardRecord {
            card_type: card_type.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_all_card_types() {
        let cards = parse_chance_cards(
            r#"[
                {"type": "goto-and-get", "colour": "red"},
                {"type": "goto"},
                {"type": "pay-into-party-box", "amount": 2},
                {"type": "get-out-of-jail-free"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            cards,
            vec![
                ChanceCard::GotoAndGet { colour: "red".into() },
                ChanceCard::Goto,
                ChanceCard::PayIntoPartyBox { amount: 2 },
                ChanceCard::GetOutOfJailFree,
            ]
        );
    }

    #[test]
    fn test_unknown_card_type_is_invalid() {
        let err = ChanceCard::try_from(record("advance-to-mayfair")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCard(msg) if msg.contains("advance-to-mayfair")));
    }

    #[test]
    fn test_missing_fields_are_invalid() {
        assert!(matches!(
            ChanceCard::try_from(record("goto-and-get")),
            Err(ConfigError::InvalidCard(_))
        ));
        assert!(matches!(
            ChanceCard::try_from(record("pay-into-party-box")),
            Err(ConfigError::InvalidCard(_))
        ));
    }

    #[test]
    fn test_negative_payment_is_invalid() {
        let err = parse_chance_cards(r#"[{"type": "pay-into-party-box", "amount": -4}]"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCard(msg) if msg.contains("-4")));

        let cards = parse_chance_cards(r#"[{"type": "pay-into-party-box", "amount": 0}]"#).unwrap();
        assert_eq!(cards, vec![ChanceCard::PayIntoPartyBox { amount: 0 }]);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(
            ChanceCard::GotoAndGet { colour: "green".into() }.to_string(),
            "goto-and-get (green)"
        );
        assert_eq!(ChanceCard::Goto.to_string(), "goto");
        assert_eq!(ChanceCard::GetOutOfJailFree.to_string(), "get-out-of-jail-free");
    }

    #[test]
    fn test_card_serializes_with_type_tag() {
        let json = serde_json::to_value(ChanceCard::PayIntoPartyBox { amount: 1 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "pay-into-party-box", "amount": 1}));
    }
}
