//! Core data model: ranked participants and computed distributions.
//!
//! Participants arrive from the external scoring subsystem as camelCase
//! JSON (`teamName`, `totalPoints`, `walletAddress`). Upstream records carry
//! extra fields the engine has no use for; deserialization ignores them.

use serde::{Deserialize, Serialize};

/// One ranked contest entrant.
///
/// Constructed by the scoring subsystem before the engine runs; the engine
/// only reads it. A missing score upstream means zero points. A missing
/// wallet address is valid and means the entrant is ineligible for payout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Opaque upstream identifier.
    pub id: String,
    /// Display name shown in the explanation.
    pub team_name: String,
    /// Final contest score. Ties are exact-equality on this value.
    #[serde(default)]
    pub total_points: f64,
    /// Payout destination, if the entrant connected a wallet.
    #[serde(default)]
    pub wallet_address: Option<String>,
}

impl Participant {
    /// The payout address, or `None` when absent.
    ///
    /// An empty string is normalized to `None`: upstream guarantees a
    /// present address is non-empty, but the settlement list must never
    /// carry a blank destination.
    pub fn wallet(&self) -> Option<&str> {
        self.wallet_address.as_deref().filter(|a| !a.is_empty())
    }
}

/// A single computed payout: where to send funds and how much.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub wallet_address: String,
    pub prize_amount: f64,
}

/// The engine's full output: payout list plus a human-readable audit trail.
///
/// The explanation is diagnostic text for operators; no other component
/// parses it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DistributionResult {
    pub distributions: Vec<Distribution>,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_deserializes_upstream_shape() {
        let json = r#"{
            "id": "t1",
            "teamName": "Super Kings XI",
            "totalPoints": 412.5,
            "walletAddress": "0xabc123",
            "captainId": "p7",
            "matchId": "m42"
        }"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "t1");
        assert_eq!(p.team_name, "Super Kings XI");
        assert_eq!(p.total_points, 412.5);
        assert_eq!(p.wallet(), Some("0xabc123"));
    }

    #[test]
    fn missing_score_defaults_to_zero() {
        let json = r#"{"id": "t2", "teamName": "Royals"}"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.total_points, 0.0);
        assert_eq!(p.wallet_address, None);
    }

    #[test]
    fn null_wallet_is_absent() {
        let json = r#"{"id": "t3", "teamName": "Titans", "walletAddress": null}"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.wallet(), None);
    }

    #[test]
    fn empty_wallet_string_is_absent() {
        let p = Participant {
            id: "t4".into(),
            team_name: "Strikers".into(),
            total_points: 10.0,
            wallet_address: Some(String::new()),
        };
        assert_eq!(p.wallet(), None);
    }

    #[test]
    fn participant_roundtrips() {
        let p = Participant {
            id: "t9".into(),
            team_name: "Chargers".into(),
            total_points: 88.5,
            wallet_address: Some("0xfeed".into()),
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("teamName"));
        assert!(json.contains("totalPoints"));
        let back: Participant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn distribution_serializes_camel_case() {
        let d = Distribution {
            wallet_address: "0xdef".into(),
            prize_amount: 250.0,
        };
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("walletAddress"));
        assert!(json.contains("prizeAmount"));
    }

    // --- proptest ---

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn wallet_never_yields_empty(address in prop::option::of(".{0,16}")) {
            let p = Participant {
                id: "t".into(),
                team_name: "T".into(),
                total_points: 0.0,
                wallet_address: address,
            };
            if let Some(w) = p.wallet() {
                prop_assert!(!w.is_empty());
            }
        }
    }
}
