//! Flight-incident intake record.
//!
//! This is the wire contract for the petition-generation endpoint: nested
//! snake_case JSON, perks as lowercase strings, `requested_amount` omitted
//! when the passenger did not name a value. Field names here are the
//! negotiated backend contract; confirm with the backend team before renaming.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What the airline offered the passenger after the incident.
///
/// A `BTreeSet<OfferedPerk>` gives order-insensitive, duplicate-free
/// multi-selection by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferedPerk {
    Hotel,
    Meal,
    Rebooking,
    Nothing,
}

impl OfferedPerk {
    /// All selectable perks, in display order
    pub const ALL: [OfferedPerk; 4] = [
        OfferedPerk::Hotel,
        OfferedPerk::Meal,
        OfferedPerk::Rebooking,
        OfferedPerk::Nothing,
    ];

    /// Checkbox label shown in the intake form
    pub fn label(&self) -> &'static str {
        match self {
            OfferedPerk::Hotel => "Hotel",
            OfferedPerk::Meal => "Alimentação",
            OfferedPerk::Rebooking => "Reacomodação em outro voo",
            OfferedPerk::Nothing => "Nada foi oferecido",
        }
    }
}

/// Passenger identification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub tax_id: String,
    pub email: String,
}

/// The flight the incident happened on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub airline: String,
    pub flight_number: String,
    pub origin_airport: String,
    pub destination_airport: String,
    pub flight_date_time: String,
}

/// Everything the wizard collects before generating a petition.
///
/// Every field stays mutable until submission; the wizard imposes no per-step
/// validation gates, so partially filled records are legal at any point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    /// Free-text account of the incident
    pub narrative: String,
    pub personal_info: PersonalInfo,
    pub flight_info: FlightInfo,
    /// City/state where the petition will be filed
    pub jurisdiction: String,
    pub airline_offered: BTreeSet<OfferedPerk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_amount: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> IntakeRecord {
        IntakeRecord {
            narrative: "Voo atrasou 6 horas".to_string(),
            personal_info: PersonalInfo {
                full_name: "Maria da Silva".to_string(),
                tax_id: "123.456.789-00".to_string(),
                email: "maria@example.com".to_string(),
            },
            flight_info: FlightInfo {
                airline: "VoaBem".to_string(),
                flight_number: "VB1234".to_string(),
                origin_airport: "GRU".to_string(),
                destination_airport: "REC".to_string(),
                flight_date_time: "2026-03-10 21:40".to_string(),
            },
            jurisdiction: "São Paulo/SP".to_string(),
            airline_offered: BTreeSet::from([OfferedPerk::Hotel, OfferedPerk::Nothing]),
            requested_amount: Some("R$ 5.000,00".to_string()),
        }
    }

    #[test]
    fn test_wire_format_is_stable() {
        // The backend parses these exact names; this test pins the contract.
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(
            value,
            json!({
                "narrative": "Voo atrasou 6 horas",
                "personal_info": {
                    "full_name": "Maria da Silva",
                    "tax_id": "123.456.789-00",
                    "email": "maria@example.com"
                },
                "flight_info": {
                    "airline": "VoaBem",
                    "flight_number": "VB1234",
                    "origin_airport": "GRU",
                    "destination_airport": "REC",
                    "flight_date_time": "2026-03-10 21:40"
                },
                "jurisdiction": "São Paulo/SP",
                "airline_offered": ["hotel", "nothing"],
                "requested_amount": "R$ 5.000,00"
            })
        );
    }

    #[test]
    fn test_absent_amount_is_omitted() {
        let mut record = sample_record();
        record.requested_amount = None;

        let value = serde_json::to_value(record).unwrap();
        assert!(value.get("requested_amount").is_none());
    }

    #[test]
    fn test_perk_set_ignores_insertion_order() {
        let mut a = BTreeSet::new();
        a.insert(OfferedPerk::Nothing);
        a.insert(OfferedPerk::Hotel);

        let mut b = BTreeSet::new();
        b.insert(OfferedPerk::Hotel);
        b.insert(OfferedPerk::Nothing);

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }
}
