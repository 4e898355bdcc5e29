/// Full wizard happy path: fill every step, submit from the last step, and
/// assert the outbound record carries every entered value unmodified with the
/// perk selection as an order-insensitive set.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use jurito_core::{
    Backend, BackendError, Field, IntakeRecord, OfferedPerk, PetitionReply, SummaryReply,
    WizardView,
};

/// Backend that records the wire form of what the wizard submits
struct RecordingBackend {
    sent: Mutex<Option<serde_json::Value>>,
}

impl RecordingBackend {
    fn new() -> Self {
        Self {
            sent: Mutex::new(None),
        }
    }

    fn sent(&self) -> serde_json::Value {
        self.sent
            .lock()
            .unwrap()
            .clone()
            .expect("no petition request was sent")
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn summarize_contract(&self, _file: &Path) -> Result<SummaryReply, BackendError> {
        panic!("the wizard must never hit the summarization endpoint");
    }

    async fn generate_petition(
        &self,
        record: &IntakeRecord,
    ) -> Result<PetitionReply, BackendError> {
        let body = serde_json::to_value(record)
            .map_err(|e| BackendError::invalid_response(e.to_string()))?;
        *self.sent.lock().unwrap() = Some(body);
        Ok(PetitionReply {
            document: Some("Document text".to_string()),
        })
    }
}

#[tokio::test]
async fn test_full_wizard_happy_path() {
    let backend = RecordingBackend::new();
    let mut wizard = WizardView::new();

    // Step 1: narrative
    wizard.update_field(Field::Narrative, "Flight delayed 6 hours");
    wizard.advance();

    // Step 2: the nine structured fields
    wizard.update_field(Field::FullName, "João Pereira");
    wizard.update_field(Field::TaxId, "987.654.321-00");
    wizard.update_field(Field::Email, "joao@example.com");
    wizard.update_field(Field::Airline, "VoaBem");
    wizard.update_field(Field::FlightNumber, "VB1234");
    wizard.update_field(Field::OriginAirport, "GRU");
    wizard.update_field(Field::DestinationAirport, "SSA");
    wizard.update_field(Field::FlightDateTime, "2026-07-02 08:15");
    wizard.update_field(Field::Jurisdiction, "Salvador/BA");
    wizard.advance();

    // Step 3: offered perks, no requested amount
    wizard.toggle_offered(OfferedPerk::Hotel);
    wizard.toggle_offered(OfferedPerk::Nothing);
    assert!(wizard.on_last_step());

    wizard.submit(&backend).await;

    assert_eq!(
        backend.sent(),
        json!({
            "narrative": "Flight delayed 6 hours",
            "personal_info": {
                "full_name": "João Pereira",
                "tax_id": "987.654.321-00",
                "email": "joao@example.com"
            },
            "flight_info": {
                "airline": "VoaBem",
                "flight_number": "VB1234",
                "origin_airport": "GRU",
                "destination_airport": "SSA",
                "flight_date_time": "2026-07-02 08:15"
            },
            "jurisdiction": "Salvador/BA",
            "airline_offered": ["hotel", "nothing"]
        })
    );

    assert_eq!(wizard.result_document(), "Document text");
    assert!(!wizard.is_submitting());
}
