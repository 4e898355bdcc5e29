//! Flight-incident intake wizard state.
//!
//! Three fixed steps: (1) free-text narrative, (2) nine structured fields,
//! (3) perk multi-select plus an optional requested amount. Navigation clamps
//! at both ends, every field stays editable from any step, and submission is
//! only acted on from the last step. There is no path from a displayed result
//! back to editing.

use tracing::warn;

use crate::backend::Backend;
use crate::messages;
use crate::record::{IntakeRecord, OfferedPerk};

/// Number of wizard steps; step indices run `0..TOTAL_STEPS`
pub const TOTAL_STEPS: usize = 3;

/// Scalar fields the wizard can edit, one variant per input.
///
/// Typed field routing instead of stringly-typed names keeps
/// last-write-wins merges exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Narrative,
    FullName,
    TaxId,
    Email,
    Airline,
    FlightNumber,
    OriginAirport,
    DestinationAirport,
    FlightDateTime,
    Jurisdiction,
    RequestedAmount,
}

impl Field {
    /// Form label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Narrative => "Relato do ocorrido",
            Field::FullName => "Nome completo",
            Field::TaxId => "CPF",
            Field::Email => "E-mail",
            Field::Airline => "Companhia aérea",
            Field::FlightNumber => "Número do voo",
            Field::OriginAirport => "Aeroporto de origem",
            Field::DestinationAirport => "Aeroporto de destino",
            Field::FlightDateTime => "Data e hora do voo",
            Field::Jurisdiction => "Cidade/UF para ajuizamento",
            Field::RequestedAmount => "Valor pretendido (opcional)",
        }
    }
}

/// View state for the petition intake wizard
#[derive(Debug, Default)]
pub struct WizardView {
    step: usize,
    record: IntakeRecord,
    submitting: bool,
    result_document: String,
}

impl WizardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn on_last_step(&self) -> bool {
        self.step == TOTAL_STEPS - 1
    }

    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Generated petition text, or the empty string before submission
    pub fn result_document(&self) -> &str {
        &self.result_document
    }

    pub fn has_result(&self) -> bool {
        !self.result_document.is_empty()
    }

    /// Current value of a field, for rendering
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Narrative => &self.record.narrative,
            Field::FullName => &self.record.personal_info.full_name,
            Field::TaxId => &self.record.personal_info.tax_id,
            Field::Email => &self.record.personal_info.email,
            Field::Airline => &self.record.flight_info.airline,
            Field::FlightNumber => &self.record.flight_info.flight_number,
            Field::OriginAirport => &self.record.flight_info.origin_airport,
            Field::DestinationAirport => &self.record.flight_info.destination_airport,
            Field::FlightDateTime => &self.record.flight_info.flight_date_time,
            Field::Jurisdiction => &self.record.jurisdiction,
            Field::RequestedAmount => self.record.requested_amount.as_deref().unwrap_or(""),
        }
    }

    /// Replace a single field, last write wins, no validation.
    ///
    /// An empty requested amount means "no amount named" and is stored as
    /// absent so it drops out of the wire format entirely.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Narrative => self.record.narrative = value,
            Field::FullName => self.record.personal_info.full_name = value,
            Field::TaxId => self.record.personal_info.tax_id = value,
            Field::Email => self.record.personal_info.email = value,
            Field::Airline => self.record.flight_info.airline = value,
            Field::FlightNumber => self.record.flight_info.flight_number = value,
            Field::OriginAirport => self.record.flight_info.origin_airport = value,
            Field::DestinationAirport => self.record.flight_info.destination_airport = value,
            Field::FlightDateTime => self.record.flight_info.flight_date_time = value,
            Field::Jurisdiction => self.record.jurisdiction = value,
            Field::RequestedAmount => {
                self.record.requested_amount = if value.is_empty() { None } else { Some(value) };
            }
        }
    }

    /// Symmetric-difference update: present → remove, absent → add
    pub fn toggle_offered(&mut self, perk: OfferedPerk) {
        if !self.record.airline_offered.remove(&perk) {
            self.record.airline_offered.insert(perk);
        }
    }

    pub fn offered(&self, perk: OfferedPerk) -> bool {
        self.record.airline_offered.contains(&perk)
    }

    /// Move to the next step; no-op on the last step
    pub fn advance(&mut self) {
        if self.step < TOTAL_STEPS - 1 {
            self.step += 1;
        }
    }

    /// Move to the previous step; no-op on step 0
    pub fn retreat(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    /// Submit the full record for petition generation.
    ///
    /// Only acted on from the last step, and ignored while a request is
    /// already in flight; both guards hold regardless of what the UI layer
    /// enables. Every completion path clears the submitting flag.
    pub async fn submit(&mut self, backend: &dyn Backend) {
        if self.submitting || !self.on_last_step() {
            return;
        }

        self.submitting = true;
        match backend.generate_petition(&self.record).await {
            Ok(reply) => {
                self.result_document = reply
                    .document
                    .unwrap_or_else(|| messages::PETITION_UNAVAILABLE.to_string());
            }
            Err(err) => {
                warn!(error = %err, "petition generation failed");
                self.result_document = messages::PETITION_CONNECTION_ERROR.to_string();
            }
        }
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::backend::{PetitionReply, SummaryReply};
    use crate::error::{BackendError, Result};

    struct StubBackend {
        document: std::result::Result<Option<&'static str>, ()>,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn returning(document: std::result::Result<Option<&'static str>, ()>) -> Self {
            Self {
                document,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Backend for StubBackend {
        async fn summarize_contract(&self, _file: &Path) -> Result<SummaryReply> {
            panic!("wizard must never summarize contracts");
        }

        async fn generate_petition(&self, _record: &IntakeRecord) -> Result<PetitionReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.document {
                Ok(document) => Ok(PetitionReply {
                    document: document.map(str::to_string),
                }),
                Err(()) => Err(BackendError::Timeout),
            }
        }
    }

    fn view_on_last_step() -> WizardView {
        let mut view = WizardView::new();
        view.advance();
        view.advance();
        assert!(view.on_last_step());
        view
    }

    #[test]
    fn test_advance_clamps_at_last_step() {
        let mut view = view_on_last_step();
        view.advance();
        assert_eq!(view.step(), TOTAL_STEPS - 1);
    }

    #[test]
    fn test_retreat_clamps_at_first_step() {
        let mut view = WizardView::new();
        view.retreat();
        assert_eq!(view.step(), 0);
    }

    #[test]
    fn test_toggle_offered_is_an_involution() {
        let mut view = WizardView::new();
        let before = view.record().airline_offered.clone();

        view.toggle_offered(OfferedPerk::Hotel);
        assert!(view.offered(OfferedPerk::Hotel));

        view.toggle_offered(OfferedPerk::Hotel);
        assert_eq!(view.record().airline_offered, before);
    }

    #[test]
    fn test_update_field_is_last_write_wins() {
        let mut view = WizardView::new();
        view.update_field(Field::Airline, "VoaBem");
        view.update_field(Field::Airline, "AzulZul");
        assert_eq!(view.field(Field::Airline), "AzulZul");
    }

    #[test]
    fn test_fields_stay_editable_from_any_step() {
        let mut view = view_on_last_step();
        view.update_field(Field::Narrative, "editado no último passo");
        assert_eq!(view.field(Field::Narrative), "editado no último passo");
    }

    #[test]
    fn test_empty_requested_amount_is_absent() {
        let mut view = WizardView::new();
        view.update_field(Field::RequestedAmount, "R$ 100,00");
        assert_eq!(view.record().requested_amount.as_deref(), Some("R$ 100,00"));

        view.update_field(Field::RequestedAmount, "");
        assert!(view.record().requested_amount.is_none());
    }

    #[tokio::test]
    async fn test_submit_before_last_step_never_calls_backend() {
        let backend = StubBackend::returning(Ok(Some("ignored")));
        let mut view = WizardView::new();
        view.advance();

        view.submit(&backend).await;

        assert_eq!(backend.calls(), 0);
        assert!(!view.has_result());
    }

    #[tokio::test]
    async fn test_successful_petition_is_displayed() {
        let backend = StubBackend::returning(Ok(Some("Document text")));
        let mut view = view_on_last_step();

        view.submit(&backend).await;

        assert_eq!(backend.calls(), 1);
        assert_eq!(view.result_document(), "Document text");
        assert!(!view.is_submitting());
    }

    #[tokio::test]
    async fn test_missing_document_field_falls_back() {
        let backend = StubBackend::returning(Ok(None));
        let mut view = view_on_last_step();

        view.submit(&backend).await;

        assert_eq!(view.result_document(), messages::PETITION_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_failure_shows_connection_error() {
        let backend = StubBackend::returning(Err(()));
        let mut view = view_on_last_step();

        view.submit(&backend).await;

        assert_eq!(view.result_document(), messages::PETITION_CONNECTION_ERROR);
        assert!(!view.is_submitting());
    }
}
