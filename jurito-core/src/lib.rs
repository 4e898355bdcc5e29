//! jurito-core - View state for the jurito legal-assistant client.
//!
//! Two independent screens, each a self-contained state machine:
//! contract upload-and-summarize ([`UploadView`]) and the three-step
//! flight-incident intake wizard ([`WizardView`]). Both talk to the remote
//! backend only through the [`Backend`] trait, so the state machines are
//! fully testable without a network.

pub mod backend;
pub mod error;
pub mod messages;
pub mod record;
pub mod upload;
pub mod wizard;

pub use backend::{Backend, PetitionReply, SummaryReply};
pub use error::{BackendError, Result};
pub use record::{FlightInfo, IntakeRecord, OfferedPerk, PersonalInfo};
pub use upload::UploadView;
pub use wizard::{Field, WizardView, TOTAL_STEPS};
