//! Fixed user-facing strings.
//!
//! The product surfaces failures as fixed Portuguese strings rather than raw
//! error content; keeping them as constants makes the behavior testable and
//! keeps wording changes in one place. Structured causes are logged, not shown.

/// Shown when submit is pressed with no contract selected
pub const NO_FILE_SELECTED: &str = "Nenhum arquivo foi selecionado.";

/// Shown when the summarization response lacks the summary field
pub const SUMMARY_UNAVAILABLE: &str = "Não foi possível gerar o resumo.";

/// Shown when the summarization request fails outright
pub const SUMMARY_SERVER_ERROR: &str = "Erro ao se comunicar com o servidor.";

/// Shown when the petition response lacks the document field
pub const PETITION_UNAVAILABLE: &str = "Não foi possível gerar a petição.";

/// Shown when the petition request fails outright
pub const PETITION_CONNECTION_ERROR: &str = "Erro de conexão com o servidor.";
