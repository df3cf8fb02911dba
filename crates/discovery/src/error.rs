//! Fehlertypen fuer die Knoten-Discovery

use thiserror::Error;

/// Alle moeglichen Fehler der Knoten-Discovery
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    #[error("Dienst nicht verfuegbar: {0}")]
    NichtVerfuegbar(String),

    #[error("Knoten doppelt definiert: {0}")]
    DoppelterKnoten(String),

    #[error("Unbekannte Knotenquelle: {0}")]
    UnbekannteQuelle(String),
}

/// Result-Alias fuer die Knoten-Discovery
pub type Result<T> = std::result::Result<T, DiscoveryError>;
