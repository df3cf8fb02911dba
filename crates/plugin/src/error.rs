//! Fehlertypen fuer das Plugin-System

use thiserror::Error;

/// Alle moeglichen Fehler im Plugin-System
#[derive(Debug, Error)]
pub enum PluginError {
    // --- Deskriptor ---
    #[error("Deskriptor-Fehler: {0}")]
    Deskriptor(String),

    #[error("Ungueltige Plugin-Version: {0}")]
    UngueltigeVersion(String),

    #[error("Ungueltiger Basispfad: {0}")]
    UngueltigerPfad(String),

    // --- Registry ---
    #[error("Plugin nicht gefunden: {0}")]
    NichtGefunden(String),

    #[error("Plugin bereits registriert: {0}")]
    BereitsRegistriert(String),

    #[error("Basispfad '{pfad}' ist bereits von Plugin '{belegt_von}' belegt")]
    PfadKonflikt { pfad: String, belegt_von: String },
}

/// Result-Alias fuer das Plugin-System
pub type Result<T> = std::result::Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fehler_anzeige_deskriptor() {
        let e = PluginError::Deskriptor("Pflichtfeld fehlt: id".into());
        assert_eq!(e.to_string(), "Deskriptor-Fehler: Pflichtfeld fehlt: id");
    }

    #[test]
    fn fehler_anzeige_pfad_konflikt() {
        let e = PluginError::PfadKonflikt {
            pfad: "/formflow".into(),
            belegt_von: "formflow".into(),
        };
        assert!(e.to_string().contains("/formflow"));
        assert!(e.to_string().contains("'formflow'"));
    }

    #[test]
    fn fehler_anzeige_bereits_registriert() {
        let e = PluginError::BereitsRegistriert("formflow".into());
        assert_eq!(e.to_string(), "Plugin bereits registriert: formflow");
    }
}
