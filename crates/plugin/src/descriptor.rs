//! Plugin-Deskriptor
//!
//! Jedes Plugin liefert einen statischen Deskriptor mit seiner Identitaet
//! (id, name, version, enabled) und der Routen-Gruppe, die der Host unter
//! `routes.base_path` mountet.

use axum::Router;

use crate::error::{PluginError, Result};

/// Vollstaendiger Plugin-Deskriptor
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    /// Eindeutige ID innerhalb des Hosts
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Semver-Version (x.y.z)
    pub version: String,
    /// Soll der Host das Plugin aktivieren?
    pub enabled: bool,
    pub routes: PluginRouten,
}

/// Routen-Gruppe eines Plugins
#[derive(Debug, Clone)]
pub struct PluginRouten {
    /// Pfad-Praefix, z.B. `/formflow`
    pub base_path: String,
    /// Router relativ zum Basispfad
    pub router: Router,
}

impl PluginDescriptor {
    /// Validiert den Deskriptor auf Pflichtfelder und Konsistenz
    pub fn validieren(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PluginError::Deskriptor("Pflichtfeld fehlt: id".into()));
        }
        if self.name.trim().is_empty() {
            return Err(PluginError::Deskriptor("Pflichtfeld fehlt: name".into()));
        }
        if !ist_semver(&self.version) {
            return Err(PluginError::UngueltigeVersion(self.version.clone()));
        }
        basis_pfad_pruefen(&self.routes.base_path)
    }
}

/// Einfache Pruefung ob ein String semver-Format hat (x.y.z)
fn ist_semver(v: &str) -> bool {
    let teile: Vec<&str> = v.split('.').collect();
    if teile.len() != 3 {
        return false;
    }
    teile.iter().all(|t| t.parse::<u32>().is_ok())
}

/// Prueft einen Basispfad: absolut, ohne abschliessenden Slash, ohne
/// Platzhalter. Die Wurzel `/` ist fuer Plugins nicht erlaubt.
pub fn basis_pfad_pruefen(pfad: &str) -> Result<()> {
    if !pfad.starts_with('/') {
        return Err(PluginError::UngueltigerPfad(format!(
            "'{pfad}' muss mit '/' beginnen"
        )));
    }
    if pfad.ends_with('/') {
        return Err(PluginError::UngueltigerPfad(format!(
            "'{pfad}' darf nicht mit '/' enden"
        )));
    }
    if pfad.contains("//") {
        return Err(PluginError::UngueltigerPfad(format!(
            "'{pfad}' enthaelt leere Segmente"
        )));
    }
    if pfad.contains(['*', ':', '{', '}']) {
        return Err(PluginError::UngueltigerPfad(format!(
            "'{pfad}' enthaelt Platzhalter"
        )));
    }
    Ok(())
}
