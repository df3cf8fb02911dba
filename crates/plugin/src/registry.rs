//! Plugin Registry – verwaltet registrierte Plugins und ihre Metadaten

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{PluginError, Result};
use crate::types::{PluginInfo, PluginState};

/// Eintrag in der Registry
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEintrag {
    pub id: String,
    pub name: String,
    pub version: String,
    pub base_path: String,
    pub state: PluginState,
    pub registriert_am: DateTime<Utc>,
}

impl RegistryEintrag {
    /// Konvertiert den Eintrag in PluginInfo (fuer API)
    pub fn info(&self) -> PluginInfo {
        PluginInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            base_path: self.base_path.clone(),
            state: self.state,
            registriert_am: self.registriert_am,
        }
    }
}

/// Plugin Registry – thread-sicher via DashMap
pub struct PluginRegistry {
    eintraege: DashMap<String, RegistryEintrag>,
    /// Basispfad -> ID Lookup
    pfad_index: DashMap<String, String>,
}

impl PluginRegistry {
    /// Erstellt eine neue leere Registry
    pub fn neu() -> Self {
        Self {
            eintraege: DashMap::new(),
            pfad_index: DashMap::new(),
        }
    }

    /// Registriert ein Plugin. IDs und Basispfade muessen eindeutig sein,
    /// auch deaktivierte Plugins belegen ihren Pfad.
    ///
    /// Die ID wird zuerst geprueft, der Pfad danach atomar belegt, solange der
    /// ID-Eintrag noch gesperrt ist. Lock-Reihenfolge: `eintraege` vor
    /// `pfad_index`, keine andere Methode haelt beide gleichzeitig.
    pub fn registrieren(&self, eintrag: RegistryEintrag) -> Result<()> {
        let frei = match self.eintraege.entry(eintrag.id.clone()) {
            Entry::Occupied(_) => return Err(PluginError::BereitsRegistriert(eintrag.id)),
            Entry::Vacant(frei) => frei,
        };

        match self.pfad_index.entry(eintrag.base_path.clone()) {
            Entry::Occupied(belegt) => Err(PluginError::PfadKonflikt {
                pfad: eintrag.base_path,
                belegt_von: belegt.get().clone(),
            }),
            Entry::Vacant(pfad) => {
                pfad.insert(eintrag.id.clone());
                frei.insert(eintrag);
                Ok(())
            }
        }
    }

    /// Entfernt ein Plugin aus der Registry
    pub fn entfernen(&self, id: &str) -> Result<RegistryEintrag> {
        let (_, eintrag) = self
            .eintraege
            .remove(id)
            .ok_or_else(|| PluginError::NichtGefunden(id.to_string()))?;
        self.pfad_index
            .remove_if(&eintrag.base_path, |_, besitzer| *besitzer == eintrag.id);
        Ok(eintrag)
    }

    /// Sucht ein Plugin per ID
    pub fn per_id(&self, id: &str) -> Option<RegistryEintrag> {
        self.eintraege.get(id).map(|e| e.clone())
    }

    /// Gibt alle Eintraege nach ID sortiert zurueck
    pub fn alle(&self) -> Vec<RegistryEintrag> {
        let mut liste: Vec<RegistryEintrag> =
            self.eintraege.iter().map(|e| e.value().clone()).collect();
        liste.sort_by(|a, b| a.id.cmp(&b.id));
        liste
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::neu()
    }
}
