//! Vertrag des Discovery-Dienstes
//!
//! [`KnotenDienst`] beantwortet synchrone Abfragen, [`DienstAnbieter`] liefert
//! asynchron die (geteilte) Instanz.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DienstMetadaten, KnotenBeschreibung, KnotenQuelle};

/// Abfragen gegen einen Discovery-Dienst
pub trait KnotenDienst: Send + Sync {
    /// Allgemeine Metadaten
    fn metadaten(&self) -> DienstMetadaten;

    /// Alle verfuegbaren Knoten in stabiler Reihenfolge
    fn verfuegbare_knoten(&self) -> Vec<KnotenBeschreibung>;

    /// Knoten einer Quelle, Reihenfolge wie in [`Self::verfuegbare_knoten`]
    fn knoten_nach_quelle(&self, quelle: KnotenQuelle) -> Vec<KnotenBeschreibung> {
        self.verfuegbare_knoten()
            .into_iter()
            .filter(|k| k.quelle == quelle)
            .collect()
    }

    /// Ist ein Knoten mit dieser ID verfuegbar?
    fn hat_knoten(&self, id: &str) -> bool {
        self.verfuegbare_knoten().iter().any(|k| k.id == id)
    }
}

/// Liefert eine Instanz eines Discovery-Dienstes
#[async_trait]
pub trait DienstAnbieter: Send + Sync {
    async fn instanz(&self) -> Result<Arc<dyn KnotenDienst>>;
}
