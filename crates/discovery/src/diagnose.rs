//! Diagnose des Discovery-Dienstes
//!
//! Holt die geteilte Instanz, protokolliert Metadaten, alle Knoten, die Knoten
//! der Quellen `universal` und `client` sowie die Verfuegbarkeit einiger
//! Pruefknoten. Fehler werden einmal protokolliert und unveraendert
//! weitergegeben.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{error, info};

use crate::error::Result;
use crate::service::DienstAnbieter;
use crate::types::{DienstMetadaten, KnotenBeschreibung, KnotenQuelle};

/// Knoten deren Verfuegbarkeit geprueft wird
pub const PRUEF_KNOTEN: [&str; 4] = ["fetch", "localStorage", "log-input", "math"];

/// Quellen deren Knotenlisten protokolliert werden
pub const PRUEF_QUELLEN: [KnotenQuelle; 2] = [KnotenQuelle::Universal, KnotenQuelle::Client];

/// Marker-Feld fuer fehlgeschlagene Diagnosen im Log
pub const FEHLER_MARKER: &str = "knoten_diagnose_fehlgeschlagen";

/// Vollstaendiges Ergebnis einer Diagnose
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnoseBericht {
    pub metadaten: DienstMetadaten,
    pub knoten: Vec<KnotenBeschreibung>,
    pub nach_quelle: BTreeMap<KnotenQuelle, Vec<KnotenBeschreibung>>,
    pub verfuegbarkeit: BTreeMap<String, bool>,
}

/// Fuehrt die Diagnose aus und gibt die Metadaten des Dienstes zurueck
pub async fn diagnose(anbieter: &dyn DienstAnbieter) -> Result<DienstMetadaten> {
    diagnose_bericht(anbieter).await.map(|b| b.metadaten)
}

/// Fuehrt die Diagnose aus und gibt den vollstaendigen Bericht zurueck
pub async fn diagnose_bericht(anbieter: &dyn DienstAnbieter) -> Result<DiagnoseBericht> {
    diagnose_bericht_fuer(anbieter, &PRUEF_QUELLEN).await
}

/// Wie [`diagnose_bericht`], listet aber die Knoten der angegebenen Quellen
pub async fn diagnose_bericht_fuer(
    anbieter: &dyn DienstAnbieter,
    quellen: &[KnotenQuelle],
) -> Result<DiagnoseBericht> {
    let dienst = match anbieter.instanz().await {
        Ok(d) => d,
        Err(e) => {
            error!(marker = FEHLER_MARKER, fehler = %e, "Knoten-Diagnose fehlgeschlagen");
            return Err(e);
        }
    };

    let metadaten = dienst.metadaten();
    info!(
        name = %metadaten.name,
        version = %metadaten.version,
        knoten_anzahl = metadaten.knoten_anzahl,
        "Dienst-Metadaten"
    );

    let knoten = dienst.verfuegbare_knoten();
    info!(knoten = ?ids(&knoten), "Verfuegbare Knoten");

    let mut nach_quelle = BTreeMap::new();
    for &quelle in quellen {
        let liste = dienst.knoten_nach_quelle(quelle);
        info!(quelle = %quelle, knoten = ?ids(&liste), "Knoten nach Quelle");
        nach_quelle.insert(quelle, liste);
    }

    let mut verfuegbarkeit = BTreeMap::new();
    for id in PRUEF_KNOTEN {
        let vorhanden = dienst.hat_knoten(id);
        info!(knoten = id, vorhanden, "Knoten-Verfuegbarkeit");
        verfuegbarkeit.insert(id.to_string(), vorhanden);
    }

    Ok(DiagnoseBericht {
        metadaten,
        knoten,
        nach_quelle,
        verfuegbarkeit,
    })
}

fn ids(knoten: &[KnotenBeschreibung]) -> Vec<&str> {
    knoten.iter().map(|k| k.id.as_str()).collect()
}
