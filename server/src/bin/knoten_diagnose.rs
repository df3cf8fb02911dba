//! Knoten-Diagnose – manueller Blick auf den Discovery-Dienst
//!
//! Protokolliert Metadaten und Knotenlisten des Standardkatalogs und gibt den
//! Bericht als JSON auf stdout aus.
//!
//! Aufruf: `knoten-diagnose [QUELLE...]`, z.B. `knoten-diagnose server client`.
//! Ohne Argumente werden `universal` und `client` gelistet.

use anyhow::{Context, Result};
use formflow_discovery::diagnose::PRUEF_QUELLEN;
use formflow_discovery::{diagnose_bericht_fuer, GeteilterDienst, KnotenQuelle};

#[tokio::main]
async fn main() -> Result<()> {
    formflow_observability::logging_initialisieren("info", "text")
        .map_err(|e| anyhow::anyhow!("Logging-Initialisierung fehlgeschlagen: {e}"))?;

    let mut quellen = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<KnotenQuelle>())
        .collect::<Result<Vec<_>, _>>()
        .context("Ungueltige Quelle (erlaubt: universal, client, server)")?;
    if quellen.is_empty() {
        quellen = PRUEF_QUELLEN.to_vec();
    }

    let bericht = diagnose_bericht_fuer(GeteilterDienst::global(), &quellen).await?;
    println!("{}", serde_json::to_string_pretty(&bericht)?);
    Ok(())
}
