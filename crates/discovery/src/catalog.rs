//! In-Memory-Katalog und geteilte Instanz
//!
//! [`KnotenKatalog`] haelt eine feste, geordnete Knotenliste.
//! [`GeteilterDienst`] erzeugt seinen Dienst beim ersten Zugriff genau einmal
//! und liefert danach immer dieselbe Instanz. Fehler der Fabrik werden nicht
//! gespeichert, der naechste Zugriff versucht es erneut.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::error::{DiscoveryError, Result};
use crate::service::{DienstAnbieter, KnotenDienst};
use crate::types::{DienstMetadaten, KnotenBeschreibung, KnotenQuelle};

pub const KATALOG_NAME: &str = "formflow-knoten";

/// Fester Katalog verfuegbarer Knoten
#[derive(Debug, Clone)]
pub struct KnotenKatalog {
    name: String,
    version: String,
    knoten: Vec<KnotenBeschreibung>,
}

impl KnotenKatalog {
    /// Erstellt einen Katalog; Knoten-IDs muessen eindeutig sein
    pub fn neu(name: &str, version: &str, knoten: Vec<KnotenBeschreibung>) -> Result<Self> {
        let mut gesehen = HashSet::new();
        for k in &knoten {
            if !gesehen.insert(k.id.as_str()) {
                return Err(DiscoveryError::DoppelterKnoten(k.id.clone()));
            }
        }
        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            knoten,
        })
    }

    /// Der mitgelieferte Standardkatalog
    pub fn standard() -> Self {
        use KnotenQuelle::{Client, Server, Universal};

        let knoten = vec![
            KnotenBeschreibung::neu("math", Universal, "Mathematik")
                .mit_beschreibung("Arithmetik auf Formularwerten"),
            KnotenBeschreibung::neu("log-input", Universal, "Eingabe protokollieren"),
            KnotenBeschreibung::neu("text-template", Universal, "Textvorlage"),
            KnotenBeschreibung::neu("json-parse", Universal, "JSON parsen"),
            KnotenBeschreibung::neu("delay", Universal, "Verzoegerung"),
            KnotenBeschreibung::neu("fetch", Client, "HTTP-Abruf")
                .mit_beschreibung("fetch() im Browser"),
            KnotenBeschreibung::neu("localStorage", Client, "Lokaler Speicher"),
            KnotenBeschreibung::neu("alert", Client, "Hinweisdialog"),
            KnotenBeschreibung::neu("clipboard", Client, "Zwischenablage"),
            KnotenBeschreibung::neu("http-request", Server, "Server-HTTP-Anfrage"),
            KnotenBeschreibung::neu("file-read", Server, "Datei lesen"),
        ];

        Self {
            name: KATALOG_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            knoten,
        }
    }
}

impl KnotenDienst for KnotenKatalog {
    fn metadaten(&self) -> DienstMetadaten {
        let mut quellen = Vec::new();
        for k in &self.knoten {
            if !quellen.contains(&k.quelle) {
                quellen.push(k.quelle);
            }
        }
        DienstMetadaten {
            name: self.name.clone(),
            version: self.version.clone(),
            knoten_anzahl: self.knoten.len(),
            quellen,
        }
    }

    fn verfuegbare_knoten(&self) -> Vec<KnotenBeschreibung> {
        self.knoten.clone()
    }

    fn hat_knoten(&self, id: &str) -> bool {
        self.knoten.iter().any(|k| k.id == id)
    }
}

/// Fabrik-Typ fuer den geteilten Dienst
pub type DienstFabrik = Box<dyn Fn() -> Result<Arc<dyn KnotenDienst>> + Send + Sync>;

fn standard_fabrik() -> Result<Arc<dyn KnotenDienst>> {
    Ok(Arc::new(KnotenKatalog::standard()))
}

/// Lazy, prozessweit geteilte Dienst-Instanz
pub struct GeteilterDienst {
    zelle: OnceCell<Arc<dyn KnotenDienst>>,
    fabrik: DienstFabrik,
}

impl GeteilterDienst {
    /// Geteilter Dienst mit eigener Fabrik
    pub fn mit_fabrik(fabrik: DienstFabrik) -> Self {
        Self {
            zelle: OnceCell::new(),
            fabrik,
        }
    }

    /// Geteilter Dienst ueber dem Standardkatalog
    pub fn standard() -> Self {
        Self::mit_fabrik(Box::new(standard_fabrik))
    }

    /// Die prozessweite Standard-Instanz
    pub fn global() -> &'static GeteilterDienst {
        static GLOBAL: OnceLock<GeteilterDienst> = OnceLock::new();
        GLOBAL.get_or_init(GeteilterDienst::standard)
    }

    /// Wurde der Dienst bereits erzeugt?
    pub fn ist_initialisiert(&self) -> bool {
        self.zelle.initialized()
    }
}

#[async_trait]
impl DienstAnbieter for GeteilterDienst {
    async fn instanz(&self) -> Result<Arc<dyn KnotenDienst>> {
        let dienst = self
            .zelle
            .get_or_try_init(|| async {
                let dienst = (self.fabrik)()?;
                info!(
                    dienst = %dienst.metadaten().name,
                    "Discovery-Dienst initialisiert"
                );
                Ok::<_, DiscoveryError>(dienst)
            })
            .await?;
        debug!("Geteilte Dienst-Instanz ausgegeben");
        Ok(Arc::clone(dienst))
    }
}
