//! Grundlegende Typen der Knoten-Discovery

use serde::{Deserialize, Serialize};

use crate::error::DiscoveryError;

/// Herkunft eines Knotens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnotenQuelle {
    /// Laeuft ueberall
    Universal,
    /// Nur im Client (Browser)
    Client,
    /// Nur auf dem Server
    Server,
}

impl KnotenQuelle {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnotenQuelle::Universal => "universal",
            KnotenQuelle::Client => "client",
            KnotenQuelle::Server => "server",
        }
    }
}

impl std::fmt::Display for KnotenQuelle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for KnotenQuelle {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "universal" => Ok(KnotenQuelle::Universal),
            "client" => Ok(KnotenQuelle::Client),
            "server" => Ok(KnotenQuelle::Server),
            andere => Err(DiscoveryError::UnbekannteQuelle(andere.to_string())),
        }
    }
}

/// Beschreibung eines verfuegbaren Knotens (Capability)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnotenBeschreibung {
    pub id: String,
    pub quelle: KnotenQuelle,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beschreibung: Option<String>,
}

impl KnotenBeschreibung {
    pub fn neu(id: &str, quelle: KnotenQuelle, name: &str) -> Self {
        Self {
            id: id.to_string(),
            quelle,
            name: name.to_string(),
            beschreibung: None,
        }
    }

    pub fn mit_beschreibung(mut self, beschreibung: &str) -> Self {
        self.beschreibung = Some(beschreibung.to_string());
        self
    }
}

/// Allgemeine Metadaten eines Discovery-Dienstes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DienstMetadaten {
    pub name: String,
    pub version: String,
    pub knoten_anzahl: usize,
    /// Vorhandene Quellen in Reihenfolge des ersten Auftretens
    pub quellen: Vec<KnotenQuelle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quelle_parsen() {
        assert_eq!("client".parse::<KnotenQuelle>().unwrap(), KnotenQuelle::Client);
        assert_eq!(
            "universal".parse::<KnotenQuelle>().unwrap(),
            KnotenQuelle::Universal
        );
        let err = "Client".parse::<KnotenQuelle>().unwrap_err();
        assert!(matches!(err, DiscoveryError::UnbekannteQuelle(_)));
    }

    #[test]
    fn quelle_json_kleingeschrieben() {
        let k = KnotenBeschreibung::neu("fetch", KnotenQuelle::Client, "Fetch");
        let json = serde_json::to_value(&k).unwrap();
        assert_eq!(json["quelle"], "client");
        assert!(json.get("beschreibung").is_none());
    }
}
