//! formflow-discovery – Knoten-Discovery fuer FormFlow
//!
//! - [`service::KnotenDienst`] / [`service::DienstAnbieter`] – Vertrag des Dienstes
//! - [`catalog::KnotenKatalog`] – fester In-Memory-Katalog
//! - [`catalog::GeteilterDienst`] – lazy, prozessweit geteilte Instanz
//! - [`diagnose`] – protokolliert den Zustand eines Dienstes

pub mod catalog;
pub mod diagnose;
pub mod error;
pub mod service;
pub mod types;

pub use catalog::{GeteilterDienst, KnotenKatalog};
pub use diagnose::{diagnose, diagnose_bericht, diagnose_bericht_fuer, DiagnoseBericht};
pub use error::{DiscoveryError, Result};
pub use service::{DienstAnbieter, KnotenDienst};
pub use types::{DienstMetadaten, KnotenBeschreibung, KnotenQuelle};
