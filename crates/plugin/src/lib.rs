//! formflow-plugin – Plugin-System fuer FormFlow
//!
//! Plugins beschreiben sich ueber einen statischen Deskriptor (Identitaet und
//! Routen-Gruppe). Der Host validiert, registriert und mountet sie.
//!
//! # Architektur
//! - [`descriptor::PluginDescriptor`] – Identitaet + Routen eines Plugins
//! - [`registry::PluginRegistry`] – registrierte Plugins verwalten
//! - [`host::PluginHost`] – Registrierung und Router-Aufbau
//! - [`builtin`] – mitgelieferte Plugins (FormFlow)

pub mod builtin;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod registry;
pub mod types;

// Bequeme Re-Exporte
pub use descriptor::{PluginDescriptor, PluginRouten};
pub use error::{PluginError, Result};
pub use host::{HostKonfiguration, PluginHost};
pub use registry::PluginRegistry;
pub use types::{PluginInfo, PluginState};
