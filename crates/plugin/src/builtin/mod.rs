//! Mitgelieferte Plugins

pub mod formflow;

use crate::descriptor::PluginDescriptor;

/// Alle mitgelieferten Plugin-Deskriptoren
pub fn alle() -> Vec<&'static PluginDescriptor> {
    vec![formflow::descriptor()]
}
