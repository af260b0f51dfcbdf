//! Vertragsverletzungen im Acquire/Dismiss-Lebenszyklus eines Tools.

use super::ComponentId;
use thiserror::Error;

/// Integrationsfehler beim Binden eines Tools an eine Host-Komponente.
///
/// Diese Fehler zeigen Programmierfehler an (doppeltes Acquire, Dismiss ohne
/// Acquire) und werden nicht zur Laufzeit behandelt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Tool ist bereits an Komponente {0:?} gebunden")]
    AlreadyAcquired(ComponentId),
    #[error("Keine Komponente zum Binden angegeben")]
    NoComponent,
    #[error("Tool ist an keine Komponente gebunden")]
    NotAcquired,
    #[error("Tool ist an {bound:?} gebunden, nicht an {requested:?}")]
    ForeignComponent {
        bound: ComponentId,
        requested: ComponentId,
    },
}
