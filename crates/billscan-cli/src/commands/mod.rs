pub mod extract;
pub mod report;
pub mod vocab;

use billscan_core::error::BillscanError;
use billscan_core::vocab::Vocabulary;
use std::path::PathBuf;

/// Load a vocabulary override from a JSON file, or fall back to the
/// builtin tables. Loaded tables are re-sorted for prefix precedence.
pub fn load_vocabulary(path: Option<PathBuf>) -> Result<Vocabulary, BillscanError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path).map_err(|e| BillscanError::VocabularyLoad {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let raw: Vocabulary =
                serde_json::from_str(&text).map_err(|e| BillscanError::VocabularyLoad {
                    path,
                    reason: e.to_string(),
                })?;
            Ok(Vocabulary::new(raw.services, raw.regions))
        }
        None => Ok(Vocabulary::builtin()),
    }
}
