use tracing::info;

use crate::error::MapError;

use super::MapDocument;

impl MapDocument {
    /// Renders every entity, one element per line, grouped by kind in
    /// catalog order. Only trigger splitting can fail.
    pub fn export(&self) -> Result<String, MapError> {
        let mut lines = Vec::with_capacity(self.len());
        for entity in self.iter() {
            lines.extend(entity.render()?);
        }
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        info!(
            entities = self.len(),
            elements = lines.len(),
            bytes = out.len(),
            "map_export_complete"
        );
        Ok(out)
    }
}
