use std::collections::BTreeMap;

use roxmltree::{Document, Node, TextPos};
use tracing::{debug, info};

use crate::error::{MapError, SourceLocation};
use crate::markup::AttributeReader;
use crate::model::{Kind, MapEntity};

use super::MapDocument;

const SYNTHETIC_ROOT_OPEN: &str = "<root>";
const SYNTHETIC_ROOT_CLOSE: &str = "</root>";

impl MapDocument {
    /// Parses map markup: a flat run of elements, optionally preceded by an
    /// XML declaration. Fails on the first invalid element; nothing is
    /// returned in that case.
    pub fn import(text: &str) -> Result<MapDocument, MapError> {
        let wrapped = format!(
            "{SYNTHETIC_ROOT_OPEN}{}{SYNTHETIC_ROOT_CLOSE}",
            blank_declaration(text)
        );
        let doc = Document::parse(&wrapped).map_err(|error| MapError::MalformedDocument {
            message: error.to_string(),
            location: source_location(error.pos()),
        })?;

        let mut document = MapDocument::new();
        let mut per_kind = BTreeMap::<Kind, usize>::new();
        for kind in Kind::ALL {
            let matches = doc
                .descendants()
                .filter(|node| node.is_element() && kind.matches_tag(node.tag_name().name()));
            for (element_index, node) in matches.enumerate() {
                let location = source_location(doc.text_pos_at(node.range().start));
                let reader = AttributeReader::new(node, kind, element_index, location);
                document.insert(MapEntity::from_markup(&reader)?);
                *per_kind.entry(kind).or_insert(0) += 1;
            }
        }

        let ignored = doc
            .root_element()
            .descendants()
            .skip(1)
            .filter(|node| is_unknown_element(node))
            .count();
        if ignored > 0 {
            debug!(ignored, "map_import_ignored_elements");
        }
        for (kind, count) in &per_kind {
            debug!(kind = kind.tag(), count, "map_import_kind");
        }
        info!(entities = document.len(), kinds = per_kind.len(), "map_import_complete");
        Ok(document)
    }
}

fn is_unknown_element(node: &Node<'_, '_>) -> bool {
    node.is_element() && Kind::from_tag(node.tag_name().name()).is_none()
}

/// Replaces a leading `<?xml ...?>` with spaces so it can sit inside the
/// synthetic root while every other byte keeps its position.
fn blank_declaration(text: &str) -> String {
    let body = text.trim_start_matches('\u{feff}');
    let leading = body.len() - body.trim_start().len();
    let rest = &body[leading..];
    if !rest.starts_with("<?xml") {
        return body.to_string();
    }
    let Some(end) = rest.find("?>") else {
        return body.to_string();
    };
    let end = leading + end + 2;
    let blanked = body[..end]
        .chars()
        .map(|ch| if ch == '\n' { '\n' } else { ' ' })
        .collect::<String>();
    format!("{blanked}{}", &body[end..])
}

/// Converts a position inside the wrapped text back to the caller's text.
fn source_location(pos: TextPos) -> SourceLocation {
    let line = pos.row as usize;
    let mut column = pos.col as usize;
    if line == 1 {
        column = column.saturating_sub(SYNTHETIC_ROOT_OPEN.len()).max(1);
    }
    SourceLocation { line, column }
}
