use tracing::debug;

use crate::error::MapError;
use crate::markup::ElementBuilder;
use crate::model::Kind;

use super::{Action, Opcode, Trigger, DO_NOTHING};

/// Action slots in one trigger element.
pub const MAX_SLOTS: usize = 10;

/// Actions per element once a trigger overflows. One slot short of
/// [`MAX_SLOTS`] so the game can chain the sibling elements.
pub const SPLIT_CHUNK_LEN: usize = 9;

/// Groups actions into per-element chunks.
///
/// A chunk may not end with "skip next action": the skipped action would sit
/// in the next element and the skip would silently do nothing.
pub(crate) fn chunk_actions<'a>(
    uid: &str,
    actions: &'a [Action],
) -> Result<Vec<&'a [Action]>, MapError> {
    if actions.len() <= MAX_SLOTS {
        return Ok(vec![actions]);
    }
    let chunks = actions.chunks(SPLIT_CHUNK_LEN).collect::<Vec<_>>();
    for (chunk_index, chunk) in chunks.iter().enumerate() {
        let ends_with_skip = chunk
            .last()
            .is_some_and(|action| action.opcode == Opcode::SkipNextIfNotEquals.code());
        if ends_with_skip {
            return Err(MapError::InvalidActionSplit {
                uid: uid.to_string(),
                chunk_index,
            });
        }
    }
    Ok(chunks)
}

pub(crate) fn render_trigger(trigger: &Trigger) -> Result<Vec<String>, MapError> {
    let chunks = chunk_actions(&trigger.uid, &trigger.actions)?;
    if chunks.len() > 1 {
        debug!(
            uid = %trigger.uid,
            actions = trigger.actions.len(),
            elements = chunks.len(),
            "trigger_split"
        );
    }
    chunks
        .into_iter()
        .map(|chunk| render_chunk(trigger, chunk))
        .collect()
}

fn render_chunk(trigger: &Trigger, chunk: &[Action]) -> Result<String, MapError> {
    let mut element = ElementBuilder::new(Kind::Trigger.tag())
        .attr("uid", &trigger.uid)
        .attr("x", trigger.x)
        .attr("y", trigger.y)
        .attr("enabled", trigger.enabled)
        .attr("maxcalls", trigger.maxcalls);
    let padding = DO_NOTHING;
    for slot in 0..MAX_SLOTS {
        let action = chunk.get(slot).unwrap_or(&padding);
        let n = slot + 1;
        element = element.attr(format!("actions_{n}_type"), action.opcode);
        if let Some(target_a) = action.args.first() {
            element = element.attr(format!("actions_{n}_targetA"), target_a);
        }
        if let Some(target_b) = action.args.get(1) {
            element = element.attr(format!("actions_{n}_targetB"), target_b);
        }
    }
    element.finish()
}
