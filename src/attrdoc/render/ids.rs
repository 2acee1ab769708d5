//! Anchor ids
//!
//! [`text_to_id`] turns free text into an anchor-safe id. [`IdTable`] keeps
//! ids unique within one document: when an id is taken a second time, the
//! first holder is renamed to `<id>.v1` after the fact and the newcomer gets
//! `<id>.v2`, `<id>.v3`, ... Because earlier output can change, ids are
//! handed out as [`IdRef`]s and only turned into text once the document is
//! complete.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static ID_TRIM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^a-zA-Z0-9$_+.]+|[^a-zA-Z0-9$_+.]+$|'").unwrap());
static ID_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9$_+.]+").unwrap());

/// Convert text to an id.
///
/// Leading and trailing runs of characters outside `[a-zA-Z0-9$_+.]` are
/// dropped, as is every `'`. Inner runs become a single `-`. Text with no
/// id characters at all becomes `-`.
pub fn text_to_id(text: &str) -> String {
    let trimmed = ID_TRIM.replace_all(text, "");
    let id = ID_SEPARATORS.replace_all(&trimmed, "-");
    if id.is_empty() {
        "-".to_string()
    } else {
        id.into_owned()
    }
}

/// Handle to an id whose final text is known once rendering finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRef(usize);

#[derive(Debug)]
struct Slot {
    id: String,
    versioned: bool,
}

/// Per-document registry of handed-out ids
#[derive(Debug, Default)]
pub struct IdTable {
    /// Requested or generated id -> slot
    taken: HashMap<String, usize>,
    slots: Vec<Slot>,
}

impl IdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `id`, versioning it (and its first holder) on collision
    pub fn unique(&mut self, id: &str) -> IdRef {
        let mut assigned = id.to_string();
        let mut versioned = false;

        if let Some(&holder) = self.taken.get(id) {
            let first = &mut self.slots[holder];
            if !first.versioned {
                first.versioned = true;
                first.id = format!("{id}.v1");
            }

            let mut version = 2;
            assigned = loop {
                let candidate = format!("{id}.v{version}");
                if !self.taken.contains_key(&candidate) {
                    break candidate;
                }
                version += 1;
            };
            versioned = true;
            log::debug!("id '{id}' already taken, using '{assigned}'");
        }

        let slot = self.slots.len();
        self.slots.push(Slot {
            id: assigned.clone(),
            versioned,
        });
        self.taken.insert(assigned, slot);
        IdRef(slot)
    }

    /// The current text of an id
    pub fn resolve(&self, id: IdRef) -> &str {
        self.slots.get(id.0).map_or("", |slot| slot.id.as_str())
    }
}
