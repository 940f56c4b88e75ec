//! Merge of an update payload onto a stored person.

use crate::model::{Person, PersonPayload};

/// Overwrite every field of `person` that differs from `payload`.
/// Returns true when at least one field was dirty.
pub fn apply_payload(person: &mut Person, payload: &PersonPayload) -> bool {
    let mut changed = false;
    if person.first_name != payload.first_name {
        person.first_name.clone_from(&payload.first_name);
        changed = true;
    }
    if person.last_name != payload.last_name {
        person.last_name.clone_from(&payload.last_name);
        changed = true;
    }
    if person.age != payload.age {
        person.age = payload.age;
        changed = true;
    }
    changed
}
