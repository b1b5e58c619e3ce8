use uuid::Uuid;

use crate::ApiError;

/// The only authorization rule in the system: a record may be read or
/// mutated only by the user stored in its `owner` field.
pub fn ensure_owner(record_owner: Uuid, caller: Uuid) -> Result<(), ApiError> {
    if record_owner == caller {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

// ── Tests ──────────────────────────────────────────────────────
