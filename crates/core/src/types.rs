/// Record identifiers are UUIDs generated by the store on insert.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a raw path segment into an [`EntityId`].
///
/// Returns `None` for anything that is not a well-formed UUID, so callers can
/// treat a malformed id the same as an id that matches no record.
pub fn parse_id(raw: &str) -> Option<EntityId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}
