/// Millisecond wall-clock id, the format the presentation layer already
/// expects for transaction ids.
pub fn timestamp_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
