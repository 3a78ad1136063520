//! Relay array-connection cursor helpers.
//!
//! WPGraphQL cursors are base64-encoded `arrayconnection:<databaseId>`
//! strings. They are opaque as far as the server contract goes, but decoding
//! them is handy for logging and for resuming offset-style iteration from a
//! cursor-paged response.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const ARRAY_CONNECTION_PREFIX: &str = "arrayconnection:";

/// Build the cursor for a given database ID.
#[must_use]
pub fn encode_cursor(database_id: i64) -> String {
    STANDARD.encode(format!("{ARRAY_CONNECTION_PREFIX}{database_id}"))
}

/// Extract the database ID from an array-connection cursor.
///
/// Returns `None` for cursors that are not valid base64, not UTF-8, or not
/// in the `arrayconnection:` format (other connection resolvers may use a
/// different layout).
#[must_use]
pub fn decode_cursor(cursor: &str) -> Option<i64> {
    let bytes = STANDARD.decode(cursor).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    decoded
        .strip_prefix(ARRAY_CONNECTION_PREFIX)?
        .parse::<i64>()
        .ok()
}
