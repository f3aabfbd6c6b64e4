pub mod json_file;

use crate::error::Result;
use crate::models::response::ResponseRecord;

/// Persistence seam for the response list. The whole list is the unit of
/// storage: `load` returns it in insertion order and `replace` overwrites it
/// wholesale. There is no partial update.
pub trait Storage: Send + Sync {
    /// Read the full record list. Fails open: a missing, unreadable or
    /// malformed backing store yields an empty list and never an error.
    fn load(&self) -> Vec<ResponseRecord>;

    /// Overwrite the backing store with the given records. Write failures
    /// propagate to the caller.
    fn replace(&self, records: &[ResponseRecord]) -> Result<()>;
}
