use crate::model::RenumberError;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// replaces `target` with the output of `write_fn`.
///
/// output is streamed into a temporary file next to `target`, flushed and
/// synced, then renamed over `target`. if `write_fn` or any step after it
/// fails, the temporary file is removed and `target` is left as it was.
/// when `target` exists, its permissions are carried over to the new file.
pub fn replace_in_place<T, F>(target: &Path, write_fn: F) -> Result<T, RenumberError>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<T, RenumberError>,
{
    let directory = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::Builder::new()
        .prefix(".renumber.")
        .suffix(".temp.csv")
        .tempfile_in(directory)?;
    log::debug!("writing to temporary file {}", temp.path().display());

    let result = {
        let mut buffer = BufWriter::new(temp.as_file_mut());
        let result = write_fn(&mut buffer)?;
        buffer.flush()?;
        result
    };
    if let Ok(metadata) = std::fs::metadata(target) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }
    temp.as_file().sync_all()?;

    temp.persist(target)
        .map_err(|e| RenumberError::PersistError {
            path: target.display().to_string(),
            source: e.error,
        })?;
    Ok(result)
}
