use std::fs;
use std::io;
use std::path::Path;

/// Write a file so a concurrent reader never observes a truncated version.
///
/// Writes to a `.tmp` sibling in the same directory, then renames over the
/// target. Each output file has a single writer, so the temp name cannot
/// collide between producers.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = std::env::temp_dir().join("dashboard-write-atomic-test");
        fs::create_dir_all(&dir).unwrap();
        let target = dir.join("out.json");

        write_atomic(&target, b"first").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"first");

        write_atomic(&target, b"second").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"second");

        // No temp file left behind
        assert!(!dir.join("out.tmp").exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
