//! Sidecar path derivation and file writing.
//!
//! Both binary sidecars go through [`write_atomic`]: the bytes land in a
//! `.tmp` sibling first and are renamed into place, so an interrupted or
//! failed write never leaves a partially-written sidecar for the renderer to
//! pick up.

use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the packed pixel buffer sidecar.
pub const PIXEL_EXT: &str = "rgb565";

/// Extension of the opacity bitmask sidecar.
pub const MASK_EXT: &str = "bmi";

/// Derive a sidecar path by replacing the input's extension.
pub fn sidecar_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `data` to `path` through a temporary sibling plus rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), String> {
    let staging = staging_path(path);

    if let Err(e) = fs::write(&staging, data) {
        let _ = fs::remove_file(&staging);
        return Err(format!("Failed to write {}: {}", path.display(), e));
    }

    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(format!(
            "Failed to move {} into place: {}",
            path.display(),
            e
        ));
    }

    Ok(())
}

/// Write the optional metadata sidecar: a small JSON object recording the
/// dimensions and output sizes, so the renderer-side tooling does not need
/// out-of-band knowledge of the raw buffers.
pub fn write_metadata(
    path: &Path,
    name: &str,
    width: usize,
    height: usize,
    outputs: &[(&str, &Path, usize)],
) -> Result<(), String> {
    let mut json = String::new();
    json.push_str("{\n");
    json.push_str(&format!("  \"name\": \"{}\",\n", name));
    json.push_str("  \"type\": \"bitmap\",\n");
    json.push_str(&format!("  \"width\": {},\n", width));
    json.push_str(&format!("  \"height\": {},\n", height));
    json.push_str("  \"format\": \"RGB565\",\n");
    json.push_str("  \"outputs\": [\n");
    for (i, (output_type, output_path, size)) in outputs.iter().enumerate() {
        json.push_str("    {\n");
        json.push_str(&format!("      \"type\": \"{}\",\n", output_type));
        json.push_str(&format!("      \"path\": \"{}\",\n", output_path.display()));
        json.push_str(&format!("      \"size_bytes\": {}\n", size));
        if i < outputs.len() - 1 {
            json.push_str("    },\n");
        } else {
            json.push_str("    }\n");
        }
    }
    json.push_str("  ]\n");
    json.push_str("}\n");

    write_atomic(path, json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("lcdpack-{}-{}-{}", tag, std::process::id(), nanos));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_sidecar_path_replaces_extension() {
        let input = Path::new("/assets/sprite.png");
        assert_eq!(sidecar_path(input, PIXEL_EXT), Path::new("/assets/sprite.rgb565"));
        assert_eq!(sidecar_path(input, MASK_EXT), Path::new("/assets/sprite.bmi"));
    }

    #[test]
    fn test_write_atomic_leaves_no_staging_file() {
        let dir = scratch_dir("atomic");
        let target = dir.join("out.rgb565");

        write_atomic(&target, &[1, 2, 3]).unwrap();

        assert_eq!(fs::read(&target).unwrap(), vec![1, 2, 3]);
        assert!(!staging_path(&target).exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_atomic_overwrites_existing() {
        let dir = scratch_dir("overwrite");
        let target = dir.join("out.bmi");

        fs::write(&target, b"old").unwrap();
        write_atomic(&target, b"new").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"new");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_atomic_unwritable_path_is_an_error() {
        let result = write_atomic(Path::new("/nonexistent-dir/out.rgb565"), &[0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_metadata_records_dimensions_and_outputs() {
        let dir = scratch_dir("metadata");
        let target = dir.join("sprite.json");

        let pixel_path = dir.join("sprite.rgb565");
        let mask_path = dir.join("sprite.bmi");
        write_metadata(
            &target,
            "sprite",
            32,
            16,
            &[
                ("pixels", pixel_path.as_path(), 1024),
                ("mask", mask_path.as_path(), 64),
            ],
        )
        .unwrap();

        let json = fs::read_to_string(&target).unwrap();
        assert!(json.contains("\"name\": \"sprite\""));
        assert!(json.contains("\"width\": 32"));
        assert!(json.contains("\"height\": 16"));
        assert!(json.contains("\"format\": \"RGB565\""));
        assert!(json.contains("\"size_bytes\": 1024"));
        assert!(json.contains("\"size_bytes\": 64"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
