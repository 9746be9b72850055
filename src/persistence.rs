// src/persistence.rs
use crate::core::taxonomy::Taxonomy;
use crate::error::{Result, TaxonomyError};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Bumped whenever the serialized layout of `Taxonomy` changes.
const DICTIONARY_FORMAT_VERSION: u32 = 1;

/// Serializes a compiled taxonomy beside `path` and atomically renames it
/// into place, so a crash mid-save never leaves a truncated dictionary.
pub fn save_to_disk(taxonomy: &Taxonomy, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    writer.write_all(&DICTIONARY_FORMAT_VERSION.to_le_bytes())?;
    bincode::serialize_into(&mut writer, taxonomy)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path).map_err(io::Error::from)?;
    info!("taxonomy saved to {}", path.display());
    Ok(())
}

/// Loads a taxonomy written by [`save_to_disk`]. A dictionary with a
/// different format version is rejected rather than misread.
pub fn load_from_disk(path: &Path) -> Result<Taxonomy> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut version_bytes = [0u8; 4];
    reader.read_exact(&mut version_bytes)?;
    let found = u32::from_le_bytes(version_bytes);
    if found != DICTIONARY_FORMAT_VERSION {
        return Err(TaxonomyError::VersionMismatch {
            expected: DICTIONARY_FORMAT_VERSION,
            found,
        });
    }

    let taxonomy: Taxonomy = bincode::deserialize_from(reader)?;
    info!("taxonomy loaded from {}", path.display());
    Ok(taxonomy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::taxonomy::LexicalDatabase;
    use tempfile::tempdir;

    fn small_taxonomy() -> Taxonomy {
        let mut t = Taxonomy::new();
        let entity = t.add_sense("entity.n.01", &[]);
        let physical = t.add_sense("physical_entity.n.01", &[entity]);
        let rock = t.add_sense("rock.n.01", &[physical]);
        t.add_lemma("rock", rock);
        t
    }

    #[test]
    fn round_trips_through_disk() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempdir().unwrap();
        let path = dir.path().join("dictionary.bin");

        let original = small_taxonomy();
        save_to_disk(&original, &path).unwrap();

        let loaded = load_from_disk(&path).unwrap();
        assert_eq!(loaded.sense_count(), original.sense_count());
        let senses = loaded.lookup_noun_senses("rock");
        assert_eq!(senses.len(), 1);
        assert_eq!(loaded.name_of(senses[0]), "rock.n.01");
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dictionary.bin");
        save_to_disk(&small_taxonomy(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rejects_a_version_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dictionary.bin");

        let mut file = File::create(&path).unwrap();
        let wrong_version = DICTIONARY_FORMAT_VERSION + 1;
        file.write_all(&wrong_version.to_le_bytes()).unwrap();
        file.write_all(b"garbage").unwrap();
        drop(file);

        let err = load_from_disk(&path).unwrap_err();
        assert!(matches!(
            err,
            TaxonomyError::VersionMismatch { expected: DICTIONARY_FORMAT_VERSION, found } if found == wrong_version
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load_from_disk(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, TaxonomyError::Io(_)));
    }
}
