use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Selection;

/// Load a persisted selection from a JSON file.
///
/// Total over its domain: a missing file yields the default empty selection,
/// and malformed content is recovered to the default (with a warning) rather
/// than surfaced to the user. Missing or null fields are treated as unset;
/// duplicate persisted add-on ids are dropped.
pub fn load_selection<P: AsRef<Path>>(path: P) -> Selection {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Selection::default();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to read selection state");
            return Selection::default();
        }
    };

    match serde_json::from_str::<Selection>(&content) {
        Ok(mut selection) => {
            selection.dedup_add_ons();
            selection
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "malformed selection state, starting empty");
            Selection::default()
        }
    }
}

/// Save the selection to a JSON file. Last write wins.
pub fn save_selection<P: AsRef<Path>>(path: P, selection: &Selection) -> Result<()> {
    let json = serde_json::to_string_pretty(selection)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_load_roundtrip() {
        let selection = Selection {
            base: Some("coconut-water".into()),
            fruit_pack_id: Some("tropic-thunder".into()),
            protein: None,
            selected_add_ons: vec!["honey".into(), "mct".into()],
        };

        let file = NamedTempFile::new().unwrap();
        save_selection(file.path(), &selection).unwrap();

        let reloaded = load_selection(file.path());
        assert_eq!(reloaded, selection);
    }

    #[test]
    fn test_persisted_field_names() {
        let selection = Selection {
            base: Some("oat-milk".into()),
            fruit_pack_id: Some("bpm".into()),
            protein: Some("gold-vanilla".into()),
            selected_add_ons: vec!["chia".into()],
        };

        let file = NamedTempFile::new().unwrap();
        save_selection(file.path(), &selection).unwrap();

        let raw = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["base"], "oat-milk");
        assert_eq!(value["fruitPackId"], "bpm");
        assert_eq!(value["protein"], "gold-vanilla");
        assert_eq!(value["selectedAddOns"][0], "chia");
    }

    #[test]
    fn test_missing_file_yields_default() {
        let selection = load_selection("/no/such/dir/smoothie_state.json");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_malformed_content_recovered() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json at all").unwrap();
        assert!(load_selection(file.path()).is_empty());

        let mut file = NamedTempFile::new().unwrap();
        // Wrong container shape: an array instead of an object.
        file.write_all(b"[1, 2, 3]").unwrap();
        assert!(load_selection(file.path()).is_empty());
    }

    #[test]
    fn test_partial_state_treated_as_unset() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"fruitPackId": "gorilla"}"#).unwrap();

        let selection = load_selection(file.path());
        assert_eq!(selection.fruit_pack_id.as_deref(), Some("gorilla"));
        assert_eq!(selection.base, None);
        assert_eq!(selection.protein, None);
        assert!(selection.selected_add_ons.is_empty());
    }

    #[test]
    fn test_duplicate_add_ons_deduped_on_load() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"selectedAddOns": ["chia", "goji", "chia"]}"#)
            .unwrap();

        let selection = load_selection(file.path());
        assert_eq!(selection.selected_add_ons, vec!["chia", "goji"]);
    }
}
