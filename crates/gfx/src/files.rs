//! File selection for `file` inputs: the native dialog and drag-and-drop.

use std::path::PathBuf;

use egui::DroppedFile;
use input_core::FileHandle;

/// Extensions named by an `accept` attribute, without the leading dot.
/// MIME types such as `image/*` have no dialog filter and are skipped.
pub fn accept_extensions(accept: &str) -> Vec<String> {
    accept
        .split(',')
        .map(str::trim)
        .filter_map(|token| token.strip_prefix('.'))
        .filter(|ext| !ext.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Open the platform file dialog. `None` when the user cancelled.
pub fn pick(multiple: bool, accept: Option<&str>) -> Option<Vec<FileHandle>> {
    let mut dialog = rfd::FileDialog::new();
    if let Some(accept) = accept {
        let extensions = accept_extensions(accept);
        if !extensions.is_empty() {
            dialog = dialog.add_filter(accept, extensions.as_slice());
        }
    }

    let paths = if multiple {
        dialog.pick_files()?
    } else {
        vec![dialog.pick_file()?]
    };
    Some(handles_from_paths(paths))
}

pub fn handles_from_paths(paths: Vec<PathBuf>) -> Vec<FileHandle> {
    paths
        .into_iter()
        .filter_map(|path| match FileHandle::from_path(&path) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!(target: "gfx.typed_input", "skipping {}: {err}", path.display());
                None
            }
        })
        .collect()
}

/// A file dropped onto the window. Paths are stat'ed; in-memory drops keep
/// what egui knows about them.
pub fn handle_from_dropped(file: &DroppedFile) -> Option<FileHandle> {
    if let Some(path) = &file.path {
        return handles_from_paths(vec![path.clone()]).into_iter().next();
    }
    if file.name.is_empty() {
        return None;
    }

    let mut handle = FileHandle::new(file.name.clone());
    if !file.mime.is_empty() {
        handle = handle.with_mime(file.mime.clone());
    }
    if let Some(bytes) = &file.bytes {
        handle = handle.with_size(bytes.len() as u64);
    }
    if let Some(at) = file.last_modified {
        handle = handle.with_last_modified(at);
    }
    Some(handle)
}

/// Short description of a selection, as a native file input shows it.
pub fn summary(names: &[String]) -> String {
    match names {
        [] => "No file chosen".to_string(),
        [one] => one.clone(),
        many => format!("{} files", many.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn accept_keeps_extensions_only() {
        assert_eq!(
            accept_extensions("image/*, .PNG,.jpg ,application/pdf,."),
            vec!["png".to_string(), "jpg".to_string()]
        );
        assert!(accept_extensions("").is_empty());
    }

    #[test]
    fn in_memory_drop_keeps_metadata() {
        let dropped = DroppedFile {
            name: "notes.txt".into(),
            mime: "text/plain".into(),
            bytes: Some(Arc::from(&b"hello"[..])),
            ..Default::default()
        };
        let handle = handle_from_dropped(&dropped).unwrap();
        assert_eq!(handle.name(), "notes.txt");
        assert_eq!(handle.mime(), Some("text/plain"));
        assert_eq!(handle.size(), Some(5));
        assert_eq!(handle.path(), None);
    }

    #[test]
    fn nameless_drop_is_skipped() {
        assert!(handle_from_dropped(&DroppedFile::default()).is_none());
    }

    #[test]
    fn dropped_path_is_read_from_disk() {
        let dir = std::env::temp_dir().join(format!("gfx-drop-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("photo.jpg");
        std::fs::write(&path, b"jpeg").unwrap();

        let dropped = DroppedFile {
            path: Some(path.clone()),
            ..Default::default()
        };
        let handle = handle_from_dropped(&dropped).unwrap();
        assert_eq!(handle.name(), "photo.jpg");
        assert_eq!(handle.size(), Some(4));

        let missing = DroppedFile {
            path: Some(dir.join("gone.jpg")),
            ..Default::default()
        };
        assert!(handle_from_dropped(&missing).is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn summary_reads_like_a_native_control() {
        assert_eq!(summary(&[]), "No file chosen");
        assert_eq!(summary(&["a.pdf".into()]), "a.pdf");
        assert_eq!(summary(&["a".into(), "b".into()]), "2 files");
    }
}
