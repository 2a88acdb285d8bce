//! Typed values held by callers and displayed by input controls.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::kind::InputKind;

/// A file picked through a file input.
///
/// The handle describes the file; it never holds its contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    path: Option<PathBuf>,
    size: Option<u64>,
    mime: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            size: None,
            mime: None,
            last_modified: None,
        }
    }

    /// Describe a file on disk. Reads its metadata but not its contents.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            path: Some(path.to_path_buf()),
            size: Some(meta.len()),
            mime: None,
            last_modified: meta.modified().ok(),
        })
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        let mime = mime.into();
        self.mime = (!mime.is_empty()).then_some(mime);
        self
    }

    pub fn with_last_modified(mut self, at: SystemTime) -> Self {
        self.last_modified = Some(at);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }
}

/// Files selected by a `multiple` file input, in selection order.
///
/// Never empty: an empty selection is represented by an absent value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileList(Vec<FileHandle>);

impl FileList {
    /// Returns `None` when `files` is empty.
    pub fn new(files: Vec<FileHandle>) -> Option<Self> {
        (!files.is_empty()).then_some(Self(files))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> &FileHandle {
        &self.0[0]
    }

    pub fn get(&self, index: usize) -> Option<&FileHandle> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileHandle> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[FileHandle] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileHandle;
    type IntoIter = std::slice::Iter<'a, FileHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Semantically typed value of an input. Absence is `Option::None`.
///
/// Which variant is expected depends on the [`InputKind`] and, for files,
/// on the `multiple` flag; see [`InputValue::check`].
#[derive(Clone, Debug, PartialEq)]
pub enum InputValue {
    Text(String),
    Number(f64),
    File(FileHandle),
    Files(FileList),
}

impl InputValue {
    /// A text value, or `None` for the empty string.
    pub fn text(s: impl Into<String>) -> Option<InputValue> {
        let s = s.into();
        (!s.is_empty()).then_some(InputValue::Text(s))
    }

    /// A number value, or `None` for NaN and infinities.
    pub fn number(n: f64) -> Option<InputValue> {
        n.is_finite().then_some(InputValue::Number(n))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            InputValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            InputValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileHandle> {
        match self {
            InputValue::File(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_files(&self) -> Option<&FileList> {
        match self {
            InputValue::Files(files) => Some(files),
            _ => None,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            InputValue::Text(_) => "text",
            InputValue::Number(_) => "number",
            InputValue::File(_) => "file",
            InputValue::Files(_) => "file list",
        }
    }

    /// Validate this value against the runtime tag of the control holding it.
    ///
    /// - `file` + `multiple` expects [`InputValue::Files`]
    /// - `file` expects [`InputValue::File`]
    /// - `number` expects a finite [`InputValue::Number`]
    /// - every other kind expects non-empty [`InputValue::Text`]
    pub fn check(&self, kind: InputKind, multiple: bool) -> Result<(), ValueKindMismatch> {
        let ok = match (kind, self) {
            (InputKind::File, InputValue::Files(_)) => multiple,
            (InputKind::File, InputValue::File(_)) => !multiple,
            (InputKind::Number, InputValue::Number(n)) => n.is_finite(),
            (k, InputValue::Text(s)) if k.is_string_valued() => !s.is_empty(),
            _ => false,
        };
        if ok {
            return Ok(());
        }

        let found = match self {
            InputValue::Text(s) if s.is_empty() => "empty text",
            InputValue::Number(n) if !n.is_finite() => "non-finite number",
            other => other.variant_name(),
        };
        Err(ValueKindMismatch {
            kind,
            multiple,
            found,
        })
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Text(s) => write!(f, "{s:?}"),
            InputValue::Number(n) => f.write_str(&tools::format_number(*n)),
            InputValue::File(file) => write!(f, "<{}>", file.name()),
            InputValue::Files(files) => {
                f.write_str("[")?;
                for (i, file) in files.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "<{}>", file.name())?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Text(s)
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

impl From<FileHandle> for InputValue {
    fn from(file: FileHandle) -> Self {
        InputValue::File(file)
    }
}

impl From<FileList> for InputValue {
    fn from(files: FileList) -> Self {
        InputValue::Files(files)
    }
}

/// A caller-supplied value does not fit the control's kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueKindMismatch {
    pub kind: InputKind,
    pub multiple: bool,
    pub found: &'static str,
}

impl fmt::Display for ValueKindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = match self.kind {
            InputKind::File if self.multiple => "file list",
            InputKind::File => "file",
            InputKind::Number => "finite number",
            _ => "non-empty text",
        };
        write!(
            f,
            "{} input expects a {expected} value, found {}",
            self.kind, self.found
        )
    }
}

impl std::error::Error for ValueKindMismatch {}
