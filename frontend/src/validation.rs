//! Client-side checks run before any network call.

use crate::config::ACCEPTED_EXTENSION;
use crate::error::ValidationError;

/// A user-selected file, as seen by validation and the upload model.
pub trait SelectedFile {
    /// File name including extension.
    fn file_name(&self) -> String;
    /// Size in bytes.
    fn file_size(&self) -> u64;
}

impl SelectedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn file_size(&self) -> u64 {
        self.size() as u64
    }
}

/// Check a selection against the extension and size rules.
///
/// The first offending file is reported; the extension check runs before
/// the size check for each file.
pub fn validate_files<F: SelectedFile>(files: &[F], max_size: u64) -> Result<(), ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::NoFiles);
    }

    for file in files {
        let name = file.file_name();
        if !name.to_lowercase().ends_with(ACCEPTED_EXTENSION) {
            return Err(ValidationError::NotPdf { name });
        }
        if file.file_size() > max_size {
            return Err(ValidationError::TooLarge {
                name,
                limit: max_size,
            });
        }
    }

    Ok(())
}

/// Combined byte size of a selection.
pub fn total_size<F: SelectedFile>(files: &[F]) -> u64 {
    files.iter().map(SelectedFile::file_size).sum()
}


#[cfg(test)]
mod tests {
    use super::test_support::FakeFile;
    use super::*;
    use crate::config::MAX_FILE_SIZE;

    #[test]
    fn test_empty_selection_rejected() {
        let files: Vec<FakeFile> = Vec::new();
        assert_eq!(validate_files(&files, MAX_FILE_SIZE), Err(ValidationError::NoFiles));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let files = vec![
            FakeFile::new("report.pdf", 10),
            FakeFile::new("REPORT-2.PDF", 10),
            FakeFile::new("Mixed.Pdf", 10),
        ];
        assert_eq!(validate_files(&files, MAX_FILE_SIZE), Ok(()));
    }

    #[test]
    fn test_non_pdf_named_in_error() {
        let files = vec![FakeFile::new("ok.pdf", 10), FakeFile::new("photo.jpg", 10)];
        let err = validate_files(&files, MAX_FILE_SIZE).unwrap_err();
        assert_eq!(err, ValidationError::NotPdf { name: "photo.jpg".into() });
        assert!(err.to_string().contains("photo.jpg"));

        let files = vec![FakeFile::new("report.pdf.exe", 10)];
        assert!(matches!(
            validate_files(&files, MAX_FILE_SIZE),
            Err(ValidationError::NotPdf { .. })
        ));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let at_limit = vec![FakeFile::new("edge.pdf", MAX_FILE_SIZE)];
        assert_eq!(validate_files(&at_limit, MAX_FILE_SIZE), Ok(()));

        let over = vec![FakeFile::new("big.pdf", MAX_FILE_SIZE + 1)];
        let err = validate_files(&over, MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("big.pdf"));
    }

    #[test]
    fn test_first_offender_reported() {
        let files = vec![
            FakeFile::new("big.pdf", MAX_FILE_SIZE + 1),
            FakeFile::new("notes.txt", 1),
        ];
        let err = validate_files(&files, MAX_FILE_SIZE).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { ref name, .. } if name == "big.pdf"));
    }

    #[test]
    fn test_extension_checked_before_size() {
        let files = vec![FakeFile::new("huge.zip", MAX_FILE_SIZE * 2)];
        let err = validate_files(&files, MAX_FILE_SIZE).unwrap_err();
        assert!(matches!(err, ValidationError::NotPdf { .. }));
    }

    #[test]
    fn test_total_size() {
        let files = vec![FakeFile::new("a.pdf", 100), FakeFile::new("b.pdf", 23)];
        assert_eq!(total_size(&files), 123);
    }
}
