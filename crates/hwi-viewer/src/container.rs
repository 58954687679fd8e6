use crate::error::{HwiError, Result};
use log::debug;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

/// A PDF payload extracted from a `.hwi` container. The scratch directory
/// holding the payload is removed when this value is dropped, so the file
/// stays readable exactly as long as the extraction is alive.
#[derive(Debug)]
pub struct ExtractedPdf {
    dir: TempDir,
    pdf_path: PathBuf,
}

impl ExtractedPdf {
    pub fn pdf_path(&self) -> &Path {
        &self.pdf_path
    }

    pub fn scratch_dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Opens the `.hwi` archive at `path` and extracts its first `.pdf` member
/// (archive order) into a fresh scratch directory. Only the member's file
/// name is kept; archive-internal directories never escape the scratch dir.
pub fn extract_pdf(path: &Path) -> Result<ExtractedPdf> {
    if !path.exists() {
        return Err(HwiError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)
        .map_err(|e| HwiError::ArchiveRead(format!("Failed to open {}: {}", path.display(), e)))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| HwiError::ArchiveRead(format!("Not a valid HWI archive: {}", e)))?;

    let mut pdf_index = None;
    for i in 0..archive.len() {
        let member = archive
            .by_index(i)
            .map_err(|e| HwiError::ArchiveRead(format!("Bad archive entry {}: {}", i, e)))?;
        if member.name().ends_with(".pdf") {
            pdf_index = Some(i);
            break;
        }
    }
    let pdf_index = pdf_index.ok_or(HwiError::NoPdfFound)?;

    let dir = TempDir::new()
        .map_err(|e| HwiError::ExtractFailed(format!("Failed to create scratch dir: {}", e)))?;

    let mut member = archive
        .by_index(pdf_index)
        .map_err(|e| HwiError::ArchiveRead(format!("Bad archive entry {}: {}", pdf_index, e)))?;

    let file_name = member
        .enclosed_name()
        .and_then(|p| p.file_name().map(std::ffi::OsStr::to_owned))
        .ok_or_else(|| HwiError::ArchiveRead(format!("Unsafe member name: {}", member.name())))?;

    let pdf_path = dir.path().join(file_name);
    let mut out = File::create(&pdf_path)
        .map_err(|e| HwiError::ExtractFailed(format!("{}: {}", pdf_path.display(), e)))?;
    io::copy(&mut member, &mut out)
        .map_err(|e| HwiError::ExtractFailed(format!("{}: {}", pdf_path.display(), e)))?;

    debug!("Extracted {} to {}", member.name(), pdf_path.display());

    Ok(ExtractedPdf { dir, pdf_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn write_archive(path: &Path, members: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        for (name, data) in members {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_extracts_first_pdf_member() {
        let dir = TempDir::new().unwrap();
        let hwi = dir.path().join("doc.hwi");
        write_archive(
            &hwi,
            &[
                ("readme.txt", b"not a pdf"),
                ("first.pdf", b"%PDF-1.4 first"),
                ("second.pdf", b"%PDF-1.4 second"),
            ],
        );

        let extracted = extract_pdf(&hwi).unwrap();
        assert_eq!(extracted.pdf_path().file_name().unwrap(), "first.pdf");
        assert_eq!(fs::read(extracted.pdf_path()).unwrap(), b"%PDF-1.4 first");
    }

    #[test]
    fn test_nested_member_keeps_only_file_name() {
        let dir = TempDir::new().unwrap();
        let hwi = dir.path().join("doc.hwi");
        write_archive(&hwi, &[("payload/inner.pdf", b"%PDF-1.4")]);

        let extracted = extract_pdf(&hwi).unwrap();
        assert_eq!(extracted.pdf_path().file_name().unwrap(), "inner.pdf");
        assert_eq!(
            extracted.pdf_path().parent().unwrap(),
            extracted.scratch_dir()
        );
    }

    #[test]
    fn test_no_pdf_member() {
        let dir = TempDir::new().unwrap();
        let hwi = dir.path().join("doc.hwi");
        write_archive(&hwi, &[("a.txt", b"x"), ("b.png", b"y")]);

        match extract_pdf(&hwi) {
            Err(HwiError::NoPdfFound) => {}
            other => panic!("expected NoPdfFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let hwi = dir.path().join("absent.hwi");

        match extract_pdf(&hwi) {
            Err(HwiError::FileNotFound(p)) => assert_eq!(p, hwi),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_archive() {
        let dir = TempDir::new().unwrap();
        let hwi = dir.path().join("garbage.hwi");
        fs::write(&hwi, b"this is not a zip archive").unwrap();

        match extract_pdf(&hwi) {
            Err(HwiError::ArchiveRead(_)) => {}
            other => panic!("expected ArchiveRead, got {:?}", other),
        }
    }

    #[test]
    fn test_scratch_dir_removed_on_drop() {
        let dir = TempDir::new().unwrap();
        let hwi = dir.path().join("doc.hwi");
        write_archive(&hwi, &[("doc.pdf", b"%PDF-1.4")]);

        let extracted = extract_pdf(&hwi).unwrap();
        let scratch = extracted.scratch_dir().to_path_buf();
        assert!(scratch.exists());

        drop(extracted);
        assert!(!scratch.exists());
    }
}
