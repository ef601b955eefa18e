//! Storage loader: raw page text per page and locale under a content root.

use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Document, ParseError, ParseOptions};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Page not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content root: {0}")]
    InvalidContentRoot(String),
    #[error("Parse error in {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
}

/// Read a page and return its raw bytes as text.
///
/// Invalid UTF-8 is reported as a parse input error, not an io error.
pub fn read_page(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let bytes = fs::read(&absolute_path)?;
    String::from_utf8(bytes).map_err(|e| IoError::Parse {
        path: absolute_path,
        source: ParseError::Input(e.utf8_error()),
    })
}

/// `about.md` + `de` → `about.de.md`. Without a locale the path is unchanged.
pub fn locale_page_path(page: &RelativePath, locale: Option<&str>) -> RelativePathBuf {
    let Some(locale) = locale.filter(|l| !l.is_empty()) else {
        return page.to_relative_path_buf();
    };
    let stem = page.file_stem().unwrap_or_default();
    let file_name = match page.extension() {
        Some(ext) => format!("{stem}.{locale}.{ext}"),
        None => format!("{stem}.{locale}"),
    };
    page.with_file_name(file_name)
}

/// Read the locale variant of a page, falling back to the unlocalized page.
pub fn read_localized_page(
    page: &RelativePath,
    locale: Option<&str>,
    root: &Path,
) -> Result<String, IoError> {
    let localized = locale_page_path(page, locale);
    match read_page(&localized, root) {
        Err(IoError::NotFound(path)) if localized.as_str() != page.as_str() => {
            log::debug!("{} missing, falling back to {page}", path.display());
            read_page(page, root)
        }
        other => other,
    }
}

/// Read and parse a page.
pub fn load_document(
    page: &RelativePath,
    locale: Option<&str>,
    root: &Path,
    options: &ParseOptions,
) -> Result<Document, IoError> {
    let text = read_localized_page(page, locale, root)?;
    Document::parse_with(&text, options).map_err(|source| IoError::Parse {
        path: page.to_path(root),
        source,
    })
}

/// Scan for markdown pages below the content root, sorted.
pub fn scan_pages(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_root(root)?;
    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    Ok(())
}

pub fn validate_content_root(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentRoot(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, name: &str, content: &[u8]) {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn locale_path_inserts_locale_before_extension() {
        let page = RelativePath::new("pages/about.md");
        assert_eq!(locale_page_path(page, Some("de")).as_str(), "pages/about.de.md");
        assert_eq!(locale_page_path(page, None).as_str(), "pages/about.md");
        assert_eq!(locale_page_path(page, Some("")).as_str(), "pages/about.md");
    }

    #[test]
    fn localized_read_falls_back_to_default_page() {
        let root = TempDir::new().unwrap();
        write(root.path(), "about.md", b"default");
        write(root.path(), "about.fr.md", b"french");
        let page = RelativePath::new("about.md");
        assert_eq!(
            read_localized_page(page, Some("fr"), root.path()).unwrap(),
            "french"
        );
        assert_eq!(
            read_localized_page(page, Some("de"), root.path()).unwrap(),
            "default"
        );
    }

    #[test]
    fn missing_page_is_not_found() {
        let root = TempDir::new().unwrap();
        let err = read_page(RelativePath::new("nope.md"), root.path()).unwrap_err();
        assert!(matches!(err, IoError::NotFound(_)));
    }

    #[test]
    fn invalid_utf8_is_an_input_error() {
        let root = TempDir::new().unwrap();
        write(root.path(), "bad.md", &[0x66, 0xff, 0x66]);
        let err = read_page(RelativePath::new("bad.md"), root.path()).unwrap_err();
        assert!(matches!(
            err,
            IoError::Parse {
                source: ParseError::Input(_),
                ..
            }
        ));
    }

    #[test]
    fn load_document_parses_page() {
        let root = TempDir::new().unwrap();
        write(root.path(), "home.md", b"---\ntitle: Home\n---\n# Welcome");
        let doc = load_document(
            RelativePath::new("home.md"),
            None,
            root.path(),
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(doc.header_value("title"), Some("Home"));
        assert_eq!(doc.sections().len(), 1);
    }

    #[test]
    fn scan_finds_nested_markdown_sorted() {
        let root = TempDir::new().unwrap();
        write(root.path(), "b.md", b"");
        write(root.path(), "a/c.md", b"");
        write(root.path(), "a/skip.txt", b"");
        let files = scan_pages(root.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(root.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(names, vec![PathBuf::from("a/c.md"), PathBuf::from("b.md")]);
    }

    #[test]
    fn invalid_root_is_rejected() {
        let err = scan_pages(Path::new("/this/path/does/not/exist")).unwrap_err();
        assert!(matches!(err, IoError::InvalidContentRoot(_)));
    }
}
