use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
}

/// Read a file addressed relative to a root directory
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file under a root directory, creating parents as needed
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the content directory, sorted for determinism
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Recursively copy a directory tree, returning the number of files copied
pub fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<usize, IoError> {
    fs::create_dir_all(dest).map_err(IoError::Io)?;

    let mut copied = 0;
    for entry in fs::read_dir(source).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let source_item = entry.path();
        let dest_item = dest.join(entry.file_name());

        if source_item.is_dir() {
            copied += copy_dir_recursive(&source_item, &dest_item)?;
        } else {
            fs::copy(&source_item, &dest_item).map_err(IoError::Io)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Express `path` relative to `root` as a RelativePathBuf
pub fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    let stripped = path
        .strip_prefix(root)
        .map_err(|_| IoError::NotFound(path.to_path_buf()))?;
    RelativePathBuf::from_path(stripped).map_err(|_| IoError::NonUtf8Path(stripped.to_path_buf()))
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn scan_finds_markdown_files() {
        let dir = TempDir::new().unwrap();
        create_file(dir.path(), "index.md", "# Home");
        create_file(dir.path(), "blog/post.md", "# Post");

        let files = scan_markdown_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("index.md")));
        assert!(files.iter().any(|f| f.ends_with("blog/post.md")));
    }

    #[test]
    fn scan_ignores_other_extensions() {
        let dir = TempDir::new().unwrap();
        create_file(dir.path(), "page.md", "# Page");
        create_file(dir.path(), "style.css", "body {}");
        create_file(dir.path(), "notes.txt", "notes");

        let files = scan_markdown_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("page.md"));
    }

    #[test]
    fn scan_results_are_sorted() {
        let dir = TempDir::new().unwrap();
        create_file(dir.path(), "b.md", "");
        create_file(dir.path(), "a.md", "");
        create_file(dir.path(), "c.md", "");

        let files = scan_markdown_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn scan_missing_directory_fails() {
        let result = scan_markdown_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidContentDir(_))));
    }

    #[test]
    fn read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = read_file(RelativePath::new("nope.md"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let rel = RelativePath::new("deep/nested/file.html");

        write_file(rel, dir.path(), "<div></div>").unwrap();

        assert_eq!(
            fs::read_to_string(rel.to_path(dir.path())).unwrap(),
            "<div></div>"
        );
    }

    #[test]
    fn copy_dir_copies_nested_tree() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        create_file(src.path(), "style.css", "body {}");
        create_file(src.path(), "images/logo.png", "png bytes");

        let copied = copy_dir_recursive(src.path(), &dst.path().join("out")).unwrap();

        assert_eq!(copied, 2);
        assert!(dst.path().join("out/style.css").exists());
        assert!(dst.path().join("out/images/logo.png").exists());
    }

    #[test]
    fn relative_to_strips_the_root() {
        let rel = relative_to(Path::new("/site/content/blog/post.md"), Path::new("/site/content"))
            .unwrap();
        assert_eq!(rel, RelativePathBuf::from("blog/post.md"));
    }

    #[test]
    fn relative_to_outside_root_fails() {
        let result = relative_to(Path::new("/elsewhere/post.md"), Path::new("/site/content"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn validate_rejects_missing_dir() {
        assert!(matches!(
            validate_content_dir(Path::new("/nonexistent/path")),
            Err(IoError::InvalidContentDir(_))
        ));
    }

    #[test]
    fn validate_accepts_existing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(validate_content_dir(dir.path()).is_ok());
    }
}
