//! Page generation: the filesystem layer around the conversion pipeline.

use crate::error::SiteError;
use crate::models::SourcePage;
use crate::parsing::{markdown_to_html, title::extract_title};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, SiteError> {
    if !path.exists() {
        return Err(SiteError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(SiteError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(SiteError::Io)?;
    }

    fs::write(path, content).map_err(SiteError::Io)
}

/// Substitute every title and content placeholder in `template`
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Render one markdown document into a full page.
///
/// `source` is only used to label errors.
pub fn render_page(markdown: &str, template: &str, source: &Path) -> Result<String, SiteError> {
    let title = extract_title(markdown).map_err(|_| SiteError::MissingTitle {
        path: source.to_path_buf(),
    })?;
    let content = markdown_to_html(markdown).map_err(|source_err| SiteError::Convert {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    Ok(fill_template(template, &title, &content))
}

/// Generate a single page from a markdown file and a template file
pub fn generate_page(source: &Path, template_path: &Path, dest: &Path) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        source.display(),
        dest.display(),
        template_path.display()
    );
    let markdown = read_file(source)?;
    let template = read_file(template_path)?;
    let page = render_page(&markdown, &template, source)?;
    write_file(dest, &page)
}

/// Generate a page for every markdown file under `content_dir`, mirroring the
/// directory layout under `output_dir`. Returns the written paths in order.
pub fn generate_site(
    content_dir: &Path,
    template_path: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, SiteError> {
    let template = read_file(template_path)?;
    let pages = collect_pages(content_dir)?;

    let mut written = Vec::with_capacity(pages.len());
    for page in pages {
        let source = page.relative_path().to_path(content_dir);
        let dest = page.output_path().to_path(output_dir);

        let markdown = read_file(&source)?;
        let html = render_page(&markdown, &template, &source)?;
        write_file(&dest, &html)?;

        log::info!("Wrote {}", dest.display());
        written.push(dest);
    }

    Ok(written)
}

/// Scan for markdown files under the content directory
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, SiteError> {
    validate_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Scan for markdown files and express them relative to the content root
pub fn collect_pages(content_root: &Path) -> Result<Vec<SourcePage>, SiteError> {
    scan_markdown_files(content_root)?
        .into_iter()
        .map(|file| {
            let relative = file
                .strip_prefix(content_root)
                .ok()
                .and_then(|rel| RelativePathBuf::from_path(rel).ok())
                .ok_or_else(|| {
                    SiteError::InvalidDirectory(format!(
                        "{} is not inside {}",
                        file.display(),
                        content_root.display()
                    ))
                })?;
            Ok(SourcePage::new(relative))
        })
        .collect()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(SiteError::Io)?;

    for entry in entries {
        let entry = entry.map_err(SiteError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == SourcePage::SOURCE_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Replace `dst` with a recursive copy of `src`. Returns the number of files
/// copied.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    validate_dir(src)?;

    if dst.exists() {
        log::debug!("Removing existing {}", dst.display());
        fs::remove_dir_all(dst).map_err(SiteError::Io)?;
    }
    fs::create_dir_all(dst).map_err(SiteError::Io)?;

    copy_directory_recursive(src, dst)
}

fn copy_directory_recursive(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;

    for entry in fs::read_dir(src).map_err(SiteError::Io)? {
        let entry = entry.map_err(SiteError::Io)?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            fs::create_dir_all(&to).map_err(SiteError::Io)?;
            copied += copy_directory_recursive(&from, &to)?;
        } else {
            log::info!("Copying {} to {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(SiteError::Io)?;
            copied += 1;
        }
    }

    Ok(copied)
}

pub fn validate_dir(path: &Path) -> Result<(), SiteError> {
    if !path.exists() || !path.is_dir() {
        return Err(SiteError::InvalidDirectory(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}
