use super::normalize::PathNormalizer;
use super::repo_path::RepoPath;
use super::unique;
use crate::error::ExtractError;
use crate::project::ProjectDocument;
use std::path::Path;
use tracing::debug;

/// Suffixes compiled by the GCC build. Case matters: `.C` is C++, `.S` is
/// preprocessed assembly.
pub const VALID_SOURCE_EXTENSIONS: &[&str] = &[".c", ".cc", ".cpp", ".cxx", ".C", ".s", ".S"];

/// ARMCC-syntax startup files that GCC cannot assemble
pub const KEIL_ONLY_STARTUP_FILES: &[&str] = &["startup_hc32f46x.s"];

/// GCC replacement for the Keil startup file; always emitted
pub const GCC_STARTUP_SOURCE: &str = "source/main/hdsc32core/startup_hc32f46x_gcc.c";

pub fn is_source_file(path: &RepoPath) -> bool {
    path.suffix()
        .map(|suffix| VALID_SOURCE_EXTENSIONS.contains(&suffix))
        .unwrap_or(false)
}

/// Source files referenced by `FilePath` elements, in document order.
///
/// Entries with an unknown suffix or that are not regular files on disk are
/// dropped. The GCC startup file is appended and the list deduplicated.
pub fn extract_sources(
    doc: &ProjectDocument,
    project_dir: &Path,
    normalizer: &PathNormalizer<'_>,
) -> Result<Vec<RepoPath>, ExtractError> {
    let mut sources = Vec::new();

    for raw in doc.file_paths() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let path = normalizer.normalize(project_dir, raw)?;

        if KEIL_ONLY_STARTUP_FILES.contains(&path.relative.file_name()) {
            debug!(path = %path.relative, "Skipping Keil-only startup file");
            continue;
        }
        if !is_source_file(&path.relative) {
            debug!(path = %path.relative, "Skipping non-source file");
            continue;
        }
        if !normalizer.fs().is_file(&path.absolute) {
            debug!(path = %path.relative, "Skipping missing source file");
            continue;
        }

        sources.push(path.relative);
    }

    sources.push(RepoPath::from_static(GCC_STARTUP_SOURCE));
    Ok(unique(sources))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;
    use yare::parameterized;

    fn project(file_paths: &[&str]) -> ProjectDocument {
        let body: String = file_paths
            .iter()
            .map(|p| format!("<File><FilePath>{}</FilePath></File>", p))
            .collect();
        let xml = format!("<Project><Files>{}</Files></Project>", body);
        ProjectDocument::parse(Path::new("/mock/keil/app.uvprojx"), &xml).unwrap()
    }

    fn firmware_tree() -> MockFileSystem {
        let fs = MockFileSystem::new();
        fs.add_file("source/main.c", "");
        fs.add_file("source/util.cpp", "");
        fs.add_file("source/readme.txt", "");
        fs.add_file("source/main/hdsc32core/startup_hc32f46x.s", "");
        fs.add_file("source/main/hdsc32core/startup_hc32f46x_gcc.c", "");
        fs.add_file("source/lib/crc.S", "");
        fs.add_dir("keil");
        fs
    }

    fn strings(paths: &[RepoPath]) -> Vec<&str> {
        paths.iter().map(|p| p.as_str()).collect()
    }

    #[parameterized(
        c = { "a/main.c", true },
        cc = { "a/main.cc", true },
        cpp = { "a/main.cpp", true },
        cxx = { "a/main.cxx", true },
        upper_c = { "a/main.C", true },
        asm = { "a/start.s", true },
        upper_asm = { "a/start.S", true },
        header = { "a/main.h", false },
        upper_cpp = { "a/main.CPP", false },
        library = { "a/libm.lib", false },
        no_suffix = { "a/Makefile", false },
    )]
    fn test_is_source_file(path: &'static str, expected: bool) {
        assert_eq!(is_source_file(&RepoPath::from_static(path)), expected);
    }

    #[test]
    fn test_startup_substitution() {
        let fs = firmware_tree();
        let normalizer = PathNormalizer::new(&fs, "/mock");
        let doc = project(&[
            "..\\Source\\Main.c",
            "..\\source\\main\\hdsc32core\\startup_hc32f46x.s",
        ]);

        let sources = extract_sources(&doc, Path::new("/mock/keil"), &normalizer).unwrap();
        assert_eq!(
            strings(&sources),
            vec!["source/main.c", "source/main/hdsc32core/startup_hc32f46x_gcc.c"]
        );
    }

    #[test]
    fn test_filters_missing_and_unknown_suffixes() {
        let fs = firmware_tree();
        let normalizer = PathNormalizer::new(&fs, "/mock");
        let doc = project(&[
            "..\\source\\readme.txt",
            "..\\source\\gone.c",
            "..\\source\\util.cpp",
            "..\\source\\lib\\crc.S",
            "..\\source\\lib\\libm.lib",
        ]);

        let sources = extract_sources(&doc, Path::new("/mock/keil"), &normalizer).unwrap();
        assert_eq!(
            strings(&sources),
            vec![
                "source/util.cpp",
                "source/lib/crc.S",
                "source/main/hdsc32core/startup_hc32f46x_gcc.c"
            ]
        );
    }

    #[test]
    fn test_directory_with_source_suffix_is_dropped() {
        let fs = firmware_tree();
        fs.add_dir("source/odd.c");
        let normalizer = PathNormalizer::new(&fs, "/mock");
        let doc = project(&["..\\source\\odd.c"]);

        let sources = extract_sources(&doc, Path::new("/mock/keil"), &normalizer).unwrap();
        assert_eq!(
            strings(&sources),
            vec!["source/main/hdsc32core/startup_hc32f46x_gcc.c"]
        );
    }

    #[test]
    fn test_duplicates_collapse_in_first_seen_order() {
        let fs = firmware_tree();
        let normalizer = PathNormalizer::new(&fs, "/mock");
        let doc = project(&[
            "..\\source\\util.cpp",
            "..\\SOURCE\\MAIN.C",
            "..\\source\\.\\util.cpp",
            "..\\keil\\..\\source\\main.c",
            "..\\source\\main\\hdsc32core\\startup_hc32f46x_gcc.c",
        ]);

        let sources = extract_sources(&doc, Path::new("/mock/keil"), &normalizer).unwrap();
        assert_eq!(
            strings(&sources),
            vec![
                "source/util.cpp",
                "source/main.c",
                "source/main/hdsc32core/startup_hc32f46x_gcc.c"
            ]
        );
    }

    #[test]
    fn test_empty_and_blank_entries_are_skipped() {
        let fs = firmware_tree();
        let normalizer = PathNormalizer::new(&fs, "/mock");
        let doc = project(&["", "   ", "..\\source\\main.c"]);

        let sources = extract_sources(&doc, Path::new("/mock/keil"), &normalizer).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].as_str(), "source/main.c");
    }

    #[test]
    fn test_startup_appended_even_when_missing() {
        let fs = MockFileSystem::new();
        fs.add_dir("keil");
        let normalizer = PathNormalizer::new(&fs, "/mock");

        let sources =
            extract_sources(&project(&[]), Path::new("/mock/keil"), &normalizer).unwrap();
        assert_eq!(strings(&sources), vec![GCC_STARTUP_SOURCE]);
    }

    #[test]
    fn test_outside_repository_aborts_even_for_skipped_names() {
        let fs = MockFileSystem::with_root(PathBuf::from("/work/repo"));
        fs.add_file("/work/other/startup_hc32f46x.s", "");
        fs.add_dir("keil");
        let normalizer = PathNormalizer::new(&fs, "/work/repo");
        let doc = project(&["..\\..\\other\\startup_hc32f46x.s"]);

        let result = extract_sources(&doc, Path::new("/work/repo/keil"), &normalizer);
        assert!(matches!(
            result,
            Err(ExtractError::OutsideRepository { .. })
        ));
    }
}
