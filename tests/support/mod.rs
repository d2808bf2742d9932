use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const FIXTURE_PROJECT: &str = include_str!("../fixtures/hc32f46x/app.uvprojx");

#[allow(dead_code)]
pub const EXPECTED_SOURCES: &[&str] = &[
    "source/main/main.c",
    "source/main/hdsc32core/system_hc32f46x.c",
    "source/driver/src/hc32f46x_gpio.c",
    "source/driver/src/hc32f46x_usart.c",
    "source/main/hdsc32core/startup_hc32f46x_gcc.c",
];

#[allow(dead_code)]
pub const EXPECTED_INCLUDES: &[&str] = &[
    "source/main",
    "source/driver/inc",
    "source/main/hdsc32core",
    "source/common",
    ".",
];

#[allow(dead_code)]
pub fn keil_extract_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_keil-extract"))
}

/// A checked-out firmware tree in a temp dir: `<temp>/repo` is the
/// repository root and `<temp>/repo/keil/app.uvprojx` the project file.
/// Siblings of `repo` are outside the repository.
pub struct FirmwareRepo {
    temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl FirmwareRepo {
    pub fn new() -> Self {
        Self::with_project(FIXTURE_PROJECT)
    }

    pub fn with_project(project_xml: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let root = temp.path().join("repo");
        fs::create_dir_all(&root).expect("Failed to create repo dir");
        let root = root.canonicalize().expect("Failed to canonicalize repo dir");

        let repo = Self { temp, root };
        for file in [
            "source/main/main.c",
            "source/main/main.h",
            "source/main/hdsc32core/system_hc32f46x.c",
            "source/main/hdsc32core/startup_hc32f46x.s",
            "source/main/hdsc32core/startup_hc32f46x_gcc.c",
            "source/driver/src/hc32f46x_gpio.c",
            "source/driver/src/hc32f46x_usart.c",
            "lib/arm_cortexM4lf_math.lib",
        ] {
            repo.write(file, "");
        }
        for dir in ["source/driver/inc", "source/common"] {
            fs::create_dir_all(repo.root.join(dir)).expect("Failed to create dir");
        }
        repo.write("keil/app.uvprojx", project_xml);
        repo
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project(&self) -> PathBuf {
        self.root.join("keil/app.uvprojx")
    }

    /// Directory containing the repository, i.e. outside of it
    pub fn outside(&self) -> &Path {
        self.temp.path()
    }
}
