//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the optional
//! `.verify-setup.yml` file. Every struct is `#[serde(default)]`, so a file
//! only needs to name what it changes; everything else keeps the built-in
//! Electron project layout.

use serde::Deserialize;

/// Root configuration structure for `.verify-setup.yml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Application name shown in the banner
    pub app_name: String,

    /// Which tool is the runtime and the minimum major version it must meet
    pub runtime: RuntimeConfig,

    /// Command-version checks, run in order
    pub tools: Vec<ToolConfig>,

    /// Package manager named in hint text
    pub package_manager: String,

    /// Installed dependency checks
    pub dependencies: DependenciesConfig,

    /// Build artifact locations
    pub build: BuildConfig,

    /// Platform-specific build resources
    pub platform: PlatformConfig,

    /// Files that must exist relative to the project root
    pub essential_files: Vec<String>,

    /// Setup documentation referenced when verification fails
    pub docs_path: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            app_name: "Open Claude".to_string(),
            runtime: RuntimeConfig::default(),
            tools: default_tools(),
            package_manager: "pnpm".to_string(),
            dependencies: DependenciesConfig::default(),
            build: BuildConfig::default(),
            platform: PlatformConfig::default(),
            essential_files: default_essential_files(),
            docs_path: ".github/BUILD_INSTRUCTIONS.md".to_string(),
        }
    }
}

impl VerifyConfig {
    /// The tool whose output is checked against the runtime floor.
    pub fn runtime_tool(&self) -> Option<&ToolConfig> {
        if self.runtime.tool.is_empty() {
            return None;
        }
        self.tools.iter().find(|t| t.name == self.runtime.tool)
    }
}

/// Runtime version floor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Display name (e.g. "Node.js")
    pub name: String,

    /// Name of the entry in `tools` that reports the runtime version.
    /// Empty disables the floor check.
    pub tool: String,

    /// Lowest recommended major version
    pub min_major: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: "Node.js".to_string(),
            tool: "node".to_string(),
            min_major: 18,
        }
    }
}

/// A command-version check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolConfig {
    /// Identifier referenced by `runtime.tool`
    pub name: String,

    /// Shell command that prints the version
    pub command: String,

    /// Label printed in front of the captured output
    pub label: String,
}

impl ToolConfig {
    pub fn new(name: &str, command: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            label: label.to_string(),
        }
    }
}

fn default_tools() -> Vec<ToolConfig> {
    vec![
        ToolConfig::new("node", "node --version", "Node.js version"),
        ToolConfig::new("pnpm", "pnpm --version", "pnpm version"),
        ToolConfig::new("git", "git --version", "Git version"),
    ]
}

/// Installed dependency tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DependenciesConfig {
    /// Dependency tree root, relative to the project root
    pub dir: String,

    /// Packages that must be present inside `dir`
    pub packages: Vec<PackageConfig>,
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        Self {
            dir: "node_modules".to_string(),
            packages: vec![
                PackageConfig::new("electron", "Electron"),
                PackageConfig::new("typescript", "TypeScript"),
            ],
        }
    }
}

/// A required package directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageConfig {
    /// Directory name under the dependency root
    pub name: String,

    /// Display label
    pub label: String,
}

impl PackageConfig {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

/// Build output locations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Main-process output directory
    pub output_dir: String,

    /// Compiled renderer bundle
    pub bundle: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: "dist".to_string(),
            bundle: "static/js/main.js".to_string(),
        }
    }
}

/// Platform icon locations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Build resources directory holding the icons
    pub resources_dir: String,

    /// Icon required on Windows
    pub windows_icon: String,

    /// Icon required on macOS
    pub macos_icon: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            resources_dir: "build".to_string(),
            windows_icon: "icon.ico".to_string(),
            macos_icon: "icon.icns".to_string(),
        }
    }
}

fn default_essential_files() -> Vec<String> {
    [
        "src/main.ts",
        "src/preload.ts",
        "src/api/client.ts",
        "static/index.html",
        "static/spotlight.html",
        "static/settings.html",
        "package.json",
        "tsconfig.json",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
