use crate::ports::outbound::ImageRenderer;
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// GraphvizRenderer adapter that shells out to the Graphviz `dot` binary
///
/// The DOT document is piped to `dot -T<type> -o <output>`; the image type
/// comes from the output file's extension.
pub struct GraphvizRenderer {
    program: String,
}

impl GraphvizRenderer {
    const DEFAULT_PROGRAM: &'static str = "dot";

    pub fn new() -> Self {
        Self {
            program: Self::DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Uses a different executable, e.g. an absolute path to `dot`
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Maps an output extension to the `-T` argument `dot` expects
    pub fn output_type(output_path: &Path) -> Option<String> {
        let extension = output_path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "jpeg" | "jpg" => Some("jpg".to_string()),
            "" => None,
            _ => Some(extension),
        }
    }

    fn render_error(output_path: &Path, details: String) -> anyhow::Error {
        VisualizerError::RenderError {
            path: output_path.to_path_buf(),
            details,
        }
        .into()
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageRenderer for GraphvizRenderer {
    fn render(&self, dot_source: &str, output_path: &Path) -> Result<()> {
        let output_type = Self::output_type(output_path).ok_or_else(|| {
            Self::render_error(output_path, "Output file has no extension".to_string())
        })?;

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", output_type))
            .arg("-o")
            .arg(output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Self::render_error(output_path, format!("Failed to start '{}': {}", self.program, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(dot_source.as_bytes())
                .map_err(|e| Self::render_error(output_path, e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| Self::render_error(output_path, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Self::render_error(
                output_path,
                format!("'{}' exited with {}: {}", self.program, output.status, stderr.trim()),
            ));
        }

        Ok(())
    }
}
