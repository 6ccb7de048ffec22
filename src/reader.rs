use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for document reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for a document read operation
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub read_error: Option<String>,
}

/// Async reader that streams document lines with buffered I/O. One input
/// line is one document for the CLI.
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a file line-by-line, returning the lines and read statistics.
    pub async fn read_lines<P: AsRef<Path>>(&self, path: P) -> Result<(Vec<String>, ReadStats)> {
        let path = path.as_ref();
        debug!("Starting async read of file: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", path.display(), e);
                warn!("{}", error_msg);

                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    lines_read: 0,
                    bytes_read: 0,
                    read_error: Some(error_msg.clone()),
                };

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                } else {
                    return Ok((Vec::new(), stats));
                }
            }
        };

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut result_lines = Vec::new();
        let mut line_count = 0u64;
        let mut byte_count = 0u64;

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    byte_count += line.len() as u64 + 1; // +1 for newline
                    line_count += 1;
                    result_lines.push(line);
                }
                Ok(None) => break,
                Err(e) => {
                    let error_msg = format!(
                        "UTF-8 decoding error in {} at line {}: {}",
                        path.display(),
                        line_count + 1,
                        e
                    );
                    warn!("{}", error_msg);

                    let stats = ReadStats {
                        file_path: path.display().to_string(),
                        lines_read: line_count,
                        bytes_read: byte_count,
                        read_error: Some(error_msg.clone()),
                    };

                    if self.config.fail_fast {
                        return Err(anyhow::anyhow!(error_msg));
                    } else {
                        // Return partial results with error information
                        return Ok((result_lines, stats));
                    }
                }
            }
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: line_count,
            bytes_read: byte_count,
            read_error: None,
        };

        info!(
            "Read {}: {} lines, {} bytes",
            path.display(),
            line_count,
            byte_count
        );
        Ok((result_lines, stats))
    }
}

/// Read all of stdin as document lines.
pub async fn read_stdin_lines() -> Result<Vec<String>> {
    let reader = BufReader::new(tokio::io::stdin());
    let mut lines = reader.lines();
    let mut result = Vec::new();
    while let Some(line) = lines.next_line().await? {
        result.push(line);
    }
    Ok(result)
}
