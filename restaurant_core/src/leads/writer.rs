use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use super::record::LeadRecord;
use crate::error::{AppError, Result};

const QUEUE_CAPACITY: usize = 256;

struct AppendCommand {
    line: String,
    reply: oneshot::Sender<std::io::Result<()>>,
}

/// Handle to the task that owns the lead file.
///
/// All appends go through one task, so lines are written whole and in the
/// order their commands were received. The file is opened for each append
/// and closed again, so it can be moved away between submissions.
#[derive(Clone, Debug)]
pub struct LeadWriter {
    sender: mpsc::Sender<AppendCommand>,
}

impl LeadWriter {
    /// Spawns the owning task. Must be called inside a Tokio runtime.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);

        info!("Lead writer started for {}", path.display());
        tokio::spawn(async move {
            run_writer(path, receiver).await;
        });

        Self { sender }
    }

    pub async fn append(&self, body: Value) -> Result<LeadRecord> {
        let record = LeadRecord::now(body);
        let (reply, done) = oneshot::channel();

        self.sender
            .send(AppendCommand { line: record.to_line(), reply })
            .await
            .map_err(|_| AppError::LeadStore("Lead writer is not running".to_string()))?;

        done.await
            .map_err(|_| AppError::LeadStore("Lead writer dropped the request".to_string()))??;

        Ok(record)
    }
}

async fn run_writer(path: PathBuf, mut receiver: mpsc::Receiver<AppendCommand>) {
    while let Some(command) = receiver.recv().await {
        let result = append_line(&path, &command.line).await;

        if let Err(e) = &result {
            error!("Failed to append lead to {}: {}", path.display(), e);
        } else {
            debug!("Appended lead ({} bytes)", command.line.len());
        }

        let _ = command.reply.send(result);
    }

    debug!("Lead writer for {} stopped", path.display());
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path).await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_appends_lines_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("leads.txt");
        let writer = LeadWriter::spawn(&path);

        writer.append(json!({"name": "Anna"})).await.unwrap();
        writer.append(json!({"name": "Ben"})).await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(r#"{"name":"Anna"}"#));
        assert!(lines[1].ends_with(r#"{"name":"Ben"}"#));
    }

    #[tokio::test]
    async fn test_concurrent_appends_do_not_interleave() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("leads.txt");
        let writer = LeadWriter::spawn(&path);

        let mut handles = Vec::new();
        for i in 0..50 {
            let writer = writer.clone();
            handles.push(tokio::spawn(async move {
                writer
                    .append(json!({"id": i, "message": "x".repeat(2048)}))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let records: Vec<_> = contents
            .lines()
            .map(|line| LeadRecord::parse_line(line).expect("whole line"))
            .collect();
        assert_eq!(records.len(), 50);
    }

    #[tokio::test]
    async fn test_each_append_reopens_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("leads.txt");
        let processed = dir.path().join("leads-processed.txt");
        let writer = LeadWriter::spawn(&path);

        writer.append(json!({"n": 1})).await.unwrap();
        tokio::fs::rename(&path, &processed).await.unwrap();
        writer.append(json!({"n": 2})).await.unwrap();

        let moved = tokio::fs::read_to_string(&processed).await.unwrap();
        assert_eq!(moved.lines().count(), 1);
        assert!(moved.trim_end().ends_with(r#"{"n":1}"#));

        let current = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(current.lines().count(), 1);
        assert!(current.trim_end().ends_with(r#"{"n":2}"#));
    }

    #[tokio::test]
    async fn test_unwritable_path_reports_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("leads.txt");
        let writer = LeadWriter::spawn(&path);

        let result = writer.append(json!({"name": "Anna"})).await;
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
