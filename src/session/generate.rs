use crate::{
    logger,
    models::{GenerationRequest, GenerationSnapshot},
    provider::CapabilityHandle,
};
use futures::stream::Stream;
use futures::StreamExt;
use std::pin::Pin;
use std::sync::Arc;
use tokio_stream::wrappers::ReceiverStream;
use uuid::Uuid;

/// Final snapshot text when both the streaming and the fallback call fail.
pub const GENERATION_ERROR_PLACEHOLDER: &str = "Error generating text";

pub type SnapshotStream = Pin<Box<dyn Stream<Item = GenerationSnapshot> + Send>>;

/// Runs one generation request against a capability handle, emitting a
/// snapshot of the accumulated result after every merged chunk and a final
/// snapshot with `done` set.
///
/// Chunk contract: providers may emit cumulative snapshots (each chunk is
/// the full text so far) or deltas. Both converge, because only the suffix
/// of a chunk not already at the end of the accumulation is appended.
///
/// Falls back to the non-streaming call when the stream cannot be
/// constructed, errors mid-flight, or ends without a single non-empty
/// chunk. If the fallback also fails, the final snapshot carries
/// [`GENERATION_ERROR_PLACEHOLDER`] and the error is logged. No retries.
pub fn generate(handle: Arc<dyn CapabilityHandle>, request: GenerationRequest) -> SnapshotStream {
    let (tx, rx) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        let session_id = Uuid::new_v4();
        let _timer = logger::timer("generation");
        log::debug!(
            "session {}: generating from {} input bytes",
            session_id,
            request.input.len()
        );

        let mut accumulated = String::new();
        let mut saw_chunk = false;
        let mut streamed_clean = true;

        match handle
            .generate_streaming(&request.input, &request.options)
            .await
        {
            Ok(mut stream) => {
                while let Some(item) = stream.next().await {
                    match item {
                        Ok(chunk) => {
                            if chunk.is_empty() {
                                continue;
                            }
                            saw_chunk = true;
                            merge_chunk(&mut accumulated, &chunk);
                            let snapshot = GenerationSnapshot {
                                text: accumulated.clone(),
                                done: false,
                            };
                            if tx.send(snapshot).await.is_err() {
                                // Caller dropped the stream.
                                return;
                            }
                        }
                        Err(e) => {
                            log::warn!("session {}: stream errored mid-flight: {}", session_id, e);
                            streamed_clean = false;
                            break;
                        }
                    }
                }
            }
            Err(e) => {
                log::warn!("session {}: stream construction failed: {}", session_id, e);
                streamed_clean = false;
            }
        }

        if streamed_clean && saw_chunk {
            log::debug!(
                "session {}: streamed {} bytes",
                session_id,
                accumulated.len()
            );
            let _ = tx
                .send(GenerationSnapshot {
                    text: accumulated,
                    done: true,
                })
                .await;
            return;
        }

        if streamed_clean {
            log::warn!(
                "session {}: stream yielded no meaningful chunks, falling back",
                session_id
            );
        }

        match handle.generate(&request.input, &request.options).await {
            Ok(text) => {
                log::debug!(
                    "session {}: fallback produced {} bytes",
                    session_id,
                    text.len()
                );
                let _ = tx.send(GenerationSnapshot { text, done: true }).await;
            }
            Err(e) => {
                log::error!("session {}: generation failed: {}", session_id, e);
                let _ = tx
                    .send(GenerationSnapshot {
                        text: GENERATION_ERROR_PLACEHOLDER.to_string(),
                        done: true,
                    })
                    .await;
            }
        }
    });

    Box::pin(ReceiverStream::new(rx))
}

/// Appends only the suffix of `chunk` not already at the end of
/// `accumulated`. A cumulative snapshot replaces the accumulation, a
/// disjoint delta is appended whole, a resent chunk is dropped.
fn merge_chunk(accumulated: &mut String, chunk: &str) {
    if accumulated.is_empty() {
        accumulated.push_str(chunk);
        return;
    }

    let max = accumulated.len().min(chunk.len());
    for take in (1..=max).rev() {
        if !chunk.is_char_boundary(take) {
            continue;
        }
        if accumulated.ends_with(&chunk[..take]) {
            accumulated.push_str(&chunk[take..]);
            return;
        }
    }

    accumulated.push_str(chunk);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NoteError, Result};
    use crate::models::GenerationOptions;
    use crate::provider::ChunkStream;
    use async_trait::async_trait;

    fn merged(chunks: &[&str]) -> String {
        let mut accumulated = String::new();
        for chunk in chunks {
            merge_chunk(&mut accumulated, chunk);
        }
        accumulated
    }

    #[test]
    fn test_merge_cumulative_snapshots() {
        assert_eq!(merged(&["The", "The quick", "The quick fox"]), "The quick fox");
    }

    #[test]
    fn test_merge_disjoint_deltas() {
        assert_eq!(merged(&["The ", "quick ", "fox"]), "The quick fox");
    }

    #[test]
    fn test_merge_drops_resent_chunk() {
        assert_eq!(merged(&["The quick", "quick"]), "The quick");
    }

    #[test]
    fn test_merge_overlapping_chunk() {
        assert_eq!(merged(&["one two", "two three"]), "one two three");
    }

    #[test]
    fn test_merge_multibyte_boundary() {
        assert_eq!(merged(&["héllo", "héllo wörld"]), "héllo wörld");
    }

    enum StreamBehavior {
        Chunks(Vec<Result<String>>),
        ConstructionError,
    }

    struct MockHandle {
        stream: StreamBehavior,
        fallback: Result<String>,
    }

    #[async_trait]
    impl CapabilityHandle for MockHandle {
        async fn generate_streaming(
            &self,
            _input: &str,
            _options: &GenerationOptions,
        ) -> Result<ChunkStream> {
            match &self.stream {
                StreamBehavior::ConstructionError => {
                    Err(NoteError::StreamMalformed("no stream".into()))
                }
                StreamBehavior::Chunks(chunks) => {
                    let items: Vec<Result<String>> = chunks
                        .iter()
                        .map(|c| match c {
                            Ok(s) => Ok(s.clone()),
                            Err(_) => Err(NoteError::StreamMalformed("bad chunk".into())),
                        })
                        .collect();
                    Ok(Box::pin(futures::stream::iter(items)))
                }
            }
        }

        async fn generate(&self, _input: &str, _options: &GenerationOptions) -> Result<String> {
            match &self.fallback {
                Ok(s) => Ok(s.clone()),
                Err(_) => Err(NoteError::GenerationFailed("fallback failed".into())),
            }
        }
    }

    async fn collect(handle: MockHandle) -> Vec<GenerationSnapshot> {
        let mut stream = generate(Arc::new(handle), GenerationRequest::new("input"));
        let mut snapshots = Vec::new();
        while let Some(snapshot) = stream.next().await {
            snapshots.push(snapshot);
        }
        snapshots
    }

    #[tokio::test]
    async fn test_cumulative_stream_ends_at_last_chunk() {
        let handle = MockHandle {
            stream: StreamBehavior::Chunks(vec![
                Ok("A".into()),
                Ok("A B".into()),
                Ok("A B C".into()),
            ]),
            fallback: Ok("unused".into()),
        };
        let snapshots = collect(handle).await;
        let last = snapshots.last().unwrap();
        assert!(last.done);
        assert_eq!(last.text, "A B C");
        assert_eq!(snapshots.len(), 4);
        assert!(snapshots[..3].iter().all(|s| !s.done));
    }

    #[tokio::test]
    async fn test_delta_stream_concatenates() {
        let handle = MockHandle {
            stream: StreamBehavior::Chunks(vec![
                Ok("first ".into()),
                Ok("second ".into()),
                Ok("third".into()),
            ]),
            fallback: Ok("unused".into()),
        };
        let snapshots = collect(handle).await;
        assert_eq!(snapshots.last().unwrap().text, "first second third");
    }

    #[tokio::test]
    async fn test_construction_error_falls_back() {
        let handle = MockHandle {
            stream: StreamBehavior::ConstructionError,
            fallback: Ok("full result".into()),
        };
        let snapshots = collect(handle).await;
        assert_eq!(snapshots.len(), 1);
        assert!(snapshots[0].done);
        assert_eq!(snapshots[0].text, "full result");
    }

    #[tokio::test]
    async fn test_empty_stream_falls_back() {
        let handle = MockHandle {
            stream: StreamBehavior::Chunks(vec![Ok(String::new()), Ok(String::new())]),
            fallback: Ok("full result".into()),
        };
        let snapshots = collect(handle).await;
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].text, "full result");
        assert!(snapshots[0].done);
    }

    #[tokio::test]
    async fn test_midstream_error_falls_back() {
        let handle = MockHandle {
            stream: StreamBehavior::Chunks(vec![
                Ok("partial".into()),
                Err(NoteError::StreamMalformed("bad chunk".into())),
            ]),
            fallback: Ok("full result".into()),
        };
        let snapshots = collect(handle).await;
        assert_eq!(snapshots.last().unwrap().text, "full result");
    }

    #[tokio::test]
    async fn test_both_paths_failing_emits_placeholder() {
        let handle = MockHandle {
            stream: StreamBehavior::ConstructionError,
            fallback: Err(NoteError::GenerationFailed("fallback failed".into())),
        };
        let snapshots = collect(handle).await;
        assert_eq!(snapshots.len(), 1);
        assert!(snapshots[0].done);
        assert_eq!(snapshots[0].text, GENERATION_ERROR_PLACEHOLDER);
    }
}
