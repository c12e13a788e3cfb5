//! Background worker for loading books and running title searches.
//!
//! The UI thread never parses or searches itself: it sends a [`Request`] and
//! picks up the matching [`BackendEvent`] on a later frame. Searches run on a
//! snapshot of the document, so the UI can replace its document at any time;
//! results computed against an old snapshot are rejected by the page store.

use ebook_core::{Document, SearchQuery, SearchResult};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum Request {
    Load(PathBuf),
    Search {
        document: Document,
        query: SearchQuery,
    },
}

#[derive(Debug)]
pub enum BackendEvent {
    Loaded {
        path: PathBuf,
        document: Document,
    },
    LoadFailed {
        path: PathBuf,
        error: String,
    },
    SearchFinished(SearchResult),
}

pub fn spawn_backend(
    rx_request: mpsc::Receiver<Request>,
    tx_response: mpsc::Sender<BackendEvent>,
    ctx: egui::Context,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("ebook-backend".to_string())
        .spawn(move || {
            while let Ok(req) = rx_request.recv() {
                let event = handle_request(req);
                if tx_response.send(event).is_err() {
                    break;
                }
                ctx.request_repaint();
            }
            debug!("Backend thread stopped");
        })
}

pub fn handle_request(request: Request) -> BackendEvent {
    match request {
        Request::Load(path) => match ebook_core::load_pages(&path) {
            Ok(document) => {
                info!("Loaded {:?} with {} chapters", path, document.len());
                BackendEvent::Loaded { path, document }
            }
            Err(e) => {
                warn!("Failed to load {:?}: {}", path, e);
                BackendEvent::LoadFailed {
                    path,
                    error: e.to_string(),
                }
            }
        },
        Request::Search { document, query } => {
            BackendEvent::SearchFinished(ebook_core::search(&document, &query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebook_core::{SimilarityKind, Threshold, parse_document};
    use std::time::Duration;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match handle_request(Request::Load(path.clone())) {
            BackendEvent::LoadFailed { path: failed, error } => {
                assert_eq!(failed, path);
                assert!(!error.is_empty());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_load_book() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        std::fs::write(&path, "# 开端\n很久以前。\n").unwrap();

        match handle_request(Request::Load(path)) {
            BackendEvent::Loaded { document, .. } => assert_eq!(document.len(), 1),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_search_runs_on_worker_thread() {
        let (tx_request, rx_request) = mpsc::channel();
        let (tx_response, rx_response) = mpsc::channel();
        let handle = spawn_backend(rx_request, tx_response, egui::Context::default()).unwrap();

        let document = parse_document("# Intro\nWelcome.\n# Chapter One\nOnce.\n");
        let query = SearchQuery::new(
            "chapter",
            SimilarityKind::Levenshtein,
            Threshold::new(0.4).unwrap(),
        );
        tx_request
            .send(Request::Search { document: document.clone(), query })
            .unwrap();

        match rx_response.recv_timeout(Duration::from_secs(5)).unwrap() {
            BackendEvent::SearchFinished(result) => {
                assert!(result.document().same_as(&document));
                let titles: Vec<_> = result.chapters().map(|c| c.title.as_str()).collect();
                assert_eq!(titles, vec!["Chapter One"]);
            }
            other => panic!("unexpected event: {other:?}"),
        }

        drop(tx_request);
        handle.join().unwrap();
    }
}
