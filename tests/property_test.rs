//! Property tests for capture behavior and log round-trips

use std::sync::Arc;

use proptest::prelude::*;
use tempfile::TempDir;

use tapwire::capture::{CaptureFilter, LogEntry, ObservedRequest};
use tapwire::config::CaptureConfig;
use tapwire::storage::{read_log, LogWriter};

fn entry_strategy() -> impl Strategy<Value = LogEntry> {
    let text = "[a-zA-Z0-9 /:?=&._-]{0,40}";
    let map = proptest::collection::btree_map(text, text, 0..5);

    (text, "[A-Z]{3,7}", map.clone(), map, 0.0f64..2e9).prop_map(
        |(url, method, headers, query_params, timestamp)| LogEntry {
            url,
            method,
            headers,
            query_params,
            timestamp,
        },
    )
}

proptest! {
    // The marker alphabet is disjoint from the URL alphabet, so no generated
    // URL can ever contain a marker.
    #[test]
    fn marker_free_traffic_never_records(
        requests in proptest::collection::vec(
            (
                "[a-z0-9/.:]{1,30}",
                prop_oneof![Just("GET"), Just("POST"), Just("PUT")],
            ),
            0..20,
        )
    ) {
        let temp_dir = TempDir::new().unwrap();
        let config = Arc::new(CaptureConfig {
            start_marker: "##start##".to_string(),
            stop_marker: "##stop##".to_string(),
            output_dir: temp_dir.path().join("logs"),
            output_filename: "capture.json".to_string(),
        });
        let filter = CaptureFilter::new(Arc::clone(&config));

        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let (recording, buffered) = rt.block_on(async {
            for (url, method) in &requests {
                filter
                    .on_request(&ObservedRequest {
                        url: url.clone(),
                        method: (*method).to_string(),
                        headers: vec![],
                        query: vec![],
                        timestamp_start: 0.0,
                    })
                    .await;
            }
            (filter.is_recording().await, filter.buffered_count().await)
        });

        prop_assert!(!recording);
        prop_assert_eq!(buffered, 0);
        prop_assert!(!config.log_path().exists());
    }

    #[test]
    fn persisted_log_round_trips(entries in proptest::collection::vec(entry_strategy(), 0..8)) {
        let temp_dir = TempDir::new().unwrap();
        let writer = LogWriter::new(&CaptureConfig {
            output_dir: temp_dir.path().to_path_buf(),
            output_filename: "capture.json".to_string(),
            ..CaptureConfig::default()
        });

        let path = writer.write(&entries).unwrap();
        let parsed = read_log(&path).unwrap();

        prop_assert_eq!(parsed, entries);
    }
}
