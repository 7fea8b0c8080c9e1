use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use cragline::debounce::Debouncer;

#[tokio::test]
async fn test_rapid_calls_coalesce_to_last_argument() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let mut debouncer = Debouncer::new(Duration::from_millis(50), move |term: String| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().unwrap().push(term);
        }
    });

    debouncer.call("e".to_string());
    debouncer.call("el".to_string());
    debouncer.call("el cap".to_string());

    tokio::time::sleep(Duration::from_millis(250)).await;

    // Only the most recent invocation's argument survives the window
    assert_eq!(*seen.lock().unwrap(), vec!["el cap".to_string()]);
}

#[tokio::test]
async fn test_single_call_fires_after_delay() {
    let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let mut debouncer = Debouncer::new(Duration::from_millis(20), move |n: u32| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().unwrap().push(n);
        }
    });

    debouncer.call(7);

    // Nothing runs before the delay elapses
    assert!(seen.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(*seen.lock().unwrap(), vec![7]);
}

#[tokio::test]
async fn test_reschedule_resets_the_window() {
    let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let mut debouncer = Debouncer::new(Duration::from_millis(80), move |n: u32| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().unwrap().push(n);
        }
    });

    debouncer.call(1);
    tokio::time::sleep(Duration::from_millis(40)).await;
    // Still inside the window: this cancels the pending run for 1
    debouncer.call(2);
    tokio::time::sleep(Duration::from_millis(40)).await;
    assert!(seen.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(*seen.lock().unwrap(), vec![2]);
}

#[tokio::test]
async fn test_drop_aborts_pending_call() {
    let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));

    {
        let sink = Arc::clone(&seen);
        let mut debouncer = Debouncer::new(Duration::from_millis(30), move |n: u32| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(n);
            }
        });
        debouncer.call(1);
    } // dropped before the delay elapses

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(seen.lock().unwrap().is_empty());
}
