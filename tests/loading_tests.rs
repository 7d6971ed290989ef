// Host-side tests for concurrent asset loading.

#![allow(dead_code)]
mod core {
    pub mod loading {
        include!("../src/core/loading.rs");
    }
}

use crate::core::loading::load_concurrently;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

fn block_on<F: Future>(fut: F) -> F::Output {
    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    let mut fut = std::pin::pin!(fut);
    loop {
        if let Poll::Ready(v) = fut.as_mut().poll(&mut cx) {
            return v;
        }
    }
}

fn urls(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn every_request_starts_before_any_wait() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let list = urls(&["1.png", "2.png", "3.png"]);
    let out = block_on(load_concurrently(&list, |url| {
        log.borrow_mut().push(format!("start {}", url));
        let log = log.clone();
        let url = url.to_string();
        async move {
            log.borrow_mut().push(format!("wait {}", url));
            url.len()
        }
    }));
    assert_eq!(out, vec![5, 5, 5]);
    assert_eq!(
        *log.borrow(),
        vec![
            "start 1.png",
            "start 2.png",
            "start 3.png",
            "wait 1.png",
            "wait 2.png",
            "wait 3.png",
        ]
    );
}

#[test]
fn results_keep_url_order_including_failures() {
    let list = urls(&["a", "missing", "c"]);
    let out = block_on(load_concurrently(&list, |url| {
        let result = if url == "missing" {
            Err(format!("{} not found", url))
        } else {
            Ok(url.to_uppercase())
        };
        async move { result }
    }));
    assert_eq!(
        out,
        vec![
            Ok("A".to_string()),
            Err("missing not found".to_string()),
            Ok("C".to_string()),
        ]
    );
}

#[test]
fn no_urls_no_requests() {
    let mut calls = 0;
    let out: Vec<()> = block_on(load_concurrently(&[], |_| {
        calls += 1;
        async {}
    }));
    assert!(out.is_empty());
    assert_eq!(calls, 0);
}
