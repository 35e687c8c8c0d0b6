//! Tokio runtime owned by the shell; every backend and gateway task runs on it.

use std::time::Duration;

use anyhow::Context as _;
use client_core::Teardown;
use tokio::runtime::{Handle, Runtime};

/// How long the shell waits for listener releases when the window closes.
pub const TEARDOWN_GRACE: Duration = Duration::from_secs(2);

pub fn build_runtime() -> anyhow::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .thread_name("curator-runtime")
        .enable_all()
        .build()
        .context("failed to build backend runtime")
}

/// Blocks the calling (non-runtime) thread until `teardown` finishes or the
/// grace period runs out.
pub fn finish_teardown(runtime: &Handle, teardown: Teardown) {
    if teardown.is_empty() {
        return;
    }
    let finished = runtime.block_on(async {
        tokio::time::timeout(TEARDOWN_GRACE, teardown.finished())
            .await
            .is_ok()
    });
    if finished {
        tracing::debug!("view subscriptions released");
    } else {
        tracing::warn!(
            grace_ms = TEARDOWN_GRACE.as_millis() as u64,
            "view subscriptions still releasing at exit"
        );
    }
}
