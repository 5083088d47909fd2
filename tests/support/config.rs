use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Write `contents` to a unique temporary `.toml` file.
pub fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("intent-router-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

/// Support-desk configuration pointing at `base_url`.
pub fn support_desk_toml(base_url: &str) -> String {
    format!(
        r#"
[logging]
level = "warn"
format = "pretty"

[classifier]
model = "claude-3-haiku-20240307"
base_url = "{base_url}"
timeout_secs = 5

[[agents]]
name = "Tech Agent"
description = "Software, hardware and connectivity problems"

[[agents]]
name = "Billing"
description = "Invoices, refunds and payment methods"
"#
    )
}
