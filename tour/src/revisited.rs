//! Chapter two: the revision pass. Comparator direction, string length,
//! call-site configuration, and deferred cleanup.

use exhibit::demo;
use std::cell::RefCell;
use std::cmp::Ordering;

/// Named comparator, passed where a closure would do.
fn backwards(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

#[demo(chapter = "revisited", tags = "closures")]
fn descending_sort() -> String {
    let mut clients = ["Pestov", "Test", "ian"];
    clients.sort_by(|a, b| backwards(a, b));

    // Same order, closure form
    let mut concise = ["Pestov", "Test", "ian"];
    concise.sort_by(|a, b| b.cmp(a));

    format!("{clients:?}, closure form agrees: {}", clients == concise)
}

#[demo(chapter = "revisited", tags = "strings")]
fn string_count() -> String {
    let name = "Ian";
    format!("\"{name}\" has {} characters", name.chars().count())
}

struct SaveRequest<'a> {
    name: &'a str,
    encrypt: bool,
}

fn save_state(request: SaveRequest<'_>) -> String {
    let mode = if request.encrypt { "encrypted" } else { "plain" };
    format!("saved {} ({mode})", request.name)
}

/// Field names do the work of argument labels at the call site.
#[demo(chapter = "revisited", tags = "functions")]
fn labeled_arguments() -> String {
    save_state(SaveRequest {
        name: "Ben",
        encrypt: true,
    })
}

struct CleanupGuard<'a> {
    events: &'a RefCell<Vec<String>>,
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        self.events.borrow_mut().push("do clean up here".to_string());
    }
}

/// The guard's cleanup runs at scope exit no matter how the scope ends.
#[demo(chapter = "revisited", tags = "cleanup")]
fn deferred_cleanup() -> String {
    let events = RefCell::new(vec!["checkpoint 2".to_string()]);

    {
        let _guard = CleanupGuard { events: &events };
        events.borrow_mut().push("checkpoint 3".to_string());
    }

    events.into_inner().join(", ")
}
