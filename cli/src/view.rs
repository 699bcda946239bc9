use std::fmt::Write;

use todolist_core::Todo;

/// Render the controller's view state as terminal lines: an error banner
/// while a failure is pending, an empty-state hint, or the numbered checkbox
/// list with a stats row. Counts are derived from `items` on every render,
/// never stored.
pub fn render(items: &[Todo], error: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(message) = error {
        let _ = writeln!(out, "Error: {message}");
    }
    if items.is_empty() {
        out.push_str("No todos yet. Add one with: add <text>\n");
        return out;
    }
    for (index, todo) in items.iter().enumerate() {
        let mark = if todo.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "{:3}. [{mark}] {}", index + 1, todo.text);
    }
    let completed = items.iter().filter(|t| t.completed).count();
    let _ = writeln!(
        out,
        "Total: {}  Completed: {}  Remaining: {}",
        items.len(),
        completed,
        items.len() - completed
    );
    out
}
