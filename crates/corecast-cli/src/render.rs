use std::io;

use crate::console::Console;

pub const WIDTH: usize = 70;

pub fn heavy_rule() -> String {
    "=".repeat(WIDTH)
}

pub fn light_rule() -> String {
    "─".repeat(WIDTH)
}

/// Title between two heavy rules.
pub fn banner<C: Console + ?Sized>(console: &mut C, title: &str) -> io::Result<()> {
    console.write_line(&heavy_rule())?;
    console.write_line(title)?;
    console.write_line(&heavy_rule())
}

/// Frame content in a box, one content line per row. Long lines are not wrapped.
pub fn content_box(content: &str) -> Vec<String> {
    let inner = WIDTH - 2;
    let mut rows = Vec::with_capacity(content.lines().count() + 2);
    rows.push(format!("┌{}┐", "─".repeat(inner)));
    for line in content.split('\n') {
        rows.push(format!("│ {:<width$} │", line, width = inner - 2));
    }
    rows.push(format!("└{}┘", "─".repeat(inner)));
    rows
}
