use std::io::{self, Write};

use lmpdata::SimulationBox;

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_TYPE_ROWS: usize = 15;

pub fn print_structure_info(sim: &SimulationBox) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let cell = sim.cell();
    let [a, b, c] = cell.lengths();
    let [alpha, beta, gamma] = cell.angles();

    let rows = vec![
        ("Total Atoms", sim.num_atoms().to_string()),
        ("Atom Types", sim.num_atom_types().to_string()),
        ("Atom Style", sim.style_declaration().to_string()),
        ("x bounds", format!("{} … {}", sim.xlo(), sim.xhi())),
        ("y bounds", format!("{} … {}", sim.ylo(), sim.yhi())),
        ("z bounds", format!("{} … {}", sim.zlo(), sim.zhi())),
        ("Tilt (xy xz yz)", format!("{} {} {}", sim.xy(), sim.xz(), sim.yz())),
        ("Cell", format!("{:.1} × {:.1} × {:.1}", a, b, c)),
        (
            "Angles (α β γ)",
            format!("{:.1}° {:.1}° {:.1}°", alpha, beta, gamma),
        ),
        ("Volume", format!("{:.1}", cell.volume())),
    ];

    print_kv_table(&mut out, "Box Summary", &rows);
}

pub fn print_type_distribution(sim: &SimulationBox) {
    if sim.is_empty() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut counts: Vec<(String, usize)> = sim
        .type_counts()
        .into_iter()
        .map(|(atom_type, count)| (atom_type.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    print_distribution_table(&mut out, "Atom Type Distribution", &counts, sim.num_atoms());
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(name_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(dist_w + 2)
        )
    };

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        "Type", "Count", "Distribution"
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (name, count) in data.iter().take(MAX_TYPE_ROWS) {
        let pct = (*count as f64 / total as f64) * 100.0;
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            truncate(name, name_w),
            count,
            dist_cell
        );
    }

    if data.len() > MAX_TYPE_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            "...",
            "...",
            format!("({} more types)", data.len() - MAX_TYPE_ROWS)
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{INDENT}┌{k_line}┬{v_line}┐");
    let _ = writeln!(out, "{INDENT}│ {:<key_w$} │ {:>val_w$} │", "Metric", "Value");
    let _ = writeln!(out, "{INDENT}├{k_line}┼{v_line}┤");

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w)
        );
    }

    let _ = writeln!(out, "{INDENT}└{k_line}┴{v_line}┘");
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
