//! Helpers for assembling utility class strings.

/// Joins class fragments with single spaces, skipping empty ones.
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "table",
    "contents", "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "none"];
const SIDES: &[&str] = &["t", "r", "b", "l", "x", "y", "s", "e"];
// utilities whose second segment names a separate property (`grid-cols`, `max-w`)
const COMPOUND: &[&str] = &["grid", "col", "row", "max", "min", "auto"];

/// Conflict group of a class token: its variant prefixes plus the CSS
/// property the utility sets, e.g. `hover:bg-cyan-700` -> `hover:bg`,
/// `text-sm` -> `text-size`, `border-gray-200` -> `border-color`.
fn conflict_group(token: &str) -> String {
    let start = token.rfind(':').map_or(0, |i| i + 1);
    let (variants, utility) = token.split_at(start);
    // negative utilities (`-mt-2`) conflict with their positive form
    let utility = utility.strip_prefix('-').unwrap_or(utility);
    format!("{variants}{}", property(utility))
}

fn property(utility: &str) -> String {
    if DISPLAY.contains(&utility) {
        return "display".to_owned();
    }
    if POSITION.contains(&utility) {
        return "position".to_owned();
    }

    let (prefix, rest) = utility.split_once('-').unwrap_or((utility, ""));
    let fixed = match prefix {
        "text" if TEXT_SIZES.contains(&rest) => "text-size",
        "text" if TEXT_ALIGN.contains(&rest) => "text-align",
        "text" => "text-color",
        "font" if FONT_WEIGHTS.contains(&rest) => "font-weight",
        "font" => "font-family",
        "flex" => match rest {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        },
        "border" | "outline" | "ring" | "divide" => return line_property(prefix, rest),
        _ => "",
    };
    if !fixed.is_empty() {
        return fixed.to_owned();
    }

    match rest.split_once('-') {
        Some((axis @ ("x" | "y"), _)) => format!("{prefix}-{axis}"),
        Some((sub, _)) if COMPOUND.contains(&prefix) => format!("{prefix}-{sub}"),
        _ => prefix.to_owned(),
    }
}

/// Width, style or colour of a border-like utility, per side.
fn line_property(prefix: &str, rest: &str) -> String {
    if rest.starts_with("offset") {
        return format!("{prefix}-offset");
    }

    let (side, value) = match rest.split_once('-') {
        Some((side, value)) if SIDES.contains(&side) => (format!("-{side}"), value),
        _ if SIDES.contains(&rest) => (format!("-{rest}"), ""),
        _ => (String::new(), rest),
    };

    let kind = if value.is_empty() || value == "px" || value.bytes().all(|b| b.is_ascii_digit()) {
        "width"
    } else if LINE_STYLES.contains(&value) {
        "style"
    } else {
        "color"
    };
    format!("{prefix}{side}-{kind}")
}

/// Appends `extra` to `base`, dropping base tokens that set the same
/// property (under the same variants) as any extra token. Later wins.
pub fn merge_classes(base: &str, extra: Option<&str>) -> String {
    let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) else {
        return join_classes(&[base]);
    };

    let overridden: Vec<String> = extra.split_whitespace().map(conflict_group).collect();

    let kept = base
        .split_whitespace()
        .filter(|t| !overridden.contains(&conflict_group(t)))
        .collect::<Vec<_>>()
        .join(" ");

    join_classes(&[&kept, extra])
}
