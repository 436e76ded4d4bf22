/// Group digits in threes: 215000 -> "215,000"
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Signed percentage badge text: 12.5 -> "+12.5%", -3 -> "-3%"
pub fn format_change(change: f64) -> String {
    // -0.0 would otherwise print as "+-0%"
    let change = if change == 0.0 { 0.0 } else { change };
    if change >= 0.0 {
        format!("+{}%", change)
    } else {
        format!("{}%", change)
    }
}

/// Short axis label: 185000 -> "185K", 2.8 -> "2.8"
pub fn format_axis_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
