//! Table rendering and alert presentation.

use shopgrid_core::types::{Alert, AlertSeverity};
use shopgrid_session::AlertNotifier;

/// Prints a padded text table. Column widths follow the widest cell.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{h:<width$}", width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect();
        println!("{}", line.join("  "));
    }

    if rows.is_empty() {
        println!("(none)");
    }
}

/// Severity marker used in alert lines and notifications.
pub fn severity_icon(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Critical => "🔴",
        AlertSeverity::High => "🟠",
        AlertSeverity::Medium => "🟡",
        AlertSeverity::Low => "🔵",
    }
}

/// Formats an optional string cell.
pub fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Formats an optional numeric cell.
pub fn opt_num(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// One display line per incoming alert: severity, message, shop and product
/// context, and where to see the full list.
pub fn alert_line(alert: &Alert) -> String {
    let shop = alert
        .shop_name
        .clone()
        .unwrap_or_else(|| format!("shop {}", alert.shop.id()));
    let context = match &alert.product_name {
        Some(product) => format!("{shop}, {product}"),
        None => shop,
    };
    format!(
        "{} [{}] {} ({context}) - see `shopgrid alerts list`",
        severity_icon(alert.severity),
        alert.severity,
        alert.message
    )
}

/// Prints incoming alerts as they are detected by the poller.
pub struct ConsoleNotifier;

impl AlertNotifier for ConsoleNotifier {
    fn notify(&self, alert: &Alert) {
        println!("{}", alert_line(alert));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_track_severity() {
        assert_eq!(severity_icon(AlertSeverity::Critical), "🔴");
        assert_eq!(severity_icon(AlertSeverity::High), "🟠");
        assert_eq!(severity_icon(AlertSeverity::Medium), "🟡");
        assert_eq!(severity_icon(AlertSeverity::Low), "🔵");
    }

    #[test]
    fn alert_lines_carry_shop_and_product_context() {
        let alert: Alert = serde_json::from_str(
            r#"{"id":12,"shop":3,"shop_name":"Main Street","product":5,
                "product_name":"Cola 330ml","alert_type":"low_stock","severity":"high",
                "message":"Low stock for Cola 330ml","is_read":false,
                "created_at":"2024-06-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            alert_line(&alert),
            "🟠 [high] Low stock for Cola 330ml (Main Street, Cola 330ml) \
             - see `shopgrid alerts list`"
        );
    }

    #[test]
    fn alert_lines_fall_back_to_the_shop_id() {
        let alert: Alert = serde_json::from_str(
            r#"{"id":1,"shop":3,"alert_type":"seasonal","severity":"low",
                "message":"Seasonal demand shift","is_read":false,
                "created_at":"2024-06-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            alert_line(&alert),
            "🔵 [low] Seasonal demand shift (shop 3) - see `shopgrid alerts list`"
        );
    }

    #[test]
    fn optional_cells_render_dashes() {
        assert_eq!(opt(&None), "-");
        assert_eq!(opt(&Some("x".to_string())), "x");
        assert_eq!(opt_num(None), "-");
        assert_eq!(opt_num(Some(7)), "7");
    }
}
