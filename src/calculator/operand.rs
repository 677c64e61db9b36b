//! オペランドの数値変換
//!
//! 数値はそのまま、文字列は先頭の数値部分のみを解釈します（`"12abc"` → 12）。
//! 変換結果が有限の数値でなければ失敗扱いです。
//! `f64` に収まらない数値リテラル（`1e400` など）も JSON の解析は通し、ここで弾きます。

use serde_json::Value;

/// オペランドを `f64` に変換する
pub fn coerce_operand(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => parse_numeric_prefix(text),
        Value::Array(items) => parse_numeric_prefix(&join_as_text(items)),
        Value::Null | Value::Bool(_) | Value::Object(_) => None,
    }?;

    number.is_finite().then_some(number)
}

/// 文字列先頭の数値部分を解釈する
fn parse_numeric_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // 指数部は数字が続く場合のみ採用
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// 配列をカンマ区切りの文字列として表現する
fn join_as_text(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(inner) => join_as_text(inner),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}
