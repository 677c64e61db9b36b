use serde_json::Value;

use crate::utils::CalculationError;

/// イベントのボディを JSON 値として取り出す
///
/// ボディは解析済みのオブジェクト、または JSON テキストのどちらでも受け付けます。
/// ボディが存在しない・`null`・JSON として解析できない場合は内部エラーです。
pub fn parse_body(body: Option<&Value>) -> Result<Value, CalculationError> {
    let parsed = match body {
        Some(Value::String(text)) => serde_json::from_str::<Value>(text)
            .map_err(|e| CalculationError::internal(format!("invalid JSON body: {e}")))?,
        Some(value) => value.clone(),
        None => return Err(CalculationError::internal("request body is missing")),
    };

    if parsed.is_null() {
        return Err(CalculationError::internal("request body is null"));
    }
    Ok(parsed)
}

/// ボディからフィールドを取得する（オブジェクト以外のボディでは常に `None`）
pub fn get_field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.as_object().and_then(|map| map.get(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_accepts_text_and_object() {
        let text = json!(r#"{"num1": 1, "num2": 2, "operation": "+"}"#);
        let object = json!({ "num1": 1, "num2": 2, "operation": "+" });

        assert_eq!(parse_body(Some(&text)).unwrap(), object);
        assert_eq!(parse_body(Some(&object)).unwrap(), object);
    }

    #[test]
    fn test_parse_body_failures_are_internal() {
        for body in [None, Some(json!(null)), Some(json!("{not json")), Some(json!("null"))] {
            let err = parse_body(body.as_ref()).unwrap_err();
            assert_eq!(err.status_code(), 500);
        }
    }

    #[test]
    fn test_get_field_on_non_object_body() {
        assert_eq!(get_field(&json!([1, 2]), "num1"), None);
        assert_eq!(get_field(&json!("text"), "num1"), None);
        assert_eq!(get_field(&json!({ "num1": 3 }), "num1"), Some(&json!(3)));
    }
}
