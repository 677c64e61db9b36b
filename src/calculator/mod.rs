//! 計算ロジック
//!
//! リクエストボディからオペランドと演算子を取り出し、検証して計算します。
//! 副作用はありません。

mod operand;
mod operation;

use serde_json::Value;

pub use operand::coerce_operand;
pub use operation::{Operation, OperationField};

use crate::models::CalculationResult;
use crate::utils::{CalculationError, get_field};

/// ボディ（解析済み JSON）から計算を行う
///
/// 検証は次の順で行い、最初に該当したものを返します。
/// 1. `num1`, `num2` の数値変換と `operation` の有無をまとめて検証
/// 2. 演算子ごとの計算（ゼロ除算・負数の平方根を含む）
pub fn calculate(body: &Value) -> Result<CalculationResult, CalculationError> {
    let num1 = coerce_operand(get_field(body, "num1"));
    let num2 = coerce_operand(get_field(body, "num2"));
    let field = OperationField::read(get_field(body, "operation"));

    let (Some(num1), Some(num2)) = (num1, num2) else {
        return Err(CalculationError::InvalidInput);
    };
    if field.is_missing() {
        return Err(CalculationError::InvalidInput);
    }

    let operation = field
        .resolve()
        .ok_or(CalculationError::UnsupportedOperation)?;
    let result = apply(operation, num1, num2)?;

    tracing::debug!(%operation, num1, num2, result, "calculation completed");
    Ok(CalculationResult::new(num1, num2, operation, result))
}

/// 演算子を適用する
///
/// `%` は切り捨て剰余（符号は被除数に従う）。`**` と `%` は定義域の制限がなく、
/// 非有限の結果もそのまま返します。
pub fn apply(operation: Operation, num1: f64, num2: f64) -> Result<f64, CalculationError> {
    match operation {
        Operation::Add => Ok(num1 + num2),
        Operation::Subtract => Ok(num1 - num2),
        Operation::Multiply => Ok(num1 * num2),
        Operation::Divide => {
            if num2 == 0.0 {
                return Err(CalculationError::DivisionByZero);
            }
            Ok(num1 / num2)
        }
        Operation::Remainder => Ok(num1 % num2),
        Operation::Power => Ok(num1.powf(num2)),
        Operation::SquareRoot => {
            if num1 < 0.0 {
                return Err(CalculationError::InvalidDomain);
            }
            // sqrt(-0.0) は -0.0 になるため +0.0 に揃える
            Ok(num1.sqrt() + 0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn calc(num1: Value, num2: Value, operation: &str) -> Result<f64, CalculationError> {
        calculate(&json!({ "num1": num1, "num2": num2, "operation": operation }))
            .map(|r| r.result)
    }

    #[test]
    fn test_basic_arithmetic() {
        let pairs = [(1.5, 2.25), (-3.0, 7.0), (0.0, -0.5), (1e10, 3.0)];
        for (a, b) in pairs {
            assert_eq!(apply(Operation::Add, a, b), Ok(a + b));
            assert_eq!(apply(Operation::Subtract, a, b), Ok(a - b));
            assert_eq!(apply(Operation::Multiply, a, b), Ok(a * b));
        }
    }

    #[test]
    fn test_division() {
        assert_eq!(apply(Operation::Divide, 9.0, 3.0), Ok(3.0));
        assert_eq!(apply(Operation::Divide, 1.0, -4.0), Ok(-0.25));
        for a in [0.0, 1.0, -5.0] {
            assert_eq!(
                apply(Operation::Divide, a, 0.0),
                Err(CalculationError::DivisionByZero)
            );
            assert_eq!(
                apply(Operation::Divide, a, -0.0),
                Err(CalculationError::DivisionByZero)
            );
        }
    }

    #[test]
    fn test_remainder_follows_dividend_sign() {
        assert_eq!(apply(Operation::Remainder, -7.0, 3.0), Ok(-1.0));
        assert_eq!(apply(Operation::Remainder, 7.0, -3.0), Ok(1.0));
        assert_eq!(apply(Operation::Remainder, 5.5, 2.0), Ok(1.5));
        assert!(apply(Operation::Remainder, 1.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn test_power() {
        assert_eq!(apply(Operation::Power, 2.0, 10.0), Ok(1024.0));
        assert_eq!(apply(Operation::Power, 0.0, 0.0), Ok(1.0));
        assert_eq!(apply(Operation::Power, 4.0, 0.5), Ok(2.0));
        assert!(apply(Operation::Power, 10.0, 400.0).unwrap().is_infinite());
    }

    #[test]
    fn test_square_root() {
        assert_eq!(apply(Operation::SquareRoot, 16.0, 123.0), Ok(4.0));
        assert_eq!(
            apply(Operation::SquareRoot, -1.0, 0.0),
            Err(CalculationError::InvalidDomain)
        );
        let zero = apply(Operation::SquareRoot, -0.0, 0.0).unwrap();
        assert!(zero == 0.0 && zero.is_sign_positive());
    }

    #[test]
    fn test_calculate_coerces_text_operands() {
        assert_eq!(calc(json!("3"), json!("4"), "*"), Ok(12.0));
        assert_eq!(calc(json!("10px"), json!(2), "-"), Ok(8.0));
    }

    #[test]
    fn test_invalid_input_wins_over_operator_errors() {
        assert_eq!(
            calc(json!("abc"), json!(1), "+"),
            Err(CalculationError::InvalidInput)
        );
        assert_eq!(
            calc(json!(1), json!("abc"), "^"),
            Err(CalculationError::InvalidInput)
        );
        assert_eq!(
            calc(json!(-4), json!(null), "sqrt"),
            Err(CalculationError::InvalidInput)
        );
        assert_eq!(
            calculate(&json!({ "num1": 1, "num2": 0, "operation": "" })),
            Err(CalculationError::InvalidInput)
        );
        assert_eq!(
            calculate(&json!({ "num1": 1, "num2": 2 })),
            Err(CalculationError::InvalidInput)
        );
    }

    #[test]
    fn test_unsupported_operation() {
        assert_eq!(
            calc(json!(2), json!(3), "^"),
            Err(CalculationError::UnsupportedOperation)
        );
        assert_eq!(
            calculate(&json!({ "num1": 2, "num2": 3, "operation": 7 })),
            Err(CalculationError::UnsupportedOperation)
        );
    }

    #[test]
    fn test_sqrt_requires_second_operand() {
        assert_eq!(calc(json!(9), json!(0), "sqrt"), Ok(3.0));
        assert_eq!(
            calculate(&json!({ "num1": 9, "operation": "sqrt" })),
            Err(CalculationError::InvalidInput)
        );
    }

    #[test]
    fn test_non_object_body_is_invalid_input() {
        for body in [json!([1, 2]), json!("text"), json!(12)] {
            assert_eq!(calculate(&body), Err(CalculationError::InvalidInput));
        }
    }

    #[test]
    fn test_result_echoes_operands() {
        let result = calculate(&json!({ "num1": "6", "num2": 4, "operation": "%" })).unwrap();
        assert_eq!(result.operation, "%");
        assert_eq!(result.num1, 6.0);
        assert_eq!(result.num2, 4.0);
        assert_eq!(result.result, 2.0);
    }
}
