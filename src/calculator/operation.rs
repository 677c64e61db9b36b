use serde_json::Value;

/// サポートしている演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
    SquareRoot,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Remainder,
        Operation::Power,
        Operation::SquareRoot,
    ];

    /// 演算子記号から変換する（完全一致のみ）
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Remainder => "%",
            Operation::Power => "**",
            Operation::SquareRoot => "sqrt",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `operation` フィールドの読み取り結果
#[derive(Debug, Clone, PartialEq)]
pub enum OperationField {
    /// 未指定・空（`null`, `""`, `false`, `0` を含む）
    Missing,
    /// 値はあるが演算子として解釈しない（記号は後段で照合する）
    Present(Value),
}

impl OperationField {
    pub fn read(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => OperationField::Missing,
            Some(Value::String(s)) if s.is_empty() => OperationField::Missing,
            Some(Value::Bool(false)) => OperationField::Missing,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => OperationField::Missing,
            Some(other) => OperationField::Present(other.clone()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, OperationField::Missing)
    }

    /// 記号として照合する。文字列以外の値はどの演算子にも一致しない
    pub fn resolve(&self) -> Option<Operation> {
        match self {
            OperationField::Present(Value::String(symbol)) => Operation::from_symbol(symbol),
            _ => None,
        }
    }
}
