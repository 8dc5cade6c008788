use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Number,
    Bool,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamKind::Text => "text",
            ParamKind::Number => "number",
            ParamKind::Bool => "bool",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<Value>),
}

impl Value {
    /// Empty text and empty lists count as "not supplied".
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(s) => s.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Coerce a scalar to `kind`.
    pub(crate) fn coerce_scalar(&self, kind: ParamKind) -> Option<Value> {
        match (kind, self) {
            (ParamKind::Text, Value::Text(s)) => Some(Value::Text(s.clone())),
            (ParamKind::Text, Value::Number(_) | Value::Bool(_)) => {
                Some(Value::Text(self.to_string()))
            }
            (ParamKind::Number, Value::Number(n)) => Some(Value::Number(*n)),
            (ParamKind::Number, Value::Text(s)) => {
                s.trim().parse::<f64>().ok().filter(|n| n.is_finite()).map(Value::Number)
            }
            (ParamKind::Number, Value::Bool(b)) => Some(Value::Number(f64::from(u8::from(*b)))),
            (ParamKind::Bool, Value::Bool(b)) => Some(Value::Bool(*b)),
            (ParamKind::Bool, Value::Number(n)) => Some(Value::Bool(*n != 0.0)),
            (ParamKind::Bool, Value::Text(s)) => parse_bool(s).map(Value::Bool),
            (_, Value::List(_)) => None,
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_coerces_to_number() {
        assert_eq!(
            Value::from(" 19.05 ").coerce_scalar(ParamKind::Number),
            Some(Value::Number(19.05))
        );
        assert_eq!(Value::from("abc").coerce_scalar(ParamKind::Number), None);
        assert_eq!(Value::from("NaN").coerce_scalar(ParamKind::Number), None);
    }

    #[test]
    fn bool_words() {
        assert_eq!(Value::from("False").coerce_scalar(ParamKind::Bool), Some(Value::Bool(false)));
        assert_eq!(Value::from("YES").coerce_scalar(ParamKind::Bool), Some(Value::Bool(true)));
        assert_eq!(Value::from("maybe").coerce_scalar(ParamKind::Bool), None);
    }

    #[test]
    fn numbers_stringify_without_trailing_zeroes() {
        assert_eq!(Value::Number(2.0).coerce_scalar(ParamKind::Text), Some(Value::from("2")));
    }
}
