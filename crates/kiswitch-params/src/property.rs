use indexmap::IndexMap;

use crate::{ParamError, ParamKind, Value};

/// A closed set of named choices stored as a text property.
pub trait Choice: Sized + Copy + PartialEq + 'static {
    const CHOICES: &'static [(&'static str, Self)];

    fn name(self) -> &'static str {
        Self::CHOICES
            .iter()
            .find(|(_, v)| *v == self)
            .map(|(n, _)| *n)
            .unwrap_or_default()
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::CHOICES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    fn names() -> Vec<&'static str> {
        Self::CHOICES.iter().map(|(n, _)| *n).collect()
    }
}

/// Declaration of one configurable property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: &'static str,
    pub kind: ParamKind,
    pub list: bool,
    pub allowed: Option<Vec<Value>>,
    pub default: Option<Value>,
    pub doc: &'static str,
}

impl Property {
    fn new(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            list: false,
            allowed: None,
            default: None,
            doc: "",
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, ParamKind::Text)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, ParamKind::Number)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, ParamKind::Bool)
    }

    /// Text property restricted to the names of `C`.
    pub fn choice<C: Choice>(name: &'static str) -> Self {
        Self::text(name).allowed(C::names())
    }

    #[must_use]
    pub fn list(mut self) -> Self {
        self.list = true;
        self
    }

    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn allowed<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn doc(mut self, doc: &'static str) -> Self {
        self.doc = doc;
        self
    }

    /// Coerce `raw` to this property's type and check it against the allowed set.
    pub fn coerce(&self, raw: &Value) -> Result<Value, ParamError> {
        if !self.list {
            return self.coerce_one(raw);
        }
        let items: Vec<Value> = match raw {
            Value::List(items) => items.clone(),
            Value::Text(s) => s
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(Value::from)
                .collect(),
            other => vec![other.clone()],
        };
        let coerced = items
            .iter()
            .map(|item| self.coerce_one(item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::List(coerced))
    }

    fn coerce_one(&self, raw: &Value) -> Result<Value, ParamError> {
        let value = raw.coerce_scalar(self.kind).ok_or_else(|| ParamError::Type {
            name: self.name.to_string(),
            expected: self.kind,
            value: raw.to_string(),
        })?;
        if let Some(allowed) = &self.allowed {
            if !allowed.contains(&value) {
                return Err(ParamError::NotAllowed {
                    name: self.name.to_string(),
                    value: value.to_string(),
                    allowed: allowed
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
        }
        Ok(value)
    }
}

/// The full set of properties a family accepts, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    props: IndexMap<&'static str, Property>,
}

impl Schema {
    pub fn new(props: impl IntoIterator<Item = Property>) -> Self {
        let mut schema = Self::default();
        for p in props {
            schema = schema.with(p);
        }
        schema
    }

    /// Add `prop`, replacing an earlier declaration of the same name in place.
    #[must_use]
    pub fn with(mut self, prop: Property) -> Self {
        self.props.insert(prop.name, prop);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.props.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.props.values()
    }

    /// Value a property has when nothing was ever written to it.
    pub fn default_of(&self, name: &str) -> Option<&Value> {
        self.props.get(name).and_then(|p| p.default.as_ref())
    }
}

/// Values supplied for one request, checked against a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    schema: Schema,
    values: IndexMap<&'static str, Value>,
}

impl Params {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            values: IndexMap::new(),
        }
    }

    /// Build from raw `key=value` text pairs.
    pub fn from_pairs<'a>(
        schema: Schema,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ParamError> {
        let mut params = Self::new(schema);
        for (k, v) in pairs {
            params.set(k, Some(Value::from(v)))?;
        }
        Ok(params)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Write a property. `None` or an empty value restores the default.
    ///
    /// On error the previously stored value is left untouched.
    pub fn set(&mut self, name: &str, raw: Option<Value>) -> Result<(), ParamError> {
        let prop = self
            .schema
            .get(name)
            .ok_or_else(|| ParamError::Unknown(name.to_string()))?;
        let key = prop.name;
        match raw.filter(|v| !v.is_empty()) {
            None => match prop.default.clone() {
                Some(default) => {
                    self.values.insert(key, default);
                }
                None => {
                    self.values.shift_remove(key);
                }
            },
            Some(raw) => {
                let value = prop.coerce(&raw)?;
                self.values.insert(key, value);
            }
        }
        Ok(())
    }

    /// Stored value, or the declared default when never written.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .get(name)
            .or_else(|| self.schema.default_of(name))
    }

    /// True when the caller wrote the property (as opposed to falling back to the default).
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn require(&self, name: &str) -> Result<&Value, ParamError> {
        if self.schema.get(name).is_none() {
            return Err(ParamError::Unknown(name.to_string()));
        }
        self.get(name)
            .ok_or_else(|| ParamError::Missing(name.to_string()))
    }

    fn mismatch(&self, name: &str, expected: ParamKind, got: &Value) -> ParamError {
        ParamError::Type {
            name: name.to_string(),
            expected,
            value: got.to_string(),
        }
    }

    pub fn number(&self, name: &str) -> Result<f64, ParamError> {
        let v = self.require(name)?;
        v.as_f64()
            .ok_or_else(|| self.mismatch(name, ParamKind::Number, v))
    }

    pub fn text(&self, name: &str) -> Result<&str, ParamError> {
        let v = self.require(name)?;
        v.as_str().ok_or_else(|| self.mismatch(name, ParamKind::Text, v))
    }

    pub fn boolean(&self, name: &str) -> Result<bool, ParamError> {
        let v = self.require(name)?;
        v.as_bool().ok_or_else(|| self.mismatch(name, ParamKind::Bool, v))
    }

    /// Text list; a missing list without default reads as `None`.
    pub fn texts(&self, name: &str) -> Result<Option<Vec<String>>, ParamError> {
        match self.require(name) {
            Ok(v) => {
                let items = v
                    .as_list()
                    .ok_or_else(|| self.mismatch(name, ParamKind::Text, v))?;
                Ok(Some(items.iter().map(ToString::to_string).collect()))
            }
            Err(ParamError::Missing(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn choice<C: Choice>(&self, name: &str) -> Result<C, ParamError> {
        let s = self.text(name)?;
        C::from_name(s).ok_or_else(|| ParamError::NotAllowed {
            name: name.to_string(),
            value: s.to_string(),
            allowed: C::names().join(", "),
        })
    }
}
