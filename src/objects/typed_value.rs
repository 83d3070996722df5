//! Typed values stored in attribute dictionaries

use crate::error::{LayoutError, Result};
use crate::types::{Color, Vector2, Vector3};
use std::fmt;

/// Type tag of a [`TypedValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedValueType {
    Empty,
    Bool,
    Int32,
    Double,
    String,
    Color,
    Vector2,
    Vector3,
    Array,
}

impl fmt::Display for TypedValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A tagged value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypedValue {
    /// No value
    #[default]
    Empty,
    Bool(bool),
    Int32(i32),
    Double(f64),
    /// UTF-8 string
    String(String),
    Color(Color),
    /// 2D point
    Vector2(Vector2),
    /// 3D point
    Vector3(Vector3),
    /// Ordered list of values
    Array(Vec<TypedValue>),
}

macro_rules! getter {
    ($name:ident, $variant:ident, $ty:ty) => {
        /// Read the value, `NoData` if it holds another type
        pub fn $name(&self) -> Result<$ty> {
            match self {
                TypedValue::$variant(v) => Ok(v.clone()),
                other => Err(other.mismatch(TypedValueType::$variant)),
            }
        }
    };
}

impl TypedValue {
    /// Type tag of the held value
    pub fn value_type(&self) -> TypedValueType {
        match self {
            TypedValue::Empty => TypedValueType::Empty,
            TypedValue::Bool(_) => TypedValueType::Bool,
            TypedValue::Int32(_) => TypedValueType::Int32,
            TypedValue::Double(_) => TypedValueType::Double,
            TypedValue::String(_) => TypedValueType::String,
            TypedValue::Color(_) => TypedValueType::Color,
            TypedValue::Vector2(_) => TypedValueType::Vector2,
            TypedValue::Vector3(_) => TypedValueType::Vector3,
            TypedValue::Array(_) => TypedValueType::Array,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TypedValue::Empty)
    }

    fn mismatch(&self, wanted: TypedValueType) -> LayoutError {
        LayoutError::NoData(format!(
            "value holds {}, not {}",
            self.value_type(),
            wanted
        ))
    }

    getter!(get_bool, Bool, bool);
    getter!(get_int32, Int32, i32);
    getter!(get_color, Color, Color);
    getter!(get_vector2, Vector2, Vector2);
    getter!(get_vector3, Vector3, Vector3);
    getter!(get_array, Array, Vec<TypedValue>);

    /// Read a double; 32-bit integers widen
    pub fn get_double(&self) -> Result<f64> {
        match self {
            TypedValue::Double(v) => Ok(*v),
            TypedValue::Int32(v) => Ok(*v as f64),
            other => Err(other.mismatch(TypedValueType::Double)),
        }
    }

    /// Borrow the string value
    pub fn get_str(&self) -> Result<&str> {
        match self {
            TypedValue::String(s) => Ok(s),
            other => Err(other.mismatch(TypedValueType::String)),
        }
    }

    /// Number of elements in an array value
    pub fn array_len(&self) -> Result<usize> {
        match self {
            TypedValue::Array(items) => Ok(items.len()),
            other => Err(other.mismatch(TypedValueType::Array)),
        }
    }
}

impl From<bool> for TypedValue {
    fn from(v: bool) -> Self {
        TypedValue::Bool(v)
    }
}

impl From<i32> for TypedValue {
    fn from(v: i32) -> Self {
        TypedValue::Int32(v)
    }
}

impl From<f64> for TypedValue {
    fn from(v: f64) -> Self {
        TypedValue::Double(v)
    }
}

impl From<&str> for TypedValue {
    fn from(v: &str) -> Self {
        TypedValue::String(v.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(v: String) -> Self {
        TypedValue::String(v)
    }
}

impl From<Color> for TypedValue {
    fn from(v: Color) -> Self {
        TypedValue::Color(v)
    }
}

impl From<Vector2> for TypedValue {
    fn from(v: Vector2) -> Self {
        TypedValue::Vector2(v)
    }
}

impl From<Vector3> for TypedValue {
    fn from(v: Vector3) -> Self {
        TypedValue::Vector3(v)
    }
}

impl From<Vec<TypedValue>> for TypedValue {
    fn from(v: Vec<TypedValue>) -> Self {
        TypedValue::Array(v)
    }
}
