//! Shell Responses

use std::fmt;

use crate::vector::DenseVector;

/// Result of executing a shell command
#[derive(Debug, PartialEq)]
pub enum Response {
    /// Simple OK response
    Ok,

    /// Nothing found
    Nil,

    /// Count or flag
    Integer(i64),

    /// Scalar result
    Scalar(f64),

    /// A single vector
    Vector(DenseVector),

    /// Set contents in insertion order
    Vectors(Vec<DenseVector>),

    /// Free-form lines
    Lines(Vec<String>),

    /// Error response
    Error(String),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => write!(f, "OK"),
            Response::Nil => write!(f, "(nil)"),
            Response::Integer(n) => write!(f, "(integer) {}", n),
            Response::Scalar(x) => write!(f, "(scalar) {}", x),
            Response::Vector(v) => write!(f, "{}", v),
            Response::Vectors(items) => {
                if items.is_empty() {
                    return write!(f, "(empty set)");
                }
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}) {}", i, item)?;
                }
                Ok(())
            }
            Response::Lines(lines) => write!(f, "{}", lines.join("\n")),
            Response::Error(msg) => write!(f, "(error) {}", msg),
        }
    }
}
