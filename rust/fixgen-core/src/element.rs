//! Sort-case elements and their textual literal form.

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Int,
    Float,
    Str,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Int => "int",
            ElementKind::Float => "float",
            ElementKind::Str => "string",
        }
    }
}

/// A homogeneous list of sort elements. The element type is fixed per case.
#[derive(Debug, Clone, PartialEq)]
pub enum Elements {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Str(Vec<String>),
}

impl Elements {
    pub fn kind(&self) -> ElementKind {
        match self {
            Elements::Int(_) => ElementKind::Int,
            Elements::Float(_) => ElementKind::Float,
            Elements::Str(_) => ElementKind::Str,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Elements::Int(v) => v.len(),
            Elements::Float(v) => v.len(),
            Elements::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn strs(items: &[&str]) -> Self {
        Elements::Str(items.iter().map(|s| s.to_string()).collect())
    }

    /// Write `[a, b, c]` followed by a newline.
    pub fn write_list<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Elements::Int(v) => write_list(w, v),
            Elements::Float(v) => write_list(w, v),
            Elements::Str(v) => write_list(w, v),
        }
    }

}

/// A value with a literal form in fixture files.
pub trait Literal {
    fn write_literal<W: Write>(&self, w: &mut W) -> io::Result<()>;
}

impl Literal for i64 {
    fn write_literal<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{}", self)
    }
}

impl Literal for f64 {
    fn write_literal<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(format_float(*self).as_bytes())
    }
}

impl Literal for String {
    fn write_literal<W: Write>(&self, w: &mut W) -> io::Result<()> {
        serde_json::to_writer(w, self).map_err(io::Error::from)
    }
}

/// Shortest round-trip form, always with a `.` or an exponent.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{:?}", x)
    }
}

pub fn write_list<W: Write, T: Literal>(w: &mut W, items: &[T]) -> io::Result<()> {
    w.write_all(b"[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            w.write_all(b", ")?;
        }
        item.write_literal(w)?;
    }
    w.write_all(b"]\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Elements {
        fn to_list_string(&self) -> String {
            let mut buf = Vec::new();
            self.write_list(&mut buf).unwrap();
            String::from_utf8(buf).unwrap()
        }
    }

    #[test]
    fn int_list_literal() {
        assert_eq!(Elements::Int(vec![5, 1, -4]).to_list_string(), "[5, 1, -4]\n");
    }

    #[test]
    fn empty_list_literal() {
        assert_eq!(Elements::Int(vec![]).to_list_string(), "[]\n");
    }

    #[test]
    fn string_literals_are_quoted_and_escaped() {
        let els = Elements::strs(&["apple", "say \"hi\""]);
        assert_eq!(els.to_list_string(), "[\"apple\", \"say \\\"hi\\\"\"]\n");
    }

    #[test]
    fn float_literals() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(3.14), "3.14");
        assert_eq!(format_float(2.0), "2.0");
        assert_eq!(format_float(2.0e-10), "2e-10");
        assert_eq!(format_float(2.0e10), "20000000000.0");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn kind_and_len() {
        let els = Elements::Float(vec![1.0, 2.0]);
        assert_eq!(els.kind(), ElementKind::Float);
        assert_eq!(els.len(), 2);
        assert!(!els.is_empty());
    }
}
