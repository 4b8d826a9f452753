//! WKT tokenizer
//!
//! Turns a WKT document into a tree of nodes. Whitespace and line breaks
//! are insignificant outside quoted strings; both `[]` and `()` brackets
//! are accepted; quotes are escaped by doubling.

use crate::errors::{GeodeticError, GeodeticResult};

/// A child of a WKT node
#[derive(Debug, Clone, PartialEq)]
pub enum WktValue {
    Node(WktNode),
    /// A quoted string, unescaped
    Quoted(String),
    Number(f64),
    /// An unquoted token such as an axis direction
    Bare(String),
}

impl WktValue {
    pub fn as_quoted(&self) -> Option<&str> {
        match self {
            WktValue::Quoted(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            WktValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&WktNode> {
        match self {
            WktValue::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bare(&self) -> Option<&str> {
        match self {
            WktValue::Bare(s) => Some(s),
            _ => None,
        }
    }
}

/// A keyword with its bracketed children
#[derive(Debug, Clone, PartialEq)]
pub struct WktNode {
    pub keyword: String,
    pub children: Vec<WktValue>,
    /// Byte offset of the keyword in the source text
    pub position: usize,
}

impl WktNode {
    /// First quoted-string child, usually the object name
    pub fn name_child(&self) -> Option<&str> {
        self.children.iter().find_map(|c| c.as_quoted())
    }

    /// Child nodes with the given keyword, case-insensitive
    pub fn nodes<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a WktNode> {
        self.children.iter().filter_map(move |c| match c {
            WktValue::Node(n) if n.keyword.eq_ignore_ascii_case(keyword) => Some(n),
            _ => None,
        })
    }

    /// First child node with any of the given keywords
    pub fn node(&self, keywords: &[&str]) -> Option<&WktNode> {
        self.children.iter().find_map(|c| match c {
            WktValue::Node(n)
                if keywords.iter().any(|k| n.keyword.eq_ignore_ascii_case(k)) =>
            {
                Some(n)
            }
            _ => None,
        })
    }

    /// Numbers among the direct children, in order
    pub fn numbers(&self) -> Vec<f64> {
        self.children.iter().filter_map(|c| c.as_number()).collect()
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.keyword.eq_ignore_ascii_case(keyword)
    }
}

struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Tokenizer {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn read_keyword(&mut self) -> GeodeticResult<String> {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        if start == self.pos {
            return Err(GeodeticError::at(self.pos, "expected a keyword"));
        }
        Ok(String::from_utf8_lossy(&self.input[start..self.pos]).into_owned())
    }

    fn read_quoted(&mut self) -> GeodeticResult<String> {
        // opening quote already consumed by the caller
        let mut bytes = Vec::new();
        loop {
            match self.peek() {
                Some(b'"') => {
                    self.pos += 1;
                    // a doubled quote is an escaped quote
                    if self.peek() == Some(b'"') {
                        bytes.push(b'"');
                        self.pos += 1;
                    } else {
                        return Ok(String::from_utf8_lossy(&bytes).into_owned());
                    }
                }
                Some(c) => {
                    bytes.push(c);
                    self.pos += 1;
                }
                None => return Err(GeodeticError::at(self.pos, "unterminated quoted string")),
            }
        }
    }

    fn read_value(&mut self) -> GeodeticResult<WktValue> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'"') => {
                self.pos += 1;
                Ok(WktValue::Quoted(self.read_quoted()?))
            }
            Some(c) if c.is_ascii_alphabetic() || c == b'_' => {
                let node = self.read_node()?;
                Ok(node)
            }
            Some(_) => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if matches!(c, b',' | b']' | b')' | b'[' | b'(') || c.is_ascii_whitespace() {
                        break;
                    }
                    self.pos += 1;
                }
                let token = String::from_utf8_lossy(&self.input[start..self.pos]).into_owned();
                if token.is_empty() {
                    return Err(GeodeticError::at(start, "expected a value"));
                }
                match token.parse::<f64>() {
                    Ok(n) => Ok(WktValue::Number(n)),
                    Err(_) => Ok(WktValue::Bare(token)),
                }
            }
            None => Err(GeodeticError::at(self.pos, "unexpected end of input")),
        }
    }

    fn read_node(&mut self) -> GeodeticResult<WktValue> {
        self.skip_whitespace();
        let position = self.pos;
        let keyword = self.read_keyword()?;
        self.skip_whitespace();
        let mut children = Vec::new();
        match self.peek() {
            Some(b'[') | Some(b'(') => {
                let closer = if self.peek() == Some(b'[') { b']' } else { b')' };
                self.pos += 1;
                self.skip_whitespace();
                if self.peek() == Some(closer) {
                    self.pos += 1;
                } else {
                    loop {
                        children.push(self.read_value()?);
                        self.skip_whitespace();
                        match self.peek() {
                            Some(b',') => {
                                self.pos += 1;
                            }
                            Some(c) if c == closer => {
                                self.pos += 1;
                                break;
                            }
                            Some(other) => {
                                return Err(GeodeticError::at(
                                    self.pos,
                                    format!("expected ',' or closing bracket, found '{}'", other as char),
                                ))
                            }
                            None => {
                                return Err(GeodeticError::at(self.pos, "unclosed bracket"))
                            }
                        }
                    }
                }
            }
            _ => {
                // a bare token such as an axis direction keyword
                return Ok(WktValue::Bare(keyword));
            }
        }
        Ok(WktValue::Node(WktNode {
            keyword,
            children,
            position,
        }))
    }
}

/// Parse a WKT document into its root node
pub fn tokenize(input: &str) -> GeodeticResult<WktNode> {
    let mut tokenizer = Tokenizer::new(input);
    match tokenizer.read_node()? {
        WktValue::Node(node) => {
            tokenizer.skip_whitespace();
            if tokenizer.pos != tokenizer.input.len() {
                return Err(GeodeticError::at(
                    tokenizer.pos,
                    "trailing content after the WKT document",
                ));
            }
            Ok(node)
        }
        _ => Err(GeodeticError::at(0, "expected a bracketed WKT node")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_node() {
        let node = tokenize(r#"UNIT["degree",0.0174532925199433]"#).unwrap();
        assert_eq!(node.keyword, "UNIT");
        assert_eq!(node.name_child(), Some("degree"));
        assert_eq!(node.numbers(), vec![0.0174532925199433]);
    }

    #[test]
    fn test_nested_and_whitespace_tolerant() {
        let node = tokenize(
            "GEOGCS [ \"WGS 84\" ,\n  DATUM[\"WGS_1984\",\n    SPHEROID[\"WGS 84\",6378137,298.257223563]],\n  PRIMEM[\"Greenwich\",0],\n  UNIT[\"degree\",0.0174532925199433]]",
        )
        .unwrap();
        assert_eq!(node.keyword, "GEOGCS");
        assert!(node.node(&["DATUM"]).is_some());
        let datum = node.node(&["DATUM"]).unwrap();
        assert!(datum.node(&["SPHEROID"]).is_some());
    }

    #[test]
    fn test_quote_escaping() {
        let node = tokenize(r#"REMARK["he said ""hi"""]"#).unwrap();
        assert_eq!(node.name_child(), Some(r#"he said "hi""#));
    }

    #[test]
    fn test_bare_tokens_and_parentheses() {
        let node = tokenize(r#"AXIS("latitude",north)"#).unwrap();
        assert_eq!(node.children[1].as_bare(), Some("north"));
    }

    #[test]
    fn test_error_position() {
        let err = tokenize(r#"UNIT["degree""#).unwrap_err();
        match err {
            GeodeticError::ParsingError { position, .. } => assert!(position > 0),
            other => panic!("expected a parsing error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_node() {
        let node = tokenize("CS[]").unwrap();
        assert!(node.children.is_empty());
    }
}
